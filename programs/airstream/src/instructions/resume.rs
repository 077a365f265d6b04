use anchor_lang::prelude::*;

use crate::constants::{CONTROLLER_SEED, POOL_SEED};
use crate::errors::ErrorCode;
use crate::states::{Airstream, AirstreamController, DistributionPool};

#[derive(Accounts)]
pub struct Resume<'info> {
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [CONTROLLER_SEED, airstream.key().as_ref()],
        bump = controller.bump,
        has_one = owner @ ErrorCode::Unauthorized,
        has_one = airstream
    )]
    pub controller: Account<'info, AirstreamController>,

    pub airstream: Account<'info, Airstream>,

    #[account(
        mut,
        seeds = [POOL_SEED, airstream.key().as_ref()],
        bump = pool.bump
    )]
    pub pool: Account<'info, DistributionPool>,
}

impl<'info> Resume<'info> {
    pub fn handle(ctx: Context<Resume>) -> Result<()> {
        // detects a skipped ownership handoff: the airstream must be under
        // this controller's administrative control before the flow restarts
        require!(
            ctx.accounts.airstream.admin == ctx.accounts.controller.key(),
            ErrorCode::NotOwnerOfDistributionTarget
        );

        ctx.accounts.controller.resume()?;
        let flow_rate = ctx.accounts.airstream.flow_rate;
        ctx.accounts.pool.set_flow_rate(flow_rate);

        msg!("Resumed airstream: {}", ctx.accounts.airstream.key());
        msg!("Flow rate: {} units/s", flow_rate);

        emit!(crate::events::FlowResumed {
            airstream: ctx.accounts.airstream.key(),
            controller: ctx.accounts.controller.key(),
            flow_rate,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }
}
