use anchor_lang::prelude::*;

use crate::constants::{CONTROLLER_SEED, POOL_SEED};
use crate::errors::ErrorCode;
use crate::states::{Airstream, AirstreamController, DistributionPool};

#[derive(Accounts)]
pub struct Pause<'info> {
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

impl<'info> Pause<'info> {
    pub fn handle(ctx: Context<Pause>) -> Result<()> {
        ctx.accounts.controller.pause()?;
        // the flow stops; grants and member shares are untouched
        ctx.accounts.pool.set_flow_rate(0);

        msg!("Paused airstream: {}", ctx.accounts.airstream.key());

        emit!(crate::events::FlowPaused {
            airstream: ctx.accounts.airstream.key(),
            controller: ctx.accounts.controller.key(),
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }
}
