use anchor_lang::prelude::*;

use crate::constants::{AIRSTREAM_SEED, MEMBER_RECORD_SEED, POOL_SEED};
use crate::errors::ErrorCode;
use crate::states::{Airstream, DistributionPool, MemberRecord};

/// Post-window clawback: grants whatever is still unclaimed to the treasury
/// as pool share. Permissionless; once the remainder is zero, further calls
/// redirect nothing.
#[derive(Accounts)]
pub struct StreamBackToTreasury<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        mut,
        seeds = [AIRSTREAM_SEED, airstream.creator.as_ref(), airstream.merkle_root.as_ref()],
        bump = airstream.bump
    )]
    pub airstream: Account<'info, Airstream>,

    #[account(
        mut,
        seeds = [POOL_SEED, airstream.key().as_ref()],
        bump = pool.bump
    )]
    pub pool: Account<'info, DistributionPool>,

    /// Ledger row for the treasury
    #[account(
        init_if_needed,
        payer = payer,
        space = MemberRecord::DISCRIMINATOR.len() + MemberRecord::INIT_SPACE,
        seeds = [MEMBER_RECORD_SEED, airstream.key().as_ref(), airstream.claiming_window.treasury.as_ref()],
        bump
    )]
    pub treasury_record: Account<'info, MemberRecord>,

    pub system_program: Program<'info, System>,
}

impl<'info> StreamBackToTreasury<'info> {
    pub fn handle(ctx: Context<StreamBackToTreasury>) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;
        let window = ctx.accounts.airstream.claiming_window;

        require!(window.has_treasury(), ErrorCode::NoTreasury);
        require!(window.is_closed(now), ErrorCode::WindowNotClosed);

        let treasury_record = &mut ctx.accounts.treasury_record;
        if treasury_record.recipient == Pubkey::default() {
            treasury_record.airstream = ctx.accounts.airstream.key();
            treasury_record.recipient = window.treasury;
            treasury_record.bump = ctx.bumps.treasury_record;
        }

        let remainder = ctx.accounts.airstream.unclaimed_amount();
        if remainder > 0 {
            treasury_record.add_units(remainder)?;
            ctx.accounts.pool.add_units(remainder)?;
            ctx.accounts.airstream.record_clawback(remainder)?;
        }

        msg!("Streamed {} unclaimed units back to treasury", remainder);

        emit!(crate::events::StreamedBackToTreasury {
            airstream: ctx.accounts.airstream.key(),
            treasury: window.treasury,
            amount: remainder,
            timestamp: now,
        });

        Ok(())
    }
}
