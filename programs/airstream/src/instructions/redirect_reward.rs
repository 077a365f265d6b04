use anchor_lang::prelude::*;

use crate::constants::{CONTROLLER_SEED, MEMBER_RECORD_SEED};
use crate::errors::ErrorCode;
use crate::states::{Airstream, AirstreamController, MemberRecord};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct RedirectRewardParams {
    pub from: Pubkey,
    pub to: Pubkey,
    /// None moves the source's entire current allocation
    pub amount: Option<u64>,
}

/// Administrative reassignment of an already-granted allocation.
///
/// Operates purely on ledger rows: no proof is re-verified and the `claimed`
/// flags are untouched. The pool total is conserved.
#[derive(Accounts)]
#[instruction(params: RedirectRewardParams)]
pub struct RedirectReward<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        seeds = [CONTROLLER_SEED, airstream.key().as_ref()],
        bump = controller.bump,
        has_one = owner @ ErrorCode::Unauthorized,
        has_one = airstream
    )]
    pub controller: Account<'info, AirstreamController>,

    pub airstream: Account<'info, Airstream>,

    #[account(
        mut,
        seeds = [MEMBER_RECORD_SEED, airstream.key().as_ref(), params.from.as_ref()],
        bump = from_record.bump
    )]
    pub from_record: Account<'info, MemberRecord>,

    /// Ledger row for the destination; created here if the destination has
    /// never claimed or received a redirect before
    #[account(
        init_if_needed,
        payer = owner,
        space = MemberRecord::DISCRIMINATOR.len() + MemberRecord::INIT_SPACE,
        seeds = [MEMBER_RECORD_SEED, airstream.key().as_ref(), params.to.as_ref()],
        bump
    )]
    pub to_record: Account<'info, MemberRecord>,

    pub system_program: Program<'info, System>,
}

impl<'info> RedirectReward<'info> {
    pub fn handle(ctx: Context<RedirectReward>, params: RedirectRewardParams) -> Result<()> {
        require!(params.from != params.to, ErrorCode::RedirectToSelf);

        let to_record = &mut ctx.accounts.to_record;
        if to_record.recipient == Pubkey::default() {
            to_record.airstream = ctx.accounts.airstream.key();
            to_record.recipient = params.to;
            to_record.bump = ctx.bumps.to_record;
        }

        let amount = params
            .amount
            .unwrap_or(ctx.accounts.from_record.units);
        ctx.accounts.from_record.remove_units(amount)?;
        ctx.accounts.to_record.add_units(amount)?;

        msg!(
            "Redirected {} units: {} -> {}",
            amount,
            params.from,
            params.to
        );

        emit!(crate::events::RewardsRedirected {
            airstream: ctx.accounts.airstream.key(),
            from: params.from,
            to: params.to,
            amount,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }
}
