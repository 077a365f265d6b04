use anchor_lang::prelude::*;
use anchor_lang::AccountsExit;

use crate::constants::CONTROLLER_SEED;
use crate::errors::ErrorCode;
use crate::states::{Airstream, AirstreamController, MemberRecord};

/// Batch form of the redirect: `remaining_accounts` holds (from, to) member
/// record pairs, in order. Every destination record must already exist; use
/// the single-pair form to lazily create one.
#[derive(Accounts)]
pub struct RedirectRewards<'info> {
    pub owner: Signer<'info>,

    #[account(
        seeds = [CONTROLLER_SEED, airstream.key().as_ref()],
        bump = controller.bump,
        has_one = owner @ ErrorCode::Unauthorized,
        has_one = airstream
    )]
    pub controller: Account<'info, AirstreamController>,

    pub airstream: Account<'info, Airstream>,
}

impl<'info> RedirectRewards<'info> {
    /// `amounts` pairs up with the account pairs; an empty vector moves the
    /// full current allocation of each source.
    pub fn handle(
        ctx: Context<'_, '_, 'info, 'info, RedirectRewards<'info>>,
        amounts: Vec<u64>,
    ) -> Result<()> {
        let airstream_key = ctx.accounts.airstream.key();
        let now = Clock::get()?.unix_timestamp;

        require!(
            ctx.remaining_accounts.len() % 2 == 0,
            ErrorCode::RedirectLengthMismatch
        );
        let pair_count = ctx.remaining_accounts.len() / 2;
        require!(
            amounts.is_empty() || amounts.len() == pair_count,
            ErrorCode::RedirectLengthMismatch
        );

        for (i, pair) in ctx.remaining_accounts.chunks(2).enumerate() {
            let from_info = &pair[0];
            let to_info = &pair[1];
            require!(from_info.key() != to_info.key(), ErrorCode::RedirectToSelf);

            // member records are only ever created by this program, so their
            // stored airstream key is authoritative
            let mut from_record = Account::<MemberRecord>::try_from(from_info)?;
            let mut to_record = Account::<MemberRecord>::try_from(to_info)?;
            require!(
                from_record.airstream == airstream_key && to_record.airstream == airstream_key,
                ErrorCode::MemberRecordMismatch
            );

            let amount = if amounts.is_empty() {
                from_record.units
            } else {
                amounts[i]
            };
            from_record.remove_units(amount)?;
            to_record.add_units(amount)?;

            from_record.exit(ctx.program_id)?;
            to_record.exit(ctx.program_id)?;

            emit!(crate::events::RewardsRedirected {
                airstream: airstream_key,
                from: from_record.recipient,
                to: to_record.recipient,
                amount,
                timestamp: now,
            });
        }

        msg!("Redirected {} allocation pairs", pair_count);

        Ok(())
    }
}
