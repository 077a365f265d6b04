use anchor_lang::prelude::*;

use crate::errors::ErrorCode;
use crate::states::Airstream;

/// Hands administrative control of the airstream to another account,
/// normally the controller PDA right after creation.
///
/// Until that handoff happens, `resume` fails with
/// `NotOwnerOfDistributionTarget`; that failure is the safety net catching
/// a skipped handoff step.
#[derive(Accounts)]
pub struct TransferAdmin<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        has_one = admin @ ErrorCode::Unauthorized
    )]
    pub airstream: Account<'info, Airstream>,
}

impl<'info> TransferAdmin<'info> {
    pub fn handle(ctx: Context<TransferAdmin>, new_admin: Pubkey) -> Result<()> {
        let previous_admin = ctx.accounts.airstream.admin;
        ctx.accounts.airstream.admin = new_admin;

        msg!("Admin transferred: {} -> {}", previous_admin, new_admin);

        emit!(crate::events::AdminTransferred {
            airstream: ctx.accounts.airstream.key(),
            previous_admin,
            new_admin,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }
}
