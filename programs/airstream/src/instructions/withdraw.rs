use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::{AIRSTREAM_SEED, CONTROLLER_SEED, VAULT_SEED};
use crate::errors::ErrorCode;
use crate::states::{Airstream, AirstreamController};

/// Emergency withdrawal of a full vault balance to the administrative owner.
/// Only permitted while the flow is paused, so funds are never pulled out
/// from under an actively streaming distribution.
#[derive(Accounts)]
pub struct Withdraw<'info> {
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

    /// CHECK: any SPL mint the instance holds a vault for
    pub token_mint: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [VAULT_SEED, airstream.key().as_ref(), token_mint.key().as_ref()],
        bump,
        token::mint = token_mint,
        token::authority = airstream
    )]
    pub vault: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        token::mint = token_mint,
        token::authority = owner
    )]
    pub owner_token_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

impl<'info> Withdraw<'info> {
    pub fn handle(ctx: Context<Withdraw>) -> Result<()> {
        ctx.accounts.controller.require_paused()?;

        let amount = ctx.accounts.vault.amount;
        if amount > 0 {
            let airstream = &ctx.accounts.airstream;
            anchor_spl::token::transfer(
                CpiContext::new_with_signer(
                    ctx.accounts.token_program.to_account_info(),
                    anchor_spl::token::Transfer {
                        from: ctx.accounts.vault.to_account_info(),
                        to: ctx.accounts.owner_token_account.to_account_info(),
                        authority: airstream.to_account_info(),
                    },
                    &[&[
                        AIRSTREAM_SEED,
                        airstream.creator.as_ref(),
                        airstream.merkle_root.as_ref(),
                        &[airstream.bump],
                    ]],
                ),
                amount,
            )?;
        }

        msg!(
            "Withdrew {} units of {} to owner",
            amount,
            ctx.accounts.token_mint.key()
        );

        emit!(crate::events::Withdrawn {
            airstream: ctx.accounts.airstream.key(),
            token: ctx.accounts.token_mint.key(),
            account: ctx.accounts.owner.key(),
            amount,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }
}
