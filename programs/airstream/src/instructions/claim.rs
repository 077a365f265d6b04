use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::{AIRSTREAM_SEED, MEMBER_RECORD_SEED, POOL_SEED, VAULT_SEED};
use crate::errors::ErrorCode;
use crate::states::{Airstream, DistributionPool, MemberRecord};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct ClaimParams {
    /// Full entitlement amount committed for the claimant
    pub amount: u64,
    /// Ordered sibling hashes from the claimant's leaf up to the root
    pub proof: Vec<[u8; 32]>,
}

#[derive(Accounts)]
pub struct Claim<'info> {
    #[account(mut)]
    pub claimant: Signer<'info>,

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

    /// Ledger row for the claimant; may already exist if the claimant was
    /// the destination of an earlier redirect
    #[account(
        init_if_needed,
        payer = claimant,
        space = MemberRecord::DISCRIMINATOR.len() + MemberRecord::INIT_SPACE,
        seeds = [MEMBER_RECORD_SEED, airstream.key().as_ref(), claimant.key().as_ref()],
        bump
    )]
    pub member_record: Account<'info, MemberRecord>,

    /// CHECK: validated against the airstream's distribution token
    #[account(address = airstream.distribution_token)]
    pub distribution_mint: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [VAULT_SEED, airstream.key().as_ref(), distribution_mint.key().as_ref()],
        bump,
        token::mint = distribution_mint,
        token::authority = airstream
    )]
    pub vault: Box<Account<'info, TokenAccount>>,

    /// Destination of the immediate cash-out portion, if any
    #[account(
        mut,
        token::mint = distribution_mint,
        token::authority = claimant
    )]
    pub claimant_token_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

impl<'info> Claim<'info> {
    pub fn handle(ctx: Context<Claim>, params: ClaimParams) -> Result<()> {
        let claimant = ctx.accounts.claimant.key();
        let now = Clock::get()?.unix_timestamp;

        require!(
            !ctx.accounts.member_record.claimed,
            ErrorCode::AlreadyClaimed
        );

        require!(
            merkle_tree::verify_proof(
                &ctx.accounts.airstream.merkle_root,
                &claimant,
                params.amount,
                &params.proof,
            ),
            ErrorCode::InvalidProof
        );

        ctx.accounts.airstream.claiming_window.require_open(now)?;

        let (immediate, streamed) = ctx.accounts.airstream.split_amount(params.amount)?;

        if immediate > 0 {
            require!(
                ctx.accounts.vault.amount >= immediate,
                ErrorCode::InsufficientFunds
            );
            transfer_immediate_reward(&ctx, immediate)?;
        }

        let member_record = &mut ctx.accounts.member_record;
        if member_record.recipient == Pubkey::default() {
            member_record.airstream = ctx.accounts.airstream.key();
            member_record.recipient = claimant;
            member_record.bump = ctx.bumps.member_record;
        }
        member_record.mark_claimed(streamed)?;
        ctx.accounts.pool.add_units(streamed)?;
        ctx.accounts.airstream.record_claim(params.amount)?;

        msg!("Claim by {}: {} total units", claimant, params.amount);
        msg!("Immediate: {} units, streamed: {} units", immediate, streamed);

        emit!(crate::events::RewardClaimed {
            airstream: ctx.accounts.airstream.key(),
            recipient: claimant,
            amount: params.amount,
            immediate_amount: immediate,
            units: streamed,
            timestamp: now,
        });

        Ok(())
    }
}

fn transfer_immediate_reward(ctx: &Context<Claim>, amount: u64) -> Result<()> {
    let airstream = &ctx.accounts.airstream;
    anchor_spl::token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            anchor_spl::token::Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.claimant_token_account.to_account_info(),
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

    Ok(())
}
