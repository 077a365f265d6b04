use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::{
    AIRSTREAM_SEED, CONTROLLER_SEED, POOL_SEED, PPM_DENOMINATOR, VAULT_SEED,
};
use crate::errors::ErrorCode;
use crate::states::{
    Airstream, AirstreamController, ClaimingWindow, DistributionPool, FlowStatus,
};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct AirstreamConfig {
    /// Commitment root over the recipient set
    pub merkle_root: [u8; 32],
    /// Sum of all committed entitlements
    pub total_amount: u64,
    /// Stream duration in seconds; sets the flow rate
    pub duration: u64,
    /// Share of each entitlement paid out immediately, in parts per million
    pub initial_reward_ppm: u32,
    pub claiming_window: ClaimingWindow,
}

#[derive(Accounts)]
#[instruction(config: AirstreamConfig)]
pub struct CreateAirstream<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(
        init,
        payer = creator,
        space = Airstream::DISCRIMINATOR.len() + Airstream::INIT_SPACE,
        seeds = [AIRSTREAM_SEED, creator.key().as_ref(), config.merkle_root.as_ref()],
        bump
    )]
    pub airstream: Account<'info, Airstream>,

    #[account(
        init,
        payer = creator,
        space = DistributionPool::DISCRIMINATOR.len() + DistributionPool::INIT_SPACE,
        seeds = [POOL_SEED, airstream.key().as_ref()],
        bump
    )]
    pub pool: Account<'info, DistributionPool>,

    #[account(
        init,
        payer = creator,
        space = AirstreamController::DISCRIMINATOR.len() + AirstreamController::INIT_SPACE,
        seeds = [CONTROLLER_SEED, airstream.key().as_ref()],
        bump
    )]
    pub controller: Account<'info, AirstreamController>,

    /// CHECK: This is a valid SPL token mint account
    pub distribution_mint: UncheckedAccount<'info>,

    #[account(
        init,
        payer = creator,
        seeds = [VAULT_SEED, airstream.key().as_ref(), distribution_mint.key().as_ref()],
        bump,
        token::mint = distribution_mint,
        token::authority = airstream
    )]
    pub vault: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

impl<'info> CreateAirstream<'info> {
    pub fn handle(ctx: Context<CreateAirstream>, config: AirstreamConfig) -> Result<()> {
        validate_config(&config)?;

        let flow_rate = config.total_amount / config.duration;

        let airstream = &mut ctx.accounts.airstream;
        airstream.creator = ctx.accounts.creator.key();
        // the creator holds administrative control until it is explicitly
        // handed to the controller via transfer_admin; resume() enforces
        // that the handoff happened
        airstream.admin = ctx.accounts.creator.key();
        airstream.distribution_token = ctx.accounts.distribution_mint.key();
        airstream.merkle_root = config.merkle_root;
        airstream.total_amount = config.total_amount;
        airstream.claimed_amount = 0;
        airstream.flow_rate = flow_rate;
        airstream.initial_reward_ppm = config.initial_reward_ppm;
        airstream.claiming_window = config.claiming_window;
        airstream.bump = ctx.bumps.airstream;

        // born paused: the flow starts once the controller has received
        // administrative control and resume() is called
        let pool = &mut ctx.accounts.pool;
        pool.airstream = airstream.key();
        pool.distribution_token = ctx.accounts.distribution_mint.key();
        pool.total_units = 0;
        pool.flow_rate = 0;
        pool.bump = ctx.bumps.pool;

        let controller = &mut ctx.accounts.controller;
        controller.owner = ctx.accounts.creator.key();
        controller.airstream = airstream.key();
        controller.status = FlowStatus::Paused;
        controller.bump = ctx.bumps.controller;

        msg!("Created airstream: {}", airstream.key());
        msg!("Flow rate: {} units/s", flow_rate);

        emit!(crate::events::AirstreamCreated {
            airstream: airstream.key(),
            controller: controller.key(),
            pool: ctx.accounts.pool.key(),
            distribution_token: ctx.accounts.distribution_mint.key(),
            merkle_root: config.merkle_root,
            total_amount: config.total_amount,
            flow_rate,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }
}

fn validate_config(config: &AirstreamConfig) -> Result<()> {
    require!(config.merkle_root != [0u8; 32], ErrorCode::InvalidConfig);
    require!(config.total_amount > 0, ErrorCode::InvalidConfig);
    require!(config.duration > 0, ErrorCode::InvalidConfig);
    require!(
        config.initial_reward_ppm as u64 <= PPM_DENOMINATOR,
        ErrorCode::InvalidConfig
    );

    let window = &config.claiming_window;
    require!(
        window.start_time >= 0 && window.duration >= 0,
        ErrorCode::InvalidConfig
    );
    // a bounded window needs somewhere to send the unclaimed remainder
    if window.duration > 0 {
        require!(window.has_treasury(), ErrorCode::InvalidConfig);
    }

    Ok(())
}
