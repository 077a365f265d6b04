use anchor_lang::prelude::*;

use crate::constants::{CONTROLLER_SEED, MEMBER_RECORD_SEED, POOL_SEED};
use crate::errors::ErrorCode;
use crate::states::{Airstream, AirstreamController, DistributionPool, FlowStatus, MemberRecord};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct MemberInfo {
    pub airstream: Pubkey,
    pub recipient: Pubkey,
    pub claimed: bool,
    /// Current pool allocation, reflecting any redirects
    pub allocation: u64,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct AirstreamInfo {
    pub airstream: Pubkey,
    pub admin: Pubkey,
    pub distribution_token: Pubkey,
    pub total_amount: u64,
    pub claimed_amount: u64,
    pub unclaimed_amount: u64,
    pub total_units: u64,
    pub flow_rate: u64,
    pub status: FlowStatus,
}

/// Read view over one ledger row. A member without a record has simply
/// never claimed or been redirected to.
#[derive(Accounts)]
pub struct QueryMember<'info> {
    pub airstream: Account<'info, Airstream>,

    #[account(
        seeds = [MEMBER_RECORD_SEED, airstream.key().as_ref(), member_record.recipient.as_ref()],
        bump = member_record.bump,
        constraint = member_record.airstream == airstream.key() @ ErrorCode::MemberRecordMismatch
    )]
    pub member_record: Account<'info, MemberRecord>,
}

impl<'info> QueryMember<'info> {
    pub fn handle(ctx: Context<QueryMember>) -> Result<MemberInfo> {
        let record = &ctx.accounts.member_record;

        let info = MemberInfo {
            airstream: record.airstream,
            recipient: record.recipient,
            claimed: record.claimed,
            allocation: record.units,
        };

        msg!("Member {} claimed: {}", info.recipient, info.claimed);
        msg!("Allocation: {} units", info.allocation);

        Ok(info)
    }
}

/// Read view over an instance's aggregate state
#[derive(Accounts)]
pub struct QueryAirstream<'info> {
    pub airstream: Account<'info, Airstream>,

    #[account(
        seeds = [POOL_SEED, airstream.key().as_ref()],
        bump = pool.bump
    )]
    pub pool: Account<'info, DistributionPool>,

    #[account(
        seeds = [CONTROLLER_SEED, airstream.key().as_ref()],
        bump = controller.bump,
        has_one = airstream
    )]
    pub controller: Account<'info, AirstreamController>,
}

impl<'info> QueryAirstream<'info> {
    pub fn handle(ctx: Context<QueryAirstream>) -> Result<AirstreamInfo> {
        let airstream = &ctx.accounts.airstream;

        let info = AirstreamInfo {
            airstream: airstream.key(),
            admin: airstream.admin,
            distribution_token: airstream.distribution_token,
            total_amount: airstream.total_amount,
            claimed_amount: airstream.claimed_amount,
            unclaimed_amount: airstream.unclaimed_amount(),
            total_units: ctx.accounts.pool.total_units,
            flow_rate: ctx.accounts.pool.flow_rate,
            status: ctx.accounts.controller.status,
        };

        msg!("Airstream {}", info.airstream);
        msg!("Total: {} units, claimed: {} units", info.total_amount, info.claimed_amount);
        msg!("Pool units: {}, flow rate: {} units/s", info.total_units, info.flow_rate);

        Ok(info)
    }
}
