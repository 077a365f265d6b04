//! Streaming merkle airdrop: an issuer commits to a fixed recipient set,
//! recipients prove membership to claim, and entitlements accrue as a
//! continuous flow instead of a lump payout. The issuer keeps emergency
//! pause/withdraw control and can redirect already-granted allocations.

use anchor_lang::prelude::*;

declare_id!("FStrmA1rdrpvHD76YaB5sZzqXCEhUCVpP3cBvggKofuS");

pub mod instructions;
pub mod errors;
pub mod constants;
pub mod states;
pub mod events;

pub use instructions::*;
pub use events::*;

#[program]
pub mod airstream {
    use super::*;

    /// Creates a fresh airstream instance: state, pool, controller and
    /// vault. Emits `AirstreamCreated`, the sole discovery mechanism.
    pub fn create_airstream(ctx: Context<CreateAirstream>, config: AirstreamConfig) -> Result<()> {
        CreateAirstream::handle(ctx, config)
    }

    /// Verifies a membership proof and grants the claimant's share of the
    /// flow, at most once per address.
    pub fn claim(ctx: Context<Claim>, params: ClaimParams) -> Result<()> {
        Claim::handle(ctx, params)
    }

    pub fn pause(ctx: Context<Pause>) -> Result<()> {
        Pause::handle(ctx)
    }

    pub fn resume(ctx: Context<Resume>) -> Result<()> {
        Resume::handle(ctx)
    }

    /// Emergency withdrawal of a full vault balance; paused flow only.
    pub fn withdraw(ctx: Context<Withdraw>) -> Result<()> {
        Withdraw::handle(ctx)
    }

    pub fn transfer_admin(ctx: Context<TransferAdmin>, new_admin: Pubkey) -> Result<()> {
        TransferAdmin::handle(ctx, new_admin)
    }

    pub fn redirect_reward(
        ctx: Context<RedirectReward>,
        params: RedirectRewardParams,
    ) -> Result<()> {
        RedirectReward::handle(ctx, params)
    }

    pub fn redirect_rewards<'info>(
        ctx: Context<'_, '_, 'info, 'info, RedirectRewards<'info>>,
        amounts: Vec<u64>,
    ) -> Result<()> {
        RedirectRewards::handle(ctx, amounts)
    }

    /// Recaptures the unclaimed remainder to the treasury once the
    /// claiming window has closed.
    pub fn stream_back_to_treasury(ctx: Context<StreamBackToTreasury>) -> Result<()> {
        StreamBackToTreasury::handle(ctx)
    }

    pub fn query_member(ctx: Context<QueryMember>) -> Result<MemberInfo> {
        QueryMember::handle(ctx)
    }

    pub fn query_airstream(ctx: Context<QueryAirstream>) -> Result<AirstreamInfo> {
        QueryAirstream::handle(ctx)
    }
}
