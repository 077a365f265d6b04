use anchor_lang::prelude::*;

/// Event emitted once per created airstream: the sole discovery mechanism
/// for new instances.
#[event]
pub struct AirstreamCreated {
    /// The airstream instance
    pub airstream: Pubkey,
    /// The controller bound 1:1 to the instance
    pub controller: Pubkey,
    /// The distribution pool the instance streams through
    pub pool: Pubkey,
    /// Token being distributed
    pub distribution_token: Pubkey,
    /// Commitment root over the recipient set
    pub merkle_root: [u8; 32],
    /// Sum of all committed entitlements
    pub total_amount: u64,
    /// Token units streamed per second while active
    pub flow_rate: u64,
    /// Timestamp of creation
    pub timestamp: i64,
}

/// Event emitted when a recipient claims their entitlement
#[event]
pub struct RewardClaimed {
    /// The airstream claimed against
    pub airstream: Pubkey,
    /// The claiming account
    pub recipient: Pubkey,
    /// Full entitlement amount proven by the claim
    pub amount: u64,
    /// Portion paid out immediately
    pub immediate_amount: u64,
    /// Portion granted as pool units, streamed over time
    pub units: u64,
    /// Timestamp of the claim
    pub timestamp: i64,
}

/// Event emitted when the distribution flow is paused
#[event]
pub struct FlowPaused {
    pub airstream: Pubkey,
    pub controller: Pubkey,
    pub timestamp: i64,
}

/// Event emitted when the distribution flow is resumed
#[event]
pub struct FlowResumed {
    pub airstream: Pubkey,
    pub controller: Pubkey,
    /// Flow rate restored on the pool
    pub flow_rate: u64,
    pub timestamp: i64,
}

/// Event emitted when the owner withdraws a token balance while paused
#[event]
pub struct Withdrawn {
    pub airstream: Pubkey,
    /// Mint that was withdrawn
    pub token: Pubkey,
    /// Receiving account (the administrative owner)
    pub account: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

/// Event emitted for each redirected allocation pair
#[event]
pub struct RewardsRedirected {
    pub airstream: Pubkey,
    pub from: Pubkey,
    pub to: Pubkey,
    /// Units moved; the pool total is conserved
    pub amount: u64,
    pub timestamp: i64,
}

/// Event emitted when the unclaimed remainder is granted to the treasury
/// after the claiming window closed
#[event]
pub struct StreamedBackToTreasury {
    pub airstream: Pubkey,
    pub treasury: Pubkey,
    /// Unclaimed units granted to the treasury by this call
    pub amount: u64,
    pub timestamp: i64,
}

/// Event emitted when administrative control of the airstream moves
#[event]
pub struct AdminTransferred {
    pub airstream: Pubkey,
    pub previous_admin: Pubkey,
    pub new_admin: Pubkey,
    pub timestamp: i64,
}
