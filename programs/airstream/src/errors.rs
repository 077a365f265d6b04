use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Account has already claimed its entitlement")]
    AlreadyClaimed,
    #[msg("Membership proof does not match the commitment root")]
    InvalidProof,
    #[msg("Claiming window has not opened yet")]
    WindowNotOpen,
    #[msg("Claiming window has closed")]
    WindowClosed,
    #[msg("Claiming window has not closed yet")]
    WindowNotClosed,
    #[msg("No treasury configured for this airstream")]
    NoTreasury,
    #[msg("Distribution flow is already paused")]
    AlreadyPaused,
    #[msg("Distribution flow is not paused")]
    NotPaused,
    #[msg("Controller does not hold administrative control of the airstream")]
    NotOwnerOfDistributionTarget,
    #[msg("Caller is not the administrative owner")]
    Unauthorized,
    #[msg("Vault balance cannot cover the initial reward transfer")]
    InsufficientFunds,
    #[msg("Redirect amount exceeds the source allocation")]
    InsufficientAllocation,
    #[msg("Claim exceeds the committed total amount")]
    AllocationExceeded,
    #[msg("Source and destination of a redirect must differ")]
    RedirectToSelf,
    #[msg("Redirect account list and amount list lengths do not match")]
    RedirectLengthMismatch,
    #[msg("Member record does not belong to this airstream")]
    MemberRecordMismatch,
    #[msg("Invalid airstream configuration")]
    InvalidConfig,
    #[msg("Math overflow occurred during calculation")]
    MathOverflow,
}
