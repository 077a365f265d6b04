use anchor_lang::prelude::*;

use crate::constants::PPM_DENOMINATOR;
use crate::errors::ErrorCode;

/// Optional time-boxed claiming window.
///
/// `start_time == 0` opens the window immediately; `duration == 0` keeps it
/// open forever once started. Immutable after initialization.
#[derive(
    AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, Default, PartialEq, Eq,
)]
pub struct ClaimingWindow {
    /// Unix timestamp the window opens at (0 = open immediately)
    pub start_time: i64,
    /// Window length in seconds (0 = open-ended once started)
    pub duration: i64,
    /// Destination for the post-window clawback of unclaimed funds
    pub treasury: Pubkey,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowStatus {
    NotOpen,
    Open,
    Closed,
}

impl ClaimingWindow {
    pub fn status(&self, now: i64) -> WindowStatus {
        if self.start_time > 0 && now < self.start_time {
            return WindowStatus::NotOpen;
        }
        if self.duration > 0 && now > self.start_time.saturating_add(self.duration) {
            return WindowStatus::Closed;
        }
        WindowStatus::Open
    }

    pub fn require_open(&self, now: i64) -> Result<()> {
        match self.status(now) {
            WindowStatus::NotOpen => err!(ErrorCode::WindowNotOpen),
            WindowStatus::Closed => err!(ErrorCode::WindowClosed),
            WindowStatus::Open => Ok(()),
        }
    }

    pub fn is_closed(&self, now: i64) -> bool {
        self.status(now) == WindowStatus::Closed
    }

    pub fn has_treasury(&self) -> bool {
        self.treasury != Pubkey::default()
    }
}

/// One deployed airstream instance.
///
/// The commitment root and totals are fixed at creation; `claimed_amount` is
/// the only mutable accounting field and grows monotonically with claims and
/// the treasury clawback.
#[account]
#[derive(InitSpace)]
pub struct Airstream {
    /// Account that created the instance (part of the PDA derivation)
    pub creator: Pubkey,
    /// Current administrative owner; the controller PDA after creation
    pub admin: Pubkey,
    /// Mint of the distributed token
    pub distribution_token: Pubkey,
    /// Commitment root over the recipient set, set once, never mutated
    pub merkle_root: [u8; 32],
    /// Sum of all committed entitlements
    pub total_amount: u64,
    /// Amount already claimed or clawed back
    pub claimed_amount: u64,
    /// Token units streamed per second while the flow is active
    pub flow_rate: u64,
    /// Share of each entitlement paid out immediately, in parts per million
    pub initial_reward_ppm: u32,
    pub claiming_window: ClaimingWindow,
    /// Bump seed for the PDA
    pub bump: u8,
}

impl Airstream {
    /// Splits an entitlement into (immediate, streamed) per the
    /// initial-reward ratio. The immediate share rounds down.
    pub fn split_amount(&self, amount: u64) -> Result<(u64, u64)> {
        let immediate = (amount as u128)
            .checked_mul(self.initial_reward_ppm as u128)
            .ok_or(ErrorCode::MathOverflow)?
            / PPM_DENOMINATOR as u128;
        let immediate = u64::try_from(immediate).map_err(|_| ErrorCode::MathOverflow)?;
        let streamed = amount
            .checked_sub(immediate)
            .ok_or(ErrorCode::MathOverflow)?;
        Ok((immediate, streamed))
    }

    pub fn record_claim(&mut self, amount: u64) -> Result<()> {
        self.claimed_amount = self
            .claimed_amount
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;
        require!(
            self.claimed_amount <= self.total_amount,
            ErrorCode::AllocationExceeded
        );
        Ok(())
    }

    /// Folds the post-window clawback into the claimed total so a repeated
    /// clawback finds nothing left.
    pub fn record_clawback(&mut self, amount: u64) -> Result<()> {
        self.record_claim(amount)
    }

    pub fn unclaimed_amount(&self) -> u64 {
        self.total_amount.saturating_sub(self.claimed_amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::states::testing::error_code;

    fn window(start_time: i64, duration: i64) -> ClaimingWindow {
        ClaimingWindow {
            start_time,
            duration,
            treasury: Pubkey::default(),
        }
    }

    #[test]
    fn zero_start_time_opens_immediately() {
        assert_eq!(window(0, 0).status(1), WindowStatus::Open);
        assert!(window(0, 0).require_open(1).is_ok());
    }

    #[test]
    fn future_start_time_is_not_open() {
        let w = window(1_000, 0);
        assert_eq!(w.status(999), WindowStatus::NotOpen);
        assert_eq!(w.status(1_000), WindowStatus::Open);
        assert_eq!(w.status(1_001), WindowStatus::Open);
        assert_eq!(
            error_code(w.require_open(999).unwrap_err()),
            error_code(error!(ErrorCode::WindowNotOpen))
        );
    }

    #[test]
    fn zero_duration_never_closes() {
        let w = window(1_000, 0);
        assert_eq!(w.status(i64::MAX), WindowStatus::Open);
        assert!(!w.is_closed(i64::MAX));
    }

    #[test]
    fn window_closes_after_start_plus_duration() {
        let w = window(1_000, 500);
        assert_eq!(w.status(1_500), WindowStatus::Open);
        assert_eq!(w.status(1_501), WindowStatus::Closed);
        assert!(w.is_closed(1_501));
        assert_eq!(
            error_code(w.require_open(1_501).unwrap_err()),
            error_code(error!(ErrorCode::WindowClosed))
        );
    }

    fn airstream(total_amount: u64, initial_reward_ppm: u32) -> Airstream {
        Airstream {
            creator: Pubkey::new_unique(),
            admin: Pubkey::new_unique(),
            distribution_token: Pubkey::new_unique(),
            merkle_root: [1u8; 32],
            total_amount,
            claimed_amount: 0,
            flow_rate: 1,
            initial_reward_ppm,
            claiming_window: ClaimingWindow::default(),
            bump: 255,
        }
    }

    #[test]
    fn zero_ratio_streams_everything() {
        assert_eq!(airstream(1_000, 0).split_amount(100).unwrap(), (0, 100));
    }

    #[test]
    fn full_ratio_pays_everything_immediately() {
        assert_eq!(
            airstream(1_000, 1_000_000).split_amount(100).unwrap(),
            (100, 0)
        );
    }

    #[test]
    fn partial_ratio_rounds_the_immediate_share_down() {
        // 40% of 150_000
        assert_eq!(
            airstream(1_000_000, 400_000).split_amount(150_000).unwrap(),
            (60_000, 90_000)
        );
        // 50% of 3 rounds down to 1 immediate, 2 streamed
        assert_eq!(airstream(1_000, 500_000).split_amount(3).unwrap(), (1, 2));
    }

    #[test]
    fn split_handles_maximum_amounts() {
        let (immediate, streamed) = airstream(u64::MAX, 999_999).split_amount(u64::MAX).unwrap();
        assert_eq!(immediate.checked_add(streamed), Some(u64::MAX));
    }

    #[test]
    fn claims_beyond_the_committed_total_are_rejected() {
        let mut a = airstream(300, 0);
        a.record_claim(100).unwrap();
        a.record_claim(200).unwrap();
        assert_eq!(a.unclaimed_amount(), 0);
        assert_eq!(
            error_code(a.record_claim(1).unwrap_err()),
            error_code(error!(ErrorCode::AllocationExceeded))
        );
    }

    #[test]
    fn clawback_consumes_the_remainder_exactly_once() {
        let mut a = airstream(300, 0);
        a.record_claim(100).unwrap();
        let remainder = a.unclaimed_amount();
        assert_eq!(remainder, 200);
        a.record_clawback(remainder).unwrap();
        assert_eq!(a.unclaimed_amount(), 0);
    }
}
