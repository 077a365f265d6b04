use anchor_lang::prelude::*;

use crate::errors::ErrorCode;

/// Per-address ledger row: the claimed flag and the current pool allocation.
///
/// Created lazily on first claim or on first redirect towards the address;
/// never deleted. `claimed` transitions false -> true exactly once and never
/// reverts, while `units` stays mutable through redirects.
#[account]
#[derive(InitSpace)]
pub struct MemberRecord {
    /// The airstream this record belongs to
    pub airstream: Pubkey,
    /// The address the record is keyed by
    pub recipient: Pubkey,
    pub claimed: bool,
    /// Current pool share in token units
    pub units: u64,
    /// Bump seed for the PDA
    pub bump: u8,
}

impl MemberRecord {
    /// Records a successful claim, granting `units` of pool share.
    pub fn mark_claimed(&mut self, units: u64) -> Result<()> {
        require!(!self.claimed, ErrorCode::AlreadyClaimed);
        self.claimed = true;
        self.add_units(units)
    }

    pub fn add_units(&mut self, units: u64) -> Result<()> {
        self.units = self
            .units
            .checked_add(units)
            .ok_or(ErrorCode::MathOverflow)?;
        Ok(())
    }

    pub fn remove_units(&mut self, units: u64) -> Result<()> {
        self.units = self
            .units
            .checked_sub(units)
            .ok_or(ErrorCode::InsufficientAllocation)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::states::testing::error_code;

    fn record() -> MemberRecord {
        MemberRecord {
            airstream: Pubkey::new_unique(),
            recipient: Pubkey::new_unique(),
            claimed: false,
            units: 0,
            bump: 255,
        }
    }

    #[test]
    fn claiming_twice_is_rejected() {
        let mut r = record();
        r.mark_claimed(100).unwrap();
        assert!(r.claimed);
        assert_eq!(r.units, 100);
        assert_eq!(
            error_code(r.mark_claimed(100).unwrap_err()),
            error_code(error!(ErrorCode::AlreadyClaimed))
        );
        // the failed second claim left the allocation untouched
        assert_eq!(r.units, 100);
    }

    #[test]
    fn claim_keeps_units_granted_by_an_earlier_redirect() {
        let mut r = record();
        r.add_units(40).unwrap();
        r.mark_claimed(100).unwrap();
        assert_eq!(r.units, 140);
    }

    #[test]
    fn removing_more_than_the_allocation_is_rejected() {
        let mut r = record();
        r.add_units(50).unwrap();
        assert_eq!(
            error_code(r.remove_units(51).unwrap_err()),
            error_code(error!(ErrorCode::InsufficientAllocation))
        );
        assert_eq!(r.units, 50);
        r.remove_units(50).unwrap();
        assert_eq!(r.units, 0);
    }
}
