use anchor_lang::prelude::*;

use crate::errors::ErrorCode;

/// The streaming transport boundary: total member shares plus the current
/// output rate. Scheduling of the actual token flow happens outside the
/// program; consumers stream off of this account's fields.
#[account]
#[derive(InitSpace)]
pub struct DistributionPool {
    /// The airstream feeding this pool
    pub airstream: Pubkey,
    /// Mint of the distributed token
    pub distribution_token: Pubkey,
    /// Sum of all member units; equals the sum over all member records
    pub total_units: u64,
    /// Current output rate in token units per second; zero while paused
    pub flow_rate: u64,
    /// Bump seed for the PDA
    pub bump: u8,
}

impl DistributionPool {
    pub fn add_units(&mut self, units: u64) -> Result<()> {
        self.total_units = self
            .total_units
            .checked_add(units)
            .ok_or(ErrorCode::MathOverflow)?;
        Ok(())
    }

    pub fn set_flow_rate(&mut self, flow_rate: u64) {
        self.flow_rate = flow_rate;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_additions_accumulate() {
        let mut pool = DistributionPool {
            airstream: Pubkey::new_unique(),
            distribution_token: Pubkey::new_unique(),
            total_units: 0,
            flow_rate: 10,
            bump: 255,
        };
        pool.add_units(100).unwrap();
        pool.add_units(200).unwrap();
        assert_eq!(pool.total_units, 300);
        assert!(pool.add_units(u64::MAX).is_err());
        assert_eq!(pool.total_units, 300);
    }
}
