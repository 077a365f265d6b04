use anchor_lang::prelude::*;

use crate::errors::ErrorCode;

#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlowStatus {
    Active,
    Paused,
}

/// Controller bound 1:1 to an airstream at creation; sole writer of the
/// Active/Paused flag and the gate for every administrative operation.
#[account]
#[derive(InitSpace)]
pub struct AirstreamController {
    /// The administrative owner allowed to operate the controller
    pub owner: Pubkey,
    /// The airstream this controller governs
    pub airstream: Pubkey,
    pub status: FlowStatus,
    /// Bump seed for the PDA
    pub bump: u8,
}

impl AirstreamController {
    pub fn pause(&mut self) -> Result<()> {
        require!(self.status == FlowStatus::Active, ErrorCode::AlreadyPaused);
        self.status = FlowStatus::Paused;
        Ok(())
    }

    pub fn resume(&mut self) -> Result<()> {
        require!(self.status == FlowStatus::Paused, ErrorCode::NotPaused);
        self.status = FlowStatus::Active;
        Ok(())
    }

    pub fn require_paused(&self) -> Result<()> {
        require!(self.status == FlowStatus::Paused, ErrorCode::NotPaused);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::states::testing::error_code;

    fn controller(status: FlowStatus) -> AirstreamController {
        AirstreamController {
            owner: Pubkey::new_unique(),
            airstream: Pubkey::new_unique(),
            status,
            bump: 255,
        }
    }

    #[test]
    fn pause_and_resume_alternate() {
        let mut c = controller(FlowStatus::Active);
        c.pause().unwrap();
        assert_eq!(c.status, FlowStatus::Paused);
        c.resume().unwrap();
        assert_eq!(c.status, FlowStatus::Active);
    }

    #[test]
    fn pausing_twice_is_rejected() {
        let mut c = controller(FlowStatus::Paused);
        assert_eq!(
            error_code(c.pause().unwrap_err()),
            error_code(error!(ErrorCode::AlreadyPaused))
        );
    }

    #[test]
    fn resuming_while_active_is_rejected() {
        let mut c = controller(FlowStatus::Active);
        assert_eq!(
            error_code(c.resume().unwrap_err()),
            error_code(error!(ErrorCode::NotPaused))
        );
    }

    #[test]
    fn withdrawal_gate_requires_a_pause() {
        assert!(controller(FlowStatus::Active).require_paused().is_err());
        assert!(controller(FlowStatus::Paused).require_paused().is_ok());
    }
}
