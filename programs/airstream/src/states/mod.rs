pub mod airstream;
pub mod controller;
pub mod member_record;
pub mod pool;

pub use airstream::*;
pub use controller::*;
pub use member_record::*;
pub use pool::*;

#[cfg(test)]
pub(crate) mod testing {
    use anchor_lang::error::Error;

    /// Collapses an anchor error down to its code so tests can compare
    /// variants without relying on source-location equality.
    pub(crate) fn error_code(err: Error) -> u32 {
        match err {
            Error::AnchorError(e) => e.error_code_number,
            Error::ProgramError(_) => u32::MAX,
        }
    }
}
