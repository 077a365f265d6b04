//! Commitment construction and membership-proof verification for streaming
//! airdrops.
//!
//! The same hashing core is used by the off-chain tree builder and the
//! on-chain claim verifier, so there is exactly one canonical encoding of
//! leaves and internal nodes. The `file` feature (on by default) adds the
//! JSON commitment-file format consumed by off-chain claim tooling; the
//! on-chain program builds with `default-features = false` and only takes
//! the hashing core.

pub mod hash;
pub mod tree;

#[cfg(feature = "file")]
pub mod file;

pub use anchor_lang::prelude::Pubkey;
pub use hash::{hash_leaf, hash_node, verify_proof};
pub use tree::{MerkleDistribution, MerkleError, Recipient};

#[cfg(feature = "file")]
pub use file::{CommitmentFile, CommitmentFileError};
