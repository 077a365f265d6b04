//! JSON commitment file: the off-chain artifact an issuer publishes so
//! recipients can look up their entitlement and regenerate their proof.
//!
//! Amounts are serialized as base-10 decimal strings. JSON numbers are
//! doubles in most consumers, which silently lose precision above 2^53.

use std::str::FromStr;

use anchor_lang::prelude::Pubkey;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::tree::{MerkleDistribution, MerkleError, Recipient};

/// Identifies the layout of the serialized tree.
pub const COMMITMENT_FORMAT: &str = "airstream-merkle-v1";

#[derive(Error, Debug)]
pub enum CommitmentFileError {
    #[error("unsupported commitment format {0:?}")]
    UnsupportedFormat(String),
    #[error("invalid recipient address {0:?}")]
    InvalidAddress(String),
    #[error("invalid recipient amount {0:?}")]
    InvalidAmount(String),
    #[error("invalid root encoding {0:?}")]
    InvalidRoot(String),
    #[error("stored root does not match the recipient set")]
    RootMismatch,
    #[error(transparent)]
    Merkle(#[from] MerkleError),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CommitmentEntry {
    /// Base-58 recipient address.
    pub address: String,
    /// Base-10 decimal amount.
    pub amount: String,
}

/// The published commitment: recipient leaf list plus issuer metadata.
///
/// The tree layout is deterministic, so the leaf list alone is sufficient to
/// regenerate every proof; the root is stored as a tamper check.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CommitmentFile {
    pub format: String,
    /// Issuer-chosen label.
    pub name: String,
    /// Deployed instance address, base-58.
    pub contract: String,
    /// Network identifier, e.g. "solana:mainnet".
    pub chain_id: String,
    /// 0x-prefixed hex commitment root.
    pub root: String,
    pub recipients: Vec<CommitmentEntry>,
}

impl CommitmentFile {
    pub fn new(
        name: impl Into<String>,
        contract: &Pubkey,
        chain_id: impl Into<String>,
        tree: &MerkleDistribution,
    ) -> Self {
        Self {
            format: COMMITMENT_FORMAT.to_string(),
            name: name.into(),
            contract: contract.to_string(),
            chain_id: chain_id.into(),
            root: encode_root(&tree.root()),
            recipients: tree
                .recipients()
                .iter()
                .map(|r| CommitmentEntry {
                    address: r.address.to_string(),
                    amount: r.amount.to_string(),
                })
                .collect(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, CommitmentFileError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, CommitmentFileError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Rebuilds the tree from the stored leaf list and checks it against the
    /// stored root, so proofs regenerated from a loaded file are guaranteed
    /// to match the published commitment.
    pub fn to_distribution(&self) -> Result<MerkleDistribution, CommitmentFileError> {
        if self.format != COMMITMENT_FORMAT {
            return Err(CommitmentFileError::UnsupportedFormat(self.format.clone()));
        }
        let recipients = self
            .recipients
            .iter()
            .map(|entry| {
                let address = Pubkey::from_str(&entry.address)
                    .map_err(|_| CommitmentFileError::InvalidAddress(entry.address.clone()))?;
                let amount = entry
                    .amount
                    .parse::<u64>()
                    .map_err(|_| CommitmentFileError::InvalidAmount(entry.amount.clone()))?;
                Ok(Recipient { address, amount })
            })
            .collect::<Result<Vec<_>, CommitmentFileError>>()?;
        let tree = MerkleDistribution::new(recipients)?;
        if encode_root(&tree.root()) != self.root {
            return Err(CommitmentFileError::RootMismatch);
        }
        Ok(tree)
    }
}

pub fn encode_root(root: &[u8; 32]) -> String {
    format!("0x{}", hex::encode(root))
}

pub fn decode_root(encoded: &str) -> Result<[u8; 32], CommitmentFileError> {
    let stripped = encoded.strip_prefix("0x").unwrap_or(encoded);
    let mut root = [0u8; 32];
    hex::decode_to_slice(stripped, &mut root)
        .map_err(|_| CommitmentFileError::InvalidRoot(encoded.to_string()))?;
    Ok(root)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> MerkleDistribution {
        MerkleDistribution::new(vec![
            Recipient {
                address: Pubkey::new_unique(),
                amount: 100,
            },
            Recipient {
                address: Pubkey::new_unique(),
                amount: u64::MAX,
            },
            Recipient {
                address: Pubkey::new_unique(),
                amount: 300,
            },
        ])
        .unwrap()
    }

    #[test]
    fn json_round_trip_regenerates_identical_proofs() {
        let tree = sample_tree();
        let file = CommitmentFile::new("test-drop", &Pubkey::new_unique(), "solana:devnet", &tree);
        let json = file.to_json().unwrap();
        let loaded = CommitmentFile::from_json(&json).unwrap();
        assert_eq!(loaded, file);

        let rebuilt = loaded.to_distribution().unwrap();
        assert_eq!(rebuilt.root(), tree.root());
        for r in tree.recipients() {
            assert_eq!(
                rebuilt.proof_for(&r.address).unwrap(),
                tree.proof_for(&r.address).unwrap()
            );
        }
    }

    #[test]
    fn amounts_are_decimal_strings() {
        let tree = sample_tree();
        let file = CommitmentFile::new("test-drop", &Pubkey::new_unique(), "solana:devnet", &tree);
        assert_eq!(file.recipients[1].amount, u64::MAX.to_string());
        // u64::MAX is far beyond 2^53, a JSON number would have mangled it
        let json = file.to_json().unwrap();
        assert!(json.contains(&format!("\"{}\"", u64::MAX)));
    }

    #[test]
    fn tampered_root_is_rejected() {
        let tree = sample_tree();
        let mut file =
            CommitmentFile::new("test-drop", &Pubkey::new_unique(), "solana:devnet", &tree);
        let mut root = tree.root();
        root[0] ^= 0xff;
        file.root = encode_root(&root);
        assert!(matches!(
            file.to_distribution(),
            Err(CommitmentFileError::RootMismatch)
        ));
    }

    #[test]
    fn tampered_amount_is_rejected_by_the_root_check() {
        let tree = sample_tree();
        let mut file =
            CommitmentFile::new("test-drop", &Pubkey::new_unique(), "solana:devnet", &tree);
        file.recipients[0].amount = "101".to_string();
        assert!(matches!(
            file.to_distribution(),
            Err(CommitmentFileError::RootMismatch)
        ));
    }

    #[test]
    fn unknown_format_is_rejected() {
        let tree = sample_tree();
        let mut file =
            CommitmentFile::new("test-drop", &Pubkey::new_unique(), "solana:devnet", &tree);
        file.format = "something-else".to_string();
        assert!(matches!(
            file.to_distribution(),
            Err(CommitmentFileError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn root_encoding_round_trips() {
        let root = sample_tree().root();
        assert_eq!(decode_root(&encode_root(&root)).unwrap(), root);
        assert!(decode_root("0x1234").is_err());
    }
}
