use anchor_lang::prelude::Pubkey;
use thiserror::Error;

use crate::hash::{hash_leaf, hash_node};

/// One committed entitlement. Immutable once the tree is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Recipient {
    pub address: Pubkey,
    pub amount: u64,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MerkleError {
    #[error("recipient set is empty")]
    EmptyRecipientSet,
    #[error("duplicate recipient address {0}")]
    DuplicateRecipient(Pubkey),
    #[error("recipient {0} is not part of the commitment")]
    RecipientNotFound(Pubkey),
}

/// Canonical binary hash tree over a fixed recipient set.
///
/// Leaves are hashed in input order; each level pairs adjacent nodes with
/// lexicographically-sorted sibling hashing, and an odd trailing node is
/// promoted unchanged to the next level. The same recipient list therefore
/// always produces the same root and the same proofs.
#[derive(Clone, Debug)]
pub struct MerkleDistribution {
    recipients: Vec<Recipient>,
    // levels[0] holds the leaf hashes, levels.last() the root
    levels: Vec<Vec<[u8; 32]>>,
}

impl MerkleDistribution {
    pub fn new(recipients: Vec<Recipient>) -> Result<Self, MerkleError> {
        if recipients.is_empty() {
            return Err(MerkleError::EmptyRecipientSet);
        }
        let mut seen = recipients.iter().map(|r| r.address).collect::<Vec<_>>();
        seen.sort_unstable();
        for pair in seen.windows(2) {
            if pair[0] == pair[1] {
                return Err(MerkleError::DuplicateRecipient(pair[0]));
            }
        }

        let leaves = recipients
            .iter()
            .map(|r| hash_leaf(&r.address, r.amount))
            .collect::<Vec<_>>();
        let mut levels = vec![leaves];
        while levels[levels.len() - 1].len() > 1 {
            let next = {
                let current = &levels[levels.len() - 1];
                let mut next = Vec::with_capacity(current.len().div_ceil(2));
                for pair in current.chunks(2) {
                    if let [left, right] = pair {
                        next.push(hash_node(left, right));
                    } else {
                        // odd trailing node, promoted unpaired
                        next.push(pair[0]);
                    }
                }
                next
            };
            levels.push(next);
        }

        Ok(Self { recipients, levels })
    }

    pub fn root(&self) -> [u8; 32] {
        // new() rejects empty input, so the top level always has one node
        self.levels[self.levels.len() - 1][0]
    }

    /// Total entitlement committed across all recipients.
    pub fn total_amount(&self) -> Option<u64> {
        self.recipients
            .iter()
            .try_fold(0u64, |acc, r| acc.checked_add(r.amount))
    }

    pub fn recipients(&self) -> &[Recipient] {
        &self.recipients
    }

    /// Ordered sibling hashes proving `address`'s membership.
    ///
    /// Deterministic: the same tree and target always yield the same proof.
    pub fn proof_for(&self, address: &Pubkey) -> Result<Vec<[u8; 32]>, MerkleError> {
        let mut index = self
            .recipients
            .iter()
            .position(|r| r.address == *address)
            .ok_or(MerkleError::RecipientNotFound(*address))?;

        let mut proof = Vec::new();
        for level in &self.levels[..self.levels.len() - 1] {
            let sibling = index ^ 1;
            if sibling < level.len() {
                proof.push(level[sibling]);
            }
            index /= 2;
        }
        Ok(proof)
    }
}
