use anchor_lang::prelude::Pubkey;
use anchor_lang::solana_program::keccak::hashv;

/// Domain-separation prefix for leaf hashes.
pub const LEAF_PREFIX: &[u8] = &[0x00];
/// Domain-separation prefix for internal node hashes.
pub const NODE_PREFIX: &[u8] = &[0x01];

/// Hashes one (recipient, amount) entitlement into a leaf.
///
/// The prefix byte keeps leaves and internal nodes in disjoint hash domains,
/// so a proof can never present an internal node as a leaf or vice versa.
pub fn hash_leaf(address: &Pubkey, amount: u64) -> [u8; 32] {
    hashv(&[LEAF_PREFIX, address.as_ref(), &amount.to_le_bytes()]).0
}

/// Hashes a sibling pair into its parent node.
///
/// Siblings are ordered lexicographically before hashing, so verification
/// does not need to know which side of the pair the claimed leaf was on.
pub fn hash_node(a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
    if a <= b {
        hashv(&[NODE_PREFIX, a, b]).0
    } else {
        hashv(&[NODE_PREFIX, b, a]).0
    }
}

/// Recomputes the path from `(address, amount)` up through `proof` and
/// compares the result against `root`.
///
/// Returns `false` on any mismatch, including a proof of the wrong length;
/// never panics.
pub fn verify_proof(root: &[u8; 32], address: &Pubkey, amount: u64, proof: &[[u8; 32]]) -> bool {
    let mut computed = hash_leaf(address, amount);
    for sibling in proof {
        computed = hash_node(&computed, sibling);
    }
    &computed == root
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_hash_is_symmetric_in_sibling_order() {
        let a = [3u8; 32];
        let b = [7u8; 32];
        assert_eq!(hash_node(&a, &b), hash_node(&b, &a));
    }

    #[test]
    fn leaf_and_node_domains_are_disjoint() {
        // A 32-byte address plus an 8-byte amount is not a 64-byte node
        // payload, but equal input bytes under different prefixes must still
        // produce different hashes.
        let payload = [5u8; 32];
        let as_node = hash_node(&payload, &payload);
        let as_leaf = hash_leaf(&Pubkey::new_from_array(payload), 0);
        assert_ne!(as_node, as_leaf);
    }

    #[test]
    fn leaf_hash_depends_on_amount() {
        let address = Pubkey::new_unique();
        assert_ne!(hash_leaf(&address, 100), hash_leaf(&address, 200));
    }

    #[test]
    fn empty_proof_only_matches_the_leaf_itself() {
        let address = Pubkey::new_unique();
        let leaf = hash_leaf(&address, 42);
        assert!(verify_proof(&leaf, &address, 42, &[]));
        assert!(!verify_proof(&leaf, &address, 43, &[]));
    }
}
