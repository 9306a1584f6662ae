//! Merkle tree implementation
//!
//! Computes transaction merkle roots the way the ledger serializes them:
//! pairwise double-SHA256, duplicating the last element on odd levels.

use super::{hash_pair, Hash256};

/// Compute the merkle root of a list of transaction hashes
///
/// An empty list yields the zero hash. A single element is its own root.
pub fn compute_merkle_root(hashes: &[Hash256]) -> Hash256 {
    if hashes.is_empty() {
        return Hash256::zero();
    }

    let mut current_level: Vec<Hash256> = hashes.to_vec();

    while current_level.len() > 1 {
        if current_level.len() % 2 == 1 {
            let last = current_level[current_level.len() - 1];
            current_level.push(last);
        }

        let mut next_level = Vec::with_capacity(current_level.len() / 2);
        for chunk in current_level.chunks(2) {
            next_level.push(hash_pair(&chunk[0], &chunk[1]));
        }

        current_level = next_level;
    }

    current_level[0]
}
