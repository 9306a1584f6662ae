//! Checkpoint registry
//!
//! Trusted (height, hash) pairs compiled into the software, plus the summary
//! statistics the sync logic uses to pace progress estimates past the last
//! checkpoint.

use crate::crypto::Hash256;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// Ordered checkpoint set for one network
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckpointData {
    checkpoints: BTreeMap<u32, Hash256>,
    last_checkpoint_time: u64,
    total_transactions: u64,
    transactions_per_day: u64,
}

impl CheckpointData {
    /// Build from an ordered (height, hash) list
    ///
    /// Heights must be strictly increasing; the entries are compiled data,
    /// so a violation is a defect in the constants themselves.
    pub fn new(
        entries: &[(u32, Hash256)],
        last_checkpoint_time: u64,
        total_transactions: u64,
        transactions_per_day: u64,
    ) -> Self {
        let mut checkpoints = BTreeMap::new();
        let mut prev_height = None;
        for (height, hash) in entries {
            if let Some(prev) = prev_height {
                assert!(
                    *height > prev,
                    "checkpoint heights must be strictly increasing ({} after {})",
                    height,
                    prev
                );
            }
            prev_height = Some(*height);
            checkpoints.insert(*height, *hash);
        }

        Self {
            checkpoints,
            last_checkpoint_time,
            total_transactions,
            transactions_per_day,
        }
    }

    /// Trusted hash for a height, if one is compiled in
    pub fn lookup(&self, height: u32) -> Option<Hash256> {
        self.checkpoints.get(&height).copied()
    }

    /// Check a (height, hash) pair against the compiled checkpoints
    ///
    /// A height with no checkpoint contradicts nothing and is accepted.
    pub fn is_known_good(&self, height: u32, hash: &Hash256) -> bool {
        match self.lookup(height) {
            Some(trusted) => trusted == *hash,
            None => true,
        }
    }

    /// Highest checkpointed height
    pub fn total_blocks_estimate(&self) -> u32 {
        self.checkpoints.keys().next_back().copied().unwrap_or(0)
    }

    /// Number of compiled checkpoints
    pub fn len(&self) -> usize {
        self.checkpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checkpoints.is_empty()
    }

    /// Unix timestamp of the last checkpointed block
    pub fn last_checkpoint_time(&self) -> u64 {
        self.last_checkpoint_time
    }

    /// Total transactions between genesis and the last checkpoint
    pub fn total_transactions(&self) -> u64 {
        self.total_transactions
    }

    /// Estimated transactions per day after the last checkpoint
    pub fn transactions_per_day(&self) -> u64 {
        self.transactions_per_day
    }

    /// Estimate the total transaction count at a wall-clock time, by
    /// extrapolating from the last checkpoint at the stored daily rate
    pub fn estimated_transaction_count(&self, now_secs: u64) -> u64 {
        let elapsed = now_secs.saturating_sub(self.last_checkpoint_time);
        let extrapolated =
            (elapsed as u128 * self.transactions_per_day as u128) / SECONDS_PER_DAY as u128;
        self.total_transactions.saturating_add(extrapolated as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::double_sha256;

    fn sample() -> CheckpointData {
        CheckpointData::new(
            &[
                (0, double_sha256(b"genesis")),
                (100, double_sha256(b"hundred")),
                (95_000, double_sha256(b"later")),
            ],
            1_543_282_137,
            201_179,
            2_000,
        )
    }

    #[test]
    fn test_lookup_hit() {
        let data = sample();
        assert_eq!(data.lookup(0), Some(double_sha256(b"genesis")));
        assert_eq!(data.lookup(95_000), Some(double_sha256(b"later")));
    }

    #[test]
    fn test_lookup_miss() {
        let data = sample();
        assert_eq!(data.lookup(1), None);
        assert_eq!(data.lookup(94_999), None);
        assert_eq!(data.lookup(u32::MAX), None);
    }

    #[test]
    fn test_is_known_good() {
        let data = sample();
        assert!(data.is_known_good(100, &double_sha256(b"hundred")));
        assert!(!data.is_known_good(100, &double_sha256(b"forged")));
        // Unknown heights contradict nothing
        assert!(data.is_known_good(101, &double_sha256(b"anything")));
    }

    #[test]
    fn test_total_blocks_estimate() {
        assert_eq!(sample().total_blocks_estimate(), 95_000);
        let empty = CheckpointData::new(&[], 0, 0, 0);
        assert_eq!(empty.total_blocks_estimate(), 0);
    }

    #[test]
    fn test_estimated_transaction_count() {
        let data = sample();
        // At the checkpoint time itself, no extrapolation
        assert_eq!(
            data.estimated_transaction_count(1_543_282_137),
            201_179
        );
        // One day later, one day's worth of transactions
        assert_eq!(
            data.estimated_transaction_count(1_543_282_137 + 24 * 60 * 60),
            201_179 + 2_000
        );
        // Clock before the checkpoint saturates to the stored count
        assert_eq!(data.estimated_transaction_count(0), 201_179);
    }

    #[test]
    #[should_panic(expected = "strictly increasing")]
    fn test_unordered_heights_rejected() {
        CheckpointData::new(
            &[(100, Hash256::zero()), (50, Hash256::zero())],
            0,
            0,
            0,
        );
    }

    #[test]
    #[should_panic(expected = "strictly increasing")]
    fn test_duplicate_heights_rejected() {
        CheckpointData::new(
            &[(100, Hash256::zero()), (100, Hash256::zero())],
            0,
            0,
            0,
        );
    }
}
