//! UserV Chain Parameters
//!
//! Per-network consensus constants for the UserV blockchain: magic bytes,
//! ports, proof-of-work bounds, subsidy schedule, base58 address prefixes,
//! trusted checkpoints, seed nodes, and the genesis block for each network.
//!
//! Exactly one network's parameter set is active per process; all consumers
//! read through [`chain::ParamsRegistry`].

pub mod chain;
pub mod crypto;
pub mod primitives;

/// Protocol constants shared by every network
pub mod constants {
    /// Base units per coin (8 decimal places)
    pub const COIN: u64 = 100_000_000;

    /// Maximum total money supply (21M UserV)
    pub const MAX_MONEY: u64 = 21_000_000 * COIN;

    /// Seconds in one week, used to age imported seed addresses
    pub const ONE_WEEK_SECS: u64 = 7 * 24 * 60 * 60;
}
