//! Chain parameter set
//!
//! One [`ChainParams`] record per logical network, built as a baseline plus
//! an explicit list of field overrides (see `networks`). All fields are
//! immutable after construction; the only mutable surface is the
//! [`UnitTestOverrides`] capability handed out by the registry for the
//! unit-test network.

use crate::chain::networks;
use crate::chain::registry::SelectionError;
use crate::chain::CheckpointData;
use crate::chain::SeedAddress;
use crate::crypto::Hash256;
use crate::primitives::Block;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Logical network identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Network {
    Main,
    Testnet,
    Regtest,
    UnitTest,
}

impl Network {
    /// Canonical network name, as used in datadirs and config files
    pub fn name(&self) -> &'static str {
        match self {
            Network::Main => "main",
            Network::Testnet => "test",
            Network::Regtest => "regtest",
            Network::UnitTest => "unittest",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Network {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "main" => Ok(Network::Main),
            "test" => Ok(Network::Testnet),
            "regtest" => Ok(Network::Regtest),
            "unittest" => Ok(Network::UnitTest),
            other => Err(SelectionError::UnknownNetwork(other.to_string())),
        }
    }
}

/// Base58 version-prefix slots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Base58Type {
    PubkeyAddress = 0,
    ScriptAddress = 1,
    SecretKey = 2,
    ExtPublicKey = 3,
    ExtSecretKey = 4,
    ExtCoinType = 5,
}

pub(crate) const MAX_BASE58_TYPES: usize = 6;

/// A DNS seed entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsSeed {
    pub name: String,
    pub host: String,
}

impl DnsSeed {
    pub fn new(name: &str, host: &str) -> Self {
        Self {
            name: name.to_string(),
            host: host.to_string(),
        }
    }
}

/// The full constant bag for one network
///
/// Constructed once per network by [`ChainParams::for_network`]; read-only
/// thereafter.
#[derive(Debug, Clone)]
pub struct ChainParams {
    pub(crate) network: Network,
    pub(crate) message_start: [u8; 4],
    pub(crate) alert_pubkey: Vec<u8>,
    pub(crate) default_port: u16,
    pub(crate) pow_limit: [u8; 32],
    pub(crate) subsidy_halving_interval: u32,
    pub(crate) max_reorg_depth: u32,
    pub(crate) enforce_block_upgrade_majority: u32,
    pub(crate) reject_block_outdated_majority: u32,
    pub(crate) to_check_block_upgrade_majority: u32,
    pub(crate) miner_threads: u32,
    pub(crate) target_timespan: u64,
    pub(crate) target_spacing: u64,
    pub(crate) last_pow_block: u32,
    pub(crate) maturity: u32,
    pub(crate) masternode_count_drift: u32,
    pub(crate) modifier_update_block: u32,
    pub(crate) max_money_out: u64,
    pub(crate) genesis: Block,
    pub(crate) genesis_hash: Hash256,
    pub(crate) dns_seeds: Vec<DnsSeed>,
    pub(crate) fixed_seeds: Vec<SeedAddress>,
    pub(crate) base58_prefixes: [Vec<u8>; MAX_BASE58_TYPES],
    pub(crate) checkpoints: CheckpointData,
    pub(crate) mining_requires_peers: bool,
    pub(crate) allow_min_difficulty_blocks: bool,
    pub(crate) default_consistency_checks: bool,
    pub(crate) require_standard: bool,
    pub(crate) mine_blocks_on_demand: bool,
    pub(crate) skip_proof_of_work_check: bool,
    pub(crate) testnet_to_be_deprecated_field_rpc: bool,
    pub(crate) headers_first_syncing_active: bool,
    pub(crate) pool_max_transactions: u32,
    pub(crate) spork_key: String,
    pub(crate) masternode_pool_dummy_address: String,
    pub(crate) start_masternode_payments: u64,
    pub(crate) budget_fee_confirmations: u32,
}

impl ChainParams {
    /// Build the parameter set for a network, verifying its genesis block
    ///
    /// Panics if the constructed genesis does not hash to the compiled
    /// constants; a process must not run with a mis-derived genesis.
    pub fn for_network(network: Network) -> ChainParams {
        match network {
            Network::Main => networks::main_params(),
            Network::Testnet => networks::testnet_params(),
            Network::Regtest => networks::regtest_params(),
            Network::UnitTest => networks::unit_test_params(),
        }
    }

    pub fn network(&self) -> Network {
        self.network
    }

    pub fn network_name(&self) -> &'static str {
        self.network.name()
    }

    /// 4-byte message-start magic identifying this network on the wire
    pub fn message_start(&self) -> [u8; 4] {
        self.message_start
    }

    pub fn alert_pubkey(&self) -> &[u8] {
        &self.alert_pubkey
    }

    pub fn default_port(&self) -> u16 {
        self.default_port
    }

    /// Easiest allowed proof-of-work target, as a big-endian 256-bit value
    pub fn pow_limit(&self) -> &[u8; 32] {
        &self.pow_limit
    }

    pub fn subsidy_halving_interval(&self) -> u32 {
        self.subsidy_halving_interval
    }

    pub fn max_reorg_depth(&self) -> u32 {
        self.max_reorg_depth
    }

    pub fn enforce_block_upgrade_majority(&self) -> u32 {
        self.enforce_block_upgrade_majority
    }

    pub fn reject_block_outdated_majority(&self) -> u32 {
        self.reject_block_outdated_majority
    }

    pub fn to_check_block_upgrade_majority(&self) -> u32 {
        self.to_check_block_upgrade_majority
    }

    pub fn miner_threads(&self) -> u32 {
        self.miner_threads
    }

    /// Difficulty retarget window in seconds
    pub fn target_timespan(&self) -> u64 {
        self.target_timespan
    }

    /// Target seconds between blocks
    pub fn target_spacing(&self) -> u64 {
        self.target_spacing
    }

    /// Last block height eligible for proof-of-work-only mining
    pub fn last_pow_block(&self) -> u32 {
        self.last_pow_block
    }

    /// Confirmations before a mined reward may be spent
    pub fn maturity(&self) -> u32 {
        self.maturity
    }

    pub fn masternode_count_drift(&self) -> u32 {
        self.masternode_count_drift
    }

    pub fn modifier_update_block(&self) -> u32 {
        self.modifier_update_block
    }

    pub fn max_money_out(&self) -> u64 {
        self.max_money_out
    }

    pub fn genesis_block(&self) -> &Block {
        &self.genesis
    }

    pub fn genesis_hash(&self) -> Hash256 {
        self.genesis_hash
    }

    pub fn genesis_merkle_root(&self) -> Hash256 {
        self.genesis.header.merkle_root
    }

    pub fn dns_seeds(&self) -> &[DnsSeed] {
        &self.dns_seeds
    }

    pub fn fixed_seeds(&self) -> &[SeedAddress] {
        &self.fixed_seeds
    }

    /// Version-prefix bytes for one base58 slot
    pub fn base58_prefix(&self, which: Base58Type) -> &[u8] {
        &self.base58_prefixes[which as usize]
    }

    pub fn checkpoints(&self) -> &CheckpointData {
        &self.checkpoints
    }

    pub fn mining_requires_peers(&self) -> bool {
        self.mining_requires_peers
    }

    pub fn allow_min_difficulty_blocks(&self) -> bool {
        self.allow_min_difficulty_blocks
    }

    pub fn default_consistency_checks(&self) -> bool {
        self.default_consistency_checks
    }

    pub fn require_standard(&self) -> bool {
        self.require_standard
    }

    pub fn mine_blocks_on_demand(&self) -> bool {
        self.mine_blocks_on_demand
    }

    pub fn skip_proof_of_work_check(&self) -> bool {
        self.skip_proof_of_work_check
    }

    pub fn testnet_to_be_deprecated_field_rpc(&self) -> bool {
        self.testnet_to_be_deprecated_field_rpc
    }

    pub fn headers_first_syncing_active(&self) -> bool {
        self.headers_first_syncing_active
    }

    pub fn pool_max_transactions(&self) -> u32 {
        self.pool_max_transactions
    }

    pub fn spork_key(&self) -> &str {
        &self.spork_key
    }

    pub fn masternode_pool_dummy_address(&self) -> &str {
        &self.masternode_pool_dummy_address
    }

    pub fn start_masternode_payments(&self) -> u64 {
        self.start_masternode_payments
    }

    pub fn budget_fee_confirmations(&self) -> u32 {
        self.budget_fee_confirmations
    }
}

/// Exclusive write access to the whitelisted unit-test fields
///
/// Obtainable only through `ParamsRegistry::test_overrides`, and only while
/// the unit-test network is active. Holding `&mut` on the registry keeps the
/// mutation single-threaded at compile time.
#[derive(Debug)]
pub struct UnitTestOverrides<'a> {
    params: &'a mut ChainParams,
}

impl<'a> UnitTestOverrides<'a> {
    pub(crate) fn new(params: &'a mut ChainParams) -> Self {
        Self { params }
    }

    pub fn set_subsidy_halving_interval(&mut self, interval: u32) {
        self.params.subsidy_halving_interval = interval;
    }

    pub fn set_enforce_block_upgrade_majority(&mut self, majority: u32) {
        self.params.enforce_block_upgrade_majority = majority;
    }

    pub fn set_reject_block_outdated_majority(&mut self, majority: u32) {
        self.params.reject_block_outdated_majority = majority;
    }

    pub fn set_to_check_block_upgrade_majority(&mut self, window: u32) {
        self.params.to_check_block_upgrade_majority = window;
    }

    pub fn set_default_consistency_checks(&mut self, enabled: bool) {
        self.params.default_consistency_checks = enabled;
    }

    pub fn set_allow_min_difficulty_blocks(&mut self, allowed: bool) {
        self.params.allow_min_difficulty_blocks = allowed;
    }

    pub fn set_skip_proof_of_work_check(&mut self, skip: bool) {
        self.params.skip_proof_of_work_check = skip;
    }
}
