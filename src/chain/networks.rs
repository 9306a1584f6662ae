//! Per-network parameter definitions
//!
//! Each network is built as data: start from the parent network's record,
//! then apply that network's overrides. Overrides run strictly after the
//! parent copy, so a later override always wins over an inherited value.

use crate::chain::checkpoints::CheckpointData;
use crate::chain::genesis::{build_genesis_block, verify_genesis};
use crate::chain::params::{ChainParams, DnsSeed, Network};
use crate::chain::seeds::{self, import_fixed_seeds};
use crate::constants::MAX_MONEY;
use crate::crypto::Hash256;
use crate::primitives::Block;

/// Compact difficulty of every network's genesis block
const GENESIS_BITS: u32 = 0x1e0f_fff0;

/// Genesis merkle root, identical for all networks (the coinbase is shared)
const GENESIS_MERKLE_ROOT: &str =
    "1f1f47c6e4b9f9fdcd8b64748b1a66e0cb1a47f62e793349297e41ea2c37929c";

const MAIN_GENESIS_HASH: &str =
    "7235bef82682838ee527c6d3af7648ee2f7289501b4ca10ff79c097ba1490455";
const TESTNET_GENESIS_HASH: &str =
    "88c6d4f0e4a41299bd7c55cd01a1e76f671d4df8e56fd33bd2cf19b3d0687a0f";
const REGTEST_GENESIS_HASH: &str =
    "d6195dfcd01b1d4725408617ba4fb616cea5e8b75f67ef36ddd283a89cf44700";

const MAIN_CHECKPOINT_95000: &str =
    "e9bd5ed5ac7a7c198d240b78eb61cc739e0f4f44f8ce8f34a284bb069c155039";

const MAIN_ALERT_KEY: &str = "042055fda8ad0a75df726caed99fb3ab6cb798f0124ceb18feb372b8427a97042f7a9fae98721c5082631695bed657d34dd8716856d66045fed236500ee9fc284b";
const TESTNET_ALERT_KEY: &str = "047bffb810c9748bbe0a6e71a2123aef2df994e0a7cdca023748b71274e59013eba139ba8c94b04aeedb81fd07a66abf98a1cf017d231848d2e19d02184bbdd145";

const MAIN_SPORK_KEY: &str = "046a5e5b5065088ddc18dff9bb8bdfc1888c39b766198af468b9fadd104cc021744bba2863195575fa03c3499f90eea20f83d50a35be7afb6f0c6ba1138de4b640";
const TESTNET_SPORK_KEY: &str = "045e78985673c92bab40b2197a5a8d8cc32c0f3ebbd28d50696235b66d1b30a7949e0603058b465d66e07c6450ddad596fdaf2e3bfc46806c0fa66d94bc9150c1c";

const MASTERNODE_POOL_DUMMY_ADDRESS: &str = "VWRSmn8QshzHJcKEbnoDf65DwgD3xStMtJ";

/// Seconds after the genesis timestamp at which masternode payments start
const MASTERNODE_PAYMENT_DELAY: u64 = 14_400;

fn hash_const(hex_str: &str) -> Hash256 {
    Hash256::from_hex(hex_str).expect("compiled hash constant is valid hex")
}

fn key_const(hex_str: &str) -> Vec<u8> {
    hex::decode(hex_str).expect("compiled key constant is valid hex")
}

/// Easiest allowed target: all-ones shifted right by `shift` bits
fn pow_limit_shr(shift: u32) -> [u8; 32] {
    let mut limit = [0xffu8; 32];
    let whole_bytes = (shift / 8) as usize;
    for byte in limit.iter_mut().take(whole_bytes) {
        *byte = 0;
    }
    if whole_bytes < 32 {
        limit[whole_bytes] >>= shift % 8;
    }
    limit
}

/// Build a network's genesis block and check it against the compiled
/// constants. A mismatch means a constant drifted without re-derivation;
/// the process must not come up on a mis-derived genesis.
fn checked_genesis(network: Network, time: u32, nonce: u32, expected_hash: &str) -> (Block, Hash256) {
    let expected_hash = hash_const(expected_hash);
    let expected_merkle = hash_const(GENESIS_MERKLE_ROOT);
    let block = build_genesis_block(time, GENESIS_BITS, nonce);
    if let Err(err) = verify_genesis(&block, &expected_hash, &expected_merkle) {
        panic!("{} genesis integrity fault: {}", network, err);
    }
    (block, expected_hash)
}

/// Main network: the full baseline every other network derives from
pub(crate) fn main_params() -> ChainParams {
    let (genesis, genesis_hash) = checked_genesis(Network::Main, 1_537_509_600, 2_569_199, MAIN_GENESIS_HASH);

    let checkpoints = CheckpointData::new(
        &[
            (0, genesis_hash),
            (95_000, hash_const(MAIN_CHECKPOINT_95000)),
        ],
        1_543_282_137, // timestamp of the last checkpoint block
        201_179,       // transactions between genesis and last checkpoint
        2_000,         // estimated transactions per day after checkpoint
    );

    let genesis_time = u64::from(genesis.header.time);

    ChainParams {
        network: Network::Main,
        // Rarely-used upper ASCII, not valid UTF-8, unlikely in normal data
        message_start: [0x3b, 0xa4, 0xc4, 0x3b],
        alert_pubkey: key_const(MAIN_ALERT_KEY),
        default_port: 46_220,
        pow_limit: pow_limit_shr(16),
        subsidy_halving_interval: 1_050_000,
        max_reorg_depth: 100,
        enforce_block_upgrade_majority: 750,
        reject_block_outdated_majority: 950,
        to_check_block_upgrade_majority: 1_000,
        miner_threads: 1,
        target_timespan: 60,
        target_spacing: 60,
        last_pow_block: 200,
        maturity: 100,
        masternode_count_drift: 20,
        modifier_update_block: 1,
        max_money_out: MAX_MONEY,
        genesis,
        genesis_hash,
        dns_seeds: vec![
            DnsSeed::new("seed1.uservcoin.com", "seed1.uservcoin.com"),
            DnsSeed::new("seed2.uservcoin.com", "seed2.uservcoin.com"),
            DnsSeed::new("seed3.uservcoin.com", "seed3.uservcoin.com"),
        ],
        fixed_seeds: import_fixed_seeds(
            seeds::MAINNET_SEEDS,
            seeds::unix_time_now(),
            &mut rand::thread_rng(),
        ),
        base58_prefixes: [
            vec![70],  // pubkey addresses start with 'V'
            vec![130], // script addresses start with 'u'
            vec![69],  // private keys
            vec![0x04, 0x88, 0xb2, 0x1e], // BIP32 xpub
            vec![0x04, 0x88, 0xad, 0xe4], // BIP32 xprv
            vec![0x80, 0x00, 0x00, 0x77], // BIP44 coin type
        ],
        checkpoints,
        mining_requires_peers: true,
        allow_min_difficulty_blocks: false,
        default_consistency_checks: false,
        require_standard: true,
        mine_blocks_on_demand: false,
        skip_proof_of_work_check: false,
        testnet_to_be_deprecated_field_rpc: false,
        headers_first_syncing_active: false,
        pool_max_transactions: 3,
        spork_key: MAIN_SPORK_KEY.to_string(),
        masternode_pool_dummy_address: MASTERNODE_POOL_DUMMY_ADDRESS.to_string(),
        start_masternode_payments: genesis_time + MASTERNODE_PAYMENT_DELAY,
        budget_fee_confirmations: 6,
    }
}

/// Test network: the main baseline with a later genesis and looser policy
pub(crate) fn testnet_params() -> ChainParams {
    let mut params = main_params();
    params.network = Network::Testnet;
    params.message_start = [0xcd, 0x3e, 0xb2, 0x4d];
    params.alert_pubkey = key_const(TESTNET_ALERT_KEY);
    params.default_port = 47_220;
    params.enforce_block_upgrade_majority = 51;
    params.reject_block_outdated_majority = 75;
    params.to_check_block_upgrade_majority = 100;
    params.miner_threads = 0;
    params.target_timespan = 60;
    params.target_spacing = 60;
    params.last_pow_block = 200;
    params.maturity = 30;
    params.masternode_count_drift = 4;
    params.modifier_update_block = 1;
    params.max_money_out = MAX_MONEY;

    // Later genesis timestamp so the testnet chain can restart independently
    let (genesis, genesis_hash) =
        checked_genesis(Network::Testnet, 1_537_509_601, 172_587, TESTNET_GENESIS_HASH);
    let genesis_time = u64::from(genesis.header.time);
    params.genesis = genesis;
    params.genesis_hash = genesis_hash;
    params.checkpoints = CheckpointData::new(&[(0, genesis_hash)], 1_537_509_601, 0, 250);

    params.dns_seeds.clear();
    params.fixed_seeds = import_fixed_seeds(
        seeds::TESTNET_SEEDS,
        seeds::unix_time_now(),
        &mut rand::thread_rng(),
    );

    params.base58_prefixes = [
        vec![130], // testnet pubkey addresses start with 'u'
        vec![132], // testnet script addresses start with 'v'
        vec![131], // testnet private keys
        vec![0x04, 0x35, 0x87, 0xcf], // BIP32 tpub
        vec![0x04, 0x35, 0x83, 0x94], // BIP32 tprv
        vec![0x80, 0x00, 0x00, 0x01], // BIP44 testnet coin type
    ];

    params.mining_requires_peers = true;
    params.allow_min_difficulty_blocks = false;
    params.default_consistency_checks = false;
    params.require_standard = false;
    params.mine_blocks_on_demand = false;
    params.testnet_to_be_deprecated_field_rpc = true;

    params.pool_max_transactions = 2;
    params.spork_key = TESTNET_SPORK_KEY.to_string();
    params.start_masternode_payments = genesis_time + MASTERNODE_PAYMENT_DELAY;
    // Short finalization window on testnet
    params.budget_fee_confirmations = 3;

    params
}

/// Regression-test network: isolated, trivially minable, no bootstrap
pub(crate) fn regtest_params() -> ChainParams {
    let mut params = testnet_params();
    params.network = Network::Regtest;
    params.message_start = [0xd3, 0x3f, 0xc2, 0xdc];
    params.subsidy_halving_interval = 1_500;
    params.enforce_block_upgrade_majority = 750;
    params.reject_block_outdated_majority = 950;
    params.to_check_block_upgrade_majority = 1_000;
    params.miner_threads = 1;
    params.target_timespan = 24 * 60 * 60;
    params.target_spacing = 60;
    params.pow_limit = pow_limit_shr(1);
    params.default_port = 48_120;

    let (genesis, genesis_hash) =
        checked_genesis(Network::Regtest, 1_537_509_602, 106_637, REGTEST_GENESIS_HASH);
    params.genesis = genesis;
    params.genesis_hash = genesis_hash;
    params.checkpoints = CheckpointData::new(&[(0, genesis_hash)], 1_537_509_602, 0, 100);

    params.dns_seeds.clear();
    params.fixed_seeds.clear();

    params.mining_requires_peers = false;
    params.allow_min_difficulty_blocks = true;
    params.default_consistency_checks = true;
    params.require_standard = false;
    params.mine_blocks_on_demand = true;
    params.testnet_to_be_deprecated_field_rpc = false;

    params
}

/// Unit-test network: the main baseline with mining on demand and no peers
pub(crate) fn unit_test_params() -> ChainParams {
    let mut params = main_params();
    params.network = Network::UnitTest;
    params.default_port = 49_120;

    params.dns_seeds.clear();
    params.fixed_seeds.clear();

    params.mining_requires_peers = false;
    params.default_consistency_checks = true;
    params.allow_min_difficulty_blocks = false;
    params.mine_blocks_on_demand = true;

    params
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::params::Base58Type;

    #[test]
    fn test_main_wire_identity() {
        let params = main_params();
        assert_eq!(params.message_start(), [0x3b, 0xa4, 0xc4, 0x3b]);
        assert_eq!(params.default_port(), 46_220);
        assert_eq!(params.base58_prefix(Base58Type::PubkeyAddress), &[70]);
        assert_eq!(params.base58_prefix(Base58Type::ScriptAddress), &[130]);
        assert_eq!(params.base58_prefix(Base58Type::SecretKey), &[69]);
        assert_eq!(
            params.base58_prefix(Base58Type::ExtCoinType),
            &[0x80, 0x00, 0x00, 0x77]
        );
    }

    #[test]
    fn test_genesis_hashes_are_distinct_per_network() {
        let main = main_params();
        let testnet = testnet_params();
        let regtest = regtest_params();
        assert_ne!(main.genesis_hash(), testnet.genesis_hash());
        assert_ne!(testnet.genesis_hash(), regtest.genesis_hash());
        // The coinbase is shared, so the merkle root is not
        assert_eq!(main.genesis_merkle_root(), testnet.genesis_merkle_root());
        assert_eq!(main.genesis_merkle_root(), regtest.genesis_merkle_root());
    }

    #[test]
    fn test_genesis_hash_constants() {
        assert_eq!(main_params().genesis_hash(), hash_const(MAIN_GENESIS_HASH));
        assert_eq!(
            testnet_params().genesis_hash(),
            hash_const(TESTNET_GENESIS_HASH)
        );
        assert_eq!(
            regtest_params().genesis_hash(),
            hash_const(REGTEST_GENESIS_HASH)
        );
    }

    #[test]
    fn test_checkpoint_zero_is_genesis() {
        for params in [main_params(), testnet_params(), regtest_params(), unit_test_params()] {
            assert_eq!(
                params.checkpoints().lookup(0),
                Some(params.genesis_hash()),
                "height-0 checkpoint must anchor the genesis of {}",
                params.network()
            );
        }
    }

    #[test]
    fn test_testnet_overrides_only_documented_fields() {
        let main = main_params();
        let testnet = testnet_params();

        // Overridden
        assert_ne!(main.message_start(), testnet.message_start());
        assert_ne!(main.alert_pubkey(), testnet.alert_pubkey());
        assert_ne!(main.default_port(), testnet.default_port());
        assert_ne!(
            main.enforce_block_upgrade_majority(),
            testnet.enforce_block_upgrade_majority()
        );
        assert_ne!(main.maturity(), testnet.maturity());
        assert_ne!(main.genesis_hash(), testnet.genesis_hash());
        assert_ne!(
            main.base58_prefix(Base58Type::PubkeyAddress),
            testnet.base58_prefix(Base58Type::PubkeyAddress)
        );
        assert!(main.require_standard());
        assert!(!testnet.require_standard());
        assert!(testnet.dns_seeds().is_empty());

        // Inherited from the main baseline
        assert_eq!(
            main.subsidy_halving_interval(),
            testnet.subsidy_halving_interval()
        );
        assert_eq!(main.max_reorg_depth(), testnet.max_reorg_depth());
        assert_eq!(main.pow_limit(), testnet.pow_limit());
        assert_eq!(main.last_pow_block(), testnet.last_pow_block());
        assert_eq!(main.max_money_out(), testnet.max_money_out());
        assert_eq!(main.target_spacing(), testnet.target_spacing());
        assert_eq!(
            main.mining_requires_peers(),
            testnet.mining_requires_peers()
        );
        assert_eq!(
            main.masternode_pool_dummy_address(),
            testnet.masternode_pool_dummy_address()
        );

        // Overridden feature constants
        assert_ne!(main.spork_key(), testnet.spork_key());
        assert_ne!(main.pool_max_transactions(), testnet.pool_max_transactions());
        assert_ne!(
            main.budget_fee_confirmations(),
            testnet.budget_fee_confirmations()
        );
        assert_ne!(main.miner_threads(), testnet.miner_threads());
        assert!(!main.testnet_to_be_deprecated_field_rpc());
        assert!(testnet.testnet_to_be_deprecated_field_rpc());
    }

    #[test]
    fn test_feature_constants_per_network() {
        let main = main_params();
        assert_eq!(main.network_name(), "main");
        assert_eq!(main.pool_max_transactions(), 3);
        assert_eq!(main.spork_key(), MAIN_SPORK_KEY);
        assert_eq!(main.budget_fee_confirmations(), 6);
        assert_eq!(main.miner_threads(), 1);
        assert_eq!(main.modifier_update_block(), 1);
        assert!(!main.headers_first_syncing_active());

        let testnet = testnet_params();
        assert_eq!(testnet.network_name(), "test");
        assert_eq!(testnet.pool_max_transactions(), 2);
        assert_eq!(testnet.spork_key(), TESTNET_SPORK_KEY);
        assert_eq!(testnet.budget_fee_confirmations(), 3);
        assert_eq!(testnet.miner_threads(), 0);
        assert_eq!(testnet.modifier_update_block(), 1);
        assert!(!testnet.headers_first_syncing_active());

        let regtest = regtest_params();
        assert_eq!(regtest.network_name(), "regtest");
        // Miner threads are overridden back up; the spork key and pool cap
        // ride along from the testnet copy
        assert_eq!(regtest.miner_threads(), 1);
        assert_eq!(regtest.spork_key(), TESTNET_SPORK_KEY);
        assert_eq!(regtest.pool_max_transactions(), 2);

        let unit = unit_test_params();
        assert_eq!(unit.network_name(), "unittest");
        assert_eq!(unit.spork_key(), MAIN_SPORK_KEY);
        assert_eq!(unit.pool_max_transactions(), 3);
        assert_eq!(unit.budget_fee_confirmations(), 6);
        assert_eq!(unit.miner_threads(), 1);
    }

    #[test]
    fn test_regtest_inherits_testnet_masternode_schedule() {
        // Regtest overrides its genesis time but not the payment fields, so
        // both stay exactly as the testnet copy computed them; recomputing
        // from regtest's own genesis time would change observable values
        let testnet = testnet_params();
        let regtest = regtest_params();
        assert_eq!(
            regtest.start_masternode_payments(),
            testnet.start_masternode_payments()
        );
        assert_eq!(regtest.start_masternode_payments(), 1_537_509_601 + 14_400);
        assert_ne!(
            regtest.start_masternode_payments(),
            u64::from(regtest.genesis_block().header.time) + 14_400
        );
        assert_eq!(
            regtest.budget_fee_confirmations(),
            testnet.budget_fee_confirmations()
        );
        assert_eq!(regtest.budget_fee_confirmations(), 3);
    }

    #[test]
    fn test_regtest_loosens_pow_floor() {
        let main = main_params();
        let regtest = regtest_params();
        // Big-endian targets: regtest's floor must be numerically larger
        assert!(regtest.pow_limit() > main.pow_limit());
        assert_eq!(regtest.pow_limit()[0], 0x7f);
        assert_eq!(main.pow_limit()[0], 0x00);
        assert_eq!(main.pow_limit()[1], 0x00);
        assert_eq!(main.pow_limit()[2], 0xff);
    }

    #[test]
    fn test_regtest_is_isolated() {
        let params = regtest_params();
        assert!(params.dns_seeds().is_empty());
        assert!(params.fixed_seeds().is_empty());
        assert!(!params.mining_requires_peers());
        assert!(params.mine_blocks_on_demand());
        assert!(params.allow_min_difficulty_blocks());
        assert!(params.default_consistency_checks());
        assert_eq!(params.default_port(), 48_120);
        assert_eq!(params.subsidy_halving_interval(), 1_500);
        assert_eq!(params.target_timespan(), 24 * 60 * 60);
    }

    #[test]
    fn test_regtest_majorities_override_testnet() {
        // The regtest overrides run after the testnet copy, restoring the
        // main-level thresholds testnet had loosened
        let params = regtest_params();
        assert_eq!(params.enforce_block_upgrade_majority(), 750);
        assert_eq!(params.reject_block_outdated_majority(), 950);
        assert_eq!(params.to_check_block_upgrade_majority(), 1_000);
    }

    #[test]
    fn test_unit_test_shares_main_genesis() {
        let main = main_params();
        let unit = unit_test_params();
        assert_eq!(unit.genesis_hash(), main.genesis_hash());
        assert_eq!(unit.checkpoints(), main.checkpoints());
        assert_eq!(unit.default_port(), 49_120);
        assert!(unit.fixed_seeds().is_empty());
        assert!(unit.dns_seeds().is_empty());
        assert!(unit.mine_blocks_on_demand());
        assert!(!unit.mining_requires_peers());
        assert!(unit.default_consistency_checks());
    }

    #[test]
    fn test_ports_are_distinct() {
        let ports = [
            main_params().default_port(),
            testnet_params().default_port(),
            regtest_params().default_port(),
            unit_test_params().default_port(),
        ];
        for (i, a) in ports.iter().enumerate() {
            for b in ports.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_pow_limit_shr() {
        let limit = pow_limit_shr(16);
        assert_eq!(&limit[0..3], &[0x00, 0x00, 0xff]);
        assert!(limit[3..].iter().all(|&b| b == 0xff));

        let limit = pow_limit_shr(1);
        assert_eq!(limit[0], 0x7f);
        assert!(limit[1..].iter().all(|&b| b == 0xff));

        let limit = pow_limit_shr(12);
        assert_eq!(&limit[0..2], &[0x00, 0x0f]);
    }

    #[test]
    fn test_masternode_payments_follow_genesis_time() {
        let main = main_params();
        assert_eq!(main.start_masternode_payments(), 1_537_509_600 + 14_400);
        let testnet = testnet_params();
        assert_eq!(testnet.start_masternode_payments(), 1_537_509_601 + 14_400);
    }
}
