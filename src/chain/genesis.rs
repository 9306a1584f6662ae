//! Genesis block construction and verification
//!
//! Every network's first block is rebuilt from the same fixed coinbase and
//! checked against its compiled hash constants. A mismatch means a constant
//! was edited without re-derivation; parameter construction must not
//! complete in that state.

use crate::crypto::{compute_merkle_root, Hash256};
use crate::primitives::{Block, BlockHeader, Script, Transaction, TxOutput, OP_CHECKSIG};
use thiserror::Error;

/// Message embedded in the genesis coinbase input
pub const GENESIS_COINBASE_MESSAGE: &str =
    "Matter falling into a black hole at 30 percent of the speed of light";

/// Key paid by the (unspendable) genesis output
const GENESIS_OUTPUT_KEY: &str = "0455597268d824684fa29cbd1a17db1ba001a70918a208e6d5a6703fc2d7dc91f6f05b9f22a79f9cbba9d64c3597feb2d488e88cd9595f2196956233b7b63d6996";

/// Difficulty marker pushed ahead of the message in the coinbase script
const GENESIS_SCRIPT_PREFIX: i64 = 486_604_799;

const GENESIS_VERSION: i32 = 1;

/// Genesis integrity faults
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenesisError {
    #[error("genesis hash mismatch: expected {expected}, computed {computed}")]
    HashMismatch { expected: Hash256, computed: Hash256 },
    #[error("genesis merkle root mismatch: expected {expected}, computed {computed}")]
    MerkleRootMismatch { expected: Hash256, computed: Hash256 },
}

/// Deterministically construct a network's genesis block
///
/// Only time, bits, and nonce vary between networks; the coinbase itself is
/// shared, so every network has the same merkle root.
pub fn build_genesis_block(time: u32, bits: u32, nonce: u32) -> Block {
    let mut script_sig = Script::new();
    script_sig
        .push_int(GENESIS_SCRIPT_PREFIX)
        .push_scriptnum(4)
        .push_data(GENESIS_COINBASE_MESSAGE.as_bytes());

    let output_key = hex::decode(GENESIS_OUTPUT_KEY).expect("compiled genesis key is valid hex");
    let mut script_pubkey = Script::new();
    script_pubkey.push_data(&output_key).push_opcode(OP_CHECKSIG);

    let coinbase = Transaction::coinbase(
        script_sig,
        vec![TxOutput {
            value: 0,
            script_pubkey,
        }],
    );

    let merkle_root = compute_merkle_root(&[coinbase.txid()]);
    let header = BlockHeader {
        version: GENESIS_VERSION,
        prev_hash: Hash256::zero(),
        merkle_root,
        time,
        bits,
        nonce,
    };

    Block::new(header, vec![coinbase])
}

/// Check a constructed genesis block against its compiled constants
pub fn verify_genesis(
    block: &Block,
    expected_hash: &Hash256,
    expected_merkle_root: &Hash256,
) -> Result<(), GenesisError> {
    let computed_merkle = block.compute_merkle_root();
    if computed_merkle != *expected_merkle_root || block.header.merkle_root != *expected_merkle_root
    {
        return Err(GenesisError::MerkleRootMismatch {
            expected: *expected_merkle_root,
            computed: computed_merkle,
        });
    }

    let computed_hash = block.hash();
    if computed_hash != *expected_hash {
        return Err(GenesisError::HashMismatch {
            expected: *expected_hash,
            computed: computed_hash,
        });
    }

    Ok(())
}
