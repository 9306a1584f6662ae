//! Transaction structure with ledger wire serialization
//!
//! The serialization must be byte-for-byte identical to the historic chain:
//! transaction ids and the genesis merkle root are double-SHA256 over these
//! exact bytes.

use crate::crypto::{double_sha256, Hash256};
use crate::primitives::Script;
use serde::{Deserialize, Serialize};

/// Output index marking a coinbase input
pub const COINBASE_OUTPUT_INDEX: u32 = 0xffff_ffff;

const SEQUENCE_FINAL: u32 = 0xffff_ffff;

/// A transaction input referencing a previous output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxInput {
    /// Hash of the transaction containing the spent output
    pub prev_hash: Hash256,
    /// Index of the output in that transaction
    pub prev_index: u32,
    /// Unlocking script
    pub script_sig: Script,
    /// Input sequence number
    pub sequence: u32,
}

/// A transaction output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxOutput {
    /// Amount in base units
    pub value: u64,
    /// Locking script
    pub script_pubkey: Script,
}

/// A complete transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction version
    pub version: i32,
    /// Transaction inputs
    pub inputs: Vec<TxInput>,
    /// Transaction outputs
    pub outputs: Vec<TxOutput>,
    /// Lock time (block height or timestamp)
    pub lock_time: u32,
}

impl Transaction {
    /// Create a coinbase transaction from an unlocking script and outputs
    pub fn coinbase(script_sig: Script, outputs: Vec<TxOutput>) -> Self {
        Self {
            version: 1,
            inputs: vec![TxInput {
                prev_hash: Hash256::zero(),
                prev_index: COINBASE_OUTPUT_INDEX,
                script_sig,
                sequence: SEQUENCE_FINAL,
            }],
            outputs,
            lock_time: 0,
        }
    }

    /// Check if this is a coinbase transaction
    pub fn is_coinbase(&self) -> bool {
        self.inputs.len() == 1
            && self.inputs[0].prev_hash == Hash256::zero()
            && self.inputs[0].prev_index == COINBASE_OUTPUT_INDEX
    }

    /// Wire serialization
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&self.version.to_le_bytes());

        write_compact_size(&mut bytes, self.inputs.len() as u64);
        for input in &self.inputs {
            bytes.extend_from_slice(&input.prev_hash.0);
            bytes.extend_from_slice(&input.prev_index.to_le_bytes());
            write_compact_size(&mut bytes, input.script_sig.len() as u64);
            bytes.extend_from_slice(input.script_sig.as_bytes());
            bytes.extend_from_slice(&input.sequence.to_le_bytes());
        }

        write_compact_size(&mut bytes, self.outputs.len() as u64);
        for output in &self.outputs {
            bytes.extend_from_slice(&output.value.to_le_bytes());
            write_compact_size(&mut bytes, output.script_pubkey.len() as u64);
            bytes.extend_from_slice(output.script_pubkey.as_bytes());
        }

        bytes.extend_from_slice(&self.lock_time.to_le_bytes());
        bytes
    }

    /// Transaction id: double-SHA256 of the wire bytes
    pub fn txid(&self) -> Hash256 {
        double_sha256(&self.to_bytes())
    }
}

/// Variable-length count prefix used throughout the wire format
pub(crate) fn write_compact_size(out: &mut Vec<u8>, n: u64) {
    if n < 0xfd {
        out.push(n as u8);
    } else if n <= u16::MAX as u64 {
        out.push(0xfd);
        out.extend_from_slice(&(n as u16).to_le_bytes());
    } else if n <= u32::MAX as u64 {
        out.push(0xfe);
        out.extend_from_slice(&(n as u32).to_le_bytes());
    } else {
        out.push(0xff);
        out.extend_from_slice(&n.to_le_bytes());
    }
}
