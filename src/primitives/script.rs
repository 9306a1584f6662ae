//! Script serialization
//!
//! A minimal script builder covering what genesis construction uses:
//! data pushes, numeric pushes, and OP_CHECKSIG.

use serde::{Deserialize, Serialize};

/// OP_CHECKSIG opcode
pub const OP_CHECKSIG: u8 = 0xac;

const OP_1NEGATE: u8 = 0x4f;
const OP_1: u8 = 0x51;
const OP_PUSHDATA1: u8 = 0x4c;
const OP_PUSHDATA2: u8 = 0x4d;

/// A serialized script
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script(Vec<u8>);

impl Script {
    /// Create an empty script
    pub fn new() -> Self {
        Script(Vec::new())
    }

    /// Push an integer, using the small-integer opcodes for -1..=16 and a
    /// minimally-encoded numeric push otherwise
    pub fn push_int(&mut self, value: i64) -> &mut Self {
        match value {
            -1 => {
                self.0.push(OP_1NEGATE);
                self
            }
            1..=16 => {
                self.0.push(OP_1 + (value as u8 - 1));
                self
            }
            _ => self.push_scriptnum(value),
        }
    }

    /// Push an integer as a minimally-encoded data push, never as an opcode
    pub fn push_scriptnum(&mut self, value: i64) -> &mut Self {
        let encoded = scriptnum_encode(value);
        self.push_data(&encoded)
    }

    /// Push raw bytes as a data push
    pub fn push_data(&mut self, data: &[u8]) -> &mut Self {
        let len = data.len();
        if len < OP_PUSHDATA1 as usize {
            self.0.push(len as u8);
        } else if len <= u8::MAX as usize {
            self.0.push(OP_PUSHDATA1);
            self.0.push(len as u8);
        } else {
            // Nothing in the compiled genesis data pushes more than 64KiB
            self.0.push(OP_PUSHDATA2);
            self.0.extend_from_slice(&(len as u16).to_le_bytes());
        }
        self.0.extend_from_slice(data);
        self
    }

    /// Append a raw opcode
    pub fn push_opcode(&mut self, opcode: u8) -> &mut Self {
        self.0.push(opcode);
        self
    }

    /// Serialized script bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Minimal little-endian numeric encoding with a sign bit in the top byte
fn scriptnum_encode(value: i64) -> Vec<u8> {
    if value == 0 {
        return Vec::new();
    }

    let negative = value < 0;
    let mut abs = value.unsigned_abs();
    let mut result = Vec::new();

    while abs > 0 {
        result.push((abs & 0xff) as u8);
        abs >>= 8;
    }

    // If the top bit of the last byte is set, an extra byte carries the sign
    let last = *result.last().unwrap_or(&0);
    if last & 0x80 != 0 {
        result.push(if negative { 0x80 } else { 0x00 });
    } else if negative {
        let idx = result.len() - 1;
        result[idx] |= 0x80;
    }

    result
}
