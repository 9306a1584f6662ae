//! Ledger primitives - scripts, transactions, and block headers
//!
//! Only the structures and wire serialization needed to construct and hash
//! the compiled-in genesis block of each network.

mod block;
mod script;
mod transaction;

pub use block::*;
pub use script::*;
pub use transaction::*;
