//! Chain parameters module - per-network constants, genesis data, and the
//! process-wide parameter registry

mod checkpoints;
mod genesis;
mod networks;
mod params;
mod registry;
mod seeds;

pub use checkpoints::*;
pub use genesis::*;
pub use params::*;
pub use registry::*;
pub use seeds::*;
