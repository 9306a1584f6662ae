//! Parameter registry and network selector
//!
//! The single owner of the active [`ChainParams`]. A process constructs one
//! registry at startup, selects a network once, and passes the registry (or
//! the borrowed parameter set) to everything that reads consensus constants.
//!
//! Selection is one-shot: re-selecting the same network is a harmless no-op,
//! while switching networks after one is active is refused, since other
//! components may already hold references derived from the first selection.

use crate::chain::params::{ChainParams, Network, UnitTestOverrides};
use thiserror::Error;

/// Faults surfaced by network selection and parameter access
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("unknown network id `{0}`")]
    UnknownNetwork(String),
    #[error("no network has been selected")]
    NotSelected,
    #[error("network already selected as {active}, refusing to switch to {requested}")]
    AlreadySelected { active: Network, requested: Network },
    #[error("mutable parameters require the unittest network, active network is {0}")]
    NotUnitTest(Network),
}

/// Process-wide registry holding the active parameter set
#[derive(Debug, Default)]
pub struct ParamsRegistry {
    current: Option<ChainParams>,
}

impl ParamsRegistry {
    /// Create an empty registry; no network is selected yet
    pub fn new() -> Self {
        Self { current: None }
    }

    /// Activate a network's parameter set
    ///
    /// Builds the set (which verifies its genesis block) on first selection.
    /// Selecting the already-active network again is a no-op; selecting a
    /// different one is an error and leaves the active set unchanged.
    pub fn select(&mut self, network: Network) -> Result<&ChainParams, SelectionError> {
        if let Some(ref params) = self.current {
            if params.network() != network {
                return Err(SelectionError::AlreadySelected {
                    active: params.network(),
                    requested: network,
                });
            }
        } else {
            self.current = Some(ChainParams::for_network(network));
        }
        self.active()
    }

    /// The active parameter set
    pub fn active(&self) -> Result<&ChainParams, SelectionError> {
        self.current.as_ref().ok_or(SelectionError::NotSelected)
    }

    /// The active network id, if any
    pub fn selected_network(&self) -> Option<Network> {
        self.current.as_ref().map(|params| params.network())
    }

    /// Mutable view over the whitelisted unit-test fields
    ///
    /// Only available while the unittest network is active, so production
    /// networks can never have their consensus constants changed at runtime.
    /// The `&mut self` receiver makes the capability exclusive.
    pub fn test_overrides(&mut self) -> Result<UnitTestOverrides<'_>, SelectionError> {
        let params = self.current.as_mut().ok_or(SelectionError::NotSelected)?;
        if params.network() != Network::UnitTest {
            return Err(SelectionError::NotUnitTest(params.network()));
        }
        Ok(UnitTestOverrides::new(params))
    }
}
