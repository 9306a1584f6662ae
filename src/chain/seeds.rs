//! Fixed seed nodes
//!
//! Compiled bootstrap addresses for initial peer discovery. Imported seeds
//! are given a random last-seen time of between one and two weeks ago, so a
//! node prefers freshly gossiped peers over the hardcoded list as soon as it
//! learns any.

use crate::constants::ONE_WEEK_SECS;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::net::{Ipv6Addr, SocketAddr, SocketAddrV6};
use std::time::{SystemTime, UNIX_EPOCH};

/// One compiled seed entry: a raw IPv6 address and port
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSpec {
    pub addr: [u8; 16],
    pub port: u16,
}

/// A bootstrap address with a synthesized last-seen timestamp
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedAddress {
    pub addr: SocketAddr,
    /// Unix timestamp the address book treats as the last sighting
    pub last_seen: u64,
}

const fn ipv4(a: u8, b: u8, c: u8, d: u8, port: u16) -> SeedSpec {
    SeedSpec {
        addr: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xff, 0xff, a, b, c, d],
        port,
    }
}

/// Main network seed table
pub const MAINNET_SEEDS: &[SeedSpec] = &[
    ipv4(155, 138, 141, 78, 46220),
    ipv4(155, 138, 150, 203, 46220),
    ipv4(207, 148, 23, 156, 46220),
    ipv4(207, 246, 95, 44, 46220),
    ipv4(45, 76, 60, 121, 46220),
    ipv4(45, 77, 109, 230, 46220),
    ipv4(104, 238, 185, 70, 46220),
    ipv4(149, 28, 201, 19, 46220),
];

/// Test network seed table
pub const TESTNET_SEEDS: &[SeedSpec] = &[
    ipv4(45, 77, 122, 36, 47220),
    ipv4(149, 28, 242, 180, 47220),
];

/// Convert a compiled seed table into address records
///
/// Pure function of its inputs: each record's `last_seen` is drawn uniformly
/// from `[now - 2 weeks, now - 1 week)`.
pub fn import_fixed_seeds<R: Rng>(table: &[SeedSpec], now: u64, rng: &mut R) -> Vec<SeedAddress> {
    table
        .iter()
        .map(|spec| {
            let offset = rng.gen_range(0..ONE_WEEK_SECS);
            SeedAddress {
                addr: SocketAddr::V6(SocketAddrV6::new(
                    Ipv6Addr::from(spec.addr),
                    spec.port,
                    0,
                    0,
                )),
                last_seen: now.saturating_sub(2 * ONE_WEEK_SECS).saturating_add(offset),
            }
        })
        .collect()
}

/// Current Unix time, used when building a parameter set
pub(crate) fn unix_time_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const NOW: u64 = 1_700_000_000;

    #[test]
    fn test_import_preserves_count_and_order() {
        let mut rng = StdRng::seed_from_u64(7);
        let seeds = import_fixed_seeds(MAINNET_SEEDS, NOW, &mut rng);
        assert_eq!(seeds.len(), MAINNET_SEEDS.len());
        for (record, spec) in seeds.iter().zip(MAINNET_SEEDS) {
            assert_eq!(record.addr.port(), spec.port);
        }
    }

    #[test]
    fn test_last_seen_window() {
        let mut rng = StdRng::seed_from_u64(42);
        for record in import_fixed_seeds(MAINNET_SEEDS, NOW, &mut rng) {
            assert!(record.last_seen >= NOW - 2 * ONE_WEEK_SECS);
            assert!(record.last_seen < NOW - ONE_WEEK_SECS);
        }
    }

    #[test]
    fn test_import_is_pure() {
        let a = import_fixed_seeds(TESTNET_SEEDS, NOW, &mut StdRng::seed_from_u64(9));
        let b = import_fixed_seeds(TESTNET_SEEDS, NOW, &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_ipv4_mapped_form() {
        let spec = ipv4(1, 2, 3, 4, 46220);
        let ip = Ipv6Addr::from(spec.addr);
        assert_eq!(ip.to_ipv4_mapped(), Some(std::net::Ipv4Addr::new(1, 2, 3, 4)));
    }

    #[test]
    fn test_tables_use_network_ports() {
        assert!(MAINNET_SEEDS.iter().all(|s| s.port == 46220));
        assert!(TESTNET_SEEDS.iter().all(|s| s.port == 47220));
    }
}
