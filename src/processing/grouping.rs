//! Group hosts by the router that serves them.

use super::find_router;
use crate::models::{AddressPair, FormatError, RouterTable};
use itertools::Itertools;
use std::collections::BTreeMap;

/// Hosts resolved to routers, plus the ones no router claims.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RouterHostMap {
    /// Router address -> sorted host addresses.
    pub routed: BTreeMap<String, Vec<String>>,
    /// Hosts with no matching router, sorted.
    pub unresolved: Vec<String>,
}

impl RouterHostMap {
    /// Create a new empty RouterHostMap.
    pub fn new() -> RouterHostMap {
        RouterHostMap::default()
    }

    /// Record `host` under `router`, or as unresolved when `router` is None.
    pub fn add_host(&mut self, router: Option<&str>, host: &str) {
        match router {
            Some(r) => self
                .routed
                .entry(r.to_string())
                .or_default()
                .push(host.to_string()),
            None => self.unresolved.push(host.to_string()),
        }
    }

    pub fn host_count(&self) -> usize {
        self.routed.values().map(|h| h.len()).sum::<usize>() + self.unresolved.len()
    }
}

/// Every distinct address across all pairs, sorted.
pub fn unique_addresses(pairs: &[AddressPair]) -> Vec<&str> {
    pairs
        .iter()
        .flat_map(|(src, dest)| [src.as_str(), dest.as_str()])
        .sorted()
        .dedup()
        .collect()
}

/// Resolve each distinct address of `pairs` to its router.
pub fn group_hosts_by_router(
    routers: &RouterTable,
    pairs: &[AddressPair],
) -> Result<RouterHostMap, FormatError> {
    let mut map = RouterHostMap::new();

    for ip in unique_addresses(pairs) {
        let router = find_router(routers, ip)?;
        map.add_host(router, ip);
    }

    if !map.unresolved.is_empty() {
        log::warn!(
            "{} address(es) not on any router subnet: {}",
            map.unresolved.len(),
            map.unresolved.join(", ")
        );
    }
    log::info!(
        "Grouped {} hosts under {} routers",
        map.host_count(),
        map.routed.len()
    );
    Ok(map)
}
