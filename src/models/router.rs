//! Router table data model.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Configuration of a single router, keyed by the router's own address.
///
/// Any other fields present in the input are ignored.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RouterRecord {
    /// Subnet mask in slash notation, e.g. "/24".
    pub netmask: String,
}

impl RouterRecord {
    /// Create a new [`RouterRecord`] from a slash mask.
    pub fn new(netmask: &str) -> RouterRecord {
        RouterRecord {
            netmask: netmask.to_string(),
        }
    }
}

/// Routers keyed by address. Iterates in sorted key order.
pub type RouterTable = BTreeMap<String, RouterRecord>;

/// A (source, destination) pair of dotted-decimal addresses.
pub type AddressPair = (String, String);

/// Build a [`RouterTable`] from `(address, slash)` tuples.
pub fn router_table(entries: &[(&str, &str)]) -> RouterTable {
    entries
        .iter()
        .map(|(addr, mask)| (addr.to_string(), RouterRecord::new(mask)))
        .collect()
}
