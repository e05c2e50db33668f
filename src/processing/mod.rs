//! Subnet and router resolution logic.
//!
//! This module contains the logic built on top of the address models:
//! - [`subnet`] - Subnet equality of two addresses
//! - [`router`] - Router lookup for an address
//! - [`pairs`] - Pairwise subnet classification
//! - [`grouping`] - Hosts grouped by serving router

mod grouping;
mod pairs;
mod router;
mod subnet;

// Re-export public functions
pub use grouping::{group_hosts_by_router, unique_addresses, RouterHostMap};
pub use pairs::{classify_pairs, PairRow};
pub use router::find_router;
pub use subnet::same_subnet;
