//! Domain models for IPv4 address arithmetic.
//!
//! This module contains the value conversions and data structures used
//! throughout the application:
//! - [`ipv4_to_value`] / [`value_to_ipv4`] - dotted-decimal conversions
//! - [`subnet_mask_value`] / [`network_of`] - CIDR masks
//! - [`RouterRecord`] and [`RouterTable`] - router configuration
//! - [`FormatError`] - parse failures

mod error;
mod ipv4;
mod mask;
mod router;

// Re-export public types
pub use error::FormatError;
pub use ipv4::{ipv4_to_value, value_to_ipv4, OCTETS};
pub use mask::{get_cidr_mask, network_of, prefix_len, subnet_mask_value, MAX_LENGTH};
pub use router::{router_table, AddressPair, RouterRecord, RouterTable};
