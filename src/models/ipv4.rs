//! Dotted-decimal <-> 32-bit value conversions.
//!
//! Octet values are not range checked. A component above 255 is shifted into
//! place like any other and spills into the neighbouring octet, bits shifted
//! past bit 31 are dropped.

use super::FormatError;

/// Number of components in a dotted-decimal IPv4 address.
pub const OCTETS: usize = 4;

/// Convert a dots-and-numbers IPv4 address to a single numeric value.
///
/// # Examples
/// ```
/// use router_subnet_report::models::ipv4_to_value;
/// assert_eq!(ipv4_to_value("255.255.0.0").unwrap(), 0xffff0000);
/// assert_eq!(ipv4_to_value("1.2.3.4").unwrap(), 0x01020304);
/// ```
pub fn ipv4_to_value(address: &str) -> Result<u32, FormatError> {
    let parts: Vec<&str> = address.split('.').collect();
    if parts.len() != OCTETS {
        return Err(FormatError::OctetCount {
            address: address.to_string(),
            count: parts.len(),
        });
    }

    let mut bits: u64 = 0;
    for (i, part) in parts.iter().enumerate() {
        let octet: u32 = part.parse().map_err(|_| FormatError::Octet {
            address: address.to_string(),
            octet: part.to_string(),
        })?;
        // index 0 is the most significant octet
        bits |= (octet as u64) << (8 * (OCTETS - 1 - i));
    }
    log::trace!("ipv4_to_value({address}) = {bits:#010x}");

    Ok(bits as u32)
}

/// Convert a 32-bit value to its dots-and-numbers form.
///
/// # Examples
/// ```
/// use router_subnet_report::models::value_to_ipv4;
/// assert_eq!(value_to_ipv4(0xffff0000), "255.255.0.0");
/// ```
pub fn value_to_ipv4(value: u32) -> String {
    (0..OCTETS)
        .rev()
        .map(|i| ((value >> (8 * i)) & 0xFF).to_string())
        .collect::<Vec<String>>()
        .join(".")
}
