//! Subnet membership tests.

use crate::models::{ipv4_to_value, network_of, subnet_mask_value, FormatError};

/// Return true if two addresses are on the same subnet for the given mask.
///
/// Both addresses are converted to values and masked, never compared as
/// strings.
///
/// # Examples
/// ```
/// use router_subnet_report::same_subnet;
/// assert!(same_subnet("10.23.121.17", "10.23.121.225", "/23").unwrap());
/// assert!(!same_subnet("10.23.230.22", "10.24.121.225", "/16").unwrap());
/// ```
pub fn same_subnet(ip1: &str, ip2: &str, slash: &str) -> Result<bool, FormatError> {
    let mask = subnet_mask_value(slash)?;
    let value1 = ipv4_to_value(ip1)?;
    let value2 = ipv4_to_value(ip2)?;

    Ok(network_of(value1, mask) == network_of(value2, mask))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_subnet() {
        assert!(same_subnet("10.23.121.17", "10.23.121.225", "/23").unwrap());
        assert!(!same_subnet("10.23.230.22", "10.24.121.225", "/16").unwrap());
        assert!(same_subnet("192.168.1.1", "192.168.1.254", "/24").unwrap());
        assert!(!same_subnet("192.168.1.1", "192.168.2.1", "/24").unwrap());
    }

    #[test]
    fn test_same_subnet_edges() {
        // /0 puts everything together
        assert!(same_subnet("1.1.1.1", "254.3.2.1", "/0").unwrap());
        // /32 only matches itself
        assert!(!same_subnet("10.0.0.1", "10.0.0.2", "/32").unwrap());
        assert!(same_subnet("10.0.0.1", "10.0.0.1", "/32").unwrap());
        // /31 pairs
        assert!(same_subnet("10.0.0.2", "10.0.0.3", "/31").unwrap());
        assert!(!same_subnet("10.0.0.3", "10.0.0.4", "/31").unwrap());
    }

    #[test]
    fn test_same_subnet_reflexive() {
        for ip in ["0.0.0.0", "10.23.121.17", "255.255.255.255"] {
            for p in 0..=32 {
                assert!(same_subnet(ip, ip, &format!("/{p}")).unwrap());
            }
        }
    }

    #[test]
    fn test_same_subnet_address_in_slash() {
        assert!(same_subnet("10.0.1.5", "10.0.0.9", "99.99.99.99/23").unwrap());
    }

    #[test]
    fn test_same_subnet_errors() {
        assert!(matches!(
            same_subnet("1.2.3", "1.2.3.4", "/24"),
            Err(FormatError::OctetCount { .. })
        ));
        assert!(matches!(
            same_subnet("1.2.3.4", "1.2.3.x", "/24"),
            Err(FormatError::Octet { .. })
        ));
        assert!(matches!(
            same_subnet("1.2.3.4", "1.2.3.5", "24"),
            Err(FormatError::MissingSlash { .. })
        ));
    }
}
