//! Subnet masks from CIDR slash notation.

use super::FormatError;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Extract the prefix length from slash notation.
///
/// The text after the last `/` is the prefix, anything before it (usually an
/// address) is discarded.
pub fn prefix_len(slash: &str) -> Result<u8, FormatError> {
    let (_addr, prefix) = slash.rsplit_once('/').ok_or_else(|| FormatError::MissingSlash {
        slash: slash.to_string(),
    })?;
    let len: u8 = prefix.parse().map_err(|_| FormatError::Prefix {
        slash: slash.to_string(),
        prefix: prefix.to_string(),
    })?;
    if len > MAX_LENGTH {
        return Err(FormatError::PrefixTooLong {
            slash: slash.to_string(),
            prefix: len,
        });
    }
    Ok(len)
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// Computed in 64 bits so that /0 and /32 need no special case.
pub fn get_cidr_mask(len: u8) -> Result<u32, FormatError> {
    if len > MAX_LENGTH {
        return Err(FormatError::PrefixTooLong {
            slash: format!("/{len}"),
            prefix: len,
        });
    }
    let right_len = MAX_LENGTH - len;
    let mask = ((1u64 << len) - 1) << right_len;
    Ok(mask as u32)
}

/// Given a subnet mask in slash notation, return the mask value.
///
/// # Examples
/// ```
/// use router_subnet_report::models::subnet_mask_value;
/// assert_eq!(subnet_mask_value("/16").unwrap(), 0xffff0000);
/// assert_eq!(subnet_mask_value("10.20.30.40/23").unwrap(), 0xfffffe00);
/// ```
pub fn subnet_mask_value(slash: &str) -> Result<u32, FormatError> {
    let len = prefix_len(slash)?;
    let mask = get_cidr_mask(len)?;
    log::trace!("subnet_mask_value({slash}) = {mask:#010x}");
    Ok(mask)
}

/// Return the network portion of an address value.
pub fn network_of(address_value: u32, mask_value: u32) -> u32 {
    address_value & mask_value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_cidr_mask() {
        assert_eq!(get_cidr_mask(0).unwrap(), 0x00000000);
        assert_eq!(get_cidr_mask(1).unwrap(), 0x80000000);
        assert_eq!(get_cidr_mask(8).unwrap(), 0xFF000000);
        assert_eq!(get_cidr_mask(16).unwrap(), 0xFFFF0000);
        assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
        assert_eq!(get_cidr_mask(31).unwrap(), 0xFFFFFFFE);
        assert_eq!(get_cidr_mask(32).unwrap(), 0xFFFFFFFF);
        assert!(get_cidr_mask(33).is_err());
    }

    #[test]
    fn test_subnet_mask_value() {
        assert_eq!(subnet_mask_value("/0").unwrap(), 0);
        assert_eq!(subnet_mask_value("/16").unwrap(), 0xffff0000);
        assert_eq!(subnet_mask_value("/23").unwrap(), 0xfffffe00);
        assert_eq!(subnet_mask_value("/32").unwrap(), 0xffffffff);
    }

    #[test]
    fn test_mask_ignores_address() {
        assert_eq!(subnet_mask_value("10.20.30.40/23").unwrap(), 0xfffffe00);
        assert_eq!(
            subnet_mask_value("10.20.30.40/23").unwrap(),
            subnet_mask_value("/23").unwrap()
        );
        // the address part is never parsed
        assert_eq!(subnet_mask_value("junk/8").unwrap(), 0xff000000);
    }

    #[test]
    fn test_mask_monotonic() {
        for p1 in 0..=MAX_LENGTH {
            for p2 in p1..=MAX_LENGTH {
                let m1 = get_cidr_mask(p1).unwrap();
                let m2 = get_cidr_mask(p2).unwrap();
                assert_eq!(m1 & m2, m1, "/{p1} is not a prefix of /{p2}");
            }
            assert_eq!(get_cidr_mask(p1).unwrap().leading_ones(), p1 as u32);
        }
    }

    #[test]
    fn test_malformed_mask() {
        assert_eq!(
            subnet_mask_value("24"),
            Err(FormatError::MissingSlash {
                slash: "24".to_string()
            })
        );
        assert_eq!(
            subnet_mask_value("/abc"),
            Err(FormatError::Prefix {
                slash: "/abc".to_string(),
                prefix: "abc".to_string()
            })
        );
        assert_eq!(
            subnet_mask_value("/33"),
            Err(FormatError::PrefixTooLong {
                slash: "/33".to_string(),
                prefix: 33
            })
        );
        assert!(subnet_mask_value("/").is_err());
        assert!(subnet_mask_value("/-1").is_err());
        assert!(subnet_mask_value("/300").is_err());
    }

    #[test]
    fn test_network_of() {
        assert_eq!(network_of(0x01020304, 0xffffff00), 0x01020300);
        assert_eq!(network_of(0x01020304, 0), 0);
        assert_eq!(network_of(0x01020304, u32::MAX), 0x01020304);
    }
}
