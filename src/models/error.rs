//! Parse failures for dotted-decimal addresses and CIDR prefixes.

/// Raised when an address or a CIDR string cannot be interpreted.
///
/// Every variant keeps the offending input so callers can show it as-is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("invalid address '{address}': expected 4 octets, found {count}")]
    OctetCount { address: String, count: usize },
    #[error("invalid address '{address}': octet '{octet}' is not an integer")]
    Octet { address: String, octet: String },
    #[error("invalid subnet mask '{slash}': missing '/'")]
    MissingSlash { slash: String },
    #[error("invalid subnet mask '{slash}': prefix '{prefix}' is not an integer")]
    Prefix { slash: String, prefix: String },
    #[error("invalid subnet mask '{slash}': prefix {prefix} is longer than 32 bits")]
    PrefixTooLong { slash: String, prefix: u8 },
}
