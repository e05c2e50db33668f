//! Application defaults.

/// Mask used for the pairwise subnet check, independent of router masks.
pub const PAIR_SUBNET_SLASH: &str = "/24";
/// log4rs configuration read at startup.
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";
/// Right-aligned width of address columns in the report.
pub const FIELD_WIDTH: usize = 15;
/// Router label for hosts with no matching router.
pub const UNRESOLVED_LABEL: &str = "None";
