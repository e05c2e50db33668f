//! Router lookup for an address.

use super::same_subnet;
use crate::models::{FormatError, RouterRecord};

/// Find the router on the same subnet as `ip`, using each router's own mask.
///
/// Routers are tried in the iteration order of `routers` and the first match
/// wins. Overlapping router subnets therefore resolve by that order: a
/// [`RouterTable`](crate::models::RouterTable) yields the smallest key, a
/// `HashMap` yields whichever it happens to visit first.
///
/// Returns `Ok(None)` when no router matches.
///
/// # Examples
/// ```
/// use router_subnet_report::{find_router, models::router_table};
/// let routers = router_table(&[("1.2.3.1", "/24"), ("1.2.4.1", "/24")]);
/// assert_eq!(find_router(&routers, "1.2.3.5").unwrap(), Some("1.2.3.1"));
/// assert_eq!(find_router(&routers, "1.2.5.6").unwrap(), None);
/// ```
pub fn find_router<'a, I>(routers: I, ip: &str) -> Result<Option<&'a str>, FormatError>
where
    I: IntoIterator<Item = (&'a String, &'a RouterRecord)>,
{
    for (router_ip, record) in routers {
        if same_subnet(router_ip, ip, &record.netmask)? {
            log::trace!("find_router({ip}) = {router_ip}{}", record.netmask);
            return Ok(Some(router_ip.as_str()));
        }
    }
    log::trace!("find_router({ip}) no match");
    Ok(None)
}
