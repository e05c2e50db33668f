//! Three-section text report: routers, address pairs, hosts per router.

use super::terminal::{format_field, format_host_list};
use crate::config::{FIELD_WIDTH, UNRESOLVED_LABEL};
use crate::input::RouterFile;
use crate::models::{
    ipv4_to_value, network_of, subnet_mask_value, value_to_ipv4, FormatError, RouterTable,
};
use crate::processing::{classify_pairs, group_hosts_by_router, PairRow, RouterHostMap};

pub const ROUTERS_HEADER: &str = "Routers:";
pub const PAIRS_HEADER: &str = "IP Pairs:";
pub const HOSTS_HEADER: &str = "Routers and corresponding IPs:";

/// Display values for one router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouterRow {
    pub router: String,
    /// Mask in dotted-decimal form.
    pub netmask: String,
    /// Router network in dotted-decimal form.
    pub network: String,
}

/// Mask and network of every router, in sorted router order.
pub fn router_rows(routers: &RouterTable) -> Result<Vec<RouterRow>, FormatError> {
    routers
        .iter()
        .map(|(router, record)| -> Result<RouterRow, FormatError> {
            let mask = subnet_mask_value(&record.netmask)?;
            let network = network_of(ipv4_to_value(router)?, mask);
            Ok(RouterRow {
                router: router.clone(),
                netmask: value_to_ipv4(mask),
                network: value_to_ipv4(network),
            })
        })
        .collect()
}

fn routers_section(rows: &[RouterRow]) -> Vec<String> {
    let mut lines = vec![ROUTERS_HEADER.to_string()];
    lines.extend(rows.iter().map(|row| {
        format!(
            " {router}: netmask {netmask}: network {network}",
            router = format_field(&row.router, FIELD_WIDTH),
            netmask = row.netmask,
            network = row.network,
        )
    }));
    lines
}

fn pairs_section(rows: &[PairRow]) -> Vec<String> {
    let mut lines = vec![PAIRS_HEADER.to_string()];
    lines.extend(rows.iter().map(|row| {
        format!(
            " {src} {dest}: {verdict}",
            src = format_field(&row.src, FIELD_WIDTH),
            dest = format_field(&row.dest, FIELD_WIDTH),
            verdict = if row.same_subnet {
                "same subnet"
            } else {
                "different subnets"
            },
        )
    }));
    lines
}

fn hosts_section(map: &RouterHostMap) -> Vec<String> {
    let mut lines = vec![HOSTS_HEADER.to_string()];
    for (router, hosts) in &map.routed {
        lines.push(format!(
            " {}: {}",
            format_field(router, FIELD_WIDTH),
            format_host_list(hosts)
        ));
    }
    // unresolved hosts always sort last
    if !map.unresolved.is_empty() {
        lines.push(format!(
            " {}: {}",
            format_field(UNRESOLVED_LABEL, FIELD_WIDTH),
            format_host_list(&map.unresolved)
        ));
    }
    lines
}

/// Render the full report for `data`, pairs compared with `pair_slash`.
///
/// Sections are separated by a blank line. Nothing is rendered if any
/// address or mask in the input is malformed.
pub fn render_report(data: &RouterFile, pair_slash: &str) -> Result<String, FormatError> {
    let routers = router_rows(&data.routers)?;
    let pairs = classify_pairs(&data.src_dest, pair_slash)?;
    let hosts = group_hosts_by_router(&data.routers, &data.src_dest)?;

    let sections = [
        routers_section(&routers),
        pairs_section(&pairs),
        hosts_section(&hosts),
    ];
    let report = sections
        .iter()
        .map(|lines| lines.iter().map(|l| format!("{l}\n")).collect::<String>())
        .collect::<Vec<String>>()
        .join("\n");

    Ok(report)
}
