//! Output formatting for the router report.
//!
//! This module handles formatting and outputting report data:
//! - [`report`] - The three-section text report
//! - [`terminal`] - Field alignment helpers

mod report;
mod terminal;

pub use report::{render_report, router_rows, RouterRow, HOSTS_HEADER, PAIRS_HEADER, ROUTERS_HEADER};
pub use terminal::{format_field, format_host_list, highlight_headers};
