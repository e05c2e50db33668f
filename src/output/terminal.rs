//! Terminal output utilities.
//!
//! Provides formatting helpers for the text report.

use colored::Colorize;

/// Format a value as a right-aligned field.
///
/// Values longer than `width` are returned unchanged.
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    format!("{value_str:>width$}")
}

/// Format hosts as a bracketed list of quoted addresses, e.g. `['a', 'b']`.
pub fn format_host_list<T: AsRef<str>>(hosts: &[T]) -> String {
    let quoted: Vec<String> = hosts
        .iter()
        .map(|h| format!("'{}'", h.as_ref()))
        .collect();
    format!("[{}]", quoted.join(", "))
}

/// Highlight the section headers of a rendered report.
pub fn highlight_headers(report: &str, headers: &[&str]) -> String {
    report
        .lines()
        .map(|line| {
            if headers.contains(&line) {
                format!("{}\n", line.bold().cyan())
            } else {
                format!("{line}\n")
            }
        })
        .collect()
}
