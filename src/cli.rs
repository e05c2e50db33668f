//! Command line arguments and the top level run.

use crate::config::{DEFAULT_LOG_CONFIG, PAIR_SUBNET_SLASH};
use crate::input::read_router_file;
use crate::models::subnet_mask_value;
use crate::output::{highlight_headers, render_report, HOSTS_HEADER, PAIRS_HEADER, ROUTERS_HEADER};
use clap::Parser;
use std::error::Error;

/// Report router networks, address pair subnets and hosts per router.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// JSON file with "routers" and "src-dest" entries.
    #[arg(env = "ROUTERS_FILE")]
    pub file: String,

    /// log4rs YAML configuration.
    #[arg(long, default_value = DEFAULT_LOG_CONFIG)]
    pub log_config: String,

    /// Mask used to compare address pairs, e.g. "/24".
    #[arg(long, default_value = PAIR_SUBNET_SLASH)]
    pub pair_slash: String,

    /// Do not highlight section headers.
    #[arg(long)]
    pub no_color: bool,
}

/// Load the input file and render the report.
pub fn run(cli: &Cli) -> Result<String, Box<dyn Error>> {
    // reject a bad --pair-slash before reading anything
    subnet_mask_value(&cli.pair_slash)?;

    let data = read_router_file(&cli.file)?;
    let report = render_report(&data, &cli.pair_slash)?;
    log::info!("Rendered report for {}", cli.file);

    if cli.no_color {
        Ok(report)
    } else {
        Ok(highlight_headers(
            &report,
            &[ROUTERS_HEADER, PAIRS_HEADER, HOSTS_HEADER],
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["router-subnet-report", "routers.json"]).unwrap();
        assert_eq!(cli.file, "routers.json");
        assert_eq!(cli.log_config, "log4rs.yml");
        assert_eq!(cli.pair_slash, "/24");
        assert!(!cli.no_color);
    }

    #[test]
    fn test_cli_options() {
        let cli = Cli::try_parse_from([
            "router-subnet-report",
            "--pair-slash",
            "/16",
            "--no-color",
            "routers.json",
        ])
        .unwrap();
        assert_eq!(cli.pair_slash, "/16");
        assert!(cli.no_color);
    }

    #[test]
    fn test_run_bad_pair_slash() {
        let cli = Cli::try_parse_from([
            "router-subnet-report",
            "--pair-slash",
            "24",
            "src/tests/test_data/example1.json",
        ])
        .unwrap();
        let err = run(&cli).unwrap_err();
        assert!(err.to_string().contains("missing '/'"), "{err}");
    }

    #[test]
    fn test_run_example1() {
        let cli = Cli::try_parse_from([
            "router-subnet-report",
            "--no-color",
            "src/tests/test_data/example1.json",
        ])
        .unwrap();
        let report = run(&cli).expect("Error running report");
        assert!(report.starts_with("Routers:\n"));
        assert!(report.contains("IP Pairs:\n"));
    }
}
