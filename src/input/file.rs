//! JSON input file reader.
//!
//! Expected document:
//! ```json
//! { "routers": { "10.34.46.1": { "netmask": "/24" } },
//!   "src-dest": [["10.34.46.25", "10.34.46.21"]] }
//! ```

use crate::models::{AddressPair, RouterTable};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::path::Path;

/// Parsed input: routers and the address pairs to report on.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct RouterFile {
    /// Routers keyed by address.
    pub routers: RouterTable,
    /// Source / destination pairs.
    #[serde(rename = "src-dest")]
    pub src_dest: Vec<AddressPair>,
}

/// Parse a [`RouterFile`] from JSON text.
///
/// Errors name the JSON path that failed, e.g. `src-dest[2]`.
pub fn parse_router_file(json: &str) -> Result<RouterFile, Box<dyn Error>> {
    let mut deserializer = serde_json::Deserializer::from_str(json);
    let data: RouterFile = serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|e| format!("Error parsing router JSON: path={} error={}", e.path(), e))?;
    Ok(data)
}

/// Read and parse a router file from disk.
///
/// # Returns
/// * `Ok(RouterFile)` - The routers and pairs
/// * `Err` - If the file does not exist, cannot be read or is not valid
pub fn read_router_file(file: &str) -> Result<RouterFile, Box<dyn Error>> {
    if !Path::new(file).exists() {
        return Err(format!("Router file does not exist: {file}").into());
    }
    log::info!("Reading router file: {file}");

    let json = std::fs::read_to_string(file)
        .map_err(|e| format!("Error reading router file {file}: {e}"))?;
    let data = parse_router_file(&json)?;

    log::info!(
        "Loaded {} routers and {} src-dest pairs from {file}",
        data.routers.len(),
        data.src_dest.len()
    );
    Ok(data)
}
