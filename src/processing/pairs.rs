//! Classification of source/destination address pairs.

use super::same_subnet;
use crate::models::{AddressPair, FormatError};

/// One classified address pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairRow {
    pub src: String,
    pub dest: String,
    pub same_subnet: bool,
}

/// Classify every pair with a single fixed mask, sorted by (src, dest).
///
/// The mask is the caller's choice and unrelated to any router's mask.
pub fn classify_pairs(pairs: &[AddressPair], slash: &str) -> Result<Vec<PairRow>, FormatError> {
    let mut sorted: Vec<&AddressPair> = pairs.iter().collect();
    sorted.sort();

    let rows = sorted
        .into_iter()
        .map(|(src, dest)| -> Result<PairRow, FormatError> {
            Ok(PairRow {
                src: src.clone(),
                dest: dest.clone(),
                same_subnet: same_subnet(src, dest, slash)?,
            })
        })
        .collect::<Result<Vec<PairRow>, FormatError>>()?;

    log::debug!(
        "classify_pairs: {} pairs, {} on the same {slash} subnet",
        rows.len(),
        rows.iter().filter(|r| r.same_subnet).count()
    );
    Ok(rows)
}
