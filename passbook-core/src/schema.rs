//! The fixed output schema and reference-file header loading.

use anyhow::{Context, Result};
use std::path::Path;

/// Output columns, in order
pub const COLUMNS: [&str; 5] = ["Date", "Description", "Debit Amt", "Credit Amt", "Balance"];

/// Read the header row of a reference CSV (e.g. `data/icici_expected.csv`).
///
/// Names are kept byte for byte, so ` Balance` does not match `Balance`.
pub fn read_reference_columns(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()
        .with_context(|| format!("reading header of {}", path.display()))?;
    Ok(headers.iter().map(|h| h.to_string()).collect())
}

/// True when `actual` names exactly the `expected` columns, in order
pub fn columns_match(actual: &[String], expected: &[String]) -> bool {
    actual == expected
}
