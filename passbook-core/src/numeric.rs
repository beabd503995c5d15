//! Numeric normalization for statement amount cells.
//!
//! Extracted statement text carries amounts like `1,250.50`, `-` (nothing in
//! this column) or stray fragments such as `12-34`. Anything that is not a
//! plain decimal number comes back as `None`, never as zero.

use regex::Regex;
use std::sync::LazyLock;

static DECIMAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)$").expect("decimal pattern compiles")
});

/// Normalize a raw token into a number.
///
/// Commas are treated as grouping separators and dropped. An empty token or a
/// lone `-` is the statement's explicit null marker.
pub fn normalize(token: &str) -> Option<f64> {
    let cleaned = token.trim().replace(',', "");
    if cleaned.is_empty() || cleaned == "-" {
        return None;
    }
    if !DECIMAL_RE.is_match(&cleaned) {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Re-validate an already numeric cell. Non-finite values become missing.
pub fn coerce(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}
