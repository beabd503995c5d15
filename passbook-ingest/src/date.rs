//! Leading `DD-MM-YYYY` date recognition.

use regex::Regex;
use std::sync::LazyLock;

static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{2}-\d{2}-\d{4}").expect("date pattern compiles"));

/// True if `token` starts with a `DD-MM-YYYY` date.
///
/// Only the prefix is checked, so `01-08-2024,` still counts. The digits are
/// not validated as a calendar date.
pub fn is_statement_date(token: &str) -> bool {
    DATE_RE.is_match(token)
}
