//! passbook-ingest: heuristic extraction of transaction rows from statement text.

pub mod classifier;
pub mod date;
pub mod engine;
pub mod lines;
pub mod scanner;

pub use classifier::{Classifier, DEFAULT_CREDIT_KEYWORDS};
pub use engine::{Extractor, Skip};
pub use scanner::{NumericToken, ScanOutcome};

use passbook_core::ResultSet;

/// Extract with the default keyword rules.
///
/// `lines_by_page` is pages in document order, each a sequence of lines.
pub fn extract<P, L>(lines_by_page: P) -> ResultSet
where
    P: IntoIterator,
    P::Item: IntoIterator<Item = L>,
    L: AsRef<str>,
{
    Extractor::default().extract(lines_by_page)
}
