//! Line-by-line extraction of statement text into a [`ResultSet`].
//!
//! Expected text rows after document-to-text:
//!   01-08-2024 Salary Credit XYZ Pvt Ltd 1935.3 6864.58
//!   03-08-2024 Card Swipe 1,250.50 5614.08
//!
//! Lines that do not start with a `DD-MM-YYYY` date, or that lack two trailing
//! numbers, are skipped silently. Each line stands alone: no state carries
//! over between lines or pages.

use passbook_core::{ResultSet, TransactionRecord};
use tracing::{debug, trace};

use crate::classifier::Classifier;
use crate::date::is_statement_date;
use crate::lines::{split_lines, tokenize};
use crate::scanner::{ScanOutcome, description, scan};

/// Why a line produced no record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Skip {
    NoDate,
    TooFewNumbers,
}

#[derive(Debug, Clone, Default)]
pub struct Extractor {
    classifier: Classifier,
}

impl Extractor {
    pub fn new(classifier: Classifier) -> Self {
        Self { classifier }
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Turn one trimmed line into a record.
    pub fn parse_line(&self, line: &str) -> Result<TransactionRecord, Skip> {
        let tokens = tokenize(line);
        let date = match tokens.first() {
            Some(first) if is_statement_date(first) => *first,
            _ => return Err(Skip::NoDate),
        };

        match scan(&tokens) {
            ScanOutcome::Rejected => Err(Skip::TooFewNumbers),
            ScanOutcome::Found {
                balance,
                amount,
                description_end,
            } => {
                let description = description(&tokens, description_end);
                let bucket = self.classifier.classify(&description);
                Ok(TransactionRecord::new(
                    date,
                    description,
                    bucket,
                    amount.value,
                    balance.value,
                ))
            }
        }
    }

    /// Extract records from pages in document order.
    ///
    /// Each page is a sequence of lines; a "line" may itself hold several
    /// newline-separated lines, so raw page text can be passed as a
    /// single-element page. An empty page contributes nothing.
    pub fn extract<P, L>(&self, lines_by_page: P) -> ResultSet
    where
        P: IntoIterator,
        P::Item: IntoIterator<Item = L>,
        L: AsRef<str>,
    {
        let mut out = ResultSet::new();

        for (page_no, page) in lines_by_page.into_iter().enumerate() {
            let before = out.len();
            for chunk in page {
                for line in split_lines(chunk.as_ref()) {
                    match self.parse_line(line) {
                        Ok(record) => out.push(record),
                        Err(Skip::NoDate) => trace!(page = page_no + 1, line, "no leading date"),
                        Err(Skip::TooFewNumbers) => {
                            debug!(page = page_no + 1, line, "dated line without amount and balance")
                        }
                    }
                }
            }
            debug!(page = page_no + 1, records = out.len() - before, "page extracted");
        }

        out.finalize()
    }

    /// Extract from raw per-page text.
    pub fn extract_pages<S: AsRef<str>>(&self, pages: &[S]) -> ResultSet {
        self.extract(pages.iter().map(|p| [p.as_ref()]))
    }
}
