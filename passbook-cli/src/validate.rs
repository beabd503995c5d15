//! Checks run on an extracted result before it is accepted: column schema,
//! non-emptiness, and optionally a row-by-row comparison with a reference CSV.

use anyhow::{Result, bail};
use passbook_core::{COLUMNS, ResultSet, TransactionRecord, columns_match};

/// Amounts closer than this compare equal
const TOLERANCE: f64 = 0.005;

#[derive(Debug, Clone, PartialEq)]
pub struct Validation {
    pub expected: Vec<String>,
    pub actual: Vec<String>,
    pub rows: usize,
}

impl Validation {
    pub fn columns_ok(&self) -> bool {
        columns_match(&self.actual, &self.expected)
    }

    pub fn is_valid(&self) -> bool {
        self.columns_ok() && self.rows > 0
    }

    pub fn ensure(&self) -> Result<()> {
        if !self.is_valid() {
            bail!(
                "invalid output: expected columns {:?} and non-empty data, got {:?} with {} rows",
                self.expected,
                self.actual,
                self.rows
            );
        }
        Ok(())
    }
}

pub fn validate(rs: &ResultSet, expected: &[String]) -> Validation {
    Validation {
        expected: expected.to_vec(),
        actual: rs.columns(),
        rows: rs.len(),
    }
}

/// One disagreement between extracted and reference rows
#[derive(Debug, Clone, PartialEq)]
pub struct CellDiff {
    /// 1-based data row
    pub row: usize,
    pub column: &'static str,
    pub actual: String,
    pub expected: String,
}

/// Compare cell by cell. Rows present on only one side are reported against
/// the `Date` column with an empty counterpart.
pub fn diff(actual: &ResultSet, expected: &ResultSet) -> Vec<CellDiff> {
    let rows = actual.len().max(expected.len());
    let mut out = Vec::new();

    for i in 0..rows {
        match (actual.records().get(i), expected.records().get(i)) {
            (Some(a), Some(e)) => out.extend(diff_row(i + 1, a, e)),
            (a, e) => out.push(CellDiff {
                row: i + 1,
                column: COLUMNS[0],
                actual: a.map(|r| r.date.clone()).unwrap_or_default(),
                expected: e.map(|r| r.date.clone()).unwrap_or_default(),
            }),
        }
    }
    out
}

fn diff_row(row: usize, a: &TransactionRecord, e: &TransactionRecord) -> Vec<CellDiff> {
    let mut out = Vec::new();
    let mut text = |column: &'static str, x: &str, y: &str| {
        if x != y {
            out.push(CellDiff {
                row,
                column,
                actual: x.to_string(),
                expected: y.to_string(),
            });
        }
    };
    text(COLUMNS[0], &a.date, &e.date);
    text(COLUMNS[1], &a.description, &e.description);

    let numeric = [
        (COLUMNS[2], a.debit_amount, e.debit_amount),
        (COLUMNS[3], a.credit_amount, e.credit_amount),
        (COLUMNS[4], a.balance, e.balance),
    ];
    for (column, x, y) in numeric {
        if !amounts_equal(x, y) {
            out.push(CellDiff {
                row,
                column,
                actual: show(x),
                expected: show(y),
            });
        }
    }
    out
}

/// Reference files leave the unused amount column blank where we write 0, so
/// a blank reference cell matches our zero. A missing value on our side only
/// matches a blank reference cell.
fn amounts_equal(actual: Option<f64>, expected: Option<f64>) -> bool {
    match (actual, expected) {
        (Some(a), Some(e)) => (a - e).abs() < TOLERANCE,
        (Some(a), None) => a == 0.0,
        (None, None) => true,
        (None, Some(_)) => false,
    }
}

fn show(v: Option<f64>) -> String {
    v.map(|v| v.to_string()).unwrap_or_default()
}
