//! Transaction records and the ordered result set produced by extraction.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

use crate::numeric::{coerce, normalize};
use crate::schema::COLUMNS;

/// Which amount column a transaction amount lands in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Bucket {
    #[default]
    Debit,
    Credit,
}

/// One statement row in the fixed five-column schema.
///
/// Numeric columns are `Option<f64>`: `None` means the cell held no valid
/// number, which is different from a zero amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Debit Amt")]
    pub debit_amount: Option<f64>,
    #[serde(rename = "Credit Amt")]
    pub credit_amount: Option<f64>,
    #[serde(rename = "Balance")]
    pub balance: Option<f64>,
}

impl TransactionRecord {
    /// Place `amount` in its bucket and zero the other amount column.
    pub fn new(
        date: impl Into<String>,
        description: impl Into<String>,
        bucket: Bucket,
        amount: f64,
        balance: f64,
    ) -> Self {
        let (debit, credit) = match bucket {
            Bucket::Debit => (amount, 0.0),
            Bucket::Credit => (0.0, amount),
        };
        Self {
            date: date.into(),
            description: description.into(),
            debit_amount: Some(debit),
            credit_amount: Some(credit),
            balance: Some(balance),
        }
    }

    /// Statement dates are `DD-MM-YYYY`
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%d-%m-%Y").ok()
    }

    /// Bucket holding a non-zero amount, if any
    pub fn bucket(&self) -> Option<Bucket> {
        match (self.debit_amount, self.credit_amount) {
            (_, Some(c)) if c != 0.0 => Some(Bucket::Credit),
            (Some(d), _) if d != 0.0 => Some(Bucket::Debit),
            _ => None,
        }
    }

    fn coerced(self) -> Self {
        Self {
            debit_amount: coerce(self.debit_amount),
            credit_amount: coerce(self.credit_amount),
            balance: coerce(self.balance),
            ..self
        }
    }

    fn from_cells(cells: &csv::StringRecord) -> Self {
        let cell = |i: usize| cells.get(i).unwrap_or("");
        Self {
            date: cell(0).trim().to_string(),
            description: cell(1).trim().to_string(),
            debit_amount: normalize(cell(2)),
            credit_amount: normalize(cell(3)),
            balance: normalize(cell(4)),
        }
    }
}

/// Ordered extraction output. Empty is a valid result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultSet {
    records: Vec<TransactionRecord>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: TransactionRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[TransactionRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TransactionRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Column names in output order
    pub fn columns(&self) -> Vec<String> {
        COLUMNS.iter().map(|c| c.to_string()).collect()
    }

    /// Final pass over the numeric columns: anything that is not a finite
    /// number becomes a missing value.
    pub fn finalize(self) -> Self {
        Self {
            records: self.records.into_iter().map(TransactionRecord::coerced).collect(),
        }
    }

    /// Sum of (debit, credit) over rows with a present value
    pub fn totals(&self) -> (f64, f64) {
        self.records.iter().fold((0.0, 0.0), |(d, c), r| {
            (d + r.debit_amount.unwrap_or(0.0), c + r.credit_amount.unwrap_or(0.0))
        })
    }

    /// Earliest and latest parseable record date
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let dates: Vec<NaiveDate> = self.records.iter().filter_map(|r| r.parsed_date()).collect();
        let min = dates.iter().min()?;
        let max = dates.iter().max()?;
        Some((*min, *max))
    }

    /// Write as CSV with the schema header. Missing values are empty cells.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
        wtr.write_record(COLUMNS).context("writing CSV header")?;
        for record in &self.records {
            wtr.serialize(record).context("writing CSV row")?;
        }
        wtr.flush().context("flushing CSV output")?;
        Ok(())
    }

    pub fn to_csv_string(&self) -> Result<String> {
        let mut buf = Vec::new();
        self.write_csv(&mut buf)?;
        String::from_utf8(buf).context("CSV output is not UTF-8")
    }

    /// Read a reference CSV (header row, then five columns by position).
    /// Numeric cells go through [`normalize`], so `-` or junk become missing.
    pub fn read_csv<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let mut out = Self::new();
        for result in rdr.records() {
            let cells = result.context("reading CSV row")?;
            if cells.iter().all(|c| c.trim().is_empty()) {
                continue;
            }
            out.push(TransactionRecord::from_cells(&cells));
        }
        Ok(out)
    }
}

impl From<Vec<TransactionRecord>> for ResultSet {
    fn from(records: Vec<TransactionRecord>) -> Self {
        Self { records }
    }
}

impl IntoIterator for ResultSet {
    type Item = TransactionRecord;
    type IntoIter = std::vec::IntoIter<TransactionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a TransactionRecord;
    type IntoIter = std::slice::Iter<'a, TransactionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
