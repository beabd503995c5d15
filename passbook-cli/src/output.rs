use anyhow::{Context, Result};
use passbook_core::ResultSet;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::info;

use crate::config::Format;

/// Write `rs` to `path`, or stdout when no path is given.
pub fn write_result(rs: &ResultSet, format: Format, path: Option<&Path>) -> Result<()> {
    match path {
        Some(p) => {
            let file = File::create(p).with_context(|| format!("create {}", p.display()))?;
            render(rs, format, BufWriter::new(file))
                .with_context(|| format!("write {}", p.display()))?;
            info!(path = %p.display(), rows = rs.len(), "wrote result");
        }
        None => render(rs, format, io::stdout().lock())?,
    }
    Ok(())
}

fn render<W: Write>(rs: &ResultSet, format: Format, mut w: W) -> Result<()> {
    match format {
        Format::Csv => rs.write_csv(w)?,
        Format::Json => {
            serde_json::to_writer_pretty(&mut w, rs).context("serialize JSON")?;
            writeln!(w)?;
            w.flush()?;
        }
    }
    Ok(())
}

/// Human summary: rows, date span, and amount totals
pub fn summary(rs: &ResultSet) -> String {
    let (debits, credits) = rs.totals();
    let span = rs
        .date_range()
        .map(|(lo, hi)| format!("{} to {}", lo.format("%Y-%m-%d"), hi.format("%Y-%m-%d")))
        .unwrap_or_else(|| "no dated rows".to_string());
    format!(
        "{} transactions | {} | debits={:.2} credits={:.2}",
        rs.len(),
        span,
        debits,
        credits
    )
}
