//! Load per-page text from a statement document.
//!
//! PDFs go through `pdf-extract`; plain text files are read as-is. In both
//! cases pages are separated by form feed (`\x0C`).

use anyhow::{Context, Result, anyhow};
use clap::ValueEnum;
use std::fs;
use std::path::Path;
use tracing::info;

const PAGE_BREAK: char = '\u{000C}';

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Source {
    Pdf,
    Text,
}

impl Source {
    /// Guess from the file extension; anything but `.pdf` is text
    pub fn detect(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("pdf") => Source::Pdf,
            _ => Source::Text,
        }
    }
}

/// Page texts in document order. A page with no text is an empty string.
pub fn load_pages(path: &Path, source: Option<Source>) -> Result<Vec<String>> {
    let source = source.unwrap_or_else(|| Source::detect(path));
    let full_text = match source {
        Source::Pdf => pdf_extract::extract_text(path)
            .map_err(|e| anyhow!("extracting text from {}: {e}", path.display()))?,
        Source::Text => {
            fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?
        }
    };

    let pages = split_pages(&full_text);
    info!(path = %path.display(), ?source, pages = pages.len(), "loaded document");
    Ok(pages)
}

pub fn split_pages(text: &str) -> Vec<String> {
    let mut pages: Vec<String> = text.split(PAGE_BREAK).map(|p| p.to_string()).collect();
    // a trailing form feed closes the last page rather than opening a new one
    if pages.len() > 1 && pages.last().is_some_and(|p| p.trim().is_empty()) {
        pages.pop();
    }
    pages
}
