//! Plain-text and JSON renderings of the catalog for the non-interactive
//! `--list` / `--show` modes. Prose is re-flowed to the terminal report
//! width; sample code is emitted verbatim.

use serde::Serialize;
use std::fmt;
use textwrap::Options;

use crate::core::catalog::{AlgorithmEntry, COMMON_TIPS, Catalog, CatalogError};

#[derive(Debug)]
pub enum ReportError {
    NotFound(CatalogError),
    Json(serde_json::Error),
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportError::NotFound(e) => write!(f, "{e}"),
            ReportError::Json(e) => write!(f, "JSON encoding failed: {e}"),
        }
    }
}

impl std::error::Error for ReportError {}

impl From<CatalogError> for ReportError {
    fn from(e: CatalogError) -> Self {
        ReportError::NotFound(e)
    }
}

impl From<serde_json::Error> for ReportError {
    fn from(e: serde_json::Error) -> Self {
        ReportError::Json(e)
    }
}

/// Full `--list` output, trailing newline included.
pub fn list(catalog: &Catalog, json: bool) -> Result<String, ReportError> {
    if json {
        Ok(list_json(catalog)? + "\n")
    } else {
        Ok(list_text(catalog))
    }
}

/// Full `--show KEY` output. Unknown keys fail with `ReportError::NotFound`.
pub fn show(catalog: &Catalog, key: &str, json: bool) -> Result<String, ReportError> {
    let entry = catalog.lookup(key)?;
    if json {
        Ok(entry_json(entry)? + "\n")
    } else {
        Ok(entry_text(entry))
    }
}

/// One line per key, catalog order.
pub fn list_text(catalog: &Catalog) -> String {
    catalog.keys().map(|key| format!("{key}\n")).collect()
}

pub fn list_json(catalog: &Catalog) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&catalog.keys().collect::<Vec<_>>())
}

/// Column width for wrapped prose in text reports.
pub const REPORT_WIDTH: usize = 80;

pub fn entry_text(entry: &AlgorithmEntry) -> String {
    let mut out = format!("{} ({})\nDifficulty: {}\n\n", entry.name, entry.key, entry.difficulty);
    out.push_str("Algorithm Details\n");
    out.push_str(&textwrap::fill(entry.description, REPORT_WIDTH));
    out.push_str("\n\nImplementation Code\n");
    out.push_str(entry.sample_code);
    out.push_str("\n\nPro Tips\n");
    let bullet = Options::new(REPORT_WIDTH)
        .initial_indent("• ")
        .subsequent_indent("  ");
    for tip in COMMON_TIPS.iter().chain(entry.extra_note.iter()) {
        out.push_str(&textwrap::fill(tip, &bullet));
        out.push('\n');
    }
    out
}

#[derive(Serialize)]
struct EntryReport<'a> {
    #[serde(flatten)]
    entry: &'a AlgorithmEntry,
    tips: Vec<&'static str>,
}

/// The entry's fields plus the full tip list it would be shown with.
pub fn entry_json(entry: &AlgorithmEntry) -> serde_json::Result<String> {
    let report = EntryReport {
        entry,
        tips: COMMON_TIPS.iter().chain(entry.extra_note.iter()).copied().collect(),
    };
    serde_json::to_string_pretty(&report)
}
