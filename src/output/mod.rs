//! Output formatters for duplicate scan results.
//!
//! This module provides different output formats for scan results:
//! - Plain text for people ([`text`])
//! - JSON for automation and scripting ([`json`])
//! - CSV for spreadsheet import ([`csv`])
//!
//! # Example
//!
//! ```no_run
//! use dupcheck::cli::OutputFormat;
//! use dupcheck::config::ScanConfig;
//! use dupcheck::duplicates::DuplicateFinder;
//! use dupcheck::output::write_report;
//! use dupcheck::scanner::WalkerConfig;
//! use std::path::PathBuf;
//!
//! let config = ScanConfig::new(vec![PathBuf::from(".")], WalkerConfig::default()).unwrap();
//! let (groups, summary) = DuplicateFinder::new(config).find_duplicates();
//!
//! write_report(OutputFormat::Text, &groups, &summary, &mut std::io::stdout()).unwrap();
//! ```

pub mod csv;
pub mod json;
pub mod text;

use std::io::Write;

// Re-export main types
pub use self::csv::CsvOutput;
pub use self::json::JsonOutput;

use crate::cli::OutputFormat;
use crate::duplicates::{DuplicateGroup, ScanSummary};

/// Errors that can occur while writing a report.
#[derive(thiserror::Error, Debug)]
pub enum OutputError {
    /// I/O error during writing.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV serialization error.
    #[error("CSV error: {0}")]
    Csv(#[from] ::csv::Error),
}

/// Render the report in `format` and write it to `writer`.
///
/// # Errors
///
/// Returns [`OutputError`] if serialization or writing fails.
pub fn write_report<W: Write>(
    format: OutputFormat,
    groups: &[DuplicateGroup],
    summary: &ScanSummary,
    writer: &mut W,
) -> Result<(), OutputError> {
    match format {
        OutputFormat::Text => {
            writer.write_all(text::render(groups, &summary.counters).as_bytes())?;
        }
        OutputFormat::Json => JsonOutput::new(groups, summary).write_to(writer)?,
        OutputFormat::Csv => CsvOutput::new(groups).write_to(&mut *writer)?,
    }
    writer.flush()?;
    Ok(())
}
