//! JSON output formatter for duplicate scan results.
//!
//! Provides machine-readable JSON output for scripting and automation.
//!
//! # Output Schema
//!
//! ```json
//! {
//!   "duplicates": [
//!     {
//!       "hash": "5D41402ABC4B2A76B9719D911017C592",
//!       "files": ["/path/to/a.txt", "/path/to/b.txt"]
//!     }
//!   ],
//!   "summary": {
//!     "directories": 3,
//!     "files": 100,
//!     "skipped_files": 1,
//!     "duplicate_groups": 5,
//!     "duplicate_files": 7,
//!     "scan_duration_ms": 1234,
//!     "errors": ["Permission denied: /path/to/secret"]
//!   }
//! }
//! ```

use std::io::Write;

use serde::Serialize;

use crate::duplicates::{DuplicateGroup, ScanSummary};

/// A single duplicate group in JSON format.
#[derive(Debug, Clone, Serialize)]
pub struct JsonDuplicateGroup {
    /// Uppercase hex fingerprint
    pub hash: String,
    /// Paths of every file in the group, in traversal order
    pub files: Vec<String>,
}

impl JsonDuplicateGroup {
    /// Create a JSON duplicate group from a DuplicateGroup.
    #[must_use]
    pub fn from_duplicate_group(group: &DuplicateGroup) -> Self {
        Self {
            hash: group.hash_hex().to_string(),
            files: group
                .paths
                .iter()
                .map(|p| p.to_string_lossy().into_owned())
                .collect(),
        }
    }
}

/// Summary statistics in JSON format.
#[derive(Debug, Clone, Serialize)]
pub struct JsonSummary {
    /// Directories processed
    pub directories: usize,
    /// Files hashed
    pub files: usize,
    /// Files that could not be read
    pub skipped_files: usize,
    /// Number of duplicate groups
    pub duplicate_groups: usize,
    /// Total number of redundant copies
    pub duplicate_files: usize,
    /// Duration of the scan in milliseconds
    pub scan_duration_ms: u64,
    /// Non-fatal errors, one message each
    pub errors: Vec<String>,
}

impl JsonSummary {
    /// Create a JSON summary from a ScanSummary.
    #[must_use]
    pub fn from_scan_summary(summary: &ScanSummary) -> Self {
        Self {
            directories: summary.counters.directories,
            files: summary.counters.files,
            skipped_files: summary.counters.skipped_files,
            duplicate_groups: summary.duplicate_groups,
            duplicate_files: summary.duplicate_files,
            scan_duration_ms: summary.scan_duration.as_millis() as u64,
            errors: summary.scan_errors.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Complete JSON output structure.
#[derive(Debug, Clone, Serialize)]
pub struct JsonOutput {
    /// List of duplicate groups
    pub duplicates: Vec<JsonDuplicateGroup>,
    /// Scan summary statistics
    pub summary: JsonSummary,
}

impl JsonOutput {
    /// Create a new JSON output from duplicate groups and summary.
    #[must_use]
    pub fn new(groups: &[DuplicateGroup], summary: &ScanSummary) -> Self {
        Self {
            duplicates: groups
                .iter()
                .map(JsonDuplicateGroup::from_duplicate_group)
                .collect(),
            summary: JsonSummary::from_scan_summary(summary),
        }
    }

    /// Serialize to pretty-printed JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Write pretty-printed JSON followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<(), super::OutputError> {
        serde_json::to_writer_pretty(&mut *writer, self)?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}
