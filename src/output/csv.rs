//! CSV output formatter for duplicate scan results.
//!
//! One row is generated for each file in a duplicate group.
//!
//! # Columns
//!
//! - `group_id`: 1-based position of the group in the report
//! - `hash`: Uppercase hex fingerprint
//! - `path`: Path to the file

use std::io;

use serde::Serialize;

use crate::duplicates::DuplicateGroup;

/// A single row in the CSV output.
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    group_id: usize,
    hash: &'a str,
    path: String,
}

/// CSV output formatter.
pub struct CsvOutput<'a> {
    groups: &'a [DuplicateGroup],
}

impl<'a> CsvOutput<'a> {
    /// Create a new CSV output formatter.
    #[must_use]
    pub fn new(groups: &'a [DuplicateGroup]) -> Self {
        Self { groups }
    }

    /// Write the CSV output to the given writer.
    ///
    /// # Errors
    ///
    /// Returns an error if writing or serialization fails.
    pub fn write_to<W: io::Write>(&self, writer: W) -> Result<(), super::OutputError> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        // The header comes from the first serialized row, so an empty
        // report still needs one written by hand.
        if self.groups.is_empty() {
            csv_writer.write_record(["group_id", "hash", "path"])?;
        }

        for (idx, group) in self.groups.iter().enumerate() {
            for path in &group.paths {
                csv_writer.serialize(CsvRow {
                    group_id: idx + 1,
                    hash: group.hash_hex(),
                    path: path.to_string_lossy().into_owned(),
                })?;
            }
        }

        csv_writer.flush()?;
        Ok(())
    }

    /// Generate CSV output as a string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_csv_string(&self) -> Result<String, super::OutputError> {
        let mut buffer = Vec::new();
        self.write_to(&mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}
