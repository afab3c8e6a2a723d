//! Multi-root duplicate scan.
//!
//! # Overview
//!
//! [`DuplicateFinder`] owns a validated [`ScanConfig`] and runs the whole
//! pipeline:
//!
//! 1. Traverse each root in the order it was supplied, hashing files into a
//!    single [`FingerprintIndex`] and accumulating [`Counters`]
//! 2. Derive the duplicate groups from the index once traversal is over
//! 3. Summarise counters, errors and timing in a [`ScanSummary`]
//!
//! # Example
//!
//! ```no_run
//! use dupcheck::config::ScanConfig;
//! use dupcheck::duplicates::DuplicateFinder;
//! use dupcheck::scanner::WalkerConfig;
//! use std::path::PathBuf;
//!
//! let config = ScanConfig::new(vec![PathBuf::from(".")], WalkerConfig::default()).unwrap();
//! let finder = DuplicateFinder::new(config);
//! let (groups, summary) = finder.find_duplicates();
//! println!("Found {} duplicate groups in {} files", groups.len(), summary.counters.files);
//! ```

use std::time::{Duration, Instant};

use super::{DuplicateGroup, FingerprintIndex};
use crate::config::ScanConfig;
use crate::logging::PROGRESS_LEVEL;
use crate::scanner::{Counters, ScanError, Walker};

/// Summary statistics from a duplicate scan.
#[derive(Debug, Default)]
pub struct ScanSummary {
    /// Files, directories and skipped files seen during traversal
    pub counters: Counters,
    /// Number of confirmed duplicate groups
    pub duplicate_groups: usize,
    /// Total number of redundant copies (group members minus one, summed)
    pub duplicate_files: usize,
    /// Duration of the entire scan
    pub scan_duration: Duration,
    /// Non-fatal errors encountered during the scan
    pub scan_errors: Vec<ScanError>,
}

impl ScanSummary {
    /// Check whether anything was skipped because of an error.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.scan_errors.is_empty()
    }
}

/// Runs a complete duplicate scan over every configured root.
#[derive(Debug, Clone)]
pub struct DuplicateFinder {
    config: ScanConfig,
    walker: Walker,
}

impl DuplicateFinder {
    /// Create a new duplicate finder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Validated scan configuration
    #[must_use]
    pub fn new(config: ScanConfig) -> Self {
        let walker = Walker::new(config.walker.clone());
        Self { config, walker }
    }

    /// The configuration this finder runs with.
    #[must_use]
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Scan every root and build the fingerprint index.
    ///
    /// Roots are traversed in the order they were supplied, all feeding the
    /// same index, so a file under one root can duplicate a file under
    /// another.
    #[must_use]
    pub fn build_index(&self) -> (FingerprintIndex, Counters, Vec<ScanError>) {
        let mut index = FingerprintIndex::new();
        let mut counters = Counters::default();
        let mut errors = Vec::new();

        for root in &self.config.roots {
            log::log!(PROGRESS_LEVEL, "Scanning {}", root.display());
            let mut root_counters = Counters::default();
            errors.extend(self.walker.traverse(root, &mut index, &mut root_counters));
            log::trace!(
                "{}: {} directories, {} files",
                root.display(),
                root_counters.directories,
                root_counters.files
            );
            counters.merge(root_counters);
        }

        (index, counters, errors)
    }

    /// Find all duplicate files under the configured roots.
    ///
    /// # Returns
    ///
    /// A tuple of:
    /// - `Vec<DuplicateGroup>` - Groups of two or more paths sharing a fingerprint
    /// - `ScanSummary` - Statistics about the scan
    #[must_use]
    pub fn find_duplicates(&self) -> (Vec<DuplicateGroup>, ScanSummary) {
        let start_time = Instant::now();

        let (index, counters, scan_errors) = self.build_index();
        let groups = index.into_duplicate_groups();

        let summary = ScanSummary {
            counters,
            duplicate_groups: groups.len(),
            duplicate_files: groups.iter().map(DuplicateGroup::duplicate_count).sum(),
            scan_duration: start_time.elapsed(),
            scan_errors,
        };

        log::log!(
            PROGRESS_LEVEL,
            "Scan complete: {} directories, {} files, {} duplicate groups in {:.2?}",
            summary.counters.directories,
            summary.counters.files,
            summary.duplicate_groups,
            summary.scan_duration
        );
        if summary.has_errors() {
            log::warn!(
                "{} entries could not be scanned and were skipped",
                summary.scan_errors.len()
            );
        }

        (groups, summary)
    }
}
