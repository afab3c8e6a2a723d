//! Duplicate detection module.
//!
//! This module provides functionality for:
//! - Recording fingerprints as files are discovered ([`FingerprintIndex`])
//! - Deriving duplicate groups once traversal completes ([`DuplicateGroup`])
//! - Running a complete multi-root scan ([`DuplicateFinder`])

pub mod finder;
pub mod groups;
pub mod index;

pub use finder::{DuplicateFinder, ScanSummary};
pub use groups::DuplicateGroup;
pub use index::FingerprintIndex;
