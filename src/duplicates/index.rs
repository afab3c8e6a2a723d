//! Fingerprint index: content digest to the paths that produced it.
//!
//! The index is written by a single traversal and read afterwards. Groups
//! are kept in the order their fingerprint was first recorded, and paths
//! within a group in the order they were recorded, so a stable traversal
//! order gives a reproducible report.
//!
//! # Example
//!
//! ```
//! use dupcheck::duplicates::FingerprintIndex;
//! use dupcheck::scanner::Fingerprint;
//! use std::path::PathBuf;
//!
//! let mut index = FingerprintIndex::new();
//! let hello = Fingerprint::from_hex("AA".repeat(16));
//! let world = Fingerprint::from_hex("BB".repeat(16));
//!
//! index.record_file(hello.clone(), PathBuf::from("/a.txt"));
//! index.record_file(world, PathBuf::from("/b.txt"));
//! index.record_file(hello, PathBuf::from("/c.txt"));
//!
//! let groups = index.duplicate_groups();
//! assert_eq!(groups.len(), 1);
//! assert_eq!(groups[0].paths, vec![PathBuf::from("/a.txt"), PathBuf::from("/c.txt")]);
//! ```

use std::collections::HashMap;
use std::path::PathBuf;

use super::DuplicateGroup;
use crate::scanner::Fingerprint;

/// Insertion-ordered map from fingerprint to file paths.
#[derive(Debug, Clone, Default)]
pub struct FingerprintIndex {
    /// Position of each fingerprint in `entries`
    positions: HashMap<Fingerprint, usize>,
    /// Groups in first-insertion order
    entries: Vec<(Fingerprint, Vec<PathBuf>)>,
}

impl FingerprintIndex {
    /// Create an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `path` to the group for `fingerprint`, creating the group if new.
    pub fn record_file(&mut self, fingerprint: Fingerprint, path: PathBuf) {
        if let Some(&position) = self.positions.get(&fingerprint) {
            self.entries[position].1.push(path);
        } else {
            self.positions.insert(fingerprint.clone(), self.entries.len());
            self.entries.push((fingerprint, vec![path]));
        }
    }

    /// Paths recorded under `fingerprint`, if any.
    #[must_use]
    pub fn get(&self, fingerprint: &Fingerprint) -> Option<&[PathBuf]> {
        self.positions
            .get(fingerprint)
            .map(|&position| self.entries[position].1.as_slice())
    }

    /// Number of distinct fingerprints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of paths recorded across all fingerprints.
    #[must_use]
    pub fn total_paths(&self) -> usize {
        self.entries.iter().map(|(_, paths)| paths.len()).sum()
    }

    /// Iterate over every group, singletons included, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Fingerprint, &[PathBuf])> {
        self.entries
            .iter()
            .map(|(fingerprint, paths)| (fingerprint, paths.as_slice()))
    }

    /// Groups with more than one path, in first-insertion order of their
    /// fingerprint.
    #[must_use]
    pub fn duplicate_groups(&self) -> Vec<DuplicateGroup> {
        self.entries
            .iter()
            .filter(|(_, paths)| paths.len() > 1)
            .map(|(fingerprint, paths)| DuplicateGroup::new(fingerprint.clone(), paths.clone()))
            .collect()
    }

    /// Consume the index, keeping only groups with more than one path.
    #[must_use]
    pub fn into_duplicate_groups(self) -> Vec<DuplicateGroup> {
        self.entries
            .into_iter()
            .filter(|(_, paths)| paths.len() > 1)
            .map(|(fingerprint, paths)| DuplicateGroup::new(fingerprint, paths))
            .collect()
    }
}
