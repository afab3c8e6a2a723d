//! Duplicate groups derived from the fingerprint index.
//!
//! A [`DuplicateGroup`] is never stored during traversal. It is computed
//! once, after the walk, by filtering the [`FingerprintIndex`] for
//! fingerprints shared by two or more paths.
//!
//! [`FingerprintIndex`]: super::FingerprintIndex

use std::path::PathBuf;

use crate::scanner::Fingerprint;

/// Files sharing one content fingerprint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateGroup {
    /// Shared content fingerprint
    pub fingerprint: Fingerprint,
    /// Member paths, in traversal order
    pub paths: Vec<PathBuf>,
}

impl DuplicateGroup {
    /// Create a new duplicate group.
    ///
    /// # Arguments
    ///
    /// * `fingerprint` - Content fingerprint shared by every path
    /// * `paths` - Paths in traversal order
    #[must_use]
    pub fn new(fingerprint: Fingerprint, paths: Vec<PathBuf>) -> Self {
        Self { fingerprint, paths }
    }

    /// Number of files in this group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Check if this group is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Number of redundant copies (all members minus one).
    #[must_use]
    pub fn duplicate_count(&self) -> usize {
        self.paths.len().saturating_sub(1)
    }

    /// Fingerprint as a hex string.
    #[must_use]
    pub fn hash_hex(&self) -> &str {
        self.fingerprint.as_str()
    }
}
