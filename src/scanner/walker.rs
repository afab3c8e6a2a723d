//! Depth-first directory walker feeding the fingerprint index.
//!
//! # Overview
//!
//! [`Walker::traverse`] visits one root at a time. For every directory it
//! hashes the direct regular-file children first, then descends into each
//! child directory in turn, finishing one subtree before the next sibling.
//! The walk itself is driven by [`walkdir`], which keeps an explicit stack
//! of open directories, so deep trees do not grow the call stack.
//!
//! # Rules
//!
//! - A directory whose base name is in [`WalkerConfig::exclusions`] is
//!   skipped with its whole subtree and is not counted. Roots are checked
//!   too.
//! - Without [`WalkerConfig::recursive`], only the direct children of each
//!   root are hashed; subdirectories are neither counted nor entered.
//! - Files that cannot be read are reported and left out of the index and
//!   out of [`Counters::files`]; they are tallied in
//!   [`Counters::skipped_files`] instead.
//! - Missing roots and unreadable directories are reported and skipped.
//! - Symbolic links are skipped unless [`WalkerConfig::follow_symlinks`] is
//!   set, in which case links looping back to an ancestor are reported.
//!
//! # Example
//!
//! ```no_run
//! use dupcheck::duplicates::FingerprintIndex;
//! use dupcheck::scanner::{Counters, Walker, WalkerConfig};
//! use std::path::Path;
//!
//! let config = WalkerConfig {
//!     recursive: true,
//!     exclusions: ["node_modules".to_string()].into_iter().collect(),
//!     ..Default::default()
//! };
//!
//! let walker = Walker::new(config);
//! let mut index = FingerprintIndex::new();
//! let mut counters = Counters::default();
//! let errors = walker.traverse(Path::new("/home/user/projects"), &mut index, &mut counters);
//! println!("{} duplicate groups, {} warnings", index.duplicate_groups().len(), errors.len());
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use super::hasher::Hasher;
use super::{Counters, ScanError, WalkerConfig};
use crate::duplicates::FingerprintIndex;
use crate::logging::PROGRESS_LEVEL;

/// Depth-first directory walker.
#[derive(Debug, Clone)]
pub struct Walker {
    /// Walker configuration
    config: WalkerConfig,
    /// Content hasher for discovered files
    hasher: Hasher,
}

impl Walker {
    /// Create a new walker.
    ///
    /// # Arguments
    ///
    /// * `config` - Walker configuration options
    #[must_use]
    pub fn new(config: WalkerConfig) -> Self {
        let hasher = Hasher::new(config.algorithm);
        Self { config, hasher }
    }

    /// The configuration this walker was built with.
    #[must_use]
    pub fn config(&self) -> &WalkerConfig {
        &self.config
    }

    /// Walk `root`, hashing every regular file into `index` and updating
    /// `counters`.
    ///
    /// Nothing here is fatal: every problem is logged as a warning, skipped,
    /// and returned so the caller can summarise it.
    pub fn traverse(
        &self,
        root: &Path,
        index: &mut FingerprintIndex,
        counters: &mut Counters,
    ) -> Vec<ScanError> {
        let mut errors = Vec::new();

        let root = match resolve_root(root) {
            Ok(root) => root,
            Err(e) => {
                log::warn!("{}", e);
                errors.push(e);
                return errors;
            }
        };

        let max_depth = if self.config.recursive { usize::MAX } else { 1 };

        let walk = WalkDir::new(&root)
            .follow_links(self.config.follow_symlinks)
            .max_depth(max_depth)
            // Stable sort: files keep native order, then directories in native order
            .sort_by(|a, b| a.file_type().is_dir().cmp(&b.file_type().is_dir()))
            .into_iter()
            .filter_entry(|entry| !self.is_excluded_dir(entry));

        // Directory counted most recently, until its first child shows up.
        // A listing failure for it arrives as the very next item.
        let mut just_counted: Option<PathBuf> = None;

        for result in walk {
            match result {
                Ok(entry) => {
                    just_counted = None;
                    if is_directory(&entry) {
                        if entry.depth() == 0 || self.config.recursive {
                            log::log!(
                                PROGRESS_LEVEL,
                                "Processing: {}",
                                entry.path().display()
                            );
                            counters.directories += 1;
                            just_counted = Some(entry.into_path());
                        }
                    } else if entry.file_type().is_file() {
                        if let Err(e) = self.hash_into(entry.into_path(), index, counters) {
                            errors.push(e);
                        }
                    } else if entry.file_type().is_symlink() {
                        log::trace!("Skipping symlink: {}", entry.path().display());
                    } else {
                        log::trace!("Skipping special file: {}", entry.path().display());
                    }
                }
                Err(e) => {
                    let unreadable_dir =
                        just_counted.is_some() && e.path() == just_counted.as_deref();
                    if unreadable_dir {
                        counters.directories -= 1;
                        just_counted = None;
                    }
                    let error = convert_walk_error(e, &root, unreadable_dir);
                    log::warn!("{}", error);
                    errors.push(error);
                }
            }
        }

        errors
    }

    /// Hash a single file and record it.
    fn hash_into(
        &self,
        path: PathBuf,
        index: &mut FingerprintIndex,
        counters: &mut Counters,
    ) -> Result<(), ScanError> {
        match self.hasher.hash_file(&path) {
            Ok(fingerprint) => {
                log::trace!("{} {}", fingerprint, path.display());
                index.record_file(fingerprint, path);
                counters.files += 1;
                Ok(())
            }
            Err(e) => {
                counters.skipped_files += 1;
                log::warn!("Skipping unreadable file: {}", e);
                Err(e.into())
            }
        }
    }

    /// Check whether an entry is a directory whose name is excluded.
    fn is_excluded_dir(&self, entry: &DirEntry) -> bool {
        if !is_directory(entry) {
            return false;
        }
        let excluded = entry
            .file_name()
            .to_str()
            .is_some_and(|name| self.config.is_excluded(name));
        if excluded {
            log::debug!("Skipping excluded directory: {}", entry.path().display());
        }
        excluded
    }
}

/// Make `root` absolute and check that it is an existing directory.
fn resolve_root(root: &Path) -> Result<PathBuf, ScanError> {
    let absolute = std::path::absolute(root).map_err(|source| ScanError::Io {
        path: root.to_path_buf(),
        source,
    })?;

    match fs::metadata(&absolute) {
        Ok(metadata) if metadata.is_dir() => Ok(absolute),
        Ok(_) => Err(ScanError::NotADirectory(absolute)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(ScanError::RootNotFound(absolute)),
        Err(source) => Err(ScanError::DirectoryUnreadable {
            path: absolute,
            source,
        }),
    }
}

/// Directories, including a root given as a symlink to a directory.
fn is_directory(entry: &DirEntry) -> bool {
    entry.file_type().is_dir() || (entry.depth() == 0 && entry.path().is_dir())
}

/// Convert a walkdir error into a [`ScanError`].
fn convert_walk_error(error: walkdir::Error, root: &Path, unreadable_dir: bool) -> ScanError {
    let path = error.path().unwrap_or(root).to_path_buf();

    if let Some(ancestor) = error.loop_ancestor() {
        return ScanError::SymlinkLoop {
            ancestor: ancestor.to_path_buf(),
            path,
        };
    }

    let source = io::Error::from(error);
    if unreadable_dir {
        ScanError::DirectoryUnreadable { path, source }
    } else {
        ScanError::Io { path, source }
    }
}
