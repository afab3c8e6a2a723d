//! Scanner module for directory traversal and file hashing.
//!
//! This module provides functionality for:
//! - Depth-first directory walking with name-based exclusions
//! - Streaming content fingerprints (MD5 or BLAKE3)
//! - Per-scan counters for processed files and directories
//!
//! # Architecture
//!
//! The scanner is divided into submodules:
//! - [`walker`]: Directory traversal feeding files into a [`FingerprintIndex`]
//! - [`hasher`]: Streaming file hashing
//!
//! # Example
//!
//! ```no_run
//! use dupcheck::duplicates::FingerprintIndex;
//! use dupcheck::scanner::{Counters, Walker, WalkerConfig};
//! use std::path::Path;
//!
//! let walker = Walker::new(WalkerConfig {
//!     recursive: true,
//!     ..Default::default()
//! });
//!
//! let mut index = FingerprintIndex::new();
//! let mut counters = Counters::default();
//! for error in walker.traverse(Path::new("."), &mut index, &mut counters) {
//!     eprintln!("Warning: {}", error);
//! }
//! println!("{} files in {} directories", counters.files, counters.directories);
//! ```
//!
//! [`FingerprintIndex`]: crate::duplicates::FingerprintIndex

pub mod hasher;
pub mod walker;

use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};

// Re-export main types
pub use hasher::{Fingerprint, HashAlgorithm, Hasher};
pub use walker::Walker;

/// Running totals accumulated during traversal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counters {
    /// Regular files successfully hashed and indexed
    pub files: usize,
    /// Directories whose contents were examined
    pub directories: usize,
    /// Regular files that could not be read and were left out of the index
    pub skipped_files: usize,
}

impl Counters {
    /// Fold another set of counters into this one.
    pub fn merge(&mut self, other: Counters) {
        self.files += other.files;
        self.directories += other.directories;
        self.skipped_files += other.skipped_files;
    }
}

/// Configuration for directory walking.
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Descend into subdirectories.
    pub recursive: bool,

    /// Directory base names to skip, together with their whole subtree.
    pub exclusions: HashSet<String>,

    /// Follow symbolic links during traversal.
    /// Loops are detected and reported instead of followed.
    pub follow_symlinks: bool,

    /// Digest used to fingerprint file content.
    pub algorithm: HashAlgorithm,
}

impl WalkerConfig {
    /// Check whether a directory name is excluded.
    #[must_use]
    pub fn is_excluded(&self, name: &str) -> bool {
        self.exclusions.contains(name)
    }
}

/// Errors that can occur during directory scanning.
///
/// None of these abort a scan; each is isolated to the root, directory or
/// file that failed.
#[derive(thiserror::Error, Debug)]
pub enum ScanError {
    /// A supplied root does not exist.
    #[error("{0} does not exist!")]
    RootNotFound(PathBuf),

    /// A supplied root is not a directory.
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    /// A directory's entries could not be listed.
    #[error("Cannot read directory {path}: {source}")]
    DirectoryUnreadable {
        /// Directory that failed
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A followed symbolic link points back at one of its ancestors.
    #[error("Symlink loop: {path} points to ancestor {ancestor}")]
    SymlinkLoop {
        /// Link that closes the loop
        path: PathBuf,
        /// Ancestor directory it resolves to
        ancestor: PathBuf,
    },

    /// An entry could not be inspected while walking.
    #[error("I/O error for {path}: {source}")]
    Io {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A file could not be hashed.
    #[error(transparent)]
    Hash(#[from] HashError),
}

/// Errors that can occur during file hashing.
#[derive(thiserror::Error, Debug)]
pub enum HashError {
    /// The specified file was not found.
    #[error("File not found: {0}")]
    NotFound(PathBuf),

    /// Permission was denied when reading the file.
    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// An I/O error occurred while reading the file.
    #[error("I/O error for {path}: {source}")]
    Io {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },
}

impl HashError {
    /// Classify an I/O error raised while opening or reading `path`.
    #[must_use]
    pub fn from_io(path: &Path, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => Self::NotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => Self::PermissionDenied(path.to_path_buf()),
            _ => Self::Io {
                path: path.to_path_buf(),
                source: error,
            },
        }
    }

    /// Path of the file that failed.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound(path) | Self::PermissionDenied(path) => path,
            Self::Io { path, .. } => path,
        }
    }
}
