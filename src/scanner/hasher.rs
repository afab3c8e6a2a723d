//! Streaming content fingerprinting.
//!
//! # Overview
//!
//! [`Hasher`] reads a byte stream in fixed-size chunks and produces a
//! [`Fingerprint`]: an uppercase hexadecimal digest with no separators.
//! Identical content always yields the identical fingerprint, regardless of
//! the file's name, location or metadata.
//!
//! Two digests are available:
//!
//! - [`HashAlgorithm::Md5`] (default): 128 bits, 32 hex characters
//! - [`HashAlgorithm::Blake3`]: 256 bits, 64 hex characters
//!
//! The digest is only a content fingerprint. Collisions of the underlying
//! function are treated as true duplicates.
//!
//! # Example
//!
//! ```
//! use dupcheck::scanner::{HashAlgorithm, Hasher};
//!
//! let hasher = Hasher::new(HashAlgorithm::Md5);
//! let fingerprint = hasher.hash_reader(&b"hello"[..]).unwrap();
//! assert_eq!(fingerprint.as_str(), "5D41402ABC4B2A76B9719D911017C592");
//! ```

use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::HashError;

/// Read buffer size for streaming (64 KiB).
pub const BUFFER_SIZE: usize = 64 * 1024;

/// Digest used to fingerprint file content.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    /// MD5, 128-bit digest
    #[default]
    Md5,
    /// BLAKE3, 256-bit digest
    Blake3,
}

impl HashAlgorithm {
    /// Number of hex characters in a fingerprint produced by this algorithm.
    #[must_use]
    pub fn hex_len(self) -> usize {
        match self {
            Self::Md5 => 32,
            Self::Blake3 => 64,
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Md5 => write!(f, "md5"),
            Self::Blake3 => write!(f, "blake3"),
        }
    }
}

/// Fixed-width uppercase hexadecimal content digest.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Build a fingerprint from a hex digest, normalised to uppercase.
    #[must_use]
    pub fn from_hex(hex: impl Into<String>) -> Self {
        let mut hex = hex.into();
        hex.make_ascii_uppercase();
        Self(hex)
    }

    /// The fingerprint as a hex string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Streaming content hasher.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hasher {
    algorithm: HashAlgorithm,
}

impl Hasher {
    /// Create a hasher for the given algorithm.
    #[must_use]
    pub fn new(algorithm: HashAlgorithm) -> Self {
        Self { algorithm }
    }

    /// The algorithm this hasher uses.
    #[must_use]
    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// Fingerprint the full content of a byte stream.
    ///
    /// The stream is consumed in [`BUFFER_SIZE`] chunks, so memory use does
    /// not depend on the stream length.
    ///
    /// # Errors
    ///
    /// Returns the first I/O error raised by the reader.
    pub fn hash_reader<R: Read>(&self, mut reader: R) -> io::Result<Fingerprint> {
        let mut buffer = vec![0u8; BUFFER_SIZE];

        match self.algorithm {
            HashAlgorithm::Md5 => {
                let mut context = md5::Context::new();
                stream_into(&mut reader, &mut buffer, |chunk| context.consume(chunk))?;
                Ok(Fingerprint::from_hex(format!("{:X}", context.compute())))
            }
            HashAlgorithm::Blake3 => {
                let mut hasher = blake3::Hasher::new();
                stream_into(&mut reader, &mut buffer, |chunk| {
                    hasher.update(chunk);
                })?;
                Ok(Fingerprint::from_hex(hasher.finalize().to_hex().as_str()))
            }
        }
    }

    /// Fingerprint a file's full content.
    ///
    /// The file handle is opened here and dropped before returning, whether
    /// hashing succeeded or not.
    ///
    /// # Errors
    ///
    /// - [`HashError::NotFound`] if the file disappeared
    /// - [`HashError::PermissionDenied`] if it cannot be opened for reading
    /// - [`HashError::Io`] for any other open or read failure
    pub fn hash_file(&self, path: &Path) -> Result<Fingerprint, HashError> {
        let file = File::open(path).map_err(|e| HashError::from_io(path, e))?;
        self.hash_reader(file)
            .map_err(|e| HashError::from_io(path, e))
    }
}

fn stream_into<R, F>(reader: &mut R, buffer: &mut [u8], mut consume: F) -> io::Result<()>
where
    R: Read,
    F: FnMut(&[u8]),
{
    loop {
        let bytes_read = match reader.read(buffer) {
            Ok(0) => return Ok(()),
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        consume(&buffer[..bytes_read]);
    }
}
