//! Command-line interface definitions for dupcheck.
//!
//! This module defines all CLI arguments using the clap derive API. Roots
//! can be given positionally, with `--location`, or both.
//!
//! # Example
//!
//! ```bash
//! # Scan the top level of two folders
//! dupcheck ~/Pictures ~/Downloads
//!
//! # Scan recursively, skipping dependency and VCS folders
//! dupcheck -r --location ~/src --exclude node_modules,.git,target
//!
//! # Machine-readable output with progress lines on stderr
//! dupcheck -v -r ~/src --output json
//! ```

use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

use crate::scanner::HashAlgorithm;

/// Find duplicate files by content fingerprint.
///
/// Every regular file under the given locations is hashed, and files whose
/// content hashes identically are reported together.
#[derive(Debug, Parser)]
#[command(name = "dupcheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity level (-v for progress lines, -vv for trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors and the report
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Root folders to scan
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Root folder to scan (can be specified multiple times)
    #[arg(short, long = "location", value_name = "PATH")]
    pub locations: Vec<PathBuf>,

    /// Find files recursively
    #[arg(short, long)]
    pub recurse: bool,

    /// Scan only the top level, even if the config file sets `recurse`
    #[arg(long, conflicts_with = "recurse")]
    pub no_recurse: bool,

    /// Folder names to exclude (can be repeated or comma-separated)
    ///
    /// Matched exactly against each directory's own name, not its path.
    #[arg(short, long = "exclude", value_name = "NAME", value_delimiter = ',')]
    pub exclude: Vec<String>,

    /// Content digest used as the file fingerprint [default: md5]
    #[arg(short, long, value_enum)]
    pub algorithm: Option<HashAlgorithm>,

    /// Report format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Follow symbolic links during scan
    ///
    /// Links that loop back to a parent folder are reported and skipped.
    #[arg(long)]
    pub follow_symlinks: bool,

    /// Configuration file (TOML) to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print fatal errors as JSON on stderr
    #[arg(long)]
    pub json_errors: bool,
}

impl Cli {
    /// All roots in order: `--location` values first, then positional paths.
    #[must_use]
    pub fn roots(&self) -> Vec<PathBuf> {
        self.locations
            .iter()
            .chain(self.paths.iter())
            .cloned()
            .collect()
    }
}

/// Output format for scan results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report
    #[default]
    Text,
    /// JSON output for scripting
    Json,
    /// CSV output for spreadsheets
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}
