//! dupcheck - Duplicate File Checker
//!
//! Scans one or more directories, fingerprints the content of every regular
//! file, and reports groups of files whose fingerprints collide.
//!
//! The pipeline is:
//!
//! 1. [`config`]: merge the command line with file/environment defaults
//!    into a validated [`config::ScanConfig`]
//! 2. [`scanner`]: walk each root depth-first, hashing files into a
//!    [`duplicates::FingerprintIndex`] and counting files and directories
//! 3. [`duplicates`]: derive the duplicate groups from the index
//! 4. [`output`]: render the report

pub mod cli;
pub mod config;
pub mod duplicates;
pub mod error;
pub mod logging;
pub mod output;
pub mod scanner;

use anyhow::{Context, Result};

use crate::cli::Cli;
use crate::config::{Config, ScanConfig};
use crate::duplicates::DuplicateFinder;
use crate::error::ExitCode;

/// Run the application with parsed arguments.
///
/// Logging should already be initialised; see [`logging::init_logging`].
///
/// # Errors
///
/// Returns an error wrapping [`error::ConfigError`] if the configuration is
/// unusable (nothing is scanned in that case), or any error raised while
/// writing the report.
pub fn run_app(cli: Cli) -> Result<ExitCode> {
    let file_config = Config::load(cli.config.as_deref())?;
    let scan_config = ScanConfig::from_sources(&cli, &file_config)?;

    let finder = DuplicateFinder::new(scan_config);
    let (groups, summary) = finder.find_duplicates();

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    output::write_report(cli.output, &groups, &summary, &mut handle)
        .context("Failed to write report")?;

    Ok(ExitCode::Success)
}
