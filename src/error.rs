//! Structured error handling and exit codes.

use std::path::PathBuf;

use serde::Serialize;

/// Exit codes for the dupcheck application.
///
/// - 0: Success (completed normally, with or without duplicates)
/// - 1: General error (unexpected failure, e.g. the report could not be written)
/// - 2: Configuration error (the scan never started)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ExitCode {
    /// Success: Scan completed. Finding no duplicates is still a success.
    Success = 0,
    /// General error: An unexpected error occurred.
    GeneralError = 1,
    /// Configuration error: No usable configuration, nothing was scanned.
    ConfigError = 2,
}

impl ExitCode {
    /// Get the numeric exit code.
    #[must_use]
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Get the machine-readable code prefix.
    #[must_use]
    pub fn code_prefix(self) -> &'static str {
        match self {
            Self::Success => "DC000",
            Self::GeneralError => "DC001",
            Self::ConfigError => "DC002",
        }
    }

    /// Pick the exit code for an error that ended the run.
    #[must_use]
    pub fn for_error(err: &anyhow::Error) -> Self {
        if err.downcast_ref::<ConfigError>().is_some() {
            Self::ConfigError
        } else {
            Self::GeneralError
        }
    }
}

/// Errors that prevent a scan from starting.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// No root directory was supplied.
    #[error("You must provide at least one location.")]
    NoRoots,

    /// An explicitly requested configuration file could not be used.
    #[error("Invalid configuration file {path}: {message}")]
    InvalidFile {
        /// Configuration file path
        path: PathBuf,
        /// Parser diagnostic
        message: String,
    },
}

/// Structured error information for JSON output.
#[derive(Debug, Serialize)]
pub struct StructuredError {
    /// The error code (e.g., "DC002")
    pub code: String,
    /// The exit code number
    pub exit_code: i32,
    /// Human-readable error message
    pub message: String,
}

impl StructuredError {
    /// Create a new structured error from an anyhow error and an exit code.
    #[must_use]
    pub fn new(err: &anyhow::Error, exit_code: ExitCode) -> Self {
        Self {
            code: exit_code.code_prefix().to_string(),
            exit_code: exit_code.as_i32(),
            message: err.to_string(),
        }
    }
}
