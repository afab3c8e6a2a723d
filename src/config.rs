//! Application configuration management.
//!
//! Two layers live here:
//!
//! - [`Config`]: optional defaults loaded with figment, merged as
//!   defaults < TOML file < `DUPCHECK_*` environment variables
//! - [`ScanConfig`]: the validated configuration the scan runs with, built
//!   from a [`Config`] and the command line by [`ScanConfig::from_sources`]
//!
//! # File format
//!
//! ```toml
//! exclude = ["node_modules", ".git", "target"]
//! recurse = true
//! follow_symlinks = false
//! algorithm = "md5"
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::cli::Cli;
use crate::error::ConfigError;
use crate::scanner::{HashAlgorithm, WalkerConfig};

/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "DUPCHECK_";

/// Persistent defaults for scan options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory names always excluded
    pub exclude: Vec<String>,
    /// Scan recursively unless told otherwise
    pub recurse: bool,
    /// Follow symbolic links
    pub follow_symlinks: bool,
    /// Fingerprint digest
    pub algorithm: HashAlgorithm,
}

impl Config {
    /// Load configuration for a run.
    ///
    /// With an explicit `path` (from `--config`), the file must exist and
    /// parse. Without one, the platform default file is used if present, and
    /// any problem with it falls back to defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidFile`] if an explicit file is missing or
    /// malformed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => {
                if !path.is_file() {
                    return Err(ConfigError::InvalidFile {
                        path: path.to_path_buf(),
                        message: "file not found".to_string(),
                    });
                }
                Self::extract(Self::figment(Some(path)).merge(Env::prefixed(ENV_PREFIX)), path)
            }
            None => {
                let default_path = Self::default_path();
                let file = default_path.as_deref().filter(|p| p.is_file());
                let figment = Self::figment(file).merge(Env::prefixed(ENV_PREFIX));
                match figment.extract() {
                    Ok(config) => Ok(config),
                    Err(e) => {
                        log::debug!("Failed to load config, using defaults: {}", e);
                        Ok(Self::default())
                    }
                }
            }
        }
    }

    /// Load configuration from a TOML file only, ignoring the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidFile`] if the file cannot be parsed.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        Self::extract(Self::figment(Some(path)), path)
    }

    /// Default platform-specific configuration path.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "dupcheck", "dupcheck")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    fn figment(path: Option<&Path>) -> Figment {
        let figment = Figment::from(Serialized::defaults(Config::default()));
        match path {
            Some(path) => figment.merge(Toml::file(path)),
            None => figment,
        }
    }

    fn extract(figment: Figment, path: &Path) -> Result<Self, ConfigError> {
        figment.extract().map_err(|e| ConfigError::InvalidFile {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

/// Validated configuration for a scan.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Roots in the order they are traversed; never empty
    pub roots: Vec<PathBuf>,
    /// Traversal and hashing options
    pub walker: WalkerConfig,
}

impl ScanConfig {
    /// Create a scan configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoRoots`] if `roots` is empty.
    pub fn new(roots: Vec<PathBuf>, walker: WalkerConfig) -> Result<Self, ConfigError> {
        if roots.is_empty() {
            return Err(ConfigError::NoRoots);
        }
        Ok(Self { roots, walker })
    }

    /// Combine the command line with file/environment defaults.
    ///
    /// Exclusions from both sources are merged. Boolean flags on the command
    /// line switch a feature on, except `--no-recurse`, which turns recursion
    /// off whatever the file says. `--algorithm` overrides the file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoRoots`] if no location was given.
    pub fn from_sources(cli: &Cli, file: &Config) -> Result<Self, ConfigError> {
        let walker = WalkerConfig {
            recursive: !cli.no_recurse && (cli.recurse || file.recurse),
            exclusions: normalize_exclusions(file.exclude.iter().chain(cli.exclude.iter())),
            follow_symlinks: cli.follow_symlinks || file.follow_symlinks,
            algorithm: cli.algorithm.unwrap_or(file.algorithm),
        };

        let config = Self::new(cli.roots(), walker)?;

        log::debug!(
            "Recursion is {}",
            if config.walker.recursive {
                "enabled"
            } else {
                "disabled"
            }
        );
        for root in &config.roots {
            log::debug!("Accepted path: {}", root.display());
        }

        Ok(config)
    }
}

/// Trim names, strip trailing path separators and drop empties.
pub fn normalize_exclusions<I, S>(names: I) -> HashSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .map(|name| {
            name.as_ref()
                .trim()
                .trim_end_matches(['/', '\\'])
                .to_string()
        })
        .filter(|name| !name.is_empty())
        .collect()
}
