//! Integration tests for layered configuration: TOML file, environment
//! overrides and merging with the command line.

use clap::Parser;
use dupcheck::cli::Cli;
use dupcheck::config::{Config, ScanConfig, ENV_PREFIX};
use dupcheck::error::ConfigError;
use dupcheck::scanner::HashAlgorithm;
use std::fs;
use std::sync::Mutex;
use tempfile::tempdir;

static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Clear all DUPCHECK_* environment variables to avoid interference.
fn clear_env() {
    for (key, _) in std::env::vars() {
        if key.starts_with(ENV_PREFIX) {
            std::env::remove_var(key);
        }
    }
}

#[test]
fn test_config_load_from_toml() {
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(
        &config_path,
        r#"
exclude = ["node_modules", ".git"]
recurse = true
algorithm = "blake3"
"#,
    )
    .unwrap();

    let config = Config::load_from_path(&config_path).unwrap();

    assert_eq!(config.exclude, vec!["node_modules", ".git"]);
    assert!(config.recurse);
    assert!(!config.follow_symlinks);
    assert_eq!(config.algorithm, HashAlgorithm::Blake3);
}

#[test]
fn test_config_partial_file_keeps_defaults() {
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "follow_symlinks = true\n").unwrap();

    let config = Config::load_from_path(&config_path).unwrap();

    assert!(config.follow_symlinks);
    assert!(!config.recurse);
    assert!(config.exclude.is_empty());
    assert_eq!(config.algorithm, HashAlgorithm::Md5);
}

#[test]
fn test_config_invalid_toml_is_error() {
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "recurse = [not valid").unwrap();

    let result = Config::load_from_path(&config_path);

    assert!(matches!(result, Err(ConfigError::InvalidFile { .. })));
}

#[test]
fn test_config_unknown_algorithm_is_error() {
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "algorithm = \"crc32\"\n").unwrap();

    assert!(Config::load_from_path(&config_path).is_err());
}

#[test]
fn test_config_explicit_missing_file_is_error() {
    let temp_dir = tempdir().unwrap();
    let missing = temp_dir.path().join("nope.toml");

    let err = Config::load(Some(missing.as_path())).unwrap_err();

    match err {
        ConfigError::InvalidFile { path, .. } => assert_eq!(path, missing),
        other => panic!("Expected InvalidFile, got: {:?}", other),
    }
}

#[test]
fn test_config_env_overrides_file() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env();
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "recurse = false\nalgorithm = \"md5\"\n").unwrap();

    std::env::set_var("DUPCHECK_RECURSE", "true");
    std::env::set_var("DUPCHECK_ALGORITHM", "blake3");
    let config = Config::load(Some(config_path.as_path()));
    clear_env();

    let config = config.unwrap();
    assert!(config.recurse);
    assert_eq!(config.algorithm, HashAlgorithm::Blake3);
}

#[test]
fn test_cli_overrides_file_config() {
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(
        &config_path,
        "exclude = [\"target\"]\nalgorithm = \"blake3\"\n",
    )
    .unwrap();
    let file = Config::load_from_path(&config_path).unwrap();

    let cli = Cli::parse_from(["dupcheck", "/srv", "-r", "-e", "dist", "-a", "md5"]);
    let config = ScanConfig::from_sources(&cli, &file).unwrap();

    assert!(config.walker.recursive);
    assert!(config.walker.is_excluded("target"));
    assert!(config.walker.is_excluded("dist"));
    assert_eq!(config.walker.algorithm, HashAlgorithm::Md5);
    assert_eq!(config.roots, vec![std::path::PathBuf::from("/srv")]);
}
