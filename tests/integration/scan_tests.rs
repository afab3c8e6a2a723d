use clap::Parser;
use dupcheck::cli::Cli;
use dupcheck::config::ScanConfig;
use dupcheck::duplicates::{DuplicateFinder, DuplicateGroup, ScanSummary};
use dupcheck::error::{ConfigError, ExitCode};
use dupcheck::scanner::WalkerConfig;
use std::collections::BTreeSet;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn write(path: &Path, content: &[u8]) {
    File::create(path).unwrap().write_all(content).unwrap();
}

fn scan(root: &Path, walker: WalkerConfig) -> (Vec<DuplicateGroup>, ScanSummary) {
    let config = ScanConfig::new(vec![root.to_path_buf()], walker).unwrap();
    DuplicateFinder::new(config).find_duplicates()
}

fn path_set(group: &DuplicateGroup) -> BTreeSet<PathBuf> {
    group.paths.iter().cloned().collect()
}

#[test]
fn test_identical_pair_is_grouped() {
    let dir = tempdir().unwrap();
    write(&dir.path().join("a.txt"), b"hello");
    write(&dir.path().join("b.txt"), b"hello");

    let (groups, summary) = scan(dir.path(), WalkerConfig::default());

    assert_eq!(groups.len(), 1);
    assert_eq!(
        path_set(&groups[0]),
        [dir.path().join("a.txt"), dir.path().join("b.txt")]
            .into_iter()
            .collect()
    );
    assert_eq!(groups[0].hash_hex(), "5D41402ABC4B2A76B9719D911017C592");
    assert_eq!(summary.counters.files, 2);
    assert_eq!(summary.counters.directories, 1);
}

#[test]
fn test_distinct_pair_is_not_grouped() {
    let dir = tempdir().unwrap();
    write(&dir.path().join("a.txt"), b"hello");
    write(&dir.path().join("b.txt"), b"world");

    let (groups, summary) = scan(dir.path(), WalkerConfig::default());

    assert!(groups.is_empty());
    assert_eq!(summary.duplicate_groups, 0);
    assert_eq!(summary.counters.files, 2);
    assert_eq!(summary.counters.directories, 1);
}

#[test]
fn test_scan_empty_directory() {
    let dir = tempdir().unwrap();

    let (groups, summary) = scan(dir.path(), WalkerConfig::default());

    assert!(groups.is_empty());
    assert_eq!(summary.counters.files, 0);
    assert_eq!(summary.counters.directories, 1);
}

#[test]
fn test_empty_files_are_duplicates_of_each_other() {
    let dir = tempdir().unwrap();
    File::create(dir.path().join("empty1")).unwrap();
    File::create(dir.path().join("empty2")).unwrap();

    let (groups, summary) = scan(dir.path(), WalkerConfig::default());

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].hash_hex(), "D41D8CD98F00B204E9800998ECF8427E");
    assert_eq!(summary.counters.files, 2);
}

#[test]
fn test_group_only_with_two_or_more_members() {
    let dir = tempdir().unwrap();
    write(&dir.path().join("one.txt"), b"1");
    write(&dir.path().join("two-a.txt"), b"2");
    write(&dir.path().join("two-b.txt"), b"2");
    write(&dir.path().join("three-a.txt"), b"3");
    write(&dir.path().join("three-b.txt"), b"3");
    write(&dir.path().join("three-c.txt"), b"3");

    let (groups, summary) = scan(dir.path(), WalkerConfig::default());

    let mut sizes: Vec<usize> = groups.iter().map(DuplicateGroup::len).collect();
    sizes.sort_unstable();
    assert_eq!(sizes, vec![2, 3]);
    assert_eq!(summary.duplicate_files, 3);
    assert_eq!(summary.counters.files, 6);
}

#[test]
fn test_scan_is_idempotent() {
    let dir = tempdir().unwrap();
    let sub = dir.path().join("sub");
    fs::create_dir(&sub).unwrap();
    write(&dir.path().join("a"), b"alpha");
    write(&sub.join("a"), b"alpha");
    write(&dir.path().join("b"), b"beta");
    write(&sub.join("b"), b"beta");
    write(&sub.join("c"), b"gamma");

    let walker = WalkerConfig {
        recursive: true,
        ..Default::default()
    };
    let (first, first_summary) = scan(dir.path(), walker.clone());
    let (second, second_summary) = scan(dir.path(), walker);

    let as_sets = |groups: &[DuplicateGroup]| -> BTreeSet<(String, BTreeSet<PathBuf>)> {
        groups
            .iter()
            .map(|g| (g.hash_hex().to_string(), path_set(g)))
            .collect()
    };
    assert_eq!(as_sets(&first), as_sets(&second));
    assert_eq!(first_summary.counters, second_summary.counters);
}

#[test]
fn test_no_roots_is_config_error() {
    let cli = Cli::parse_from(["dupcheck", "--recurse"]);

    let err = dupcheck::run_app(cli).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::NoRoots)
    ));
    assert_eq!(ExitCode::for_error(&err), ExitCode::ConfigError);
}
