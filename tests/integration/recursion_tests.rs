use dupcheck::config::ScanConfig;
use dupcheck::duplicates::{DuplicateFinder, DuplicateGroup, ScanSummary};
use dupcheck::scanner::WalkerConfig;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn scan(root: &Path, recursive: bool) -> (Vec<DuplicateGroup>, ScanSummary) {
    let walker = WalkerConfig {
        recursive,
        ..Default::default()
    };
    let config = ScanConfig::new(vec![root.to_path_buf()], walker).unwrap();
    DuplicateFinder::new(config).find_duplicates()
}

fn nested_copy_tree(root: &Path) {
    let sub = root.join("sub");
    fs::create_dir(&sub).unwrap();
    fs::write(root.join("a.txt"), b"same").unwrap();
    fs::write(sub.join("c.txt"), b"same").unwrap();
}

#[test]
fn test_nested_copy_missed_without_recursion() {
    let dir = tempdir().unwrap();
    nested_copy_tree(dir.path());

    let (groups, summary) = scan(dir.path(), false);

    assert!(groups.is_empty());
    assert_eq!(summary.counters.files, 1);
    assert_eq!(summary.counters.directories, 1);
}

#[test]
fn test_nested_copy_found_with_recursion() {
    let dir = tempdir().unwrap();
    nested_copy_tree(dir.path());

    let (groups, summary) = scan(dir.path(), true);

    assert_eq!(groups.len(), 1);
    // Files of a directory are handled before its subdirectories
    assert_eq!(
        groups[0].paths,
        vec![dir.path().join("a.txt"), dir.path().join("sub").join("c.txt")]
    );
    assert_eq!(summary.counters.files, 2);
    assert_eq!(summary.counters.directories, 2);
}

#[test]
fn test_non_recursive_ignores_every_nested_level() {
    let dir = tempdir().unwrap();
    let deep = dir.path().join("l1").join("l2").join("l3");
    fs::create_dir_all(&deep).unwrap();
    fs::write(deep.join("x"), b"x").unwrap();
    fs::write(dir.path().join("l1").join("x"), b"x").unwrap();

    let (_, summary) = scan(dir.path(), false);
    assert_eq!(summary.counters.files, 0);
    assert_eq!(summary.counters.directories, 1);

    let (groups, summary) = scan(dir.path(), true);
    assert_eq!(groups.len(), 1);
    assert_eq!(summary.counters.files, 2);
    assert_eq!(summary.counters.directories, 4);
}

#[test]
fn test_deep_tree_does_not_exhaust_stack() {
    let dir = tempdir().unwrap();
    let mut path = dir.path().to_path_buf();
    for _ in 0..200 {
        path.push("d");
    }
    fs::create_dir_all(&path).unwrap();
    fs::write(path.join("leaf"), b"leaf").unwrap();
    fs::write(dir.path().join("leaf"), b"leaf").unwrap();

    let (groups, summary) = scan(dir.path(), true);

    assert_eq!(groups.len(), 1);
    assert_eq!(summary.counters.directories, 201);
}
