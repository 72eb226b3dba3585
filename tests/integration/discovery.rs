//! Integration tests for source discovery ordering and filtering

use crate::integration::support::write_gz;
use stitch::{discover, MergeError, SuffixFilter};
use tempfile::TempDir;

/// Discovery orders sources lexicographically by file name.
#[test]
fn test_discovery_is_name_sorted() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    write_gz(&root.join("run-10.jtl.gz"), "H\n");
    write_gz(&root.join("run-02.jtl.gz"), "H\n");
    write_gz(&root.join("run-01.jtl.gz"), "H\n");

    let sources = discover(root, &SuffixFilter::default()).unwrap();
    let names: Vec<_> = sources.iter().map(|s| s.name()).collect();
    assert_eq!(names, vec!["run-01.jtl.gz", "run-02.jtl.gz", "run-10.jtl.gz"]);
}

/// Discovery is non-recursive: matching files in subdirectories are ignored.
#[test]
fn test_discovery_non_recursive() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    write_gz(&root.join("top.jtl.gz"), "H\n");
    std::fs::create_dir(root.join("nested")).unwrap();
    write_gz(&root.join("nested").join("deep.jtl.gz"), "H\n");

    let sources = discover(root, &SuffixFilter::default()).unwrap();
    assert_eq!(sources.len(), 1);
    assert_eq!(sources[0].name(), "top.jtl.gz");
}

/// A directory with only non-matching entries is NoInputFound.
#[test]
fn test_discovery_no_matches_is_no_input() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    std::fs::write(root.join("notes.txt"), "x").unwrap();
    std::fs::write(root.join("plain.jtl"), "x").unwrap();

    let err = discover(root, &SuffixFilter::default()).unwrap_err();
    assert!(matches!(err, MergeError::NoInputFound(_)));
}

/// The double suffix must be nested: content extension under compression.
#[test]
fn test_discovery_requires_nested_suffix() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    std::fs::write(root.join("archive.gz"), "x").unwrap();
    std::fs::write(root.join("swapped.gz.jtl"), "x").unwrap();
    write_gz(&root.join("good.jtl.gz"), "H\n");

    let sources = discover(root, &SuffixFilter::default()).unwrap();
    assert_eq!(sources.len(), 1);
    assert_eq!(sources[0].name(), "good.jtl.gz");
}
