//! Integration tests for skip-and-continue failure handling

use crate::integration::support::{write_corrupt, write_gz, write_truncated_gz};
use stitch::{merge, MergeError, SuffixFilter};
use std::fs;
use tempfile::TempDir;

/// A corrupt first source is skipped and the next good source keeps its
/// header ("first" means first successfully processed).
#[test]
fn test_corrupt_first_source_reclassifies_header() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_corrupt(&root.join("a.jtl.gz"));
    write_gz(&root.join("b.jtl.gz"), "H2\nbody2\n");

    let out = root.join("merged.jtl");
    let summary = merge(root, &out, &SuffixFilter::default(), false).unwrap();

    assert_eq!(summary.merged, 1);
    assert_eq!(summary.skipped.len(), 1);
    assert!(summary.is_partial());
    assert!(summary.skipped[0].path.ends_with("a.jtl.gz"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "H2\nbody2\n");
}

/// A corrupt middle source does not abort the session; the summary
/// accounts for every discovered source.
#[test]
fn test_corrupt_middle_source_skipped() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_gz(&root.join("a.jtl.gz"), "H\n1\n");
    write_corrupt(&root.join("b.jtl.gz"));
    write_gz(&root.join("c.jtl.gz"), "H\n3\n");

    let out = root.join("merged.jtl");
    let summary = merge(root, &out, &SuffixFilter::default(), false).unwrap();

    assert_eq!(summary.merged, 2);
    assert_eq!(summary.skipped.len(), 1);
    assert_eq!(summary.merged + summary.skipped.len(), 3);
    assert_eq!(fs::read_to_string(&out).unwrap(), "H\n1\n3\n");
}

/// A source that fails mid-stream leaves none of its bytes in the output.
#[test]
fn test_mid_stream_failure_rolls_back() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_gz(&root.join("a.jtl.gz"), "H\n1\n");
    let big_body = format!("H\n{}\n", "y".repeat(512 * 1024));
    write_truncated_gz(&root.join("b.jtl.gz"), &big_body);
    write_gz(&root.join("c.jtl.gz"), "H\n3\n");

    let out = root.join("merged.jtl");
    let summary = merge(root, &out, &SuffixFilter::default(), false).unwrap();

    assert_eq!(summary.merged, 2);
    assert_eq!(summary.skipped.len(), 1);
    assert!(summary.skipped[0].path.ends_with("b.jtl.gz"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "H\n1\n3\n");
}

/// A first source that decodes its header but fails mid-body does not
/// claim the session header: the next good source keeps its own.
#[test]
fn test_first_source_mid_stream_failure_releases_header() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let big_body = format!("H1\n{}\n", "z".repeat(512 * 1024));
    write_truncated_gz(&root.join("a.jtl.gz"), &big_body);
    write_gz(&root.join("b.jtl.gz"), "H2\nbody2\n");

    let out = root.join("merged.jtl");
    let summary = merge(root, &out, &SuffixFilter::default(), false).unwrap();

    assert_eq!(summary.merged, 1);
    assert_eq!(summary.skipped.len(), 1);
    assert_eq!(fs::read_to_string(&out).unwrap(), "H2\nbody2\n");
}

/// When every source is corrupt the run still succeeds at the session
/// level, reporting zero merged and all skipped.
#[test]
fn test_all_sources_corrupt_reports_empty_merge() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_corrupt(&root.join("a.jtl.gz"));
    write_corrupt(&root.join("b.jtl.gz"));

    let out = root.join("merged.jtl");
    let summary = merge(root, &out, &SuffixFilter::default(), false).unwrap();

    assert_eq!(summary.merged, 0);
    assert_eq!(summary.skipped.len(), 2);
    assert_eq!(fs::read_to_string(&out).unwrap(), "");
}

/// Unwritable destination is fatal before any source is consumed.
#[test]
fn test_unwritable_output_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_gz(&root.join("a.jtl.gz"), "H\n1\n");

    let out = root.join("no-such-dir").join("merged.jtl");
    let err = merge(root, &out, &SuffixFilter::default(), false).unwrap_err();
    assert!(matches!(err, MergeError::OutputUnavailable { .. }));
    assert!(!out.exists());
}

/// Strict mode turns a mismatched header into a per-source skip with its
/// own reason, rather than dropping the line.
#[test]
fn test_strict_mode_reports_header_mismatch() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_gz(&root.join("a.jtl.gz"), "HDR\n1\n");
    write_gz(&root.join("b.jtl.gz"), "different\n2\n");

    let out = root.join("merged.jtl");
    let summary = merge(root, &out, &SuffixFilter::default(), true).unwrap();

    assert_eq!(summary.merged, 1);
    assert_eq!(summary.skipped.len(), 1);
    assert!(summary.skipped[0].reason.contains("header"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "HDR\n1\n");
}
