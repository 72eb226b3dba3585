//! Source discovery: non-recursive directory scan with a nested
//! double-suffix filter and deterministic (name-sorted) ordering.

use crate::error::MergeError;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One compressed input artifact selected for merging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
}

impl SourceFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// File name for diagnostics; lossy is fine for log output.
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.to_string_lossy().into_owned())
    }
}

/// Nested double-suffix filter: `<name>.<content_ext>.<compression_ext>`.
///
/// Matching is on the file name only, e.g. `results-01.jtl.gz` with the
/// default `jtl`/`gz` pair. A bare `.gz` without the content suffix does
/// not match, nor does an uncompressed `.jtl`.
#[derive(Debug, Clone)]
pub struct SuffixFilter {
    content_ext: String,
    compression_ext: String,
}

impl Default for SuffixFilter {
    fn default() -> Self {
        Self::new("jtl", "gz")
    }
}

impl SuffixFilter {
    pub fn new(content_ext: &str, compression_ext: &str) -> Self {
        Self {
            content_ext: content_ext.trim_start_matches('.').to_string(),
            compression_ext: compression_ext.trim_start_matches('.').to_string(),
        }
    }

    /// Check a file name against the nested suffix pattern.
    pub fn matches(&self, file_name: &str) -> bool {
        let suffix = format!(".{}.{}", self.content_ext, self.compression_ext);
        // Require a non-empty stem so ".jtl.gz" alone does not match.
        file_name.len() > suffix.len() && file_name.ends_with(&suffix)
    }

    /// Suffix string for diagnostics (e.g. ".jtl.gz").
    pub fn display(&self) -> String {
        format!(".{}.{}", self.content_ext, self.compression_ext)
    }
}

/// Scan `directory` (non-recursively) for sources matching `filter`.
///
/// Returns entries sorted by file name so the "first" source is well
/// defined across runs; header-skip correctness depends on this ordering.
/// Fails with `NoInputFound` when nothing matches.
pub fn discover(directory: &Path, filter: &SuffixFilter) -> Result<Vec<SourceFile>, MergeError> {
    let mut sources = Vec::new();

    for entry in WalkDir::new(directory).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| {
            MergeError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("Failed to scan {:?}: {}", directory, e),
            ))
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        if filter.matches(&name) {
            sources.push(SourceFile::new(entry.path().to_path_buf()));
        }
    }

    // Sort by file name for determinism
    sources.sort_by(|a, b| a.path.file_name().cmp(&b.path.file_name()));

    if sources.is_empty() {
        return Err(MergeError::NoInputFound(directory.to_path_buf()));
    }

    Ok(sources)
}
