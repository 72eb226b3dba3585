//! Error types for the merge engine and its CLI surface.

use std::path::PathBuf;
use thiserror::Error;

/// Merge-related errors.
///
/// `NoInputFound`, `OutputUnavailable`, `Config`, and `Io` are fatal for a
/// session. `Decompression` and `HeaderMismatch` are per-source: the engine
/// skips the offending source and continues.
#[derive(Debug, Error)]
pub enum MergeError {
    #[error("No matching source files found in {0:?}")]
    NoInputFound(PathBuf),

    #[error("Cannot open output {path:?}: {source}")]
    OutputUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decompress {path:?}: {source}")]
    Decompression {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Header of {0:?} does not match the session header")]
    HeaderMismatch(PathBuf),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MergeError {
    /// Whether this error aborts the whole session, as opposed to skipping
    /// one source. Skipped-source reclassification depends on this split.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            MergeError::Decompression { .. } | MergeError::HeaderMismatch(_)
        )
    }
}
