//! Merge engine: streaming gzip decode of each source in order, header
//! deduplication, and skip-and-continue failure handling.
//!
//! Sources are processed strictly sequentially with at most one open
//! decompression stream. "First" means first successfully processed: when
//! the first discovered source fails, the next good one keeps its header.

use crate::discover::SourceFile;
use crate::error::MergeError;
use flate2::bufread::MultiGzDecoder;
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// One source the engine gave up on, with the reason it was skipped.
#[derive(Debug, Serialize)]
pub struct SkippedSource {
    pub path: PathBuf,
    pub reason: String,
}

/// Completion report for one merge session.
///
/// `merged + skipped.len()` equals the number of discovered sources, so a
/// caller can tell a fully merged run from one with omissions even though
/// both report success.
#[derive(Debug, Serialize)]
pub struct MergeSummary {
    pub output: PathBuf,
    pub merged: usize,
    pub skipped: Vec<SkippedSource>,
}

impl MergeSummary {
    pub fn is_partial(&self) -> bool {
        !self.skipped.is_empty()
    }
}

/// Streaming merge engine.
#[derive(Debug, Clone)]
pub struct MergeEngine {
    /// Treat a non-first source whose header differs from the session
    /// header as a failure instead of silently dropping its first line.
    strict_headers: bool,
}

impl Default for MergeEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl MergeEngine {
    pub fn new() -> Self {
        Self {
            strict_headers: false,
        }
    }

    pub fn with_strict_headers(mut self, strict: bool) -> Self {
        self.strict_headers = strict;
        self
    }

    /// Open (or truncate) the destination file for binary writing.
    pub fn open_output(&self, path: &Path) -> Result<BufWriter<File>, MergeError> {
        let file = File::create(path).map_err(|e| MergeError::OutputUnavailable {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(BufWriter::new(file))
    }

    /// Merge all sources into `output`, in the given order.
    ///
    /// Each source is fully consumed and closed before the next is opened.
    /// Per-source decode failures are logged, rolled back, and skipped;
    /// output-side I/O errors are fatal. The writer is flushed before the
    /// summary is returned.
    pub fn merge_all(
        &self,
        sources: &[SourceFile],
        output: &mut BufWriter<File>,
        output_path: &Path,
    ) -> Result<MergeSummary, MergeError> {
        let mut session_header: Option<String> = None;
        let mut merged = 0usize;
        let mut skipped = Vec::new();

        for source in sources {
            // Checkpoint so a mid-stream failure leaves no partial bytes
            // from this source in the output.
            output.flush()?;
            let checkpoint = output.get_mut().stream_position()?;
            let header_before = session_header.clone();

            match self.copy_source(source, output, &mut session_header) {
                Ok(()) => {
                    merged += 1;
                    debug!(source = %source.name(), "source merged");
                }
                Err(e) if !e.is_fatal() => {
                    warn!(source = %source.name(), error = %e, "skipping source");
                    output.flush()?;
                    let file = output.get_mut();
                    file.set_len(checkpoint)?;
                    file.seek(SeekFrom::Start(checkpoint))?;
                    // A failed source cannot claim the session header: the
                    // next good source is the "first" and keeps its own.
                    session_header = header_before;
                    skipped.push(SkippedSource {
                        path: source.path.clone(),
                        reason: e.to_string(),
                    });
                }
                Err(e) => return Err(e),
            }
        }

        output.flush()?;
        output.get_mut().sync_all()?;

        let summary = MergeSummary {
            output: output_path.to_path_buf(),
            merged,
            skipped,
        };
        info!(
            merged = summary.merged,
            skipped = summary.skipped.len(),
            output = %output_path.display(),
            "merge session complete"
        );
        Ok(summary)
    }

    /// Copy one source to the output.
    ///
    /// The first successful source establishes the session header and is
    /// copied verbatim. Later sources have exactly one line discarded; in
    /// strict mode that line must equal the session header.
    fn copy_source(
        &self,
        source: &SourceFile,
        output: &mut BufWriter<File>,
        session_header: &mut Option<String>,
    ) -> Result<(), MergeError> {
        let mut reader = self.decompress_stream(source)?;

        let mut header = String::new();
        let n = reader
            .read_line(&mut header)
            .map_err(|e| MergeError::Decompression {
                path: source.path.clone(),
                source: e,
            })?;
        if n == 0 {
            // Empty decompressed content: nothing to contribute, but the
            // source decoded fine. Leaves the session header unclaimed.
            return Ok(());
        }

        match session_header {
            None => {
                output.write_all(header.as_bytes())?;
                *session_header = Some(header.trim_end().to_string());
            }
            Some(expected) => {
                if self.strict_headers && header.trim_end() != expected.as_str() {
                    return Err(MergeError::HeaderMismatch(source.path.clone()));
                }
                // Header line dropped.
            }
        }

        copy_lines(&mut reader, output, source)
    }

    /// Lazily decompress one source as a buffered line stream.
    ///
    /// `MultiGzDecoder` handles multi-member archives the way `gzip -dc`
    /// does. The decoder itself is lazy; a corrupt header surfaces on the
    /// first read, which `copy_source` maps to a per-source failure.
    pub fn decompress_stream(
        &self,
        source: &SourceFile,
    ) -> Result<BufReader<MultiGzDecoder<BufReader<File>>>, MergeError> {
        let file = File::open(&source.path).map_err(|e| MergeError::Decompression {
            path: source.path.clone(),
            source: e,
        })?;
        Ok(BufReader::new(MultiGzDecoder::new(BufReader::new(file))))
    }
}

/// Copy the remainder of a decompression stream to the output.
///
/// Read-side failures are per-source (`Decompression`); write-side failures
/// are fatal `Io`. `std::io::copy` would conflate the two.
fn copy_lines<R: BufRead>(
    reader: &mut R,
    output: &mut BufWriter<File>,
    source: &SourceFile,
) -> Result<(), MergeError> {
    loop {
        let chunk = reader.fill_buf().map_err(|e| MergeError::Decompression {
            path: source.path.clone(),
            source: e,
        })?;
        if chunk.is_empty() {
            return Ok(());
        }
        output.write_all(chunk)?;
        let consumed = chunk.len();
        reader.consume(consumed);
    }
}

/// Synchronous entry point for embedding: discover, merge, report.
///
/// Discovery failures surface before the output is created, so a run with
/// zero matching sources leaves no empty artifact behind.
pub fn merge(
    directory: &Path,
    output_path: &Path,
    filter: &crate::discover::SuffixFilter,
    strict_headers: bool,
) -> Result<MergeSummary, MergeError> {
    let sources = crate::discover::discover(directory, filter)?;
    info!(
        count = sources.len(),
        directory = %directory.display(),
        pattern = %filter.display(),
        "discovered sources"
    );

    let engine = MergeEngine::new().with_strict_headers(strict_headers);
    let mut output = engine.open_output(output_path)?;
    engine.merge_all(&sources, &mut output, output_path)
}
