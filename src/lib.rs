//! Stitch: Streaming Log Merge with Header Deduplication
//!
//! Merges gzip-compressed, header-bearing text logs (e.g. JMeter `.jtl.gz`
//! result files) into one decompressed output file, keeping the header line
//! of the first successfully processed source only.

pub mod cli;
pub mod config;
pub mod discover;
pub mod error;
pub mod logging;
pub mod merge;

pub use discover::{discover, SourceFile, SuffixFilter};
pub use error::MergeError;
pub use merge::{merge, MergeEngine, MergeSummary};
