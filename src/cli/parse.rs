//! CLI parse: clap types for Stitch. No behavior; definitions only.

use clap::Parser;
use std::path::PathBuf;

/// Stitch CLI - merge gzip-compressed result logs with header deduplication
#[derive(Parser)]
#[command(name = "stitch")]
#[command(about = "Merge gzip-compressed result logs, keeping one header line")]
pub struct Cli {
    /// Directory scanned for source files (non-recursive; defaults to the
    /// configured input_dir, else the current directory)
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Destination path for the merged artifact
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Content suffix of source names (default: jtl)
    #[arg(long)]
    pub content_ext: Option<String>,

    /// Compression suffix of source names (default: gz)
    #[arg(long)]
    pub compression_ext: Option<String>,

    /// Skip sources whose header differs from the first source's header
    #[arg(long)]
    pub strict_headers: bool,

    /// Summary format (text or json)
    #[arg(long, default_value = "text")]
    pub format: String,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable logging entirely
    #[arg(long)]
    pub quiet: bool,

    /// Enable verbose logging (debug level)
    #[arg(long)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr)
    #[arg(long)]
    pub log_output: Option<String>,
}
