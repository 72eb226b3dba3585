//! Configuration System
//!
//! Layered configuration: built-in defaults, then `stitch.toml` in the
//! working directory, then `STITCH_*` environment overrides. CLI flags are
//! applied on top by the binary.

use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

mod facade;

pub use facade::ConfigLoader;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StitchConfig {
    /// Merge engine settings
    #[serde(default)]
    pub merge: MergeConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Merge engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeConfig {
    /// Directory scanned for sources (non-recursive)
    #[serde(default = "default_input_dir")]
    pub input_dir: PathBuf,

    /// Destination path for the merged artifact
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Content suffix of source names (e.g. "jtl")
    #[serde(default = "default_content_ext")]
    pub content_ext: String,

    /// Compression suffix of source names (e.g. "gz")
    #[serde(default = "default_compression_ext")]
    pub compression_ext: String,

    /// Skip sources whose header differs from the session header instead
    /// of silently dropping their first line
    #[serde(default)]
    pub strict_headers: bool,
}

fn default_input_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_output() -> PathBuf {
    PathBuf::from("merged.jtl")
}

fn default_content_ext() -> String {
    "jtl".to_string()
}

fn default_compression_ext() -> String {
    "gz".to_string()
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            input_dir: default_input_dir(),
            output: default_output(),
            content_ext: default_content_ext(),
            compression_ext: default_compression_ext(),
            strict_headers: false,
        }
    }
}

impl StitchConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.merge.content_ext.trim_matches('.').is_empty() {
            return Err("content_ext cannot be empty".to_string());
        }
        if self.merge.compression_ext.trim_matches('.').is_empty() {
            return Err("compression_ext cannot be empty".to_string());
        }
        if self.merge.output.as_os_str().is_empty() {
            return Err("output path cannot be empty".to_string());
        }
        Ok(())
    }
}
