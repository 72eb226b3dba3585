//! CLI route: builds the effective merge settings from config plus flags
//! and runs one merge session.

use crate::cli::parse::Cli;
use crate::cli::{format_summary_json, format_summary_text};
use crate::config::{ConfigLoader, StitchConfig};
use crate::discover::SuffixFilter;
use crate::error::MergeError;
use crate::merge;
use std::path::PathBuf;

/// Runtime context for CLI execution: the effective configuration after
/// layering config file, environment, and CLI flags.
pub struct RunContext {
    config: StitchConfig,
    format: String,
}

impl RunContext {
    /// Create a run context from parsed CLI arguments. Flags override the
    /// loaded configuration; an absent flag leaves the configured value
    /// alone.
    pub fn new(cli: &Cli) -> Result<Self, MergeError> {
        let lookup_dir = cli.dir.clone().unwrap_or_else(|| PathBuf::from("."));
        let mut config = if let Some(ref cfg_path) = cli.config {
            ConfigLoader::load_from_file(cfg_path)?
        } else {
            ConfigLoader::load(&lookup_dir)?
        };

        if let Some(ref dir) = cli.dir {
            config.merge.input_dir = dir.clone();
        }
        if let Some(ref output) = cli.output {
            config.merge.output = output.clone();
        }
        if let Some(ref ext) = cli.content_ext {
            config.merge.content_ext = ext.clone();
        }
        if let Some(ref ext) = cli.compression_ext {
            config.merge.compression_ext = ext.clone();
        }
        if cli.strict_headers {
            config.merge.strict_headers = true;
        }
        config.validate().map_err(MergeError::Config)?;

        if cli.format != "text" && cli.format != "json" {
            return Err(MergeError::Config(format!(
                "Invalid summary format: {} (must be 'text' or 'json')",
                cli.format
            )));
        }

        Ok(Self {
            config,
            format: cli.format.clone(),
        })
    }

    /// Effective configuration after flag overrides.
    pub fn config(&self) -> &StitchConfig {
        &self.config
    }

    /// Destination path resolved against the input directory.
    pub fn output_path(&self) -> PathBuf {
        if self.config.merge.output.is_absolute() {
            self.config.merge.output.clone()
        } else {
            self.config.merge.input_dir.join(&self.config.merge.output)
        }
    }

    /// Run one merge session and format its summary.
    pub fn execute(&self) -> Result<String, MergeError> {
        let filter = SuffixFilter::new(
            &self.config.merge.content_ext,
            &self.config.merge.compression_ext,
        );
        let summary = merge::merge(
            &self.config.merge.input_dir,
            &self.output_path(),
            &filter,
            self.config.merge.strict_headers,
        )?;

        Ok(if self.format == "json" {
            format_summary_json(&summary)
        } else {
            format_summary_text(&summary)
        })
    }
}
