//! Config loading facade: defaults, workspace file, environment overrides.

use super::StitchConfig;
use crate::error::MergeError;
use config::{Config, Environment, File};
use std::path::Path;

/// Loads `StitchConfig` from its layered sources.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a working directory.
    ///
    /// Precedence (lowest to highest): built-in defaults, then
    /// `<dir>/stitch.toml` if present, then `STITCH_*` environment
    /// variables (e.g. `STITCH_MERGE__OUTPUT=all.jtl`).
    pub fn load(dir: &Path) -> Result<StitchConfig, MergeError> {
        let workspace_file = dir.join("stitch.toml");

        let mut builder = Config::builder();
        if workspace_file.exists() {
            builder = builder.add_source(
                File::with_name(&workspace_file.to_string_lossy()).required(false),
            );
        }
        builder = builder.add_source(
            Environment::with_prefix("STITCH")
                .prefix_separator("_")
                .separator("__"),
        );

        Self::finish(builder)
    }

    /// Load configuration from an explicit file, bypassing workspace lookup.
    /// Environment overrides still apply.
    pub fn load_from_file(path: &Path) -> Result<StitchConfig, MergeError> {
        let builder = Config::builder()
            .add_source(File::with_name(&path.to_string_lossy()))
            .add_source(
                Environment::with_prefix("STITCH")
                    .prefix_separator("_")
                    .separator("__"),
            );

        Self::finish(builder)
    }

    fn finish(builder: config::ConfigBuilder<config::builder::DefaultState>) -> Result<StitchConfig, MergeError> {
        let raw = builder
            .build()
            .map_err(|e| MergeError::Config(format!("Failed to load config: {}", e)))?;

        let config: StitchConfig = raw
            .try_deserialize()
            .map_err(|e| MergeError::Config(format!("Invalid config: {}", e)))?;

        config.validate().map_err(MergeError::Config)?;
        Ok(config)
    }
}
