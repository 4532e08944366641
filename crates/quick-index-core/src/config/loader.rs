//! Layered configuration loading

use super::env_loader::apply_env_overrides;
use super::file_loader::load_from_file;
use super::logging_config::LogFormat;
use super::model::Config;
use crate::error::QuickIndexResult;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Values given explicitly on the command line
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub base_url: Option<String>,
    pub default_tolerance: Option<f64>,
    pub log_level: Option<String>,
    pub log_format: Option<LogFormat>,
    pub history_file: Option<PathBuf>,
}

impl ConfigOverrides {
    pub fn apply(&self, config: &mut Config) {
        if let Some(base_url) = &self.base_url {
            config.client.base_url = base_url.clone();
        }
        if let Some(tolerance) = self.default_tolerance {
            config.client.default_tolerance = Some(tolerance);
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if let Some(format) = self.log_format {
            config.logging.format = format;
        }
        if let Some(path) = &self.history_file {
            config.storage.history_file = Some(path.clone());
        }
    }
}

/// Where the file layer comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource<'a> {
    /// The conventional location; a missing file means defaults
    Conventional(&'a Path),
    /// A path the user named; it must exist
    Explicit(&'a Path),
}

/// Load and validate configuration from all layers.
pub fn load_config(
    source: ConfigSource<'_>,
    overrides: &ConfigOverrides,
) -> QuickIndexResult<Config> {
    let mut config = match source {
        ConfigSource::Conventional(path) => load_from_file(path, false)?,
        ConfigSource::Explicit(path) => {
            debug!(path = %path.display(), "Loading configuration file");
            load_from_file(path, true)?
        }
    };

    apply_env_overrides(&mut config)?;
    overrides.apply(&mut config);
    config.validate()?;

    Ok(config)
}
