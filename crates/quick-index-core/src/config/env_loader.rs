//! Environment variable-based configuration overrides

use super::logging_config::LogFormat;
use super::model::Config;
use crate::error::{QuickIndexError, QuickIndexResult};
use std::env;
use std::path::PathBuf;

pub const ENV_BASE_URL: &str = "QUICK_INDEX_BASE_URL";
pub const ENV_TOLERANCE: &str = "QUICK_INDEX_TOLERANCE";
pub const ENV_LOG_LEVEL: &str = "QUICK_INDEX_LOG_LEVEL";
pub const ENV_LOG_FORMAT: &str = "QUICK_INDEX_LOG_FORMAT";
pub const ENV_HISTORY_FILE: &str = "QUICK_INDEX_HISTORY_FILE";

/// Apply `QUICK_INDEX_*` variables from the process environment
pub fn apply_env_overrides(config: &mut Config) -> QuickIndexResult<()> {
    apply_env_with(config, |key| env::var(key).ok())
}

/// Apply overrides using `lookup` to read variables
pub fn apply_env_with<F>(config: &mut Config, lookup: F) -> QuickIndexResult<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(base_url) = lookup(ENV_BASE_URL) {
        config.client.base_url = base_url;
    }

    if let Some(tolerance) = lookup(ENV_TOLERANCE) {
        let tolerance: f64 = tolerance.trim().parse().map_err(|_| {
            QuickIndexError::config(format!("Invalid {} value: '{}'", ENV_TOLERANCE, tolerance))
        })?;
        config.client.default_tolerance = Some(tolerance);
    }

    if let Some(level) = lookup(ENV_LOG_LEVEL) {
        config.logging.level = level;
    }

    if let Some(format) = lookup(ENV_LOG_FORMAT) {
        config.logging.format = format.parse::<LogFormat>()?;
    }

    if let Some(path) = lookup(ENV_HISTORY_FILE) {
        config.storage.history_file = Some(PathBuf::from(path));
    }

    Ok(())
}
