//! Configuration model

use super::logging_config::LoggingConfig;
use crate::error::{QuickIndexError, QuickIndexResult};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Base URL of a locally running search service
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api/v1";

/// Default number of remembered searches
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub client: ClientConfig,
    pub logging: LoggingConfig,
    pub storage: StorageConfig,
}

/// Remote search service settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// API root, e.g. `http://localhost:8000/api/v1`
    pub base_url: String,
    /// Tolerance sent with every search that does not specify one
    pub default_tolerance: Option<f64>,
    pub network: NetworkConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            default_tolerance: None,
            network: NetworkConfig::default(),
        }
    }
}

/// HTTP timeouts. `None` keeps the HTTP client's own defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    pub connect_timeout_secs: Option<u64>,
    pub request_timeout_secs: Option<u64>,
}

/// Preference storage settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Preferences file; the platform data directory is used when unset
    pub history_file: Option<PathBuf>,
    pub history_limit: usize,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            history_file: None,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl StorageConfig {
    /// Resolve the preferences file location
    pub fn resolved_history_file(&self) -> Option<PathBuf> {
        self.history_file.clone().or_else(|| {
            dirs::data_dir().map(|dir| dir.join("quick-index").join("preferences.json"))
        })
    }
}

impl Config {
    /// Validate the whole configuration
    pub fn validate(&self) -> QuickIndexResult<()> {
        self.client.validate()?;
        self.logging.validate()?;

        if self.storage.history_limit == 0 {
            return Err(QuickIndexError::config_with_context(
                "history_limit must be greater than zero",
                "Validating storage configuration",
            ));
        }

        Ok(())
    }
}

impl ClientConfig {
    pub fn validate(&self) -> QuickIndexResult<()> {
        let url = reqwest::Url::parse(&self.base_url).map_err(|e| {
            QuickIndexError::config_with_context(
                format!("Invalid base_url '{}': {}", self.base_url, e),
                "Validating client configuration",
            )
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(QuickIndexError::config_with_context(
                format!("base_url must use http or https, got '{}'", url.scheme()),
                "Validating client configuration",
            ));
        }

        if let Some(tolerance) = self.default_tolerance {
            if !tolerance.is_finite() || tolerance < 0.0 {
                return Err(QuickIndexError::config_with_context(
                    format!("default_tolerance must be a non-negative number, got {}", tolerance),
                    "Validating client configuration",
                ));
            }
        }

        Ok(())
    }
}
