//! Configuration file parsing

use super::model::Config;
use crate::error::{QuickIndexError, QuickIndexResult};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Serialization format, picked from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileFormat {
    Toml,
    Yaml,
    Json,
}

impl FileFormat {
    fn of(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::Toml,
            Some("yaml" | "yml") => Self::Yaml,
            _ => Self::Json,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Toml => "TOML",
            Self::Yaml => "YAML",
            Self::Json => "JSON",
        }
    }

    fn parse(self, content: &str) -> Result<Config, String> {
        match self {
            Self::Toml => toml::from_str(content).map_err(|e| e.to_string()),
            Self::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
            Self::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        }
    }
}

/// Read a configuration file.
///
/// A missing file is an error when `required` is set; otherwise the
/// defaults are returned.
pub fn load_from_file(path: &Path, required: bool) -> QuickIndexResult<Config> {
    let origin = path.display().to_string();

    if !path.exists() {
        if required {
            return Err(QuickIndexError::config_with_context(
                format!("Configuration file not found: {origin}"),
                origin,
            ));
        }
        debug!(path = %origin, "No configuration file, using defaults");
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path).map_err(|e| {
        QuickIndexError::config_with_context(format!("Cannot read configuration: {e}"), &origin)
    })?;

    let format = FileFormat::of(path);
    format.parse(&content).map_err(|detail| {
        QuickIndexError::config_with_context(
            format!("Invalid {} configuration: {detail}", format.name()),
            origin,
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogFormat;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = load_from_file(&temp_dir.path().join("absent.json"), false).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_json_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("quick_index.json");
        fs::write(
            &config_path,
            r#"{
                "client": {
                    "base_url": "https://search.example.com/api/v1",
                    "default_tolerance": 2.5,
                    "network": { "request_timeout_secs": 15 }
                },
                "logging": { "level": "debug", "format": "json" }
            }"#,
        )
        .unwrap();

        let config = load_from_file(&config_path, true).unwrap();
        assert_eq!(config.client.base_url, "https://search.example.com/api/v1");
        assert_eq!(config.client.default_tolerance, Some(2.5));
        assert_eq!(config.client.network.request_timeout_secs, Some(15));
        assert_eq!(config.client.network.connect_timeout_secs, None);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.storage.history_limit, 10);
    }

    #[test]
    fn test_load_from_toml_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("quick_index.toml");
        fs::write(
            &config_path,
            r#"
[client]
base_url = "http://10.0.0.5:8000/api/v1"

[storage]
history_limit = 25
"#,
        )
        .unwrap();

        let config = load_from_file(&config_path, true).unwrap();
        assert_eq!(config.client.base_url, "http://10.0.0.5:8000/api/v1");
        assert_eq!(config.storage.history_limit, 25);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_from_yaml_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("quick_index.yaml");
        fs::write(
            &config_path,
            "logging:\n  level: warn\n  format: compact\n",
        )
        .unwrap();

        let config = load_from_file(&config_path, true).unwrap();
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.format, LogFormat::Compact);
    }

    #[test]
    fn test_missing_required_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("quick_idnex.toml");

        let err = load_from_file(&config_path, true).unwrap_err();
        assert_eq!(err.error_code(), "QI_CONFIG");
        assert!(err.to_string().contains("Configuration file not found"));
        assert!(err.context().unwrap().contains("quick_idnex.toml"));
    }

    #[test]
    fn test_invalid_file_reports_context() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("broken.json");
        fs::write(&config_path, "{ not json").unwrap();

        let err = load_from_file(&config_path, true).unwrap_err();
        assert!(err.to_string().contains("Invalid JSON configuration"));
        assert!(err.context().unwrap().contains("broken.json"));
    }

    #[test]
    fn test_unknown_extension_is_read_as_json() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("quick_index.conf");
        fs::write(&config_path, r#"{"storage": {"history_limit": 3}}"#).unwrap();

        let config = load_from_file(&config_path, true).unwrap();
        assert_eq!(config.storage.history_limit, 3);
    }
}
