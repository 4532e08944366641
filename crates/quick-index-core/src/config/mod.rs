//! Configuration management for Quick Index
//!
//! Layers, lowest precedence first: defaults, config file, environment,
//! explicit overrides from the command line.

mod env_loader;
mod file_loader;
mod loader;
mod logging_config;
mod model;

pub use env_loader::{apply_env_overrides, apply_env_with};
pub use file_loader::load_from_file;
pub use loader::{ConfigOverrides, ConfigSource, load_config};
pub use logging_config::{LogFormat, LoggingConfig};
pub use model::{
    ClientConfig, Config, DEFAULT_BASE_URL, DEFAULT_HISTORY_LIMIT, NetworkConfig, StorageConfig,
};
