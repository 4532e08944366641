//! CLI argument definitions using clap

use clap::{Parser, Subcommand, ValueEnum};
use quick_index_core::{LogFormat, Theme};
use quick_index_core::ConfigOverrides;
use std::path::{Path, PathBuf};

/// Default configuration file name used across all CLI commands.
pub const DEFAULT_CONFIG_FILE: &str = "quick_index.toml";

#[derive(Parser)]
#[command(name = "quick-index")]
#[command(about = "Quick Index - exact and approximate value search")]
#[command(
    long_about = r#"Quick Index - exact and approximate value search

USAGE:
  quick-index search <VALUE>           # Search once and exit
  quick-index search <VALUE> -t 20     # Search with a tolerance
  quick-index interactive              # Prompt for values until :quit
  quick-index history [--clear]        # Show or clear recent searches
  quick-index theme [light|dark|system]
  quick-index config show              # Show effective configuration"#
)]
#[command(version)]
pub struct Cli {
    /// Path to configuration file (TOML, YAML or JSON) [default: quick_index.toml]
    #[arg(long, global = true)]
    pub config_file: Option<PathBuf>,

    /// Search service base URL, e.g. http://localhost:8000/api/v1
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Tolerance used when a search does not give one
    #[arg(long, global = true)]
    pub default_tolerance: Option<f64>,

    /// Log level or filter directive
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format
    #[arg(long, global = true, value_enum)]
    pub log_format: Option<LogFormatArg>,

    /// File holding search history and theme
    #[arg(long, global = true)]
    pub history_file: Option<PathBuf>,

    /// Enable verbose output (debug logging)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// The configuration file to read, named or conventional
    pub fn config_path(&self) -> &Path {
        self.config_file
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE))
    }

    /// Settings given on the command line, applied over file and environment
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            base_url: self.base_url.clone(),
            default_tolerance: self.default_tolerance,
            log_level: self.log_level.clone(),
            log_format: self.log_format.map(Into::into),
            history_file: self.history_file.clone(),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search for a value
    Search {
        /// Value to search for (0 - 1,000,000)
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Tolerance for approximate matches
        #[arg(long, short)]
        tolerance: Option<f64>,
    },

    /// Prompt for values repeatedly
    Interactive,

    /// Show recently searched values
    History {
        /// Forget all recent searches
        #[arg(long)]
        clear: bool,
    },

    /// Show or change the colour theme
    Theme {
        #[arg(value_enum)]
        theme: Option<ThemeArg>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Clone)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Pretty => Self::Pretty,
            LogFormatArg::Compact => Self::Compact,
            LogFormatArg::Json => Self::Json,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ThemeArg {
    Light,
    Dark,
    System,
}

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Light => Self::Light,
            ThemeArg::Dark => Self::Dark,
            ThemeArg::System => Self::System,
        }
    }
}
