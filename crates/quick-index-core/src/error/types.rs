//! Core operational error type

use thiserror::Error;

/// Result type alias for Quick Index operations
pub type QuickIndexResult<T> = Result<T, QuickIndexError>;

/// Operational error for everything around the search pipeline.
///
/// Search outcomes themselves are reported as [`AppError`](super::AppError);
/// this type covers loading configuration, talking to preference storage and
/// building the HTTP client.
#[derive(Error, Debug, Clone)]
pub enum QuickIndexError {
    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        context: Option<String>,
    },

    /// IO errors
    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
    },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {message}")]
    Json { message: String },

    /// HTTP client construction errors
    #[error("HTTP error: {message}")]
    Http {
        message: String,
        url: Option<String>,
    },

    /// Preference storage errors
    #[error("Storage error: {message}")]
    Storage {
        message: String,
        context: Option<String>,
    },

    /// Invalid input errors
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },
}

impl QuickIndexError {
    /// Get the error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Config { .. } => "QI_CONFIG",
            Self::Io { .. } => "QI_IO",
            Self::Json { .. } => "QI_JSON",
            Self::Http { .. } => "QI_HTTP",
            Self::Storage { .. } => "QI_STORAGE",
            Self::InvalidInput { .. } => "QI_INVALID_INPUT",
        }
    }

    /// Get optional context about the error
    pub fn context(&self) -> Option<&str> {
        match self {
            Self::Config { context, .. } | Self::Storage { context, .. } => context.as_deref(),
            Self::Io { path, .. } => path.as_deref(),
            Self::Http { url, .. } => url.as_deref(),
            Self::Json { .. } | Self::InvalidInput { .. } => None,
        }
    }
}
