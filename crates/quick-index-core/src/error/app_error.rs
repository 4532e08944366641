//! Classified search errors shown to the user

use crate::validation::ValidationFailure;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// The closed set of failure kinds a search can end in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    /// The transport could not complete the request
    Network,
    /// Input was rejected before any request was made
    Validation,
    /// The service answered with a non-success status
    Server,
}

impl ErrorKind {
    /// Get a user-friendly title for the kind
    pub fn title(&self) -> &'static str {
        match self {
            Self::Network => "Network Error",
            Self::Validation => "Invalid Input",
            Self::Server => "Server Error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network => write!(f, "network"),
            Self::Validation => write!(f, "validation"),
            Self::Server => write!(f, "server"),
        }
    }
}

/// A search failure after classification.
///
/// `message` is displayed verbatim; `kind` is available for styling.
/// `status` is only present for [`ErrorKind::Server`].
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{message}")]
pub struct AppError {
    pub kind: ErrorKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl AppError {
    /// Create a network error
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Network,
            message: message.into(),
            status: None,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Validation,
            message: message.into(),
            status: None,
        }
    }

    /// Create a server error carrying the HTTP status
    pub fn server(message: impl Into<String>, status: u16) -> Self {
        Self {
            kind: ErrorKind::Server,
            message: message.into(),
            status: Some(status),
        }
    }
}

impl From<ValidationFailure> for AppError {
    fn from(failure: ValidationFailure) -> Self {
        Self::validation(failure.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_failure_conversion() {
        let err = AppError::from(ValidationFailure::EmptyInput);
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(err.message, "Please enter a value to search for");
        assert_eq!(err.status, None);
    }

    #[test]
    fn test_display_is_message_verbatim() {
        let err = AppError::server("No suitable match found for value 9999", 404);
        assert_eq!(err.to_string(), "No suitable match found for value 9999");
    }

    #[test]
    fn test_kind_titles() {
        assert_eq!(ErrorKind::Network.title(), "Network Error");
        assert_eq!(ErrorKind::Validation.title(), "Invalid Input");
        assert_eq!(ErrorKind::Server.title(), "Server Error");
    }

    #[test]
    fn test_serialize_omits_missing_status() {
        let json = serde_json::to_value(AppError::network("down")).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "network", "message": "down"}));
    }
}
