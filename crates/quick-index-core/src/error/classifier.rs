//! Failure classification
//!
//! Maps every way a search can fail after validation into exactly one
//! [`AppError`]. [`classify`] is total; nothing unclassified escapes it.

use super::app_error::AppError;
use crate::transport::{RawResponse, TransportFailure};
use serde::Deserialize;
use tracing::{debug, warn};

/// Message for any transport-level failure
pub const NETWORK_ERROR_MESSAGE: &str = "Network error: Unable to connect to the server";

/// Message for failures that fit no known shape
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Everything the classifier accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureInput {
    /// The exchange never completed
    Transport(TransportFailure),
    /// The exchange completed with a non-success status
    Response(RawResponse),
    /// Anything else, e.g. a 2xx body that could not be decoded
    Unexpected(String),
}

impl From<TransportFailure> for FailureInput {
    fn from(failure: TransportFailure) -> Self {
        Self::Transport(failure)
    }
}

impl From<RawResponse> for FailureInput {
    fn from(response: RawResponse) -> Self {
        Self::Response(response)
    }
}

/// Structured error body: `{"detail": {"error": ..., "message": ...}}`
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    detail: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    #[serde(default)]
    error: String,
    #[serde(default)]
    message: String,
}

/// Classify a failed search.
pub fn classify(input: FailureInput) -> AppError {
    match input {
        FailureInput::Transport(failure) => {
            warn!(error = %failure, "Transport failure");
            AppError::network(NETWORK_ERROR_MESSAGE)
        }
        FailureInput::Response(response) if response.is_success() => {
            warn!(status = response.status, "Success response passed to classifier");
            AppError::network(UNEXPECTED_ERROR_MESSAGE)
        }
        FailureInput::Response(response) => classify_response(response),
        FailureInput::Unexpected(detail) => {
            warn!(detail = %detail, "Unclassified failure");
            AppError::network(UNEXPECTED_ERROR_MESSAGE)
        }
    }
}

fn classify_response(response: RawResponse) -> AppError {
    match serde_json::from_str::<ErrorEnvelope>(&response.body) {
        Ok(envelope) if !envelope.detail.message.is_empty() => {
            debug!(
                status = response.status,
                error = %envelope.detail.error,
                "Structured server error"
            );
            AppError::server(envelope.detail.message, response.status)
        }
        _ => {
            debug!(status = response.status, "Server error without usable detail");
            AppError::server(status_line(&response), response.status)
        }
    }
}

/// `HTTP 404: Not Found`, or `HTTP 599` when there is no reason phrase
fn status_line(response: &RawResponse) -> String {
    if response.status_text.is_empty() {
        format!("HTTP {}", response.status)
    } else {
        format!("HTTP {}: {}", response.status, response.status_text)
    }
}
