//! Search state exposed to presentation code

use crate::error::AppError;
use crate::response::SearchResult;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchPhase {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

impl fmt::Display for SearchPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Loading => write!(f, "loading"),
            Self::Success => write!(f, "success"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Snapshot of the coordinator.
///
/// `result` is set exactly when the phase is `Success` and `error` exactly
/// when it is `Error`; the constructors are the only way to build one.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SearchState {
    phase: SearchPhase,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<SearchResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<AppError>,
}

impl SearchState {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn loading() -> Self {
        Self {
            phase: SearchPhase::Loading,
            result: None,
            error: None,
        }
    }

    pub fn succeeded(result: SearchResult) -> Self {
        Self {
            phase: SearchPhase::Success,
            result: Some(result),
            error: None,
        }
    }

    pub fn failed(error: AppError) -> Self {
        Self {
            phase: SearchPhase::Error,
            result: None,
            error: Some(error),
        }
    }

    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    pub fn result(&self) -> Option<&SearchResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&AppError> {
        self.error.as_ref()
    }

    pub fn is_idle(&self) -> bool {
        self.phase == SearchPhase::Idle
    }

    pub fn is_loading(&self) -> bool {
        self.phase == SearchPhase::Loading
    }

    pub fn is_success(&self) -> bool {
        self.phase == SearchPhase::Success
    }

    pub fn is_error(&self) -> bool {
        self.phase == SearchPhase::Error
    }
}
