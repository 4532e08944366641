//! Interpretation of successful search responses

use crate::error::FailureInput;
use crate::transport::RawResponse;
use serde::{Deserialize, Serialize};

/// Substring in the service message that marks an exact hit.
///
/// The wire format carries no structured match field, so the kind is read
/// from the message text.
pub const EXACT_MATCH_MARKER: &str = "Exact match";

/// Success body returned by `GET /search/<value>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub value: i64,
    pub index: u64,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    Exact,
    Approximate,
}

impl MatchKind {
    /// Classify a service message
    pub fn from_message(message: &str) -> Self {
        if message.contains(EXACT_MATCH_MARKER) {
            Self::Exact
        } else {
            Self::Approximate
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Exact => "Exact Match",
            Self::Approximate => "Approximate Match",
        }
    }
}

/// A search hit as presented to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub value: i64,
    pub index: u64,
    pub match_kind: MatchKind,
    pub message: String,
}

impl SearchResult {
    pub fn is_exact(&self) -> bool {
        self.match_kind == MatchKind::Exact
    }
}

impl From<SearchResponse> for SearchResult {
    fn from(response: SearchResponse) -> Self {
        Self {
            value: response.value,
            index: response.index,
            match_kind: MatchKind::from_message(&response.message),
            message: response.message,
        }
    }
}

/// Decode a 2xx response body into a [`SearchResult`].
///
/// A body that does not match [`SearchResponse`] is handed back as
/// [`FailureInput::Unexpected`] for classification.
pub fn interpret(raw: &RawResponse) -> Result<SearchResult, FailureInput> {
    serde_json::from_str::<SearchResponse>(&raw.body)
        .map(SearchResult::from)
        .map_err(|e| {
            FailureInput::Unexpected(format!(
                "Failed to decode search response (status {}): {}",
                raw.status, e
            ))
        })
}
