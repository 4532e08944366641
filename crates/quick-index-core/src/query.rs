//! Outbound query construction

use crate::validation::{ValidationFailure, validate_tolerance};
use serde::Serialize;

/// A search value that passed validation, optionally with a tolerance.
///
/// Only [`validate`](crate::validation::validate) creates one, so `value` is
/// always within the accepted range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ValidatedQuery {
    value: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    tolerance: Option<f64>,
}

impl ValidatedQuery {
    pub(crate) fn new(value: i64) -> Self {
        Self {
            value,
            tolerance: None,
        }
    }

    /// Attach a tolerance bound to the query
    pub fn with_tolerance(mut self, tolerance: f64) -> Result<Self, ValidationFailure> {
        self.tolerance = Some(validate_tolerance(tolerance)?);
        Ok(self)
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn tolerance(&self) -> Option<f64> {
        self.tolerance
    }
}

/// A fully formed request for the remote search endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    url: String,
    value: i64,
    tolerance: Option<f64>,
}

impl RequestDescriptor {
    /// Absolute URL, including the query string when a tolerance is set
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn tolerance(&self) -> Option<f64> {
        self.tolerance
    }
}

/// Builds [`RequestDescriptor`]s against a fixed API base URL.
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    base_url: String,
}

impl QueryBuilder {
    /// Create a builder for `base_url` (e.g. `http://localhost:8000/api/v1`).
    ///
    /// Trailing slashes are dropped.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Address `GET <base>/search/<value>`, adding `tolerance` only when set.
    pub fn build(&self, query: &ValidatedQuery) -> RequestDescriptor {
        let mut url = format!("{}/search/{}", self.base_url, query.value);
        if let Some(tolerance) = query.tolerance {
            url.push_str(&format!("?tolerance={}", tolerance));
        }

        RequestDescriptor {
            url,
            value: query.value,
            tolerance: query.tolerance,
        }
    }
}
