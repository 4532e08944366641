//! Client-side input validation
//!
//! Turns untrusted text into a [`ValidatedQuery`] before anything touches the
//! network. Rules are applied in order: emptiness, integer parsing, range.

use crate::query::ValidatedQuery;
use std::num::IntErrorKind;
use thiserror::Error;

/// Smallest value the service accepts
pub const MIN_SEARCH_VALUE: i64 = 0;

/// Largest value the service accepts
pub const MAX_SEARCH_VALUE: i64 = 1_000_000;

/// Why a piece of input was rejected.
///
/// The `Display` text is the message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationFailure {
    #[error("Please enter a value to search for")]
    EmptyInput,
    #[error("Please enter a valid number")]
    NotANumber,
    #[error("Value must be between 0 and 1,000,000")]
    OutOfRange,
    #[error("Tolerance must be a non-negative number")]
    InvalidTolerance,
}

/// Validate raw user input as a search value.
///
/// Surrounding whitespace is ignored. The remaining text must be a base-10
/// integer (an optional sign is allowed); fractions and trailing characters
/// are rejected as [`ValidationFailure::NotANumber`]. Integers too large to
/// represent are reported as [`ValidationFailure::OutOfRange`].
pub fn validate(raw: &str) -> Result<ValidatedQuery, ValidationFailure> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationFailure::EmptyInput);
    }

    let value = trimmed.parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ValidationFailure::OutOfRange,
        _ => ValidationFailure::NotANumber,
    })?;

    if !(MIN_SEARCH_VALUE..=MAX_SEARCH_VALUE).contains(&value) {
        return Err(ValidationFailure::OutOfRange);
    }

    Ok(ValidatedQuery::new(value))
}

/// Check a client-supplied tolerance bound.
pub fn validate_tolerance(tolerance: f64) -> Result<f64, ValidationFailure> {
    if tolerance.is_finite() && tolerance >= 0.0 {
        Ok(tolerance)
    } else {
        Err(ValidationFailure::InvalidTolerance)
    }
}
