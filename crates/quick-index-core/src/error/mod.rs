//! Error types for Quick Index
//!
//! Two families live here:
//! - [`AppError`]: the classified outcome of a failed search, the only error
//!   type that crosses the coordinator boundary into presentation code.
//! - [`QuickIndexError`]: operational failures outside the request pipeline
//!   (configuration, storage, IO, HTTP client construction).

mod app_error;
mod classifier;
mod constructors;
mod conversions;
mod types;

pub use app_error::{AppError, ErrorKind};
pub use classifier::{FailureInput, NETWORK_ERROR_MESSAGE, UNEXPECTED_ERROR_MESSAGE, classify};
pub use types::{QuickIndexError, QuickIndexResult};
