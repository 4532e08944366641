//! Quick Index Core Library
//!
//! The request pipeline behind Quick Index: a user submits a value, the
//! remote index-search service answers with an exact or closest match, and
//! every failure is reduced to a small, closed set of error kinds.
//!
//! ```text
//! validate -> QueryBuilder::build -> Transport::send -> interpret | classify
//!                    \__________ SearchCoordinator ___________/
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use quick_index_core::{ClientConfig, SearchCoordinator, SubmitOutcome};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let coordinator = SearchCoordinator::from_config(&ClientConfig::default())?;
//!
//! if let SubmitOutcome::Completed(state) = coordinator.submit("500").await {
//!     if let Some(result) = state.result() {
//!         println!("{} at index {} ({:?})", result.value, result.index, result.match_kind);
//!     }
//!     if let Some(error) = state.error() {
//!         eprintln!("{}: {}", error.kind.title(), error.message);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod coordinator;
pub mod error;
pub mod query;
pub mod response;
pub mod storage;
pub mod transport;
pub mod validation;

// Re-export commonly used types
pub use config::{
    ClientConfig, Config, ConfigOverrides, ConfigSource, LogFormat, LoggingConfig, load_config,
};
pub use coordinator::{SearchCoordinator, SearchPhase, SearchState, SubmitOutcome};
pub use error::{AppError, ErrorKind, QuickIndexError, QuickIndexResult, classify};
pub use query::{QueryBuilder, RequestDescriptor, ValidatedQuery};
pub use response::{MatchKind, SearchResponse, SearchResult};
pub use storage::{FileStore, MemoryStore, PreferenceStore, SearchHistory, Theme, ThemePreference};
pub use transport::{HttpTransport, RawResponse, Transport, TransportFailure};
pub use validation::{MAX_SEARCH_VALUE, MIN_SEARCH_VALUE, ValidationFailure, validate};
