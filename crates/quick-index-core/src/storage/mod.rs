//! Client-side preference storage
//!
//! Stores are constructed explicitly and passed to the helpers that need
//! them; there is no process-wide instance. The search pipeline itself never
//! reads or writes preferences.

mod history;
mod store;
mod theme;

pub use history::SearchHistory;
pub use store::{FileStore, MemoryStore, PreferenceStore, StorageKey};
pub use theme::{Theme, ThemePreference};
