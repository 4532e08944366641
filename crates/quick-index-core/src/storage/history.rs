//! Recently searched values

use super::store::{PreferenceStore, StorageKey};
use crate::config::DEFAULT_HISTORY_LIMIT;
use crate::error::QuickIndexResult;
use serde_json::Value;
use std::sync::Arc;
use tracing::warn;

/// Most-recent-first list of searched values, without duplicates.
pub struct SearchHistory {
    store: Arc<dyn PreferenceStore>,
    limit: usize,
}

impl SearchHistory {
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        Self {
            store,
            limit: DEFAULT_HISTORY_LIMIT,
        }
    }

    /// Keep at most `limit` entries (at least one)
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit.max(1);
        self
    }

    /// Stored entries; unreadable or malformed data reads as empty.
    pub fn entries(&self) -> Vec<i64> {
        match self.store.get(StorageKey::SearchHistory) {
            Ok(Some(value)) => decode(value),
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "Failed to read search history");
                Vec::new()
            }
        }
    }

    /// Move `value` to the front, dropping older duplicates and overflow
    pub fn add(&self, value: i64) -> QuickIndexResult<()> {
        let mut entries = self.entries();
        entries.retain(|v| *v != value);
        entries.insert(0, value);
        entries.truncate(self.limit);
        self.store.set(StorageKey::SearchHistory, Value::from(entries))
    }

    pub fn clear(&self) -> QuickIndexResult<()> {
        self.store.remove(StorageKey::SearchHistory)
    }
}

fn decode(value: Value) -> Vec<i64> {
    match serde_json::from_value::<Vec<i64>>(value) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(error = %e, "Ignoring malformed search history");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{FileStore, MemoryStore};
    use serde_json::json;

    fn history() -> (Arc<MemoryStore>, SearchHistory) {
        let store = Arc::new(MemoryStore::new());
        let history = SearchHistory::new(store.clone());
        (store, history)
    }

    #[test]
    fn test_empty_history() {
        let (_, history) = history();
        assert!(history.entries().is_empty());
    }

    #[test]
    fn test_most_recent_first_without_duplicates() {
        let (_, history) = history();
        history.add(1).unwrap();
        history.add(2).unwrap();
        history.add(3).unwrap();
        history.add(1).unwrap();

        assert_eq!(history.entries(), vec![1, 3, 2]);
    }

    #[test]
    fn test_limit_is_enforced() {
        let (_, history) = history();
        for value in 0..15 {
            history.add(value).unwrap();
        }

        let entries = history.entries();
        assert_eq!(entries.len(), DEFAULT_HISTORY_LIMIT);
        assert_eq!(entries[0], 14);
        assert_eq!(entries[9], 5);
    }

    #[test]
    fn test_custom_limit() {
        let (store, _) = history();
        let history = SearchHistory::new(store).with_limit(2);
        history.add(10).unwrap();
        history.add(20).unwrap();
        history.add(30).unwrap();
        assert_eq!(history.entries(), vec![30, 20]);
    }

    #[test]
    fn test_malformed_history_reads_as_empty() {
        let (store, history) = history();
        store
            .set(StorageKey::SearchHistory, json!({"not": "a list"}))
            .unwrap();
        assert!(history.entries().is_empty());

        history.add(7).unwrap();
        assert_eq!(history.entries(), vec![7]);
    }

    #[test]
    fn test_clear() {
        let (store, history) = history();
        history.add(5).unwrap();
        history.clear().unwrap();
        assert!(history.entries().is_empty());
        assert!(!store.has(StorageKey::SearchHistory));
    }

    #[test]
    fn test_corrupt_file_reads_as_empty() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("prefs.json");
        std::fs::write(&path, "[1, 2]").unwrap();

        let history = SearchHistory::new(Arc::new(FileStore::new(&path)));
        assert!(history.entries().is_empty());
        assert!(history.add(500).is_err());
    }

    #[test]
    fn test_unreadable_file_reads_as_empty() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let history = SearchHistory::new(Arc::new(FileStore::new(temp_dir.path())));
        assert!(history.entries().is_empty());
    }
}
