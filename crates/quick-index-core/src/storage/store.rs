//! Key-value preference stores

use crate::error::{QuickIndexError, QuickIndexResult};
use parking_lot::{Mutex, RwLock};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Keys a preference store understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    Theme,
    SearchHistory,
}

impl StorageKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Theme => "theme",
            Self::SearchHistory => "searchHistory",
        }
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persistent JSON values addressed by [`StorageKey`]
pub trait PreferenceStore: Send + Sync {
    fn get(&self, key: StorageKey) -> QuickIndexResult<Option<Value>>;

    fn set(&self, key: StorageKey, value: Value) -> QuickIndexResult<()>;

    fn remove(&self, key: StorageKey) -> QuickIndexResult<()>;

    fn clear(&self) -> QuickIndexResult<()>;

    fn has(&self, key: StorageKey) -> bool {
        matches!(self.get(key), Ok(Some(_)))
    }
}

/// In-memory store, lost on drop
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<StorageKey, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: StorageKey) -> QuickIndexResult<Option<Value>> {
        Ok(self.values.read().get(&key).cloned())
    }

    fn set(&self, key: StorageKey, value: Value) -> QuickIndexResult<()> {
        self.values.write().insert(key, value);
        Ok(())
    }

    fn remove(&self, key: StorageKey) -> QuickIndexResult<()> {
        self.values.write().remove(&key);
        Ok(())
    }

    fn clear(&self) -> QuickIndexResult<()> {
        self.values.write().clear();
        Ok(())
    }
}

/// Store backed by a single JSON object on disk.
///
/// Every operation re-reads the file so several processes see each other's
/// writes; a missing file reads as empty.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> QuickIndexResult<Map<String, Value>> {
        if !self.path.exists() {
            return Ok(Map::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| {
            QuickIndexError::io_with_path(
                format!("Failed to read preferences: {}", e),
                self.path.display().to_string(),
            )
        })?;

        if content.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(QuickIndexError::storage_with_context(
                "Preferences file is not a JSON object",
                self.path.display().to_string(),
            )),
            Err(e) => Err(QuickIndexError::storage_with_context(
                format!("Failed to parse preferences: {}", e),
                self.path.display().to_string(),
            )),
        }
    }

    fn write_all(&self, map: Map<String, Value>) -> QuickIndexResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                QuickIndexError::io_with_path(
                    format!("Failed to create preferences directory: {}", e),
                    parent.display().to_string(),
                )
            })?;
        }

        let serialized = serde_json::to_string_pretty(&Value::Object(map))?;
        fs::write(&self.path, serialized).map_err(|e| {
            QuickIndexError::io_with_path(
                format!("Failed to write preferences: {}", e),
                self.path.display().to_string(),
            )
        })?;

        debug!(path = %self.path.display(), "Preferences written");
        Ok(())
    }

    fn update<F>(&self, f: F) -> QuickIndexResult<()>
    where
        F: FnOnce(&mut Map<String, Value>),
    {
        let _guard = self.lock.lock();
        let mut map = self.read_all()?;
        f(&mut map);
        self.write_all(map)
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: StorageKey) -> QuickIndexResult<Option<Value>> {
        let _guard = self.lock.lock();
        Ok(self.read_all()?.remove(key.as_str()))
    }

    fn set(&self, key: StorageKey, value: Value) -> QuickIndexResult<()> {
        self.update(|map| {
            map.insert(key.as_str().to_string(), value);
        })
    }

    fn remove(&self, key: StorageKey) -> QuickIndexResult<()> {
        self.update(|map| {
            map.remove(key.as_str());
        })
    }

    fn clear(&self) -> QuickIndexResult<()> {
        self.update(Map::clear)
    }
}
