//! Stored colour theme

use super::store::{PreferenceStore, StorageKey};
use crate::error::{QuickIndexError, QuickIndexResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
            Self::System => write!(f, "system"),
        }
    }
}

impl FromStr for Theme {
    type Err = QuickIndexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "system" => Ok(Self::System),
            other => Err(QuickIndexError::invalid_input(format!(
                "Unknown theme '{}', expected light, dark or system",
                other
            ))),
        }
    }
}

pub struct ThemePreference {
    store: Arc<dyn PreferenceStore>,
}

impl ThemePreference {
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        Self { store }
    }

    /// The stored theme, if any
    pub fn get(&self) -> Option<Theme> {
        match self.store.get(StorageKey::Theme) {
            Ok(Some(value)) => serde_json::from_value(value).ok(),
            Ok(None) => None,
            Err(e) => {
                warn!(error = %e, "Failed to read theme preference");
                None
            }
        }
    }

    pub fn set(&self, theme: Theme) -> QuickIndexResult<()> {
        self.store.set(StorageKey::Theme, Value::String(theme.to_string()))
    }

    pub fn remove(&self) -> QuickIndexResult<()> {
        self.store.remove(StorageKey::Theme)
    }
}
