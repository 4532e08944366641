//! CLI command implementations

pub mod config;
pub mod history;
pub mod interactive;
pub mod search;
pub mod theme;

use crate::console::CliConsole;
use quick_index_core::{
    Config, FileStore, MemoryStore, PreferenceStore, QuickIndexResult, SearchCoordinator,
    SearchHistory, ThemePreference,
};
use std::sync::Arc;

/// Everything a command needs: effective configuration, preference
/// storage and a console themed by the stored preference.
pub struct CommandContext {
    pub config: Config,
    pub console: CliConsole,
    store: Arc<dyn PreferenceStore>,
}

impl CommandContext {
    pub fn new(config: Config, verbose: bool) -> Self {
        let store: Arc<dyn PreferenceStore> = match config.storage.resolved_history_file() {
            Some(path) => Arc::new(FileStore::new(path)),
            None => Arc::new(MemoryStore::new()),
        };
        Self::with_store(config, store, verbose)
    }

    pub fn with_store(config: Config, store: Arc<dyn PreferenceStore>, verbose: bool) -> Self {
        let theme = ThemePreference::new(Arc::clone(&store))
            .get()
            .unwrap_or_default();
        Self {
            config,
            console: CliConsole::new(verbose, theme),
            store,
        }
    }

    pub fn history(&self) -> SearchHistory {
        SearchHistory::new(Arc::clone(&self.store)).with_limit(self.config.storage.history_limit)
    }

    pub fn theme(&self) -> ThemePreference {
        ThemePreference::new(Arc::clone(&self.store))
    }

    pub fn coordinator(&self) -> QuickIndexResult<SearchCoordinator> {
        SearchCoordinator::from_config(&self.config.client)
    }
}
