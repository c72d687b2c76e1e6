//! App Core for ReadHub.
//!
//! Central struct holding the store, settings engine, and catalog,
//! managing application lifecycle.

use tracing::warn;

use crate::managers::bookmark_store::BookmarkStore;
use crate::platform;
use crate::services::catalog::Catalog;
use crate::services::settings_engine::SettingsEngine;
use crate::storage::{KeyValueStore, MemoryStore, SqliteStore};

/// Central application struct.
///
/// Bookmark stores are created on demand via [`App::bookmarks`] because
/// they borrow the shared key-value store mutably for their lifetime.
pub struct App {
    pub store: Box<dyn KeyValueStore>,
    pub settings_engine: SettingsEngine,
    pub catalog: Catalog,
}

impl App {
    /// Creates a new App backed by a SQLite store at the given path.
    ///
    /// Never fails: if the store cannot be opened (sandboxed environment,
    /// unwritable disk), the app degrades to an in-memory store —
    /// bookmarks simply stop surviving the process.
    pub fn new(store_path: &str) -> Self {
        let store: Box<dyn KeyValueStore> = match SqliteStore::open(store_path) {
            Ok(store) => Box::new(store),
            Err(e) => {
                warn!(
                    "could not open store at {}, bookmarks will not persist: {}",
                    store_path, e
                );
                Box::new(MemoryStore::new())
            }
        };

        Self {
            store,
            settings_engine: SettingsEngine::new(None),
            catalog: Catalog::builtin(),
        }
    }

    /// Creates a new App with the store at the platform data directory.
    pub fn open_default() -> Self {
        let data_dir = platform::get_data_dir();
        if let Err(e) = std::fs::create_dir_all(&data_dir) {
            warn!("could not create data directory: {}", e);
        }
        let store_path = data_dir.join("readhub.db").to_string_lossy().to_string();
        Self::new(&store_path)
    }

    /// Creates a bookmark store over the shared key-value store.
    pub fn bookmarks(&mut self) -> BookmarkStore<'_, dyn KeyValueStore> {
        BookmarkStore::new(self.store.as_mut())
    }

    /// Startup sequence: load settings.
    pub fn startup(&mut self) {
        use crate::services::settings_engine::SettingsEngineTrait;
        let _ = self.settings_engine.load();
    }

    /// Shutdown sequence: flush settings.
    pub fn shutdown(&mut self) {
        use crate::services::settings_engine::SettingsEngineTrait;
        let _ = self.settings_engine.save();
    }
}
