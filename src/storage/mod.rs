//! ReadHub storage layer.
//!
//! The persistence substrate is a synchronous string-key → string-value
//! store holding JSON-encoded blobs. Consumers depend on the
//! [`KeyValueStore`] trait rather than a concrete backend, so logic over
//! the store can be unit-tested against [`MemoryStore`] while the
//! application runs on [`SqliteStore`].
//!
//! # Usage
//!
//! ```no_run
//! use readhub::storage::{KeyValueStore, SqliteStore};
//!
//! // Open a persistent store
//! let mut store = SqliteStore::open("readhub.db").expect("failed to open store");
//!
//! // Or use an in-memory database for testing
//! let mut store = SqliteStore::open_in_memory().expect("failed to open in-memory store");
//!
//! store.set("bookmarks", "[]").unwrap();
//! assert_eq!(store.get("bookmarks").unwrap().as_deref(), Some("[]"));
//! ```

pub mod memory_store;
pub mod sqlite_store;

pub use memory_store::MemoryStore;
pub use sqlite_store::SqliteStore;

use crate::types::errors::StoreError;

/// Synchronous key-value store: string keys to string values.
///
/// Values are JSON-encoded by the callers; the store itself treats them as
/// opaque. Writes are atomic at the granularity of a single `set`; there
/// is no cross-key transaction and no locking, since all writers are
/// same-process and synchronous.
pub trait KeyValueStore {
    /// Returns the value stored under `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Removes the value stored under `key`. Removing an absent key is not
    /// an error.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}
