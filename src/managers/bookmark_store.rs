//! Bookmark store for ReadHub.
//!
//! Implements `BookmarkStoreTrait` — the "save this article" toggle
//! persisted across page reloads, backed by any [`KeyValueStore`].
//!
//! The whole collection lives under one fixed key as a JSON array of
//! records. Reads fail soft: a missing key, an unusable store, or a
//! malformed value all degrade to "nothing bookmarked" and are logged,
//! never surfaced. Failed writes are logged and dropped the same way;
//! the worst case is a bookmark that does not survive the next page load.

use tracing::warn;
use uuid::Uuid;

use crate::storage::KeyValueStore;
use crate::types::article::Article;
use crate::types::bookmark::BookmarkRecord;

/// Fixed storage key for the shared bookmark collection.
pub const BOOKMARKS_KEY: &str = "bookmarks";

/// Trait defining bookmark store operations.
pub trait BookmarkStoreTrait {
    /// Whether a bookmark record exists for the given article slug.
    fn is_bookmarked(&self, slug: &str) -> bool;
    /// Toggles the bookmark for an article. Returns the new state.
    fn toggle(&mut self, article: &Article) -> bool;
    /// All saved records, in insertion order.
    fn bookmarks(&self) -> Vec<BookmarkRecord>;
    /// Removes the record for `slug` if present. Returns whether one existed.
    fn remove(&mut self, slug: &str) -> bool;
}

/// Bookmark store over a borrowed key-value store.
pub struct BookmarkStore<'a, S: KeyValueStore + ?Sized> {
    store: &'a mut S,
}

impl<'a, S: KeyValueStore + ?Sized> BookmarkStore<'a, S> {
    /// Creates a new `BookmarkStore` over the provided key-value store.
    pub fn new(store: &'a mut S) -> Self {
        Self { store }
    }

    /// Reads and decodes the collection. Degrades to empty on any failure.
    fn read_records(&self) -> Vec<BookmarkRecord> {
        let raw = match self.store.get(BOOKMARKS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!("bookmark store unreadable, treating as empty: {}", e);
                return Vec::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(e) => {
                warn!("malformed bookmark collection, treating as empty: {}", e);
                Vec::new()
            }
        }
    }

    /// Encodes and writes the collection as the new authoritative value.
    /// A failed write is logged and dropped.
    fn write_records(&mut self, records: &[BookmarkRecord]) {
        let encoded = match serde_json::to_string(records) {
            Ok(encoded) => encoded,
            Err(e) => {
                warn!("failed to encode bookmark collection, write dropped: {}", e);
                return;
            }
        };
        if let Err(e) = self.store.set(BOOKMARKS_KEY, &encoded) {
            warn!("failed to persist bookmark collection, write dropped: {}", e);
        }
    }
}

impl<'a, S: KeyValueStore + ?Sized> BookmarkStoreTrait for BookmarkStore<'a, S> {
    fn is_bookmarked(&self, slug: &str) -> bool {
        self.read_records().iter().any(|r| r.slug == slug)
    }

    /// Toggle the bookmark for an article.
    ///
    /// Unbookmarking removes every record with the article's slug, which
    /// also repairs any duplicates left by an earlier writer. Bookmarking
    /// appends a record with a freshly generated id. Last write wins
    /// across concurrent writers; there is no merge.
    fn toggle(&mut self, article: &Article) -> bool {
        let mut records = self.read_records();
        let was_bookmarked = records.iter().any(|r| r.slug == article.slug);

        if was_bookmarked {
            records.retain(|r| r.slug != article.slug);
        } else {
            records.push(BookmarkRecord {
                id: Uuid::new_v4().to_string(),
                slug: article.slug.clone(),
                title: article.title.clone(),
                date: article.date.clone(),
                category: article.category.clone(),
            });
        }

        self.write_records(&records);
        !was_bookmarked
    }

    fn bookmarks(&self) -> Vec<BookmarkRecord> {
        self.read_records()
    }

    fn remove(&mut self, slug: &str) -> bool {
        let mut records = self.read_records();
        let had = records.iter().any(|r| r.slug == slug);
        if had {
            records.retain(|r| r.slug != slug);
            self.write_records(&records);
        }
        had
    }
}
