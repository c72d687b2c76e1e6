use serde::{Deserialize, Serialize};

/// A saved-article record as persisted in the bookmark collection.
///
/// The `slug` is the natural key: the collection never holds more than one
/// record per slug. The `id` is a freshly generated opaque identifier and
/// carries no meaning beyond display-list keying.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookmarkRecord {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub date: String,
    pub category: String,
}
