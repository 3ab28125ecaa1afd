//! Knights Bookmarks
//!
//! - Bookmarks are a set of session ids, persisted as a whole
//! - The current set is observable; new observers see the latest value first
//! - Every change is a read-modify-write followed by a full replace

mod error;
mod preferences;
mod store;

pub use error::BookmarkError;
pub use preferences::{
    BookmarkPreferences, InMemoryPreferences, SqlitePreferences, BOOKMARKED_SESSIONS_KEY,
};
pub use store::BookmarkStore;

/// Bookmarked session ids
pub type BookmarkSet = std::collections::BTreeSet<String>;

pub type Result<T> = std::result::Result<T, BookmarkError>;
