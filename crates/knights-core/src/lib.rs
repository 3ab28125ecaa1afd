//! Knights Core
//!
//! Central coordination layer for the conference companion.
//! The UI layer talks to the use cases here and never to the stores directly.

mod conference;
mod config;
mod error;
mod usecase;

#[cfg(test)]
mod testing;

pub use conference::Conference;
pub use config::Config;
pub use error::CoreError;
pub use usecase::{
    BookmarkSession, DeleteBookmarkedSessions, GetBookmarkedSessions, GetSession, GetSessions,
};

// Re-export core components
pub use knights_bookmarks::{
    BookmarkError, BookmarkPreferences, BookmarkSet, BookmarkStore, InMemoryPreferences,
    SqlitePreferences,
};
pub use knights_session::{
    GithubRawSource, Level, Room, Session, SessionError, SessionRecord, SessionSource,
    SessionStore, Speaker, Tag,
};
pub use knights_storage::{Database, StorageError};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
