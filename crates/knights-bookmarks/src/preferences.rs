//! Preference sinks for the bookmark set

use async_trait::async_trait;
use tokio::sync::watch;

use knights_storage::{Database, StorageError};

use crate::{BookmarkSet, Result};

pub const BOOKMARKED_SESSIONS_KEY: &str = "bookmarked_sessions";

/// Persistent, observable storage for the bookmark set.
#[async_trait]
pub trait BookmarkPreferences: Send + Sync {
    /// Receiver holding the current set; updated after every successful write
    fn bookmarked_sessions(&self) -> watch::Receiver<BookmarkSet>;

    /// Replace the stored set in full
    async fn update_bookmarked_sessions(&self, sessions: BookmarkSet) -> Result<()>;
}

/// Process-local sink; nothing survives a restart.
pub struct InMemoryPreferences {
    current: watch::Sender<BookmarkSet>,
}

impl InMemoryPreferences {
    pub fn new() -> Self {
        Self::with_bookmarks(BookmarkSet::new())
    }

    pub fn with_bookmarks(initial: BookmarkSet) -> Self {
        let (current, _) = watch::channel(initial);
        Self { current }
    }
}

impl Default for InMemoryPreferences {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookmarkPreferences for InMemoryPreferences {
    fn bookmarked_sessions(&self) -> watch::Receiver<BookmarkSet> {
        self.current.subscribe()
    }

    async fn update_bookmarked_sessions(&self, sessions: BookmarkSet) -> Result<()> {
        self.current.send_replace(sessions);
        Ok(())
    }
}

/// Sink backed by the settings table.
///
/// The set is stored as a JSON array under [`BOOKMARKED_SESSIONS_KEY`].
/// Writes are synchronous SQLite calls made on the calling task; the set is
/// small and the statement is a single-row replace.
pub struct SqlitePreferences {
    db: Database,
    current: watch::Sender<BookmarkSet>,
}

impl SqlitePreferences {
    /// Load the stored set. A corrupt stored value is treated as empty.
    pub fn new(db: Database) -> Result<Self> {
        let initial = match db.get_json::<BookmarkSet>(BOOKMARKED_SESSIONS_KEY) {
            Ok(stored) => stored.unwrap_or_default(),
            Err(StorageError::Serialization(e)) => {
                tracing::warn!(error = %e, "Discarding unreadable bookmark set");
                BookmarkSet::new()
            }
            Err(e) => return Err(e.into()),
        };

        tracing::info!(count = initial.len(), "Loaded bookmarked sessions");

        let (current, _) = watch::channel(initial);
        Ok(Self { db, current })
    }
}

#[async_trait]
impl BookmarkPreferences for SqlitePreferences {
    fn bookmarked_sessions(&self) -> watch::Receiver<BookmarkSet> {
        self.current.subscribe()
    }

    /// Published while the connection is still held, so the observed set
    /// always matches the stored row even with concurrent writers.
    async fn update_bookmarked_sessions(&self, sessions: BookmarkSet) -> Result<()> {
        self.db
            .set_json_then(BOOKMARKED_SESSIONS_KEY, &sessions, || {
                self.current.send_replace(sessions.clone());
            })?;
        Ok(())
    }
}
