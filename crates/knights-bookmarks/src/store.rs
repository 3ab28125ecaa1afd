//! Bookmark Store

use std::sync::Arc;
use tokio_stream::wrappers::WatchStream;

use crate::preferences::BookmarkPreferences;
use crate::{BookmarkSet, Result};

/// Bookmarked session ids on top of a preference sink.
///
/// Updates are read-modify-write against the latest observed value and are
/// not serialized: two concurrent toggles may lose one of the updates.
pub struct BookmarkStore {
    preferences: Arc<dyn BookmarkPreferences>,
}

impl BookmarkStore {
    pub fn new(preferences: Arc<dyn BookmarkPreferences>) -> Self {
        Self { preferences }
    }

    /// Infinite stream of the bookmark set.
    ///
    /// Yields the current value immediately, then every subsequent change.
    pub fn observe_bookmarks(&self) -> WatchStream<BookmarkSet> {
        WatchStream::new(self.preferences.bookmarked_sessions())
    }

    /// Latest known bookmark set
    pub fn bookmarks(&self) -> BookmarkSet {
        self.preferences.bookmarked_sessions().borrow().clone()
    }

    pub fn is_bookmarked(&self, session_id: &str) -> bool {
        self.preferences
            .bookmarked_sessions()
            .borrow()
            .contains(session_id)
    }

    /// Add or remove a single session id. Redundant calls are no-ops.
    pub async fn set_bookmarked(&self, session_id: &str, bookmark: bool) -> Result<()> {
        let mut bookmarks = self.bookmarks();
        if bookmark {
            bookmarks.insert(session_id.to_string());
        } else {
            bookmarks.remove(session_id);
        }

        self.preferences.update_bookmarked_sessions(bookmarks).await?;

        tracing::info!(session_id = %session_id, bookmark, "Updated bookmark");

        Ok(())
    }

    /// Remove every given id; ids that are not bookmarked are ignored.
    pub async fn remove_bookmarks<I, S>(&self, session_ids: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut bookmarks = self.bookmarks();
        let before = bookmarks.len();
        for id in session_ids {
            bookmarks.remove(id.as_ref());
        }
        let removed = before - bookmarks.len();

        self.preferences.update_bookmarked_sessions(bookmarks).await?;

        tracing::info!(removed, "Removed bookmarks");

        Ok(())
    }
}

impl Clone for BookmarkStore {
    fn clone(&self) -> Self {
        Self {
            preferences: Arc::clone(&self.preferences),
        }
    }
}
