//! Use cases exposed to the UI layer

use knights_bookmarks::{BookmarkSet, BookmarkStore};
use knights_session::{Session, SessionStore};

use crate::Result;

/// Resolve a single session by id.
#[derive(Clone)]
pub struct GetSession {
    sessions: SessionStore,
}

impl GetSession {
    pub fn new(sessions: SessionStore) -> Self {
        Self { sessions }
    }

    pub async fn execute(&self, session_id: &str) -> knights_session::Result<Session> {
        self.sessions.fetch_one(session_id).await
    }
}

#[derive(Clone)]
pub struct GetSessions {
    sessions: SessionStore,
}

impl GetSessions {
    pub fn new(sessions: SessionStore) -> Self {
        Self { sessions }
    }

    pub async fn execute(&self) -> knights_session::Result<Vec<Session>> {
        self.sessions.fetch_all().await
    }
}

/// Sessions the user bookmarked, in schedule order.
///
/// Bookmarked ids that no longer appear in the schedule are skipped.
#[derive(Clone)]
pub struct GetBookmarkedSessions {
    sessions: SessionStore,
    bookmarks: BookmarkStore,
}

impl GetBookmarkedSessions {
    pub fn new(sessions: SessionStore, bookmarks: BookmarkStore) -> Self {
        Self {
            sessions,
            bookmarks,
        }
    }

    pub async fn execute(&self) -> Result<Vec<Session>> {
        let bookmarked = self.bookmarks.bookmarks();
        if bookmarked.is_empty() {
            return Ok(Vec::new());
        }

        let sessions = self.sessions.fetch_all().await?;
        Ok(sessions
            .into_iter()
            .filter(|s| bookmarked.contains(&s.id))
            .collect())
    }
}

#[derive(Clone)]
pub struct BookmarkSession {
    bookmarks: BookmarkStore,
}

impl BookmarkSession {
    pub fn new(bookmarks: BookmarkStore) -> Self {
        Self { bookmarks }
    }

    pub async fn execute(&self, session_id: &str, bookmark: bool) -> knights_bookmarks::Result<()> {
        self.bookmarks.set_bookmarked(session_id, bookmark).await
    }
}

#[derive(Clone)]
pub struct DeleteBookmarkedSessions {
    bookmarks: BookmarkStore,
}

impl DeleteBookmarkedSessions {
    pub fn new(bookmarks: BookmarkStore) -> Self {
        Self { bookmarks }
    }

    pub async fn execute(&self, session_ids: &BookmarkSet) -> knights_bookmarks::Result<()> {
        self.bookmarks.remove_bookmarks(session_ids).await
    }
}
