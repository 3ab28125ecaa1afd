//! Main application state container

use std::sync::Arc;
use std::time::Duration;

use knights_bookmarks::{BookmarkPreferences, BookmarkStore, SqlitePreferences};
use knights_session::{GithubRawSource, SessionSource, SessionStore};
use knights_storage::Database;

use crate::config::Config;
use crate::usecase::{
    BookmarkSession, DeleteBookmarkedSessions, GetBookmarkedSessions, GetSession, GetSessions,
};
use crate::Result;

/// Conference companion instance
///
/// Owns the stores and hands out use cases wired to them. Clones share the
/// session cache and the bookmark set.
pub struct Conference {
    config: Config,
    db: Database,
    session_store: SessionStore,
    bookmark_store: BookmarkStore,
}

impl Conference {
    /// Open the preferences database and point the schedule at `sessions_url`
    pub fn new(config: Config) -> Result<Self> {
        if let Some(parent) = config.database_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let db = Database::open(&config.database_path)?;
        let source = GithubRawSource::new(
            &config.sessions_url,
            Duration::from_secs(config.request_timeout_secs),
        )?;

        Self::with_parts(config, db, Arc::new(source))
    }

    pub fn with_parts(
        config: Config,
        db: Database,
        source: Arc<dyn SessionSource>,
    ) -> Result<Self> {
        let preferences: Arc<dyn BookmarkPreferences> =
            Arc::new(SqlitePreferences::new(db.clone())?);

        tracing::info!(
            database = %config.database_path.display(),
            sessions_url = %config.sessions_url,
            "Conference initialized"
        );

        Ok(Self {
            config,
            db,
            session_store: SessionStore::new(source),
            bookmark_store: BookmarkStore::new(preferences),
        })
    }

    // === Stores ===

    pub fn session_store(&self) -> &SessionStore {
        &self.session_store
    }

    pub fn bookmark_store(&self) -> &BookmarkStore {
        &self.bookmark_store
    }

    // === Use cases ===

    pub fn get_session(&self) -> GetSession {
        GetSession::new(self.session_store.clone())
    }

    pub fn get_sessions(&self) -> GetSessions {
        GetSessions::new(self.session_store.clone())
    }

    pub fn get_bookmarked_sessions(&self) -> GetBookmarkedSessions {
        GetBookmarkedSessions::new(self.session_store.clone(), self.bookmark_store.clone())
    }

    pub fn bookmark_session(&self) -> BookmarkSession {
        BookmarkSession::new(self.bookmark_store.clone())
    }

    pub fn delete_bookmarked_sessions(&self) -> DeleteBookmarkedSessions {
        DeleteBookmarkedSessions::new(self.bookmark_store.clone())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

impl Clone for Conference {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            db: self.db.clone(),
            session_store: self.session_store.clone(),
            bookmark_store: self.bookmark_store.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::testing::StaticSessionSource;
    use knights_bookmarks::BookmarkSet;
    use knights_session::SessionRecord;
    use tokio_stream::StreamExt;

    fn record(id: &str) -> SessionRecord {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "title": format!("Session {id}"),
            "speakers": [{"name": "Speaker", "introduction": "", "imageUrl": ""}],
            "level": "ADVANCED",
            "tags": ["Android"],
            "room": "TRACK3",
            "startTime": "2023-09-12T11:00:00",
            "endTime": "2023-09-12T11:40:00"
        }))
        .unwrap()
    }

    fn conference(source: Arc<StaticSessionSource>) -> Conference {
        let config = Config::new(std::path::PathBuf::from(":memory:"));
        Conference::with_parts(config, Database::open_in_memory().unwrap(), source).unwrap()
    }

    #[tokio::test]
    async fn test_session_and_bookmark_flow() {
        let source = Arc::new(StaticSessionSource::new(vec![record("s1"), record("s2")]));
        let conference = conference(source.clone());

        let session = conference.get_session().execute("s1").await.unwrap();
        assert_eq!(session.title, "Session s1");
        assert_eq!(conference.session_store().cached().len(), 2);

        let mut observed = conference.bookmark_store().observe_bookmarks();
        assert_eq!(observed.next().await, Some(BookmarkSet::new()));

        conference.bookmark_session().execute("s1", true).await.unwrap();
        assert_eq!(
            observed.next().await,
            Some(BookmarkSet::from(["s1".to_string()]))
        );

        let bookmarked = conference.get_bookmarked_sessions().execute().await.unwrap();
        assert_eq!(bookmarked, vec![session]);

        let to_delete = BookmarkSet::from(["s1".to_string(), "s2".to_string()]);
        conference
            .delete_bookmarked_sessions()
            .execute(&to_delete)
            .await
            .unwrap();
        assert_eq!(observed.next().await, Some(BookmarkSet::new()));
    }

    #[tokio::test]
    async fn test_bookmarks_are_persisted() {
        let db = Database::open_in_memory().unwrap();
        let source: Arc<dyn SessionSource> = Arc::new(StaticSessionSource::new(Vec::new()));
        let config = Config::new(std::path::PathBuf::from(":memory:"));

        let first = Conference::with_parts(config.clone(), db.clone(), source.clone()).unwrap();
        first.bookmark_session().execute("s7", true).await.unwrap();

        let second = Conference::with_parts(config, db, source).unwrap();
        assert!(second.bookmark_store().is_bookmarked("s7"));
    }

    #[tokio::test]
    async fn test_not_found_surfaces_through_core_error() {
        let source = Arc::new(StaticSessionSource::new(vec![record("s1")]));
        let conference = conference(source.clone());

        let err: CoreError = conference
            .get_session()
            .execute("nope")
            .await
            .unwrap_err()
            .into();
        assert!(matches!(
            err,
            CoreError::Session(knights_session::SessionError::NotFound(_))
        ));
        assert_eq!(source.call_count(), 1);
    }

    #[test]
    fn test_new_creates_database_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::new(dir.path().join("nested"));
        config.sessions_url = "http://127.0.0.1:9/sessions.json".to_string();

        let conference = Conference::new(config).unwrap();
        assert!(conference.config().database_path.exists());
        assert!(conference.database().get_setting("missing").unwrap().is_none());
    }

    #[test]
    fn test_new_rejects_invalid_url() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::new(dir.path().to_path_buf());
        config.sessions_url = "not a url".to_string();

        assert!(matches!(
            Conference::new(config),
            Err(CoreError::Session(_))
        ));
    }
}
