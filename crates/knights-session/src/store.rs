//! Session Store
//!
//! Whole-list memoization of the remote schedule. Any lookup miss refreshes
//! the entire list; individual sessions are never fetched on their own.

use parking_lot::RwLock;
use std::sync::Arc;

use crate::error::SessionError;
use crate::session::Session;
use crate::source::SessionSource;
use crate::Result;

pub struct SessionStore {
    source: Arc<dyn SessionSource>,
    /// Last successfully fetched list, replaced wholesale
    cache: Arc<RwLock<Vec<Session>>>,
}

impl SessionStore {
    pub fn new(source: Arc<dyn SessionSource>) -> Self {
        Self {
            source,
            cache: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Fetch the full schedule and replace the cache with it.
    ///
    /// On failure the cache keeps its previous contents. Concurrent calls are
    /// not coordinated: whichever completes last owns the cache.
    pub async fn fetch_all(&self) -> Result<Vec<Session>> {
        let records = match self.source.get_sessions().await {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to fetch sessions");
                return Err(e);
            }
        };

        let sessions: Vec<Session> = records.into_iter().map(Session::from).collect();
        *self.cache.write() = sessions.clone();

        tracing::info!(count = sessions.len(), "Refreshed session cache");

        Ok(sessions)
    }

    /// Resolve a session by id, refreshing the whole list on cache miss.
    pub async fn fetch_one(&self, session_id: &str) -> Result<Session> {
        let cached = self.find_cached(session_id);
        if let Some(session) = cached {
            tracing::debug!(session_id = %session_id, "Session cache hit");
            return Ok(session);
        }

        tracing::debug!(session_id = %session_id, "Session cache miss, refreshing");

        self.fetch_all()
            .await?
            .into_iter()
            .find(|s| s.id == session_id)
            .ok_or_else(|| SessionError::NotFound(session_id.to_string()))
    }

    /// Snapshot of the cache without touching the source
    pub fn cached(&self) -> Vec<Session> {
        self.cache.read().clone()
    }

    fn find_cached(&self, session_id: &str) -> Option<Session> {
        self.cache
            .read()
            .iter()
            .find(|s| s.id == session_id)
            .cloned()
    }
}

impl Clone for SessionStore {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            cache: Arc::clone(&self.cache),
        }
    }
}
