//! Test doubles shared by the core unit tests

use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicUsize, Ordering};

use knights_session::{SessionError, SessionRecord, SessionSource};

/// Serves a replaceable list and counts fetches
#[derive(Default)]
pub struct StaticSessionSource {
    records: RwLock<Option<Vec<SessionRecord>>>,
    calls: AtomicUsize,
}

impl StaticSessionSource {
    pub fn new(records: Vec<SessionRecord>) -> Self {
        let source = Self::default();
        *source.records.write() = Some(records);
        source
    }

    pub fn set_unavailable(&self) {
        *self.records.write() = None;
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SessionSource for StaticSessionSource {
    async fn get_sessions(&self) -> knights_session::Result<Vec<SessionRecord>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.records
            .read()
            .clone()
            .ok_or_else(|| SessionError::RemoteFetch("unavailable".to_string()))
    }
}
