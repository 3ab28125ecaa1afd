//! Session error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    /// Network, HTTP status or decoding failure while fetching the schedule
    #[error("Failed to fetch sessions: {0}")]
    RemoteFetch(String),

    #[error("Session not found with id: {0}")]
    NotFound(String),
}

impl From<reqwest::Error> for SessionError {
    fn from(e: reqwest::Error) -> Self {
        SessionError::RemoteFetch(e.to_string())
    }
}
