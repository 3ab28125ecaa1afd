//! Bookmark error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookmarkError {
    /// Writing the bookmark set through to the preference sink failed
    #[error("Persistence error: {0}")]
    Persistence(String),
}

impl From<knights_storage::StorageError> for BookmarkError {
    fn from(e: knights_storage::StorageError) -> Self {
        BookmarkError::Persistence(e.to_string())
    }
}

impl From<serde_json::Error> for BookmarkError {
    fn from(e: serde_json::Error) -> Self {
        BookmarkError::Persistence(e.to_string())
    }
}
