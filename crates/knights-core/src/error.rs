//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] knights_storage::StorageError),

    #[error("Session error: {0}")]
    Session(#[from] knights_session::SessionError),

    #[error("Bookmark error: {0}")]
    Bookmark(#[from] knights_bookmarks::BookmarkError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
