//! Knights Storage Layer
//!
//! SQLite-backed key-value settings used as the persistent preference sink.
//! Every write replaces the stored value for its key in full.

mod database;
mod error;
mod migrations;

pub use database::Database;
pub use error::StorageError;

pub type Result<T> = std::result::Result<T, StorageError>;
