//! Knights Session Schedule
//!
//! - The full schedule is fetched from a remote static source
//! - The last fetched list is memoized in memory, never persisted
//! - Lookups by id fall back to a whole-list refresh on cache miss

mod error;
mod record;
mod session;
mod source;
mod store;

pub use error::SessionError;
pub use record::{SessionRecord, SpeakerRecord};
pub use session::{Level, Room, Session, Speaker, Tag};
pub use source::{GithubRawSource, SessionSource, DEFAULT_SESSIONS_URL};
pub use store::SessionStore;

pub type Result<T> = std::result::Result<T, SessionError>;
