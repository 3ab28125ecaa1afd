//! Session data structure

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A scheduled conference talk.
///
/// Immutable once fetched; the store hands out clones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Unique identifier
    pub id: String,
    pub title: String,
    /// Abstract shown on the detail screen
    pub content: String,
    pub speakers: Vec<Speaker>,
    pub level: Level,
    pub tags: Vec<Tag>,
    pub room: Room,
    /// Local conference time
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Speaker {
    pub name: String,
    pub introduction: String,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Level {
    Basic,
    Intermediate,
    Advanced,
    Etc,
}

impl Level {
    /// Unrecognized levels fall back to `Etc`
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_uppercase().as_str() {
            "BASIC" => Level::Basic,
            "INTERMEDIATE" => Level::Intermediate,
            "ADVANCED" => Level::Advanced,
            _ => Level::Etc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Room {
    Track1,
    Track2,
    Track3,
    Etc,
}

impl Room {
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_uppercase().as_str() {
            "TRACK1" => Room::Track1,
            "TRACK2" => Room::Track2,
            "TRACK3" => Room::Track3,
            _ => Room::Etc,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_and_room_parsing() {
        assert_eq!(Level::parse("basic"), Level::Basic);
        assert_eq!(Level::parse("ADVANCED"), Level::Advanced);
        assert_eq!(Level::parse("expert"), Level::Etc);

        assert_eq!(Room::parse("Track2"), Room::Track2);
        assert_eq!(Room::parse("lobby"), Room::Etc);
        assert_eq!(Room::parse(" TRACK3 "), Room::Track3);
    }
}
