//! Wire records returned by the remote schedule source

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::session::{Level, Room, Session, Speaker, Tag};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub speakers: Vec<SpeakerRecord>,
    #[serde(default)]
    pub level: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub room: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeakerRecord {
    pub name: String,
    #[serde(default)]
    pub introduction: String,
    #[serde(default)]
    pub image_url: String,
}

impl From<SpeakerRecord> for Speaker {
    fn from(record: SpeakerRecord) -> Self {
        Self {
            name: record.name,
            introduction: record.introduction,
            image_url: record.image_url,
        }
    }
}

impl From<SessionRecord> for Session {
    fn from(record: SessionRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            content: record.content,
            speakers: record.speakers.into_iter().map(Speaker::from).collect(),
            level: Level::parse(&record.level),
            tags: record.tags.into_iter().map(|name| Tag { name }).collect(),
            room: Room::parse(&record.room),
            start_time: record.start_time,
            end_time: record.end_time,
        }
    }
}
