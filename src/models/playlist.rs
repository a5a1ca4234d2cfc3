//! Playlist model

use serde::{Deserialize, Serialize};

use super::{AuditMetadata, Song, SongRef};

/// A playlist with its songs fully resolved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    /// Database ID
    pub id: i64,
    pub title: String,
    pub description: String,
    /// Songs in insertion order
    #[serde(default)]
    pub songs: Vec<Song>,
    #[serde(flatten)]
    pub audit: AuditMetadata,
}

impl Playlist {
    /// Create an unsaved playlist
    pub fn new(title: String, description: String, songs: Vec<Song>) -> Self {
        Self {
            id: 0,
            title,
            description,
            songs,
            audit: AuditMetadata::now(),
        }
    }

    #[cfg(test)]
    pub fn song_ids(&self) -> Vec<i64> {
        self.songs.iter().map(|s| s.id).collect()
    }
}

/// Raw playlist body as received over HTTP, before validation
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistPayload {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub songs: Option<Vec<SongRef>>,
}

/// A validated playlist write request. Songs are still bare references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistInput {
    pub id: Option<i64>,
    pub title: String,
    pub description: String,
    pub songs: Vec<SongRef>,
}

#[cfg(test)]
impl PlaylistInput {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            description: description.into(),
            songs: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_songs<I>(mut self, songs: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<SongRef>,
    {
        self.songs = songs.into_iter().map(Into::into).collect();
        self
    }
}
