//! Song model

use serde::{Deserialize, Serialize};

use super::{AuditMetadata, SongCategory};

/// A song record owned by the song catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    /// Database ID, 0 before the catalog assigns one
    #[serde(default)]
    pub id: i64,
    pub title: String,
    pub description: String,
    pub category: SongCategory,
    pub artist_name: String,
    /// Display duration, e.g. "3:01"
    pub duration: String,
    #[serde(flatten)]
    pub audit: AuditMetadata,
}

impl Song {
    /// Create an unsaved song (id 0 until the catalog assigns one)
    #[cfg(test)]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        category: SongCategory,
        artist_name: impl Into<String>,
        duration: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            title: title.into(),
            description: description.into(),
            category,
            artist_name: artist_name.into(),
            duration: duration.into(),
            audit: AuditMetadata::now(),
        }
    }
}

/// Bare reference to a song, as sent by clients inside a playlist body.
/// Any other song fields in the body are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SongRef {
    pub id: i64,
}

impl From<i64> for SongRef {
    fn from(id: i64) -> Self {
        Self { id }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_song_json_shape() {
        let song = Song::new(
            "Summer Rain",
            "Live At Road Studios",
            SongCategory::Pop,
            "Lean Bridges",
            "4:01",
        );
        let value = serde_json::to_value(&song).unwrap();
        assert_eq!(value["artistName"], "Lean Bridges");
        assert_eq!(value["category"], "POP");
        assert!(value.get("createdAt").is_some());
    }

    #[test]
    fn test_song_ref_ignores_extra_fields() {
        let r: SongRef =
            serde_json::from_str(r#"{"id": 7, "title": "whatever", "category": "ROCK"}"#).unwrap();
        assert_eq!(r, SongRef::from(7));
    }
}
