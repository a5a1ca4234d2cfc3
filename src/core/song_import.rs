//! Seeding the song catalog from a JSON file

use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

use crate::models::Song;
use crate::stores::SongLookup;

/// Read a JSON array of songs from `path` and create each one in `catalog`.
/// Ids in the file are ignored. Returns the number of songs created.
pub async fn import_songs(path: &Path, catalog: &dyn SongLookup) -> Result<usize> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read song file {}", path.display()))?;
    let songs: Vec<Song> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse song file {}", path.display()))?;

    for song in &songs {
        let saved = catalog.create_song(song).await?;
        info!("Imported song {} ({:?} by {})", saved.id, saved.title, saved.artist_name);
    }

    Ok(songs.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stores::MemorySongCatalog;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_import_songs() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("songs.json");
        std::fs::write(
            &path,
            r#"[
                {"title": "For The Lover That I Lost", "description": "Live At Abbey Road Studios",
                 "category": "POP", "artistName": "Sam Smith", "duration": "3:01"},
                {"id": 40, "title": "Summer Rain", "description": "Live At Road Studios",
                 "category": "POP", "artistName": "Lean Bridges", "duration": "4:01"}
            ]"#,
        )
        .unwrap();

        let catalog = MemorySongCatalog::new();
        assert_eq!(import_songs(&path, &catalog).await.unwrap(), 2);
        assert_eq!(catalog.get_song_by_id(2).await.unwrap().title, "Summer Rain");
        assert!(catalog.get_song_by_id(40).await.is_err());
    }

    #[tokio::test]
    async fn test_import_rejects_bad_category() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("songs.json");
        std::fs::write(
            &path,
            r#"[{"title": "x", "description": "y", "category": "POLKA", "artistName": "z", "duration": "1:00"}]"#,
        )
        .unwrap();

        let catalog = MemorySongCatalog::new();
        assert!(import_songs(&path, &catalog).await.is_err());
        assert_eq!(catalog.count(), 0);
    }
}
