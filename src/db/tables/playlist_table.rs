//! Playlist table operations

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqliteConnection, SqlitePool};

use super::song_table::SongRow;
use crate::models::{AuditMetadata, Playlist, Song};
use crate::stores::PlaylistStore;

/// Database row for playlists table
#[derive(Debug, FromRow)]
struct PlaylistRow {
    id: i64,
    title: String,
    description: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PlaylistRow {
    fn into_playlist(self, songs: Vec<Song>) -> Playlist {
        Playlist {
            id: self.id,
            title: self.title,
            description: self.description,
            songs,
            audit: AuditMetadata {
                created_at: self.created_at,
                updated_at: self.updated_at,
            },
        }
    }
}

/// Playlist table operations. Songs are loaded eagerly through the
/// `song_playlist` join table.
#[derive(Clone)]
pub struct PlaylistTable {
    pool: SqlitePool,
}

impl PlaylistTable {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get playlist count
    #[cfg(test)]
    pub async fn count(&self) -> Result<i64> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM playlists")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.0)
    }

    /// Get the songs linked to a playlist, in playlist order
    async fn songs_of(&self, playlist_id: i64) -> Result<Vec<Song>> {
        let rows: Vec<SongRow> = sqlx::query_as(
            "SELECT s.* FROM song_playlist sp JOIN songs s ON s.id = sp.song_id WHERE sp.playlist_id = ? ORDER BY sp.position",
        )
        .bind(playlist_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(SongRow::into_song).collect()
    }

    async fn with_songs(&self, rows: Vec<PlaylistRow>) -> Result<Vec<Playlist>> {
        let mut playlists = Vec::with_capacity(rows.len());
        for row in rows {
            let songs = self.songs_of(row.id).await?;
            playlists.push(row.into_playlist(songs));
        }
        Ok(playlists)
    }

    /// Replace the song links of a playlist
    async fn link_songs(conn: &mut SqliteConnection, playlist_id: i64, songs: &[Song]) -> Result<()> {
        sqlx::query("DELETE FROM song_playlist WHERE playlist_id = ?")
            .bind(playlist_id)
            .execute(&mut *conn)
            .await?;

        for (position, song) in songs.iter().enumerate() {
            sqlx::query("INSERT INTO song_playlist (playlist_id, song_id, position) VALUES (?, ?, ?)")
                .bind(playlist_id)
                .bind(song.id)
                .bind(position as i64)
                .execute(&mut *conn)
                .await?;
        }

        Ok(())
    }
}

#[async_trait]
impl PlaylistStore for PlaylistTable {
    async fn find_all(&self) -> Result<Vec<Playlist>> {
        let rows: Vec<PlaylistRow> = sqlx::query_as("SELECT * FROM playlists ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        self.with_songs(rows).await
    }

    async fn find_by_title_containing(&self, title: &str) -> Result<Vec<Playlist>> {
        // instr() keeps the match case-sensitive, unlike LIKE
        let rows: Vec<PlaylistRow> =
            sqlx::query_as("SELECT * FROM playlists WHERE instr(title, ?) > 0 ORDER BY id")
                .bind(title)
                .fetch_all(&self.pool)
                .await?;

        self.with_songs(rows).await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Playlist>> {
        let row: Option<PlaylistRow> = sqlx::query_as("SELECT * FROM playlists WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => {
                let songs = self.songs_of(row.id).await?;
                Ok(Some(row.into_playlist(songs)))
            }
            None => Ok(None),
        }
    }

    async fn insert(&self, playlist: &Playlist) -> Result<Playlist> {
        let audit = AuditMetadata::now();
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            "INSERT INTO playlists (title, description, created_at, updated_at) VALUES (?, ?, ?, ?)",
        )
        .bind(&playlist.title)
        .bind(&playlist.description)
        .bind(audit.created_at)
        .bind(audit.updated_at)
        .execute(&mut *tx)
        .await?;
        let id = result.last_insert_rowid();

        Self::link_songs(&mut *tx, id, &playlist.songs).await?;
        tx.commit().await?;

        Ok(Playlist {
            id,
            audit,
            ..playlist.clone()
        })
    }

    async fn update(&self, playlist: &Playlist) -> Result<Option<Playlist>> {
        let updated_at = Utc::now();
        let mut tx = self.pool.begin().await?;

        let created_at: Option<DateTime<Utc>> = sqlx::query_scalar(
            "UPDATE playlists SET title = ?, description = ?, updated_at = ? WHERE id = ? RETURNING created_at",
        )
        .bind(&playlist.title)
        .bind(&playlist.description)
        .bind(updated_at)
        .bind(playlist.id)
        .fetch_optional(&mut *tx)
        .await?;

        // dropping the transaction rolls it back
        let Some(created_at) = created_at else {
            return Ok(None);
        };

        Self::link_songs(&mut *tx, playlist.id, &playlist.songs).await?;
        tx.commit().await?;

        Ok(Some(Playlist {
            audit: AuditMetadata {
                created_at,
                updated_at,
            },
            ..playlist.clone()
        }))
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM playlists WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
