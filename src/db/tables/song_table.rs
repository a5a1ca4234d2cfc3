//! Song table operations

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};

use crate::core::{ServiceError, ServiceResult};
use crate::models::{AuditMetadata, Song, SongCategory};
use crate::stores::SongLookup;

/// Database row for songs table
#[derive(Debug, FromRow)]
pub(super) struct SongRow {
    id: i64,
    title: String,
    description: String,
    category: String,
    artist_name: String,
    duration: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl SongRow {
    pub(super) fn into_song(self) -> Result<Song> {
        let category = self
            .category
            .parse::<SongCategory>()
            .with_context(|| format!("song {} has a bad category", self.id))?;

        Ok(Song {
            id: self.id,
            title: self.title,
            description: self.description,
            category,
            artist_name: self.artist_name,
            duration: self.duration,
            audit: AuditMetadata {
                created_at: self.created_at,
                updated_at: self.updated_at,
            },
        })
    }
}

/// Song table operations
#[derive(Clone)]
pub struct SongTable {
    pool: SqlitePool,
}

impl SongTable {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get song by ID
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Song>> {
        let row: Option<SongRow> = sqlx::query_as("SELECT * FROM songs WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(SongRow::into_song).transpose()
    }

    /// Insert song, returning the new ID
    pub async fn insert(&self, song: &Song) -> Result<i64> {
        let result = sqlx::query(
            "INSERT INTO songs (title, description, category, artist_name, duration, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&song.title)
        .bind(&song.description)
        .bind(song.category.as_str())
        .bind(&song.artist_name)
        .bind(&song.duration)
        .bind(song.audit.created_at)
        .bind(song.audit.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Get song count
    #[cfg(test)]
    pub async fn count(&self) -> Result<i64> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM songs")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.0)
    }
}

#[async_trait]
impl SongLookup for SongTable {
    async fn get_song_by_id(&self, id: i64) -> ServiceResult<Song> {
        self.get_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::song_not_found(id))
    }

    async fn create_song(&self, song: &Song) -> ServiceResult<Song> {
        let mut saved = song.clone();
        saved.audit = AuditMetadata::now();
        saved.id = self.insert(&saved).await?;
        Ok(saved)
    }
}
