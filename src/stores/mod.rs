//! Store abstractions for playlists and the song catalog
//!
//! The service depends only on these traits. SQLite-backed implementations
//! live in `db::tables`; the in-memory ones here back tests and
//! `--in-memory` runs.

mod playlist_store;
mod song_store;

pub use playlist_store::MemoryPlaylistStore;
pub use song_store::MemorySongCatalog;

use anyhow::Result;
use async_trait::async_trait;

use crate::core::ServiceResult;
use crate::models::{Playlist, Song};

/// Persistence for playlists, keyed by playlist id.
///
/// Absence is reported as `None` or an empty vector. Errors are reserved for
/// storage faults.
#[async_trait]
pub trait PlaylistStore: Send + Sync {
    /// All playlists, ordered by id
    async fn find_all(&self) -> Result<Vec<Playlist>>;

    /// Playlists whose title contains `title` (case-sensitive)
    async fn find_by_title_containing(&self, title: &str) -> Result<Vec<Playlist>>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Playlist>>;

    /// Insert a new playlist, ignoring `playlist.id`, and return it with the
    /// assigned id
    async fn insert(&self, playlist: &Playlist) -> Result<Playlist>;

    /// Overwrite the stored playlist with the same id, songs included.
    /// `None` when no playlist with that id is stored.
    async fn update(&self, playlist: &Playlist) -> Result<Option<Playlist>>;

    async fn delete_by_id(&self, id: i64) -> Result<()>;
}

/// The song collaborator: resolves song ids to canonical records
#[async_trait]
pub trait SongLookup: Send + Sync {
    /// Fails with `ServiceError::NotFound` when no song has this id
    async fn get_song_by_id(&self, id: i64) -> ServiceResult<Song>;

    /// Store a new song and return it with its assigned id
    async fn create_song(&self, song: &Song) -> ServiceResult<Song>;
}
