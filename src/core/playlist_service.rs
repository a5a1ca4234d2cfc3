//! Playlist service: business rules between the API and the stores

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::errors::{ServiceError, ServiceResult};
use crate::models::{Playlist, PlaylistInput, Song, SongRef};
use crate::stores::{PlaylistStore, SongLookup};

/// Orchestrates playlist reads and writes.
///
/// Song references in incoming playlists are resolved through the song
/// catalog before anything is written, so a missing song aborts the whole
/// operation.
#[derive(Clone)]
pub struct PlaylistService {
    store: Arc<dyn PlaylistStore>,
    songs: Arc<dyn SongLookup>,
}

impl PlaylistService {
    pub fn new(store: Arc<dyn PlaylistStore>, songs: Arc<dyn SongLookup>) -> Self {
        Self { store, songs }
    }

    /// Get all playlists
    pub async fn get_all_playlists(&self) -> ServiceResult<Vec<Playlist>> {
        let playlists = self.store.find_all().await?;
        debug!("Fetched {} playlists", playlists.len());
        Ok(playlists)
    }

    /// Get playlists whose title contains `title`
    pub async fn get_playlists_by_title(&self, title: &str) -> ServiceResult<Vec<Playlist>> {
        let playlists = self.store.find_by_title_containing(title).await?;
        debug!("{} playlists match title {:?}", playlists.len(), title);
        Ok(playlists)
    }

    /// Get playlist by id
    pub async fn get_playlist_by_id(&self, id: i64) -> ServiceResult<Playlist> {
        self.find_existing(id).await
    }

    /// Create a playlist, resolving its song references first
    pub async fn create_playlist(&self, input: PlaylistInput) -> ServiceResult<Playlist> {
        let songs = if input.songs.is_empty() {
            Vec::new()
        } else {
            self.resolve_songs(&input.songs).await?
        };

        let playlist = Playlist::new(input.title, input.description, songs);
        let saved = self.store.insert(&playlist).await?;

        info!(
            "Created playlist {} ({:?}) with {} songs",
            saved.id,
            saved.title,
            saved.songs.len()
        );
        Ok(saved)
    }

    /// Update title and description of an existing playlist.
    ///
    /// Songs are replaced only when the incoming list is non-empty; an empty
    /// list leaves the stored songs as they are.
    pub async fn update_playlist(&self, input: PlaylistInput) -> ServiceResult<Playlist> {
        // validation guarantees an id on updates; a missing one can never match
        let id = input.id.unwrap_or_default();
        let mut playlist = self.find_existing(id).await?;

        playlist.title = input.title;
        playlist.description = input.description;
        if !input.songs.is_empty() {
            playlist.songs = self.resolve_songs(&input.songs).await?;
        }

        // a delete may have landed since find_existing
        let Some(saved) = self.store.update(&playlist).await? else {
            warn!("Playlist {} vanished before it could be updated", id);
            return Err(ServiceError::playlist_not_found(id));
        };
        info!("Updated playlist {} ({:?})", saved.id, saved.title);
        Ok(saved)
    }

    /// Delete a playlist permanently. Its songs are untouched.
    pub async fn delete_playlist_by_id(&self, id: i64) -> ServiceResult<()> {
        self.find_existing(id).await?;
        self.store.delete_by_id(id).await?;
        info!("Deleted playlist {}", id);
        Ok(())
    }

    async fn find_existing(&self, id: i64) -> ServiceResult<Playlist> {
        match self.store.find_by_id(id).await? {
            Some(playlist) => Ok(playlist),
            None => {
                warn!("Playlist {} not found", id);
                Err(ServiceError::playlist_not_found(id))
            }
        }
    }

    /// Replace each reference with the catalog's record, in order
    async fn resolve_songs(&self, refs: &[SongRef]) -> ServiceResult<Vec<Song>> {
        let mut songs = Vec::with_capacity(refs.len());
        for song_ref in refs {
            songs.push(self.songs.get_song_by_id(song_ref.id).await?);
        }
        Ok(songs)
    }
}
