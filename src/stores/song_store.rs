//! Song catalog - in-memory song storage

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;

use super::SongLookup;
use crate::core::{ServiceError, ServiceResult};
use crate::models::{AuditMetadata, Song};

/// In-memory song catalog
pub struct MemorySongCatalog {
    songs: RwLock<HashMap<i64, Song>>,
    next_id: AtomicI64,
}

impl MemorySongCatalog {
    pub fn new() -> Self {
        Self {
            songs: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Get total song count
    #[cfg(test)]
    pub fn count(&self) -> usize {
        self.songs.read().len()
    }
}

impl Default for MemorySongCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SongLookup for MemorySongCatalog {
    async fn get_song_by_id(&self, id: i64) -> ServiceResult<Song> {
        self.songs
            .read()
            .get(&id)
            .cloned()
            .ok_or_else(|| ServiceError::song_not_found(id))
    }

    async fn create_song(&self, song: &Song) -> ServiceResult<Song> {
        let mut saved = song.clone();
        saved.id = self.next_id.fetch_add(1, Ordering::SeqCst);
        saved.audit = AuditMetadata::now();

        self.songs.write().insert(saved.id, saved.clone());
        Ok(saved)
    }
}
