//! Playlist store - in-memory playlist storage

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use anyhow::Result;
use async_trait::async_trait;
use parking_lot::RwLock;

use super::PlaylistStore;
use crate::models::{AuditMetadata, Playlist};

/// In-memory store for playlists. Ids are assigned from a counter starting
/// at 1 and never reused.
pub struct MemoryPlaylistStore {
    playlists: RwLock<BTreeMap<i64, Playlist>>,
    next_id: AtomicI64,
}

impl MemoryPlaylistStore {
    pub fn new() -> Self {
        Self {
            playlists: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Get total playlist count
    #[cfg(test)]
    pub fn count(&self) -> usize {
        self.playlists.read().len()
    }
}

impl Default for MemoryPlaylistStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PlaylistStore for MemoryPlaylistStore {
    async fn find_all(&self) -> Result<Vec<Playlist>> {
        Ok(self.playlists.read().values().cloned().collect())
    }

    async fn find_by_title_containing(&self, title: &str) -> Result<Vec<Playlist>> {
        Ok(self
            .playlists
            .read()
            .values()
            .filter(|p| p.title.contains(title))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Playlist>> {
        Ok(self.playlists.read().get(&id).cloned())
    }

    async fn insert(&self, playlist: &Playlist) -> Result<Playlist> {
        let mut saved = playlist.clone();
        saved.id = self.next_id.fetch_add(1, Ordering::SeqCst);
        saved.audit = AuditMetadata::now();

        self.playlists.write().insert(saved.id, saved.clone());
        Ok(saved)
    }

    async fn update(&self, playlist: &Playlist) -> Result<Option<Playlist>> {
        let mut playlists = self.playlists.write();
        let Some(existing) = playlists.get_mut(&playlist.id) else {
            return Ok(None);
        };

        let created_at = existing.audit.created_at;
        *existing = playlist.clone();
        existing.audit.created_at = created_at;
        existing.audit.touch();

        Ok(Some(existing.clone()))
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        self.playlists.write().remove(&id);
        Ok(())
    }
}
