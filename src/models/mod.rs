//! Data models for the playlist service
//!
//! Playlists, the songs they reference, and the audit metadata both carry.

mod audit;
mod enums;
mod playlist;
mod song;

pub use audit::AuditMetadata;
pub use enums::SongCategory;
pub use playlist::{Playlist, PlaylistInput, PlaylistPayload};
pub use song::{Song, SongRef};
