//! Core playlist logic: validation, the service, song seeding, and errors

pub mod errors;
pub mod playlist_service;
pub mod song_import;
pub mod validation;

pub use errors::{ServiceError, ServiceResult};
pub use playlist_service::PlaylistService;
