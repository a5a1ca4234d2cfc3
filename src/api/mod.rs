//! REST API routes for the playlist service

pub mod errors;
pub mod playlist;

use actix_web::web;

/// Configure all API routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Playlist routes
    cfg.service(web::scope("/api/playlists").configure(playlist::configure));
}
