//! Playlist service - a REST API for playlists of songs
//!
//! Playlists are stored in SQLite and reference songs held by the song
//! catalog. See `api` for the HTTP surface.

mod api;
mod config;
mod core;
mod db;
mod models;
mod stores;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use crate::config::{Paths, Settings};
use crate::core::PlaylistService;
use crate::stores::{PlaylistStore, SongLookup};

/// Playlist service
#[derive(Parser, Debug)]
#[command(name = "playlist-service")]
#[command(version)]
#[command(about = "A REST service for managing playlists of songs")]
struct Args {
    /// Host address to bind to (overrides settings.json)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides settings.json)
    #[arg(long)]
    port: Option<u16>,

    /// Enable debug mode
    #[arg(long)]
    debug: bool,

    /// Path to config directory
    #[arg(long)]
    config: Option<PathBuf>,

    /// SQLite database file (overrides settings.json)
    #[arg(long)]
    database: Option<String>,

    /// Keep everything in memory instead of SQLite
    #[arg(long)]
    in_memory: bool,

    /// Seed the song catalog from a JSON array of songs before serving
    #[arg(long)]
    import_songs: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(format!("{},sqlx=warn", log_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();

    info!("Playlist service v{} starting...", env!("CARGO_PKG_VERSION"));

    let paths = Paths::new(args.config.clone())?;
    info!("Config directory: {:?}", paths.config_dir());

    let mut settings = Settings::load(&paths.settings_path())?;
    if let Some(host) = args.host.clone() {
        settings.host = host;
    }
    if let Some(port) = args.port {
        settings.port = port;
    }
    if let Some(database) = args.database.clone() {
        settings.database_file = database;
    }

    let (store, songs) = open_stores(&args, &paths, &settings).await?;

    if let Some(path) = &args.import_songs {
        info!("Importing songs from {:?}", path);
        let count = core::song_import::import_songs(path, songs.as_ref()).await?;
        info!("Imported {} songs", count);
    }

    let service = PlaylistService::new(store, songs);
    serve(service, settings.bind_addr()).await
}

async fn open_stores(
    args: &Args,
    paths: &Paths,
    settings: &Settings,
) -> Result<(Arc<dyn PlaylistStore>, Arc<dyn SongLookup>)> {
    if args.in_memory {
        info!("Using in-memory stores; nothing will be persisted");
        let store: Arc<dyn PlaylistStore> = Arc::new(stores::MemoryPlaylistStore::new());
        let songs: Arc<dyn SongLookup> = Arc::new(stores::MemorySongCatalog::new());
        return Ok((store, songs));
    }

    let db_path = paths.db_path(&settings.database_file);
    let engine = db::setup_sqlite(&db_path, settings.max_connections).await?;

    let store: Arc<dyn PlaylistStore> = Arc::new(db::PlaylistTable::new(engine.pool().clone()));
    let songs: Arc<dyn SongLookup> = Arc::new(db::SongTable::new(engine.pool().clone()));
    Ok((store, songs))
}

async fn serve(service: PlaylistService, addr: String) -> Result<()> {
    use actix_cors::Cors;
    use actix_web::{middleware, web, App, HttpServer};

    let service = web::Data::new(service);
    info!("Server listening on http://{}", addr);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(service.clone())
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(api::configure)
    })
    .bind(addr)?
    .run()
    .await?;

    Ok(())
}
