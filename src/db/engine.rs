//! Database engine and connection management

use anyhow::{Context, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

use super::migrations::run_migrations;

/// Database engine wrapper
#[derive(Clone)]
pub struct DbEngine {
    pool: SqlitePool,
}

impl DbEngine {
    /// Get a reference to the connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// A private in-memory database with the full schema applied.
    ///
    /// The pool holds exactly one connection that never expires, since every
    /// new connection to `sqlite::memory:` would see an empty database.
    #[cfg(test)]
    pub async fn in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .context("Failed to open in-memory database")?;

        let engine = DbEngine { pool };
        create_tables(engine.pool()).await?;
        run_migrations(engine.pool()).await?;

        Ok(engine)
    }
}

/// Setup the SQLite database at `db_path`, creating it and its tables if
/// needed, then bring the schema up to date
pub async fn setup_sqlite(db_path: &Path, max_connections: u32) -> Result<DbEngine> {
    info!("Opening database at {}", db_path.display());

    // Create connection options with SQLite pragmas
    let options = SqliteConnectOptions::from_str(&format!("sqlite:{}", db_path.display()))?
        .create_if_missing(true)
        .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
        .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
        .busy_timeout(Duration::from_secs(30))
        .foreign_keys(true);

    // Create connection pool
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections.max(1))
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(30))
        .connect_with(options)
        .await
        .context("Failed to connect to database")?;

    let engine = DbEngine { pool };

    create_tables(engine.pool()).await?;
    run_migrations(engine.pool()).await?;

    Ok(engine)
}

/// Create all database tables
async fn create_tables(pool: &SqlitePool) -> Result<()> {
    // Song table (owned by the song catalog)
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS songs (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            description TEXT NOT NULL,
            category TEXT NOT NULL,
            artist_name TEXT NOT NULL,
            duration TEXT NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_songs_title ON songs(title);
        "#,
    )
    .execute(pool)
    .await?;

    // Playlist table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS playlists (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            description TEXT NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_playlists_title ON playlists(title);
        "#,
    )
    .execute(pool)
    .await?;

    // Playlist <-> song links. Removing a playlist drops its links only.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS song_playlist (
            playlist_id INTEGER NOT NULL,
            song_id INTEGER NOT NULL,
            position INTEGER NOT NULL DEFAULT 0,
            FOREIGN KEY (playlist_id) REFERENCES playlists(id) ON DELETE CASCADE,
            FOREIGN KEY (song_id) REFERENCES songs(id)
        );
        CREATE INDEX IF NOT EXISTS idx_song_playlist_playlist ON song_playlist(playlist_id);
        CREATE INDEX IF NOT EXISTS idx_song_playlist_song ON song_playlist(song_id);
        "#,
    )
    .execute(pool)
    .await?;

    // Migration table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS dbmigration (
            id INTEGER PRIMARY KEY,
            version INTEGER NOT NULL DEFAULT 0
        );
        INSERT OR IGNORE INTO dbmigration (id, version) VALUES (1, 0);
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
