//! Path management for the playlist service

use anyhow::Result;
use std::path::{Path, PathBuf};

/// Filesystem locations used by the service
#[derive(Debug, Clone)]
pub struct Paths {
    /// Config directory path
    config_dir: PathBuf,
}

impl Paths {
    /// Resolve the config directory and create it if missing.
    ///
    /// Uses `config` when given, else a `playlist-service` folder next to the
    /// executable, else the platform config directory.
    pub fn new(config_override: Option<PathBuf>) -> Result<Self> {
        let config_dir = if let Some(path) = config_override {
            path
        } else if let Ok(exe) = std::env::current_exe() {
            exe.parent()
                .unwrap_or(Path::new("."))
                .join("playlist-service")
        } else {
            directories::ProjectDirs::from("", "", "playlist-service")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .unwrap_or_else(|| PathBuf::from("playlist-service"))
        };

        std::fs::create_dir_all(&config_dir)?;

        Ok(Self { config_dir })
    }

    /// Get the config directory
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Get the settings file path
    pub fn settings_path(&self) -> PathBuf {
        self.config_dir.join("settings.json")
    }

    /// Resolve the database path. Relative names live in the config
    /// directory.
    pub fn db_path(&self, database_file: &str) -> PathBuf {
        let path = Path::new(database_file);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.config_dir.join(path)
        }
    }
}
