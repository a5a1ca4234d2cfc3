//! Enums for the song catalog

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Musical category of a song
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SongCategory {
    Pop,
    Rock,
    Jazz,
    Classical,
    Rap,
    Electro,
    Blues,
    Country,
    Reggae,
    Metal,
}

impl SongCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            SongCategory::Pop => "POP",
            SongCategory::Rock => "ROCK",
            SongCategory::Jazz => "JAZZ",
            SongCategory::Classical => "CLASSICAL",
            SongCategory::Rap => "RAP",
            SongCategory::Electro => "ELECTRO",
            SongCategory::Blues => "BLUES",
            SongCategory::Country => "COUNTRY",
            SongCategory::Reggae => "REGGAE",
            SongCategory::Metal => "METAL",
        }
    }
}

impl fmt::Display for SongCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SongCategory {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "POP" => Ok(SongCategory::Pop),
            "ROCK" => Ok(SongCategory::Rock),
            "JAZZ" => Ok(SongCategory::Jazz),
            "CLASSICAL" => Ok(SongCategory::Classical),
            "RAP" => Ok(SongCategory::Rap),
            "ELECTRO" => Ok(SongCategory::Electro),
            "BLUES" => Ok(SongCategory::Blues),
            "COUNTRY" => Ok(SongCategory::Country),
            "REGGAE" => Ok(SongCategory::Reggae),
            "METAL" => Ok(SongCategory::Metal),
            other => anyhow::bail!("unknown song category: {}", other),
        }
    }
}
