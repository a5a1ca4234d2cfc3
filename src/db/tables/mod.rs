//! Database table operations

mod playlist_table;
mod song_table;

pub use playlist_table::PlaylistTable;
pub use song_table::SongTable;
