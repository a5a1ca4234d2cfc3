//! Configuration module for the playlist service
//!
//! This module contains the settings file structure and path management.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::Settings;
