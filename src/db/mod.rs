//! Database module for the playlist service
//!
//! This module handles all database operations using SQLx with SQLite.

mod engine;
mod migrations;
pub mod tables;

pub use engine::{setup_sqlite, DbEngine};
pub use tables::*;
