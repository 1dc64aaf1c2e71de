//! Core utilities for the coaching assessment CLI
//!
//! - `config`: Configuration file, default paths and games file resolution

pub mod config;

// Re-export commonly used items for convenience
pub use config::{default_games_path, resolve_games_path, Config};
