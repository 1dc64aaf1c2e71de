//! Storage layer for the coaching assessment CLI
//!
//! Read-only access to the game collection the game store exports:
//! - `models`: Data structures describing loaded collections
//! - `loader`: Layout detection, legacy migration and collection checks

pub mod loader;
pub mod models;


// Re-export the main entry points for easy access
pub use loader::{load_games, malformed_assessments, parse_games, summarize_games};
pub use models::*;
