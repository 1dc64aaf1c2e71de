//! Error types for the coaching assessment CLI

use crate::cli::types::ids::GameId;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CoachError>;

#[derive(Error, Debug)]
pub enum CoachError {
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parsing failed: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Games file not found: {} (pass --games or set {env_var})", .path.display())]
    MissingGamesFile { path: PathBuf, env_var: String },

    #[error("Games file {} has an unrecognized layout", .path.display())]
    GamesFile { path: PathBuf },

    #[error("Unrecognized game collection layout: top-level JSON {found}")]
    UnknownLayout { found: &'static str },

    #[error("Game {game_id} could not be read: {message}")]
    InvalidGame { game_id: GameId, message: String },

    #[error("Invalid metric: {metric}")]
    InvalidMetric { metric: String },

    #[error("Invalid game date: {date}")]
    InvalidDate { date: String },

    #[error("Invalid player ID: {id:?}")]
    InvalidPlayerId { id: String },
}
