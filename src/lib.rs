//! Soccer Coaching Assessment Library
//!
//! Aggregate statistics over a coach's per-game player assessments: player
//! and team averages, per-metric trends and chronological notes.
//!
//! ## Features
//!
//! - **Player Averages**: Mean of every slider metric, the overall score and
//!   the final score across the games a player was assessed in
//! - **Team Averages**: Mean of per-game team means, so crowded games do not
//!   dominate
//! - **Demand Correction**: Optional weighting by each game's demand factor
//! - **Trends and Notes**: Chronological views for charts and feedback
//! - **Legacy Data**: Reads every game layout the game store has exported
//!
//! ## Quick Start
//!
//! ```rust
//! use coach_assess::{assessment::*, GameId, Metric, PlayerId};
//!
//! let mut game = GameRecord::new("2024-01-01");
//! game.assessments.insert(
//!     PlayerId::new("p1"),
//!     Assessment {
//!         sliders: Metric::ALL.iter().map(|m| (m.key().to_string(), 4.0)).collect(),
//!         overall: 5.0,
//!         ..Assessment::default()
//!     },
//! );
//!
//! let mut games = GameCollection::new();
//! games.insert(GameId::new("g1"), game);
//!
//! let averages = player_averages(&PlayerId::new("p1"), &games, Weighting::Unweighted).unwrap();
//! assert_eq!(averages.count, 1);
//! assert_eq!(averages.final_score, 4.0);
//! ```
//!
//! ## Environment Configuration
//!
//! Point the CLI at your game collection to avoid passing `--games` each time:
//! ```bash
//! export COACH_ASSESS_GAMES=~/club/games.json
//! ```

pub mod assessment;
pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{
    ids::{GameId, PlayerId},
    metric::Metric,
};
pub use error::{CoachError, Result};

pub const GAMES_FILE_ENV_VAR: &str = "COACH_ASSESS_GAMES";
