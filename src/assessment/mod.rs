//! Assessment aggregation engine
//!
//! Pure computations over an in-memory snapshot of game records:
//! - `types`: Game records and per-player assessments
//! - `compute`: Final score, player averages and team averages
//! - `trends`: Per-metric trend lines and coach notes
//! - `roster`: Averages for every assessed player

pub mod compute;
pub mod roster;
pub mod trends;
pub mod types;

pub use compute::{final_score, player_averages, team_averages, MetricAverages, Weighting};
pub use roster::{roster_report, PlayerSummary};
pub use trends::{player_notes, player_trends, MetricTrends, NoteEntry, TrendPoint};
pub use types::{Assessment, GameCollection, GameRecord};
