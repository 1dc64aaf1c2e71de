//! Data models for the storage layer

use crate::cli::types::{
    ids::{GameId, PlayerId},
    metric::Metric,
};
use serde::Serialize;

/// An assessment whose slider map lacks one or more metrics.
///
/// Averages that include it come out as NaN for the missing metrics and
/// for the final score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MalformedAssessment {
    #[serde(rename = "gameId")]
    pub game_id: GameId,
    #[serde(rename = "playerId")]
    pub player_id: PlayerId,
    pub missing: Vec<Metric>,
}

/// Health overview of a loaded game collection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GamesSummary {
    pub games: usize,
    pub played: usize,
    pub unplayed: usize,
    pub assessments: usize,
    pub with_notes: usize,
    /// Game ids whose date is not ISO 8601
    pub invalid_dates: Vec<GameId>,
    pub malformed: Vec<MalformedAssessment>,
}

impl GamesSummary {
    pub fn is_clean(&self) -> bool {
        self.invalid_dates.is_empty() && self.malformed.is_empty()
    }
}
