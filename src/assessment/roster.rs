//! Averages for every assessed player at once.

use rayon::prelude::*;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::assessment::compute::{player_averages, MetricAverages, Weighting};
use crate::assessment::types::GameCollection;
use crate::cli::types::ids::PlayerId;

/// One row of the roster report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerSummary {
    #[serde(rename = "playerId")]
    pub player_id: PlayerId,
    #[serde(flatten)]
    pub averages: MetricAverages,
}

/// Players with at least one assessment in a played game.
pub fn assessed_players(games: &GameCollection) -> BTreeSet<PlayerId> {
    games
        .values()
        .filter(|game| game.is_played())
        .flat_map(|game| game.assessments.keys().cloned())
        .collect()
}

/// Best final score first; NaN scores sink to the bottom.
fn by_final_score_desc(a: &PlayerSummary, b: &PlayerSummary) -> Ordering {
    let (x, y) = (a.averages.final_score, b.averages.final_score);
    let by_score = match (x.is_nan(), y.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => y.partial_cmp(&x).unwrap_or(Ordering::Equal),
    };
    by_score.then_with(|| a.player_id.cmp(&b.player_id))
}

/// Per-player averages for the whole roster, best final score first.
///
/// Players are independent, so their averages are computed in parallel over
/// the shared snapshot.
pub fn roster_report(games: &GameCollection, weighting: Weighting) -> Vec<PlayerSummary> {
    let players: Vec<PlayerId> = assessed_players(games).into_iter().collect();

    let mut report: Vec<PlayerSummary> = players
        .into_par_iter()
        .filter_map(|player_id| {
            player_averages(&player_id, games, weighting)
                .map(|averages| PlayerSummary { player_id, averages })
        })
        .collect();

    report.sort_by(by_final_score_desc);
    report
}
