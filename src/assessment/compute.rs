//! Player and team averages over a snapshot of game records.
//!
//! Every function here is pure: it reads the collection, never mutates it
//! and never fails. Missing slider keys propagate as NaN.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::assessment::types::{Assessment, GameCollection, GameRecord};
use crate::cli::types::{ids::PlayerId, metric::Metric};


/// How games are weighted against each other when averaging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Weighting {
    /// Every eligible game counts once; the divisor is the game count.
    #[default]
    Unweighted,
    /// Each game counts `demandFactor` times (1 when absent); the divisor is
    /// the sum of factors.
    DemandCorrected,
}

impl Weighting {
    pub fn from_demand_correction(use_demand_correction: bool) -> Self {
        if use_demand_correction {
            Weighting::DemandCorrected
        } else {
            Weighting::Unweighted
        }
    }

    /// Weight of a single game under this strategy.
    pub fn factor(&self, game: &GameRecord) -> f64 {
        match self {
            Weighting::Unweighted => 1.0,
            Weighting::DemandCorrected => game.demand_factor.unwrap_or(1.0),
        }
    }
}

/// Averages across the eligible games of a player or a team.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricAverages {
    /// Number of eligible games
    pub count: usize,
    /// One entry per metric, in [`Metric::ALL`] order
    pub averages: BTreeMap<Metric, f64>,
    pub overall: f64,
    #[serde(rename = "finalScore")]
    pub final_score: f64,
}

impl MetricAverages {
    pub fn average(&self, metric: Metric) -> f64 {
        self.averages.get(&metric).copied().unwrap_or(f64::NAN)
    }
}

/// Unweighted mean of the ten slider values of one assessment.
pub fn final_score(assessment: &Assessment) -> f64 {
    assessment.slider_values().iter().sum::<f64>() / Metric::COUNT as f64
}

/// The values one game contributes: either a single player's assessment or
/// the per-game team mean.
#[derive(Debug, Clone, Copy, PartialEq)]
struct GameScores {
    sliders: [f64; Metric::COUNT],
    overall: f64,
    final_score: f64,
}

impl GameScores {
    fn from_assessment(assessment: &Assessment) -> Self {
        Self {
            sliders: assessment.slider_values(),
            overall: assessment.overall,
            final_score: final_score(assessment),
        }
    }

    /// Plain mean across every assessment in a game. `None` if there are none.
    fn team_mean<'a>(assessments: impl IntoIterator<Item = &'a Assessment>) -> Option<Self> {
        let mut sum = Self::zero();
        let mut players = 0usize;

        for assessment in assessments {
            sum.add_scaled(&Self::from_assessment(assessment), 1.0);
            players += 1;
        }

        if players == 0 {
            return None;
        }
        Some(sum.divided_by(players as f64))
    }

    fn zero() -> Self {
        Self {
            sliders: [0.0; Metric::COUNT],
            overall: 0.0,
            final_score: 0.0,
        }
    }

    fn add_scaled(&mut self, other: &Self, factor: f64) {
        for (total, value) in self.sliders.iter_mut().zip(other.sliders) {
            *total += value * factor;
        }
        self.overall += other.overall * factor;
        self.final_score += other.final_score * factor;
    }

    fn divided_by(mut self, divisor: f64) -> Self {
        for total in self.sliders.iter_mut() {
            *total /= divisor;
        }
        self.overall /= divisor;
        self.final_score /= divisor;
        self
    }
}

/// Running totals across games for one weighting strategy.
#[derive(Debug)]
struct WeightedTotals {
    weighting: Weighting,
    sums: GameScores,
    count: usize,
    denominator: f64,
}

impl WeightedTotals {
    fn new(weighting: Weighting) -> Self {
        Self {
            weighting,
            sums: GameScores::zero(),
            count: 0,
            denominator: 0.0,
        }
    }

    fn add(&mut self, game: &GameRecord, scores: &GameScores) {
        let factor = self.weighting.factor(game);
        self.sums.add_scaled(scores, factor);
        self.count += 1;
        self.denominator += factor;
    }

    fn finish(self) -> Option<MetricAverages> {
        if self.count == 0 {
            return None;
        }

        let divisor = match self.weighting {
            Weighting::Unweighted => self.count as f64,
            Weighting::DemandCorrected => self.denominator,
        };
        let means = self.sums.divided_by(divisor);

        Some(MetricAverages {
            count: self.count,
            averages: Metric::ALL
                .into_iter()
                .zip(means.sliders)
                .collect(),
            overall: means.overall,
            final_score: means.final_score,
        })
    }
}

/// Averages of one player's assessments across the played games they were
/// assessed in. `None` when there is no such game.
pub fn player_averages(
    player_id: &PlayerId,
    games: &GameCollection,
    weighting: Weighting,
) -> Option<MetricAverages> {
    let mut totals = WeightedTotals::new(weighting);

    for game in games.values() {
        if let Some(assessment) = game.eligible_assessment(player_id) {
            totals.add(game, &GameScores::from_assessment(assessment));
        }
    }

    totals.finish()
}

/// Team averages as a mean of per-game means.
///
/// Each played game with at least one assessment is first reduced to the
/// plain mean over its assessed players. Those per-game values are then
/// averaged across games with the chosen weighting, so a game with many
/// assessed players weighs no more than one with few.
pub fn team_averages(games: &GameCollection, weighting: Weighting) -> Option<MetricAverages> {
    let mut totals = WeightedTotals::new(weighting);

    for game in games.values().filter(|g| g.is_played()) {
        if let Some(game_mean) = GameScores::team_mean(game.assessments.values()) {
            totals.add(game, &game_mean);
        }
    }

    totals.finish()
}
