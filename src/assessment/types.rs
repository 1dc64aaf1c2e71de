use crate::cli::types::{
    ids::{GameId, PlayerId},
    metric::Metric,
};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

#[cfg(test)]
mod tests;

/// Game records keyed by game id.
///
/// A `BTreeMap` keeps enumeration order stable, so every aggregate over the
/// same snapshot sums in the same order.
pub type GameCollection = BTreeMap<GameId, GameRecord>;

/// `null` or a missing number reads as NaN, the way an absent score poisons
/// any arithmetic it takes part in.
fn de_nullable_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<f64> = Deserialize::deserialize(deserializer)?;
    Ok(raw.unwrap_or(f64::NAN))
}

fn nan() -> f64 {
    f64::NAN
}

/// `null` reads as the type's default, like an absent field.
fn de_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let raw: Option<T> = Deserialize::deserialize(deserializer)?;
    Ok(raw.unwrap_or_default())
}

/// Slider maps with `null` values (how the store writes NaN) keep the key
/// but read the value as NaN. A `null` map reads as empty.
fn de_sliders<'de, D>(deserializer: D) -> Result<BTreeMap<String, f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<BTreeMap<String, Option<f64>>> = Deserialize::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(|(key, value)| (key, value.unwrap_or(f64::NAN)))
        .collect())
}

/// When an assessment was recorded: epoch milliseconds in current data,
/// an ISO string in older exports.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Timestamp {
    Millis(i64),
    Iso(String),
}

/// A coach's evaluation of one player in one game.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Assessment {
    /// Slider scores keyed by metric name (see [`Metric::key`])
    #[serde(default, deserialize_with = "de_sliders")]
    pub sliders: BTreeMap<String, f64>,
    /// Holistic score, recorded separately from the sliders
    #[serde(default = "nan", deserialize_with = "de_nullable_f64")]
    pub overall: f64,
    #[serde(default, deserialize_with = "de_null_default")]
    pub notes: String,
    #[serde(
        rename = "minutesPlayed",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub minutes_played: Option<f64>,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(rename = "createdBy", default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
}

impl Assessment {
    /// Slider value for a metric. A missing key reads as NaN.
    pub fn slider(&self, metric: Metric) -> f64 {
        self.sliders
            .get(metric.key())
            .copied()
            .unwrap_or(f64::NAN)
    }

    /// All ten slider values in [`Metric::ALL`] order.
    pub fn slider_values(&self) -> [f64; Metric::COUNT] {
        Metric::ALL.map(|metric| self.slider(metric))
    }

    /// Metrics with no usable slider value: absent, or stored as `null`.
    pub fn missing_metrics(&self) -> Vec<Metric> {
        Metric::ALL
            .into_iter()
            .filter(|metric| self.slider(*metric).is_nan())
            .collect()
    }

    pub fn has_notes(&self) -> bool {
        !self.notes.is_empty()
    }
}

/// One game as handed over by the game store.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GameRecord {
    /// ISO 8601 date; older exports call it `date`
    #[serde(rename = "gameDate", alias = "date")]
    pub game_date: String,
    /// `Some(false)` marks a scheduled game that never took place.
    /// Absent means played.
    #[serde(rename = "isPlayed", default, skip_serializing_if = "Option::is_none")]
    pub is_played: Option<bool>,
    /// Opponent strength multiplier used by demand-corrected averages
    #[serde(
        rename = "demandFactor",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub demand_factor: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opponent: Option<String>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub assessments: BTreeMap<PlayerId, Assessment>,
}

impl GameRecord {
    /// Create a played game with no assessments.
    pub fn new(game_date: impl Into<String>) -> Self {
        Self {
            game_date: game_date.into(),
            is_played: None,
            demand_factor: None,
            opponent: None,
            assessments: BTreeMap::new(),
        }
    }

    /// Whether the game counts for statistics at all.
    pub fn is_played(&self) -> bool {
        self.is_played != Some(false)
    }

    /// The player's assessment, if the game counts and the player was assessed.
    pub fn eligible_assessment(&self, player_id: &PlayerId) -> Option<&Assessment> {
        if !self.is_played() {
            return None;
        }
        self.assessments.get(player_id)
    }
}
