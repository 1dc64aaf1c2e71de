//! The fixed set of assessment metrics.

use crate::error::CoachError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the ten slider metrics a coach scores per player and game.
///
/// The set is fixed and ordered. Every aggregate reports exactly these
/// metrics, in the order of [`Metric::ALL`]; the derived `Ord` follows the
/// same order so metric-keyed `BTreeMap`s iterate in it too.
///
/// # Examples
///
/// ```rust
/// use coach_assess::Metric;
///
/// assert_eq!(Metric::FairPlay.to_string(), "fair_play");
/// assert_eq!("fair_play".parse::<Metric>().unwrap(), Metric::FairPlay);
/// assert_eq!(Metric::ALL.len(), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Intensity,
    Courage,
    Duels,
    Technique,
    Creativity,
    Decisions,
    Awareness,
    Teamwork,
    FairPlay,
    Impact,
}

impl Metric {
    /// All metrics in reporting order.
    pub const ALL: [Metric; 10] = [
        Metric::Intensity,
        Metric::Courage,
        Metric::Duels,
        Metric::Technique,
        Metric::Creativity,
        Metric::Decisions,
        Metric::Awareness,
        Metric::Teamwork,
        Metric::FairPlay,
        Metric::Impact,
    ];

    /// Number of metrics in the fixed set.
    pub const COUNT: usize = Self::ALL.len();

    /// Key used for this metric in stored slider maps.
    pub fn key(&self) -> &'static str {
        match self {
            Metric::Intensity => "intensity",
            Metric::Courage => "courage",
            Metric::Duels => "duels",
            Metric::Technique => "technique",
            Metric::Creativity => "creativity",
            Metric::Decisions => "decisions",
            Metric::Awareness => "awareness",
            Metric::Teamwork => "teamwork",
            Metric::FairPlay => "fair_play",
            Metric::Impact => "impact",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Metric {
    type Err = CoachError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "intensity" => Ok(Metric::Intensity),
            "courage" => Ok(Metric::Courage),
            "duels" => Ok(Metric::Duels),
            "technique" => Ok(Metric::Technique),
            "creativity" => Ok(Metric::Creativity),
            "decisions" => Ok(Metric::Decisions),
            "awareness" => Ok(Metric::Awareness),
            "teamwork" => Ok(Metric::Teamwork),
            "fair_play" | "fairplay" => Ok(Metric::FairPlay),
            "impact" => Ok(Metric::Impact),
            _ => Err(CoachError::InvalidMetric {
                metric: s.to_string(),
            }),
        }
    }
}
