//! Reading game collections exported by the game store
//!
//! The store has written three layouts over time; all of them load into the
//! same [`GameCollection`]. Nothing here writes back.

use super::models::{GamesSummary, MalformedAssessment};
use crate::assessment::types::{GameCollection, GameRecord};
use crate::cli::types::{ids::GameId, time::validate_game_date};
use crate::error::{CoachError, Result};
use serde_json::{Map, Value};
use std::path::Path;
use tracing::{debug, warn};

/// Every layout the game store has produced:
/// - current: object keyed by game id
/// - envelope: the same object under a `games` key
/// - legacy: array of records carrying their own `id`
#[derive(Debug)]
enum StoredGames {
    Keyed(Map<String, Value>),
    Envelope(Map<String, Value>),
    Legacy(Vec<Value>),
}

/// A keyed collection holding a single game called `games` must not be
/// mistaken for an envelope.
fn looks_like_record(value: &Map<String, Value>) -> bool {
    value.contains_key("gameDate") || value.contains_key("date")
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Legacy ids were sometimes numeric.
fn legacy_id(entry: &Value) -> Option<GameId> {
    match entry.get("id")? {
        Value::String(s) if !s.is_empty() => Some(GameId::new(s.as_str())),
        Value::Number(n) => Some(GameId::new(n.to_string())),
        _ => None,
    }
}

fn read_record(game_id: &GameId, value: Value) -> Result<GameRecord> {
    serde_json::from_value(value).map_err(|e| CoachError::InvalidGame {
        game_id: game_id.clone(),
        message: e.to_string(),
    })
}

fn read_keyed(games: Map<String, Value>) -> Result<GameCollection> {
    games
        .into_iter()
        .map(|(id, value)| {
            let game_id = GameId::new(id);
            let record = read_record(&game_id, value)?;
            Ok((game_id, record))
        })
        .collect()
}

impl StoredGames {
    fn detect(value: Value) -> Result<Self> {
        match value {
            Value::Array(entries) => Ok(StoredGames::Legacy(entries)),
            Value::Object(mut map) => match map.remove("games") {
                Some(Value::Object(games)) if map.is_empty() && !looks_like_record(&games) => {
                    Ok(StoredGames::Envelope(games))
                }
                Some(other) => {
                    map.insert("games".to_string(), other);
                    Ok(StoredGames::Keyed(map))
                }
                None => Ok(StoredGames::Keyed(map)),
            },
            other => Err(CoachError::UnknownLayout {
                found: json_kind(&other),
            }),
        }
    }

    fn into_collection(self) -> Result<GameCollection> {
        match self {
            StoredGames::Keyed(games) => read_keyed(games),
            StoredGames::Envelope(games) => {
                debug!("Loaded enveloped game layout");
                read_keyed(games)
            }
            StoredGames::Legacy(entries) => {
                debug!("Migrating legacy game list ({} entries)", entries.len());
                let mut games = GameCollection::new();
                for (index, entry) in entries.into_iter().enumerate() {
                    let id = legacy_id(&entry)
                        .unwrap_or_else(|| GameId::new(format!("game-{}", index)));
                    let record = read_record(&id, entry)?;
                    if games.insert(id.clone(), record).is_some() {
                        warn!("Duplicate game id {} in legacy list, keeping the later entry", id);
                    }
                }
                Ok(games)
            }
        }
    }
}

/// Parse a game collection from JSON in any supported layout.
///
/// A record that cannot be read fails the parse with
/// [`CoachError::InvalidGame`] naming that game.
pub fn parse_games(contents: &str) -> Result<GameCollection> {
    let value: Value = serde_json::from_str(contents)?;
    StoredGames::detect(value)?.into_collection()
}

/// Load a game collection from a JSON file.
pub fn load_games(path: &Path) -> Result<GameCollection> {
    let contents = std::fs::read_to_string(path)?;

    let games = parse_games(&contents).map_err(|e| match e {
        CoachError::UnknownLayout { found } => {
            debug!("Top-level JSON {} in {}", found, path.display());
            CoachError::GamesFile {
                path: path.to_path_buf(),
            }
        }
        other => other,
    })?;

    debug!("Loaded {} games from {}", games.len(), path.display());
    for malformed in malformed_assessments(&games) {
        warn!(
            "Game {} player {} is missing sliders: {}",
            malformed.game_id,
            malformed.player_id,
            malformed
                .missing
                .iter()
                .map(|m| m.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    Ok(games)
}

/// Assessments lacking one or more slider metrics, in collection order.
pub fn malformed_assessments(games: &GameCollection) -> Vec<MalformedAssessment> {
    games
        .iter()
        .flat_map(|(game_id, game)| {
            game.assessments.iter().filter_map(move |(player_id, assessment)| {
                let missing = assessment.missing_metrics();
                (!missing.is_empty()).then(|| MalformedAssessment {
                    game_id: game_id.clone(),
                    player_id: player_id.clone(),
                    missing,
                })
            })
        })
        .collect()
}

/// Counts and data problems of a collection, for the `check` command.
pub fn summarize_games(games: &GameCollection) -> GamesSummary {
    let mut summary = GamesSummary {
        games: games.len(),
        malformed: malformed_assessments(games),
        ..GamesSummary::default()
    };

    for (game_id, game) in games {
        if game.is_played() {
            summary.played += 1;
        } else {
            summary.unplayed += 1;
        }
        summary.assessments += game.assessments.len();
        summary.with_notes += game.assessments.values().filter(|a| a.has_notes()).count();

        if let Err(e) = validate_game_date(&game.game_date) {
            debug!("Game {}: {}", game_id, e);
            summary.invalid_dates.push(game_id.clone());
        }
    }

    summary
}
