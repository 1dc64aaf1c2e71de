//! Chronological views of one player's assessments: per-metric trend lines
//! and coach notes.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::assessment::types::{Assessment, GameCollection};
use crate::cli::types::{ids::PlayerId, metric::Metric, time::date_sort_key};

/// One point of a metric's trend line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub date: String,
    pub value: f64,
}

/// Trend lines keyed by metric. Always holds all ten metrics.
pub type MetricTrends = BTreeMap<Metric, Vec<TrendPoint>>;

/// A non-empty coach note together with the game date it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteEntry {
    pub date: String,
    pub notes: String,
}

/// Played games with an assessment for the player, as `(date, assessment)`
/// in collection order.
fn eligible_assessments<'a>(
    player_id: &'a PlayerId,
    games: &'a GameCollection,
) -> impl Iterator<Item = (&'a str, &'a Assessment)> + 'a {
    games.values().filter_map(move |game| {
        game.eligible_assessment(player_id)
            .map(|assessment| (game.game_date.as_str(), assessment))
    })
}

/// Per-metric trend lines for a player, oldest game first.
///
/// Games on the same date keep collection order. A player without eligible
/// games still gets all ten metrics, each with an empty line.
pub fn player_trends(player_id: &PlayerId, games: &GameCollection) -> MetricTrends {
    let mut entries: Vec<_> = eligible_assessments(player_id, games)
        .map(|(date, assessment)| (date_sort_key(date), date, assessment))
        .collect();

    // `sort_by` is stable
    entries.sort_by(|a, b| a.0.cmp(&b.0));

    Metric::ALL
        .into_iter()
        .map(|metric| {
            let points = entries
                .iter()
                .map(|(_, date, assessment)| TrendPoint {
                    date: (*date).to_string(),
                    value: assessment.slider(metric),
                })
                .collect();
            (metric, points)
        })
        .collect()
}

/// Non-empty notes for a player, most recent game first.
pub fn player_notes(player_id: &PlayerId, games: &GameCollection) -> Vec<NoteEntry> {
    let mut entries: Vec<_> = eligible_assessments(player_id, games)
        .filter(|(_, assessment)| assessment.has_notes())
        .map(|(date, assessment)| {
            (
                date_sort_key(date),
                NoteEntry {
                    date: date.to_string(),
                    notes: assessment.notes.clone(),
                },
            )
        })
        .collect();

    entries.sort_by(|a, b| b.0.cmp(&a.0));
    entries.into_iter().map(|(_, note)| note).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::types::GameRecord;
    use crate::cli::types::ids::GameId;

    fn assessment(intensity: f64, notes: &str) -> Assessment {
        let mut sliders: BTreeMap<String, f64> = Metric::ALL
            .iter()
            .map(|m| (m.key().to_string(), 5.0))
            .collect();
        sliders.insert("intensity".to_string(), intensity);
        Assessment {
            sliders,
            overall: 5.0,
            notes: notes.to_string(),
            ..Assessment::default()
        }
    }

    fn add_game(games: &mut GameCollection, id: &str, date: &str, a: Option<Assessment>) {
        let mut game = GameRecord::new(date);
        if let Some(a) = a {
            game.assessments.insert(PlayerId::new("p1"), a);
        }
        games.insert(GameId::new(id), game);
    }

    #[test]
    fn test_trends_sorted_ascending_by_date() {
        let mut games = GameCollection::new();
        // Game ids deliberately out of date order
        add_game(&mut games, "a", "2024-02-01", Some(assessment(2.0, "")));
        add_game(&mut games, "b", "2024-01-01", Some(assessment(4.0, "")));

        let trends = player_trends(&PlayerId::new("p1"), &games);
        assert_eq!(
            trends[&Metric::Intensity],
            vec![
                TrendPoint { date: "2024-01-01".to_string(), value: 4.0 },
                TrendPoint { date: "2024-02-01".to_string(), value: 2.0 },
            ]
        );
        assert_eq!(trends[&Metric::Impact].len(), 2);
    }

    #[test]
    fn test_trends_all_metrics_present_when_empty() {
        let mut games = GameCollection::new();
        add_game(&mut games, "a", "2024-02-01", None);

        let trends = player_trends(&PlayerId::new("p1"), &games);
        assert_eq!(trends.len(), Metric::COUNT);
        assert!(trends.values().all(|points| points.is_empty()));

        let trends = player_trends(&PlayerId::new("p1"), &GameCollection::new());
        assert_eq!(trends.len(), Metric::COUNT);
    }

    #[test]
    fn test_trends_skip_unplayed_games() {
        let mut games = GameCollection::new();
        add_game(&mut games, "a", "2024-01-01", Some(assessment(4.0, "")));
        add_game(&mut games, "b", "2024-02-01", Some(assessment(9.0, "")));
        games.get_mut(&GameId::new("b")).unwrap().is_played = Some(false);

        let trends = player_trends(&PlayerId::new("p1"), &games);
        assert_eq!(trends[&Metric::Intensity].len(), 1);
        assert_eq!(trends[&Metric::Intensity][0].value, 4.0);
    }

    #[test]
    fn test_trends_ties_keep_collection_order() {
        let mut games = GameCollection::new();
        add_game(&mut games, "a", "2024-01-01", Some(assessment(1.0, "")));
        add_game(&mut games, "b", "2024-01-01T00:00:00Z", Some(assessment(2.0, "")));

        let values: Vec<f64> = player_trends(&PlayerId::new("p1"), &games)[&Metric::Intensity]
            .iter()
            .map(|p| p.value)
            .collect();
        assert_eq!(values, vec![1.0, 2.0]);
    }

    #[test]
    fn test_notes_filter_empty_and_unplayed() {
        let mut games = GameCollection::new();
        add_game(&mut games, "a", "2024-01-01", Some(assessment(4.0, "good")));
        add_game(&mut games, "b", "2024-02-01", Some(assessment(2.0, "")));
        add_game(&mut games, "c", "2024-03-01", Some(assessment(2.0, "cancelled")));
        games.get_mut(&GameId::new("c")).unwrap().is_played = Some(false);

        let notes = player_notes(&PlayerId::new("p1"), &games);
        assert_eq!(
            notes,
            vec![NoteEntry {
                date: "2024-01-01".to_string(),
                notes: "good".to_string()
            }]
        );
    }

    #[test]
    fn test_notes_most_recent_first() {
        let mut games = GameCollection::new();
        add_game(&mut games, "a", "2024-01-01", Some(assessment(4.0, "first")));
        add_game(&mut games, "b", "2024-03-01", Some(assessment(4.0, "third")));
        add_game(&mut games, "c", "2024-02-01", Some(assessment(4.0, "second")));

        let notes: Vec<String> = player_notes(&PlayerId::new("p1"), &games)
            .into_iter()
            .map(|n| n.notes)
            .collect();
        assert_eq!(notes, vec!["third", "second", "first"]);
    }

    #[test]
    fn test_notes_for_unknown_player_empty() {
        let mut games = GameCollection::new();
        add_game(&mut games, "a", "2024-01-01", Some(assessment(4.0, "good")));
        assert!(player_notes(&PlayerId::new("nobody"), &games).is_empty());
    }
}
