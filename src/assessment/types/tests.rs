//! Unit tests for assessment types and their JSON shape

use super::*;
use serde_json::json;

#[cfg(test)]
mod types_tests {
    use super::*;

    fn full_sliders() -> serde_json::Value {
        json!({
            "intensity": 4, "courage": 6, "duels": 2, "technique": 3,
            "creativity": 5, "decisions": 4, "awareness": 5, "teamwork": 6,
            "fair_play": 5, "impact": 4
        })
    }

    #[test]
    fn test_assessment_deserialization() {
        let json = json!({
            "sliders": full_sliders(),
            "overall": 7,
            "notes": "strong in the air",
            "minutesPlayed": 60,
            "createdAt": 1704067200000_i64,
            "createdBy": "coach-1"
        });

        let assessment: Assessment = serde_json::from_value(json).unwrap();
        assert_eq!(assessment.overall, 7.0);
        assert_eq!(assessment.slider(Metric::FairPlay), 5.0);
        assert_eq!(assessment.minutes_played, Some(60.0));
        assert_eq!(assessment.created_at, Some(Timestamp::Millis(1704067200000)));
        assert_eq!(assessment.created_by.as_deref(), Some("coach-1"));
        assert!(assessment.missing_metrics().is_empty());
        assert!(assessment.has_notes());
    }

    #[test]
    fn test_assessment_minimal_fields() {
        let assessment: Assessment = serde_json::from_value(json!({
            "sliders": { "intensity": 3 },
            "createdAt": "2024-01-01T10:00:00Z"
        }))
        .unwrap();

        assert!(assessment.overall.is_nan());
        assert!(assessment.notes.is_empty());
        assert!(!assessment.has_notes());
        assert_eq!(
            assessment.created_at,
            Some(Timestamp::Iso("2024-01-01T10:00:00Z".to_string()))
        );
        assert_eq!(assessment.missing_metrics().len(), 9);
        assert!(!assessment.missing_metrics().contains(&Metric::Intensity));
    }

    #[test]
    fn test_null_overall_reads_as_nan() {
        let assessment: Assessment =
            serde_json::from_value(json!({ "sliders": {}, "overall": null })).unwrap();
        assert!(assessment.overall.is_nan());
    }

    #[test]
    fn test_null_slider_reads_as_nan_and_counts_as_missing() {
        let mut sliders = full_sliders();
        sliders["intensity"] = serde_json::Value::Null;

        let assessment: Assessment =
            serde_json::from_value(json!({ "sliders": sliders, "overall": 6 })).unwrap();
        assert!(assessment.slider(Metric::Intensity).is_nan());
        assert_eq!(assessment.slider(Metric::Courage), 6.0);
        assert_eq!(assessment.missing_metrics(), vec![Metric::Intensity]);
    }

    #[test]
    fn test_null_notes_and_sliders_read_as_empty() {
        let assessment: Assessment = serde_json::from_value(json!({
            "sliders": null,
            "overall": 5,
            "notes": null
        }))
        .unwrap();
        assert!(assessment.sliders.is_empty());
        assert!(assessment.notes.is_empty());
        assert!(!assessment.has_notes());
        assert_eq!(assessment.missing_metrics().len(), Metric::COUNT);
    }

    #[test]
    fn test_slider_values_in_metric_order() {
        let assessment: Assessment =
            serde_json::from_value(json!({ "sliders": full_sliders(), "overall": 5 })).unwrap();
        assert_eq!(
            assessment.slider_values(),
            [4.0, 6.0, 2.0, 3.0, 5.0, 4.0, 5.0, 6.0, 5.0, 4.0]
        );
    }

    #[test]
    fn test_missing_slider_is_nan() {
        let assessment = Assessment::default();
        assert!(assessment.slider(Metric::Impact).is_nan());
    }

    #[test]
    fn test_game_record_defaults() {
        let game: GameRecord = serde_json::from_value(json!({ "gameDate": "2024-01-01" })).unwrap();
        assert_eq!(game.is_played, None);
        assert!(game.is_played());
        assert_eq!(game.demand_factor, None);
        assert!(game.assessments.is_empty());
    }

    #[test]
    fn test_game_record_null_assessments_is_empty() {
        let game: GameRecord = serde_json::from_value(json!({
            "gameDate": "2024-01-01",
            "demandFactor": null,
            "assessments": null
        }))
        .unwrap();
        assert_eq!(game.demand_factor, None);
        assert!(game.assessments.is_empty());
    }

    #[test]
    fn test_game_record_legacy_date_alias() {
        let game: GameRecord = serde_json::from_value(json!({
            "date": "2023-09-02",
            "isPlayed": true,
            "demandFactor": 1.2
        }))
        .unwrap();
        assert_eq!(game.game_date, "2023-09-02");
        assert!(game.is_played());
        assert_eq!(game.demand_factor, Some(1.2));
    }

    #[test]
    fn test_unplayed_game_has_no_eligible_assessment() {
        let mut game = GameRecord::new("2024-01-01");
        game.assessments
            .insert(PlayerId::new("p1"), Assessment::default());
        assert!(game.eligible_assessment(&PlayerId::new("p1")).is_some());
        assert!(game.eligible_assessment(&PlayerId::new("p2")).is_none());

        game.is_played = Some(false);
        assert!(!game.is_played());
        assert!(game.eligible_assessment(&PlayerId::new("p1")).is_none());
    }

    #[test]
    fn test_game_record_serialization_skips_absent_fields() {
        let game = GameRecord::new("2024-05-05");
        let json = serde_json::to_value(&game).unwrap();
        assert_eq!(json["gameDate"], "2024-05-05");
        assert!(json.get("isPlayed").is_none());
        assert!(json.get("demandFactor").is_none());
        assert!(json["assessments"].as_object().unwrap().is_empty());
    }
}
