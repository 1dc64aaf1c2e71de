//! Game date parsing.
//!
//! Game dates arrive as ISO 8601 strings. They are kept verbatim in the
//! records and parsed only to order trend points and notes.

use crate::error::{CoachError, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Parse an ISO 8601 game date into a comparable timestamp.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 date-times (normalized to UTC) and naive
/// `YYYY-MM-DDTHH:MM:SS[.fff]` date-times. Returns `None` for anything else.
pub fn parse_game_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").ok()
}

/// Like [`parse_game_date`], but reports unparseable input as an error.
pub fn validate_game_date(raw: &str) -> Result<NaiveDateTime> {
    parse_game_date(raw).ok_or_else(|| CoachError::InvalidDate {
        date: raw.to_string(),
    })
}

/// Sort key for a game date.
///
/// Unparseable dates map to `None`, which orders before every valid date,
/// so sorting by this key is always total.
pub fn date_sort_key(raw: &str) -> Option<NaiveDateTime> {
    parse_game_date(raw)
}
