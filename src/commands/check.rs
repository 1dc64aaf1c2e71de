//! Game collection health check

use super::common::{to_json, CommandContext};
use crate::{storage::summarize_games, Result};

pub fn render_check(ctx: &CommandContext, as_json: bool) -> Result<String> {
    let summary = summarize_games(&ctx.games);

    if as_json {
        return to_json(&summary);
    }

    let mut lines = vec![
        format!("Games file: {}", ctx.games_path.display()),
        format!(
            "Games: {} ({} played, {} not played)",
            summary.games, summary.played, summary.unplayed
        ),
        format!(
            "Assessments: {} ({} with notes)",
            summary.assessments, summary.with_notes
        ),
    ];

    for game_id in &summary.invalid_dates {
        lines.push(format!("⚠ Game {}: date is not ISO 8601", game_id));
    }
    for malformed in &summary.malformed {
        let missing: Vec<String> = malformed.missing.iter().map(|m| m.to_string()).collect();
        lines.push(format!(
            "⚠ Game {} player {}: missing {}",
            malformed.game_id,
            malformed.player_id,
            missing.join(", ")
        ));
    }
    if summary.is_clean() {
        lines.push("✓ No problems found".to_string());
    }

    Ok(lines.join("\n"))
}

/// Handle the check command
pub fn handle_check(ctx: &CommandContext, as_json: bool) -> Result<()> {
    println!("{}", render_check(ctx, as_json)?); // tarpaulin::skip
    Ok(())
}
