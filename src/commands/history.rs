//! Trend and notes commands

use super::common::{format_score, to_json, CommandContext};
use crate::{
    assessment::trends::{player_notes, player_trends, MetricTrends},
    Metric, PlayerId, Result,
};

/// Keep only the requested metrics; `None` keeps all ten.
fn select_metrics(trends: MetricTrends, metrics: Option<&[Metric]>) -> MetricTrends {
    match metrics {
        Some(wanted) => trends
            .into_iter()
            .filter(|(metric, _)| wanted.contains(metric))
            .collect(),
        None => trends,
    }
}

pub fn render_trends(
    ctx: &CommandContext,
    player_id: &PlayerId,
    metrics: Option<&[Metric]>,
    as_json: bool,
) -> Result<String> {
    let trends = select_metrics(player_trends(player_id, &ctx.games), metrics);

    if as_json {
        return to_json(&trends);
    }

    let games = trends.values().next().map_or(0, |points| points.len());
    if games == 0 {
        return Ok(format!("Player {}: no assessed games", player_id));
    }

    let mut lines = vec![format!("Player {}: {} games", player_id, games)];
    for (metric, points) in &trends {
        let values: Vec<String> = points
            .iter()
            .map(|p| format!("{} {}", p.date, format_score(p.value)))
            .collect();
        lines.push(format!("  {}: {}", metric, values.join(", ")));
    }
    Ok(lines.join("\n"))
}

pub fn render_notes(ctx: &CommandContext, player_id: &PlayerId, as_json: bool) -> Result<String> {
    let notes = player_notes(player_id, &ctx.games);

    if as_json {
        return to_json(&notes);
    }
    if notes.is_empty() {
        return Ok(format!("Player {}: no notes", player_id));
    }

    Ok(notes
        .iter()
        .map(|n| format!("{}  {}", n.date, n.notes))
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Handle the trends command
pub fn handle_trends(
    ctx: &CommandContext,
    player_id: &PlayerId,
    metrics: Option<&[Metric]>,
    as_json: bool,
) -> Result<()> {
    println!("{}", render_trends(ctx, player_id, metrics, as_json)?); // tarpaulin::skip
    Ok(())
}

/// Handle the notes command
pub fn handle_notes(ctx: &CommandContext, player_id: &PlayerId, as_json: bool) -> Result<()> {
    println!("{}", render_notes(ctx, player_id, as_json)?); // tarpaulin::skip
    Ok(())
}
