//! Player, team and roster average commands

use super::common::{format_averages, format_score, to_json, weighting_label, CommandContext};
use crate::{
    assessment::{
        compute::{player_averages, team_averages, MetricAverages, Weighting},
        roster::{roster_report, PlayerSummary},
    },
    cli::AverageOptions,
    PlayerId, Result,
};
use tracing::debug;

/// Text or JSON for an optional average. `None` renders as a notice or `null`.
fn render_averages(
    heading: &str,
    averages: Option<&MetricAverages>,
    weighting: Weighting,
    as_json: bool,
) -> Result<String> {
    if as_json {
        return to_json(&averages);
    }

    let Some(averages) = averages else {
        return Ok(format!("{}: no assessed games", heading));
    };

    let mut lines = vec![format!(
        "{}: {} game{} ({})",
        heading,
        averages.count,
        if averages.count == 1 { "" } else { "s" },
        weighting_label(weighting)
    )];
    lines.extend(format_averages(averages));
    Ok(lines.join("\n"))
}

pub fn render_player_averages(
    ctx: &CommandContext,
    player_id: &PlayerId,
    options: &AverageOptions,
) -> Result<String> {
    let weighting = ctx.weighting(options.demand);
    let averages = player_averages(player_id, &ctx.games, weighting);
    debug!(
        "Player {} averages over {} games",
        player_id,
        averages.as_ref().map_or(0, |a| a.count)
    );

    render_averages(
        &format!("Player {}", player_id),
        averages.as_ref(),
        weighting,
        options.json,
    )
}

pub fn render_team_averages(ctx: &CommandContext, options: &AverageOptions) -> Result<String> {
    let weighting = ctx.weighting(options.demand);
    let averages = team_averages(&ctx.games, weighting);
    render_averages("Team", averages.as_ref(), weighting, options.json)
}

fn format_roster_row(rank: usize, row: &PlayerSummary) -> String {
    format!(
        "{:>3}. {:<16} {:>3} games  overall {:>6}  final {:>6}",
        rank,
        row.player_id.to_string(),
        row.averages.count,
        format_score(row.averages.overall),
        format_score(row.averages.final_score),
    )
}

pub fn render_roster(ctx: &CommandContext, options: &AverageOptions) -> Result<String> {
    let weighting = ctx.weighting(options.demand);
    let report = roster_report(&ctx.games, weighting);

    if options.json {
        return to_json(&report);
    }
    if report.is_empty() {
        return Ok("Roster: no assessed games".to_string());
    }

    let mut lines = vec![format!(
        "Roster: {} players ({})",
        report.len(),
        weighting_label(weighting)
    )];
    lines.extend(
        report
            .iter()
            .enumerate()
            .map(|(i, row)| format_roster_row(i + 1, row)),
    );
    Ok(lines.join("\n"))
}

/// Handle the player command
pub fn handle_player_averages(
    ctx: &CommandContext,
    player_id: &PlayerId,
    options: &AverageOptions,
) -> Result<()> {
    println!("{}", render_player_averages(ctx, player_id, options)?); // tarpaulin::skip
    Ok(())
}

/// Handle the team command
pub fn handle_team_averages(ctx: &CommandContext, options: &AverageOptions) -> Result<()> {
    println!("{}", render_team_averages(ctx, options)?); // tarpaulin::skip
    Ok(())
}

/// Handle the roster command
pub fn handle_roster(ctx: &CommandContext, options: &AverageOptions) -> Result<()> {
    println!("{}", render_roster(ctx, options)?); // tarpaulin::skip
    Ok(())
}
