//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use coach_assess::{
    cli::{CoachAssess, Commands, GlobalArgs},
    commands::{
        averages::{handle_player_averages, handle_roster, handle_team_averages},
        check::handle_check,
        common::CommandContext,
        history::{handle_notes, handle_trends},
    },
    Result,
};
use tracing_subscriber::FmtSubscriber;

/// Install the log subscriber. Logs go to stderr so JSON output stays clean.
fn init_logging(global: &GlobalArgs) {
    let rust_log = std::env::var("RUST_LOG").ok();
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(global.log_filter(rust_log.as_deref()))
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Run the CLI.
fn main() -> Result<()> {
    let app = CoachAssess::parse();
    init_logging(&app.global);

    let ctx = CommandContext::new(&app.global)?;

    match app.command {
        Commands::Player { player, options } => handle_player_averages(&ctx, &player, &options)?,
        Commands::Team { options } => handle_team_averages(&ctx, &options)?,
        Commands::Trends {
            player,
            metrics,
            json,
        } => handle_trends(&ctx, &player, metrics.as_deref(), json)?,
        Commands::Notes { player, json } => handle_notes(&ctx, &player, json)?,
        Commands::Roster { options } => handle_roster(&ctx, &options)?,
        Commands::Check { json } => handle_check(&ctx, json)?,
    }

    Ok(())
}
