//! CLI argument definitions and parsing structures.

use super::types::{ids::PlayerId, metric::Metric};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

/// Arguments shared by every command
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Game collection JSON (or set `COACH_ASSESS_GAMES` env var).
    #[clap(long, short, global = true)]
    pub games: Option<PathBuf>,

    /// Config file (defaults to the user config directory).
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,

    /// Show debug logging.
    #[clap(long, short, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors.
    #[clap(long, short, global = true)]
    pub quiet: bool,
}

impl GlobalArgs {
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        }
    }

    /// Log filter for the subscriber. `--verbose`/`--quiet` win over
    /// `RUST_LOG` directives; with neither, only warnings and errors show.
    pub fn log_filter(&self, rust_log: Option<&str>) -> EnvFilter {
        let directives = match rust_log {
            Some(directives) if !self.verbose && !self.quiet => directives,
            _ => "",
        };
        EnvFilter::builder()
            .with_default_directive(LevelFilter::from_level(self.log_level()).into())
            .parse_lossy(directives)
    }
}

/// Output and weighting options for the averaging commands
#[derive(Debug, Args)]
pub struct AverageOptions {
    /// Weight games by their demand factor (opponent strength).
    #[clap(long)]
    pub demand: bool,

    /// Output results as JSON instead of text lines.
    #[clap(long)]
    pub json: bool,
}

#[derive(Debug, Parser)]
#[clap(name = "coach-assess", about = "Soccer coaching assessment statistics")]
pub struct CoachAssess {
    #[clap(flatten)]
    pub global: GlobalArgs,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Average assessment scores for one player across played games.
    Player {
        /// Player ID as stored in the assessments.
        #[clap(long, short)]
        player: PlayerId,

        #[clap(flatten)]
        options: AverageOptions,
    },

    /// Team averages: per-game means across assessed players, averaged over games.
    Team {
        #[clap(flatten)]
        options: AverageOptions,
    },

    /// Per-metric trend lines for one player, oldest game first.
    Trends {
        /// Player ID as stored in the assessments.
        #[clap(long, short)]
        player: PlayerId,

        /// Only show these metrics (repeatable): `-m intensity -m fair_play`.
        #[clap(long = "metric", short = 'm')]
        metrics: Option<Vec<Metric>>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Coach notes for one player, most recent game first.
    Notes {
        /// Player ID as stored in the assessments.
        #[clap(long, short)]
        player: PlayerId,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Averages for every assessed player, best final score first.
    Roster {
        #[clap(flatten)]
        options: AverageOptions,
    },

    /// Report game counts and malformed records in the game collection.
    Check {
        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}
