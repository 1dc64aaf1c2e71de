//! Common utilities and helper functions shared across commands.

use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

use crate::{
    assessment::{compute::Weighting, types::GameCollection, MetricAverages},
    cli::GlobalArgs,
    core::config::{resolve_games_path, Config},
    storage::load_games,
    Result,
};

/// Context containing the resources every command needs
pub struct CommandContext {
    pub config: Config,
    pub games_path: PathBuf,
    pub games: GameCollection,
}

impl CommandContext {
    /// Load configuration, locate the games file and read the collection
    pub fn new(global: &GlobalArgs) -> Result<Self> {
        let config = Config::load(global.config.as_deref())?;
        let games_path = resolve_games_path(global.games.clone(), &config)?;
        let games = load_games(&games_path)?;
        info!("Using {} games from {}", games.len(), games_path.display());

        Ok(Self::from_parts(config, games_path, games))
    }

    pub fn from_parts(config: Config, games_path: PathBuf, games: GameCollection) -> Self {
        Self {
            config,
            games_path,
            games,
        }
    }

    /// `--demand` on the command line, or `demand_correction` in the config
    pub fn weighting(&self, demand_flag: bool) -> Weighting {
        Weighting::from_demand_correction(demand_flag || self.config.demand_correction)
    }
}

/// Pretty JSON for command output
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn weighting_label(weighting: Weighting) -> &'static str {
    match weighting {
        Weighting::Unweighted => "unweighted",
        Weighting::DemandCorrected => "demand-corrected",
    }
}

/// Two decimals, or `n/a` for scores poisoned by missing sliders
pub fn format_score(value: f64) -> String {
    if value.is_nan() {
        "n/a".to_string()
    } else {
        format!("{:.2}", value)
    }
}

/// One `name value` line per metric followed by overall and final score
pub fn format_averages(averages: &MetricAverages) -> Vec<String> {
    let mut lines: Vec<String> = averages
        .averages
        .iter()
        .map(|(metric, value)| format!("  {:<12} {:>6}", metric.to_string(), format_score(*value)))
        .collect();
    lines.push(format!("  {:<12} {:>6}", "overall", format_score(averages.overall)));
    lines.push(format!(
        "  {:<12} {:>6}",
        "final score",
        format_score(averages.final_score)
    ));
    lines
}
