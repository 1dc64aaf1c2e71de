//! Configuration file handling and default locations
//!
//! Settings come from `config.toml` in the user config directory
//! (`~/.config/coach-assess/config.toml` on Linux). Command-line flags and
//! the `COACH_ASSESS_GAMES` environment variable take precedence.

use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{CoachError, Result};
use crate::GAMES_FILE_ENV_VAR;

const APP_DIR: &str = "coach-assess";

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Game collection to read when `--games` is not given.
    #[serde(default)]
    pub games_file: Option<PathBuf>,

    /// Weight averages by demand factor unless a command says otherwise.
    #[serde(default)]
    pub demand_correction: bool,
}

impl Config {
    /// Path: ~/.config/coach-assess/config.toml
    pub fn default_path() -> PathBuf {
        base_dir(dirs::config_dir()).join(APP_DIR).join("config.toml")
    }

    /// Load configuration from `path`, or from [`Config::default_path`].
    ///
    /// A missing file yields the defaults; a malformed one is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::default_path);

        let Some(contents) = try_read_to_string(&path)? else {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        };

        let config = Self::parse(&contents)?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }
}

fn base_dir(dir: Option<PathBuf>) -> PathBuf {
    dir.unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".local");
        home.push("share");
        home
    })
}

/// Path: ~/.local/share/coach-assess/games.json
pub fn default_games_path() -> PathBuf {
    base_dir(dirs::data_dir()).join(APP_DIR).join("games.json")
}

/// Try to read a file into a String; `None` if it does not exist.
pub fn try_read_to_string(path: &Path) -> Result<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Pick the games file: flag, then environment, then config, then default.
pub fn resolve_games_path(flag: Option<PathBuf>, config: &Config) -> Result<PathBuf> {
    let env_path = std::env::var_os(GAMES_FILE_ENV_VAR)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from);
    resolve_games_path_from(flag, env_path, config)
}

/// [`resolve_games_path`] with the environment value passed in.
pub fn resolve_games_path_from(
    flag: Option<PathBuf>,
    env_path: Option<PathBuf>,
    config: &Config,
) -> Result<PathBuf> {
    let path = flag
        .or(env_path)
        .or_else(|| config.games_file.clone())
        .unwrap_or_else(default_games_path);

    if !path.is_file() {
        return Err(CoachError::MissingGamesFile {
            path,
            env_var: GAMES_FILE_ENV_VAR.to_string(),
        });
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = Config::parse(
            r#"
games_file = "/srv/club/games.json"
demand_correction = true
"#,
        )
        .unwrap();
        assert_eq!(config.games_file, Some(PathBuf::from("/srv/club/games.json")));
        assert!(config.demand_correction);
    }

    #[test]
    fn test_parse_empty_config_uses_defaults() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_parse_malformed_config() {
        let err = Config::parse("demand_correction = \"yes\"").unwrap_err();
        assert!(matches!(err, CoachError::Config(_)));
    }

    #[test]
    fn test_load_missing_config_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(Some(&dir.path().join("nope.toml"))).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_unreadable_config_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(Some(dir.path())).unwrap_err();
        assert!(matches!(err, CoachError::Io(_)));
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "demand_correction = true\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert!(config.demand_correction);
        assert_eq!(config.games_file, None);
    }

    #[test]
    fn test_default_paths_end_with_app_dir() {
        assert!(Config::default_path().ends_with("coach-assess/config.toml"));
        assert!(default_games_path().ends_with("coach-assess/games.json"));
    }

    #[test]
    fn test_resolve_games_path_precedence() {
        let dir = tempfile::tempdir().unwrap();
        let flag = dir.path().join("flag.json");
        let env = dir.path().join("env.json");
        let configured = dir.path().join("config.json");
        for p in [&flag, &env, &configured] {
            std::fs::write(p, "{}").unwrap();
        }
        let config = Config {
            games_file: Some(configured.clone()),
            demand_correction: false,
        };

        let picked =
            resolve_games_path_from(Some(flag.clone()), Some(env.clone()), &config).unwrap();
        assert_eq!(picked, flag);

        let picked = resolve_games_path_from(None, Some(env.clone()), &config).unwrap();
        assert_eq!(picked, env);

        let picked = resolve_games_path_from(None, None, &config).unwrap();
        assert_eq!(picked, configured);
    }

    #[test]
    fn test_resolve_games_path_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = resolve_games_path_from(
            Some(dir.path().join("absent.json")),
            None,
            &Config::default(),
        )
        .unwrap_err();

        match err {
            CoachError::MissingGamesFile { env_var, .. } => {
                assert_eq!(env_var, GAMES_FILE_ENV_VAR)
            }
            other => panic!("Expected MissingGamesFile, got {:?}", other),
        }
    }
}
