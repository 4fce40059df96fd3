//! File locations
//!
//! Gameplay preferences (key bindings, car paint) live in the save file;
//! this only decides where the files are.

use std::path::{Path, PathBuf};

/// Environment variable overriding the save file path
pub const SAVE_PATH_ENV: &str = "STREET_RACER_SAVE";
/// Environment variable overriding the leaderboard file path
pub const LEADERBOARD_PATH_ENV: &str = "STREET_RACER_LEADERBOARD";

const DEFAULT_SAVE_FILE: &str = "save.json";
const DEFAULT_LEADERBOARD_FILE: &str = "leaderboard.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Game state and key bindings
    pub save_path: PathBuf,
    /// Top 10 scores
    pub leaderboard_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            save_path: PathBuf::from(DEFAULT_SAVE_FILE),
            leaderboard_path: PathBuf::from(DEFAULT_LEADERBOARD_FILE),
        }
    }
}

impl Config {
    /// Default file names inside `dir`
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            save_path: dir.join(DEFAULT_SAVE_FILE),
            leaderboard_path: dir.join(DEFAULT_LEADERBOARD_FILE),
        }
    }

    /// Defaults, overridden by `STREET_RACER_SAVE` / `STREET_RACER_LEADERBOARD`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var_os(key))
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<std::ffi::OsString>) -> Self {
        let mut config = Self::default();
        if let Some(path) = lookup(SAVE_PATH_ENV).filter(|p| !p.is_empty()) {
            config.save_path = PathBuf::from(path);
        }
        if let Some(path) = lookup(LEADERBOARD_PATH_ENV).filter(|p| !p.is_empty()) {
            config.leaderboard_path = PathBuf::from(path);
        }
        log::debug!(
            "Using save file {} and leaderboard {}",
            config.save_path.display(),
            config.leaderboard_path.display()
        );
        config
    }
}
