//! Error types
//!
//! Persistence failures are recovered by the loaders; input errors go back to
//! the caller and are never fatal.

use std::path::PathBuf;

use thiserror::Error;

/// Failures reading or writing the save and leaderboard files
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("{} not found", path.display())]
    Missing { path: PathBuf },
    #[error("{} is not valid: {source}", path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Rejected player input. Never fatal; the caller re-prompts or ignores it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("invalid input, enter a number: {0:?}")]
    InvalidScore(String),
    #[error("unknown action {0:?}")]
    UnknownAction(String),
    #[error("key binding must not be empty")]
    EmptyKey,
    #[error("key {key:?} is already bound to {action}")]
    KeyInUse { key: String, action: &'static str },
    #[error("{0:?} is not an available colour")]
    UnknownColour(String),
    #[error("no game in progress")]
    NoSession,
    #[error("the game is not paused")]
    NotPaused,
    #[error("the game is not over")]
    NotGameOver,
    #[error("no custom score prompt is open")]
    NoScorePrompt,
}
