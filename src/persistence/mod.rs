//! Save/load persistence
//!
//! Features:
//! - Flat JSON save file (game state + key bindings)
//! - Writes go to a temp file first and are renamed over the target
//! - Missing or corrupt files are reported as typed errors so callers can
//!   fall back to defaults

pub mod save;

pub use save::SaveFile;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::PersistenceError;

/// Read and parse a JSON file
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, PersistenceError> {
    let json = fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => PersistenceError::Missing {
            path: path.to_path_buf(),
        },
        _ => PersistenceError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    serde_json::from_str(&json).map_err(|source| PersistenceError::Corrupt {
        path: path.to_path_buf(),
        source,
    })
}

/// Serialize `value` and replace `path` with it
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), PersistenceError> {
    let io_err = |source: std::io::Error| PersistenceError::Io {
        path: path.to_path_buf(),
        source,
    };

    let json = serde_json::to_string(value).map_err(|source| PersistenceError::Corrupt {
        path: path.to_path_buf(),
        source,
    })?;

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(io_err)?;
    }

    let tmp = tmp_path(path);
    fs::write(&tmp, json).map_err(io_err)?;
    fs::rename(&tmp, path).map_err(io_err)
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
