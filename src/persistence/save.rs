//! Save file: `{ "game_state": {...}, "key_bindings": {...} }`

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{read_json, write_json};
use crate::error::PersistenceError;
use crate::settings::KeyBindings;
use crate::sim::GameState;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaveFile {
    pub game_state: GameState,
    pub key_bindings: KeyBindings,
}

impl SaveFile {
    /// Load, reporting a missing or corrupt file as an error
    pub fn try_load(path: &Path) -> Result<Self, PersistenceError> {
        let mut save: SaveFile = read_json(path)?;
        save.game_state.sanitize();
        Ok(save)
    }

    /// Load, falling back to defaults when the file is missing or unreadable
    pub fn load_or_default(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(save) => {
                log::info!("Loaded save from {}", path.display());
                save
            }
            Err(PersistenceError::Missing { .. }) => {
                log::info!("Save file is not found, starting fresh");
                Self::default()
            }
            Err(e) => {
                log::warn!("Ignoring save file: {}", e);
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), PersistenceError> {
        write_json(path, self)?;
        log::info!("Game saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::test_dir::TestDir;

    #[test]
    fn test_save_and_load() {
        let dir = TestDir::new("save");
        let path = dir.path().join("save.json");

        let mut save = SaveFile::default();
        save.game_state.score = 420;
        save.game_state.car_colour_1 = "Green".to_string();
        save.key_bindings.rebind("pause_game", "p").unwrap();
        save.save(&path).unwrap();

        assert_eq!(SaveFile::load_or_default(&path), save);
    }

    #[test]
    fn test_on_disk_layout() {
        let dir = TestDir::new("save");
        let path = dir.path().join("save.json");
        SaveFile::default().save(&path).unwrap();

        let json: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["game_state"]["speed"], 10);
        assert_eq!(json["game_state"]["player_car_x"], 350);
        assert_eq!(json["game_state"]["car_colour_2"], "RoyalBlue4");
        assert_eq!(json["key_bindings"]["boss_key"], "<b>");
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TestDir::new("save");
        let path = dir.path().join("save.json");
        assert!(matches!(SaveFile::try_load(&path), Err(PersistenceError::Missing { .. })));
        assert_eq!(SaveFile::load_or_default(&path), SaveFile::default());
    }

    #[test]
    fn test_corrupt_file_gives_defaults() {
        let dir = TestDir::new("save");
        let path = dir.path().join("save.json");
        std::fs::write(&path, "{\"game_state\": {\"score\": ").unwrap();
        assert!(matches!(SaveFile::try_load(&path), Err(PersistenceError::Corrupt { .. })));
        assert_eq!(SaveFile::load_or_default(&path), SaveFile::default());
    }

    #[test]
    fn test_partial_file_merges_with_defaults() {
        let dir = TestDir::new("save");
        let path = dir.path().join("save.json");
        std::fs::write(
            &path,
            r#"{"game_state": {"score": 75, "speed": 99}, "key_bindings": {"move_left": "<a>"}}"#,
        )
        .unwrap();

        let save = SaveFile::load_or_default(&path);
        assert_eq!(save.game_state.score, 75);
        assert_eq!(save.game_state.speed, 50);
        assert_eq!(save.game_state.player_car_x, 350);
        assert_eq!(save.key_bindings.move_left, "<a>");
        assert_eq!(save.key_bindings.move_right, "<Right>");
    }
}
