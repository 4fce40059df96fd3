//! Key bindings
//!
//! Edited from the settings menu and persisted inside the save file next to
//! the game state. Bindings are stored as `<keysym>`.

use serde::{Deserialize, Serialize};

use crate::error::InputError;

/// Logical actions a key can be bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveLeft,
    MoveRight,
    PauseGame,
    BossKey,
}

impl Action {
    pub const ALL: [Action; 4] = [Action::MoveLeft, Action::MoveRight, Action::PauseGame, Action::BossKey];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::MoveLeft => "move_left",
            Action::MoveRight => "move_right",
            Action::PauseGame => "pause_game",
            Action::BossKey => "boss_key",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.as_str() == s)
    }
}

/// Action to key table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub move_left: String,
    pub move_right: String,
    pub pause_game: String,
    pub boss_key: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            move_left: "<Left>".to_string(),
            move_right: "<Right>".to_string(),
            pause_game: "<Escape>".to_string(),
            boss_key: "<b>".to_string(),
        }
    }
}

impl KeyBindings {
    /// Stored binding, e.g. `<Left>`
    pub fn get(&self, action: Action) -> &str {
        match action {
            Action::MoveLeft => &self.move_left,
            Action::MoveRight => &self.move_right,
            Action::PauseGame => &self.pause_game,
            Action::BossKey => &self.boss_key,
        }
    }

    fn slot(&mut self, action: Action) -> &mut String {
        match action {
            Action::MoveLeft => &mut self.move_left,
            Action::MoveRight => &mut self.move_right,
            Action::PauseGame => &mut self.pause_game,
            Action::BossKey => &mut self.boss_key,
        }
    }

    /// Raw keysym for an action, e.g. `Left`
    pub fn keysym(&self, action: Action) -> &str {
        strip_brackets(self.get(action))
    }

    /// Which action, if any, a raw keysym triggers
    pub fn action_for(&self, keysym: &str) -> Option<Action> {
        Action::ALL.into_iter().find(|&a| self.keysym(a) == keysym)
    }

    /// Bind `keysym` to the action named `action`
    pub fn rebind(&mut self, action: &str, keysym: &str) -> Result<(), InputError> {
        let action = Action::from_str(action).ok_or_else(|| InputError::UnknownAction(action.to_string()))?;
        let keysym = strip_brackets(keysym.trim());
        if keysym.is_empty() {
            return Err(InputError::EmptyKey);
        }
        if let Some(other) = self.action_for(keysym).filter(|&other| other != action) {
            return Err(InputError::KeyInUse {
                key: keysym.to_string(),
                action: other.as_str(),
            });
        }

        log::info!("Bound {} to {}", action.as_str(), keysym);
        *self.slot(action) = format!("<{keysym}>");
        Ok(())
    }
}

fn strip_brackets(binding: &str) -> &str {
    binding
        .strip_prefix('<')
        .and_then(|b| b.strip_suffix('>'))
        .unwrap_or(binding)
}
