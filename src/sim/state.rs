//! Game state record and session phases
//!
//! `GameState` is the flat record persisted in the save file. Field names
//! match the on-disk JSON; missing fields fall back to the defaults.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::car::CarColours;
use crate::consts::*;

/// Phase of a running session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ticking
    Running,
    /// Pause menu is open
    Paused,
    /// Boss screen covers the game
    PausedByBossKey,
    /// Collision happened; waiting for the player's name
    GameOver,
}

impl GamePhase {
    pub fn is_paused(&self) -> bool {
        matches!(self, GamePhase::Paused | GamePhase::PausedByBossKey)
    }
}

/// Text entry the frontend should show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    /// Score cheat; `invalid` is set after a rejected entry
    CustomScore { invalid: bool },
    /// Game over name entry
    PlayerName,
}

/// Persisted game record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameState {
    pub score: u64,
    pub speed: u32,
    pub player_car_x: i32,
    pub player_car_y: i32,
    pub enemy_car_x: i32,
    pub enemy_car_y: i32,
    pub paused: bool,
    pub game_over: bool,
    pub invincibility_mode: bool,
    pub mirrored_controls: bool,
    pub car_colour_1: String,
    pub car_colour_2: String,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            score: 0,
            speed: 10,
            player_car_x: 350,
            player_car_y: 600,
            enemy_car_x: 650,
            enemy_car_y: 100,
            paused: false,
            game_over: false,
            invincibility_mode: false,
            mirrored_controls: false,
            car_colour_1: "RoyalBlue3".to_string(),
            car_colour_2: "RoyalBlue4".to_string(),
        }
    }
}

impl GameState {
    /// Fresh record for the next run, keeping the player's paint
    pub fn reset_keeping_colours(&self) -> Self {
        Self {
            car_colour_1: self.car_colour_1.clone(),
            car_colour_2: self.car_colour_2.clone(),
            ..Self::default()
        }
    }

    /// Pull out-of-range values from an edited or old save back into range
    pub fn sanitize(&mut self) {
        if self.speed > MAX_SPEED {
            log::warn!("Saved speed {} above cap, clamping to {}", self.speed, MAX_SPEED);
            self.speed = MAX_SPEED;
        }

        let player = self.player_car();
        let enemy = self.enemy_car();
        self.player_car_x = player.x.clamp(PLAYER_MIN_X, PLAYER_MAX_X);
        self.player_car_y = player.y.clamp(0, SCREEN_HEIGHT);
        self.enemy_car_x = enemy.x.clamp(ENEMY_MIN_X, ENEMY_MAX_X);
        self.enemy_car_y = enemy.y.clamp(ENEMY_WRAP_Y - ENEMY_WRAP_SPAN, ENEMY_WRAP_Y - 1);
        if player != self.player_car() || enemy != self.enemy_car() {
            log::warn!(
                "Saved car positions {} / {} off the road, moved to {} / {}",
                player,
                enemy,
                self.player_car(),
                self.enemy_car()
            );
        }
    }

    pub fn player_car(&self) -> IVec2 {
        IVec2::new(self.player_car_x, self.player_car_y)
    }

    pub fn enemy_car(&self) -> IVec2 {
        IVec2::new(self.enemy_car_x, self.enemy_car_y)
    }

    pub fn colours(&self) -> CarColours {
        CarColours::new(self.car_colour_1.clone(), self.car_colour_2.clone())
    }
}
