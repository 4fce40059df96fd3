//! Street Racer - A 2D arcade driving game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (road, cars, timers, game session)
//! - `renderer`: Pure draw-command generation
//! - `persistence`: Save file load/store with graceful fallback
//! - `leaderboard`: Top 10 score table
//! - `settings`: Key bindings
//! - `app`: Menu-level owner of the persisted record and the running session

pub mod app;
pub mod config;
pub mod error;
pub mod leaderboard;
pub mod persistence;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use app::App;
pub use config::Config;
pub use error::{InputError, PersistenceError};
pub use leaderboard::{Leaderboard, LeaderboardEntry};
pub use settings::{Action, KeyBindings};

/// Game configuration constants
pub mod consts {
    /// Playfield size in pixels
    pub const SCREEN_WIDTH: i32 = 1000;
    pub const SCREEN_HEIGHT: i32 = 700;

    /// Main loop interval
    pub const TICK_INTERVAL_MS: u64 = 100;
    /// Speed ramp interval
    pub const SPEED_RAMP_INTERVAL_MS: u64 = 5000;
    pub const SPEED_RAMP_STEP: u32 = 5;
    pub const MAX_SPEED: u32 = 50;

    /// Cheat banner blink interval and number of blinks before it disappears
    pub const FLASH_INTERVAL_MS: u64 = 500;
    pub const FLASH_BLINKS: u8 = 6;

    /// Car bounding box (centered on the car position)
    pub const CAR_HALF_WIDTH: i32 = 50;
    pub const CAR_HALF_HEIGHT: i32 = 75;

    /// Player steering
    pub const STEER_STEP: i32 = 20;
    pub const PLAYER_MIN_X: i32 = 70;
    pub const PLAYER_MAX_X: i32 = 930;

    /// Enemy respawn
    pub const ENEMY_WRAP_Y: i32 = 800;
    pub const ENEMY_WRAP_SPAN: i32 = 900;
    pub const ENEMY_MIN_X: i32 = 100;
    pub const ENEMY_MAX_X: i32 = 900;

    /// Road markings recycle inside [LINE_WRAP_TOP, LINE_WRAP_BOTTOM)
    pub const LINE_COUNT: usize = 5;
    pub const LINE_X: i32 = 489;
    pub const LINE_SPACING: i32 = 200;
    pub const LINE_OFFSET: i32 = -50;
    pub const LINE_WIDTH: i32 = 20;
    pub const LINE_LENGTH: i32 = 100;
    pub const LINE_WRAP_BOTTOM: i32 = 700;
    pub const LINE_WRAP_TOP: i32 = -100;
    pub const LINE_WRAP_SPAN: i32 = 800;

    /// Paint choices offered by the customisation menu
    pub const PRIMARY_COLOURS: [&str; 6] = ["Red", "Blue", "Green", "Yellow", "Orange", "Purple"];
    pub const SECONDARY_COLOURS: [&str; 6] = ["Cyan", "Magenta", "Brown", "Pink", "Gray", "Black"];

    /// Enemy paint
    pub const ENEMY_COLOUR_1: &str = "Red";
    pub const ENEMY_COLOUR_2: &str = "Dark Red";
}
