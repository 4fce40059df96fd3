//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Virtual clock only (timers fire when the owner advances it)
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod car;
pub mod cheats;
pub mod collision;
pub mod line;
pub mod session;
pub mod speed;
pub mod state;
pub mod timer;

pub use car::{Car, CarColours, Facing, Steer};
pub use cheats::{Cheat, CheatCodeRecognizer};
pub use collision::{Aabb, cars_collide};
pub use line::Line;
pub use session::{CarView, GameSession, RenderState};
pub use speed::SpeedProvider;
pub use state::{GamePhase, GameState, Prompt};
pub use timer::{Scheduler, TimerEvent};
