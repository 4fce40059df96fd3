//! Running game session
//!
//! Owns every entity of one run plus the timer queue that drives it. Three
//! timer chains share the session: the main tick (100 ms), the speed ramp
//! (5 s) and the cheat banner blink (500 ms). All of them run inside
//! `advance_clock`, so there is exactly one mutator at a time.
//!
//! Ticks carry a generation number. Pausing, game over and every executed
//! tick bump the generation, so a tick that was queued before a pause turns
//! into a no-op when it finally fires.

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::car::{Car, CarColours, Facing};
use super::cheats::{Cheat, CheatCodeRecognizer};
use super::line::Line;
use super::speed::SpeedProvider;
use super::state::{GamePhase, GameState, Prompt};
use super::timer::{Scheduler, TimerEvent};
use crate::consts::*;
use crate::error::InputError;

const INVINCIBILITY_ON: &str = "INVINCIBILITY\nACTIVATED";
const INVINCIBILITY_OFF: &str = "INVINCIBILITY\nDEACTIVATED";
const MIRRORED_ON: &str = "MIRRORED\nCONTROLS\nACTIVATED";
const MIRRORED_OFF: &str = "MIRRORED\nCONTROLS\nDEACTIVATED";

/// Blinking cheat banner
#[derive(Debug, Clone)]
struct Flash {
    message: &'static str,
    visible: bool,
    blinks_left: u8,
}

/// What a car looks like this frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarView {
    pub pos: IVec2,
    pub colours: CarColours,
    pub facing: Facing,
}

impl From<&Car> for CarView {
    fn from(car: &Car) -> Self {
        Self {
            pos: car.pos,
            colours: car.colours.clone(),
            facing: car.facing,
        }
    }
}

/// Everything a frontend needs to draw one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderState {
    pub phase: GamePhase,
    pub score: u64,
    pub lines: Vec<IVec2>,
    /// Hidden once the game is over
    pub player: Option<CarView>,
    pub enemy: Option<CarView>,
    /// Cheat banner, only while in its visible half of a blink
    pub flash: Option<&'static str>,
    pub prompt: Option<Prompt>,
}

pub struct GameSession {
    /// Score, cheat flags and paint. Positions and speed live in the entities.
    state: GameState,
    phase: GamePhase,
    prompt: Option<Prompt>,
    speed: SpeedProvider,
    lines: Vec<Line>,
    player: Car,
    enemy: Car,
    cheats: CheatCodeRecognizer,
    timers: Scheduler,
    rng: Pcg32,
    tick_generation: u64,
    flash: Option<Flash>,
    flash_generation: u64,
}

impl GameSession {
    /// Start a run from a saved record. The first tick is due immediately,
    /// the first speed ramp after one ramp interval.
    pub fn new(mut state: GameState, seed: u64) -> Self {
        state.sanitize();

        let speed = SpeedProvider::new(state.speed);
        let lines = Line::road_markings(&speed);
        let player = Car::player(state.player_car(), state.colours());
        let enemy = Car::enemy(state.enemy_car(), speed.clone());
        let phase = if state.paused {
            GamePhase::Paused
        } else {
            GamePhase::Running
        };

        let mut session = Self {
            state,
            phase,
            prompt: None,
            speed,
            lines,
            player,
            enemy,
            cheats: CheatCodeRecognizer::new(),
            timers: Scheduler::new(),
            rng: Pcg32::seed_from_u64(seed),
            tick_generation: 0,
            flash: None,
            flash_generation: 0,
        };

        session
            .timers
            .schedule(SPEED_RAMP_INTERVAL_MS, TimerEvent::SpeedRamp);
        if session.phase == GamePhase::Running {
            session.schedule_tick(0);
        }

        log::info!(
            "Session started (seed {}, score {}, speed {}, {:?})",
            seed,
            session.state.score,
            session.speed.get(),
            session.phase
        );
        session
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn prompt(&self) -> Option<Prompt> {
        self.prompt
    }

    pub fn score(&self) -> u64 {
        self.state.score
    }

    pub fn speed(&self) -> u32 {
        self.speed.get()
    }

    pub fn invincible(&self) -> bool {
        self.state.invincibility_mode
    }

    pub fn mirrored_controls(&self) -> bool {
        self.state.mirrored_controls
    }

    pub fn player(&self) -> &Car {
        &self.player
    }

    pub fn enemy(&self) -> &Car {
        &self.enemy
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Virtual session time in milliseconds
    pub fn now(&self) -> u64 {
        self.timers.now()
    }

    /// Let `elapsed_ms` pass, firing every timer that falls due in order
    pub fn advance_clock(&mut self, elapsed_ms: u64) {
        let until = self.timers.now() + elapsed_ms;
        while let Some(event) = self.timers.pop_due(until) {
            match event {
                TimerEvent::Tick { generation } => {
                    if generation == self.tick_generation {
                        self.on_tick();
                    } else {
                        log::trace!("Dropping stale tick {}", generation);
                    }
                }
                TimerEvent::SpeedRamp => self.on_speed_ramp(),
                TimerEvent::FlashBlink { generation } => self.on_flash_blink(generation),
            }
        }
        self.timers.advance_to(until);
    }

    /// One main loop step. Does nothing unless running.
    pub fn on_tick(&mut self) {
        if self.phase != GamePhase::Running {
            return;
        }
        // Anything still queued belongs to an older chain
        self.tick_generation += 1;

        for line in &mut self.lines {
            line.advance();
        }
        self.enemy.advance(&mut self.rng);
        self.state.score = self.state.score.saturating_add(u64::from(self.speed.get()));

        if self.player.overlaps(&self.enemy) && !self.state.invincibility_mode {
            self.game_over();
        } else {
            self.schedule_tick(TICK_INTERVAL_MS);
        }
    }

    /// Speed up while running. Always re-arms.
    pub fn on_speed_ramp(&mut self) {
        if self.phase == GamePhase::Running {
            let speed = (self.speed.get() + SPEED_RAMP_STEP).min(MAX_SPEED);
            if speed != self.speed.get() {
                log::debug!("Speed up to {}", speed);
            }
            self.speed.set(speed);
        }
        self.timers
            .schedule(SPEED_RAMP_INTERVAL_MS, TimerEvent::SpeedRamp);
    }

    /// Returns false when the move was ignored or dropped at the road edge
    pub fn on_move_left(&mut self) -> bool {
        self.phase == GamePhase::Running && self.player.move_left(self.state.mirrored_controls)
    }

    /// Returns false when the move was ignored or dropped at the road edge
    pub fn on_move_right(&mut self) -> bool {
        self.phase == GamePhase::Running && self.player.move_right(self.state.mirrored_controls)
    }

    /// Toggle the pause menu. Ignored behind the boss screen, after game
    /// over and while the score prompt is open.
    pub fn on_pause_toggle(&mut self) {
        if matches!(self.prompt, Some(Prompt::CustomScore { .. })) {
            return;
        }
        match self.phase {
            GamePhase::Running => {
                self.phase = GamePhase::Paused;
                self.tick_generation += 1;
                log::info!("Paused");
            }
            GamePhase::Paused => {
                self.phase = GamePhase::Running;
                log::info!("Resumed");
                self.on_tick();
            }
            GamePhase::PausedByBossKey | GamePhase::GameOver => {}
        }
    }

    /// Toggle the boss screen. Ignored while paused and after game over.
    pub fn on_boss_key_toggle(&mut self) {
        match self.phase {
            GamePhase::Running => {
                self.phase = GamePhase::PausedByBossKey;
                self.tick_generation += 1;
            }
            GamePhase::PausedByBossKey => {
                self.phase = GamePhase::Running;
                self.on_tick();
            }
            GamePhase::Paused | GamePhase::GameOver => {}
        }
    }

    /// Feed a raw keypress to the cheat recognizer and apply any code it completes
    pub fn on_key_press(&mut self, keysym: &str) -> Option<Cheat> {
        let cheat = self.cheats.push(keysym)?;
        match cheat {
            Cheat::Invincibility => {
                self.state.invincibility_mode = !self.state.invincibility_mode;
                let on = self.state.invincibility_mode;
                log::info!("Invincibility {}", if on { "activated" } else { "deactivated" });
                self.show_flash(if on { INVINCIBILITY_ON } else { INVINCIBILITY_OFF });
            }
            Cheat::MirroredControls => {
                self.state.mirrored_controls = !self.state.mirrored_controls;
                let on = self.state.mirrored_controls;
                log::info!("Mirrored controls {}", if on { "activated" } else { "deactivated" });
                self.show_flash(if on { MIRRORED_ON } else { MIRRORED_OFF });
            }
            Cheat::CustomScore => self.open_score_prompt(),
        }
        Some(cheat)
    }

    /// Answer the score prompt. Anything but a plain non-negative integer
    /// keeps the prompt open and flags it for a retry.
    pub fn submit_custom_score(&mut self, input: &str) -> Result<u64, InputError> {
        if !matches!(self.prompt, Some(Prompt::CustomScore { .. })) {
            return Err(InputError::NoScorePrompt);
        }

        let input = input.trim();
        let parsed = if !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit()) {
            input.parse::<u64>().ok()
        } else {
            None
        };
        let Some(score) = parsed else {
            self.prompt = Some(Prompt::CustomScore { invalid: true });
            return Err(InputError::InvalidScore(input.to_string()));
        };

        log::info!("Score set to {}", score);
        self.state.score = score;
        self.prompt = None;
        self.phase = GamePhase::Running;
        self.on_tick();
        Ok(score)
    }

    pub fn render_state(&self) -> RenderState {
        let cars_visible = self.phase != GamePhase::GameOver;
        RenderState {
            phase: self.phase,
            score: self.state.score,
            lines: self.lines.iter().map(|l| l.pos).collect(),
            player: cars_visible.then(|| CarView::from(&self.player)),
            enemy: cars_visible.then(|| CarView::from(&self.enemy)),
            flash: self.flash.as_ref().filter(|f| f.visible).map(|f| f.message),
            prompt: self.prompt,
        }
    }

    /// The record as it should be saved right now
    pub fn snapshot(&self) -> GameState {
        GameState {
            score: self.state.score,
            speed: self.speed.get(),
            player_car_x: self.player.pos.x,
            player_car_y: self.player.pos.y,
            enemy_car_x: self.enemy.pos.x,
            enemy_car_y: self.enemy.pos.y,
            paused: self.phase.is_paused(),
            game_over: self.phase == GamePhase::GameOver,
            ..self.state.clone()
        }
    }

    fn schedule_tick(&mut self, delay_ms: u64) {
        self.timers.schedule(
            delay_ms,
            TimerEvent::Tick {
                generation: self.tick_generation,
            },
        );
    }

    fn game_over(&mut self) {
        self.phase = GamePhase::GameOver;
        self.tick_generation += 1;
        self.speed.set(0);
        self.state.game_over = true;
        self.prompt = Some(Prompt::PlayerName);
        log::info!("Game over, score {}", self.state.score);
    }

    fn open_score_prompt(&mut self) {
        match self.phase {
            GamePhase::Running | GamePhase::Paused => {
                if self.phase == GamePhase::Running {
                    self.phase = GamePhase::Paused;
                    self.tick_generation += 1;
                }
                self.prompt = Some(Prompt::CustomScore { invalid: false });
            }
            GamePhase::PausedByBossKey | GamePhase::GameOver => {
                log::debug!("Score cheat ignored in {:?}", self.phase);
            }
        }
    }

    /// Replaces any banner still blinking
    fn show_flash(&mut self, message: &'static str) {
        self.flash_generation += 1;
        self.flash = Some(Flash {
            message,
            visible: true,
            blinks_left: FLASH_BLINKS,
        });
        self.timers.schedule(
            FLASH_INTERVAL_MS,
            TimerEvent::FlashBlink {
                generation: self.flash_generation,
            },
        );
    }

    fn on_flash_blink(&mut self, generation: u64) {
        if generation != self.flash_generation {
            return;
        }
        let Some(flash) = &mut self.flash else {
            return;
        };
        if flash.blinks_left == 0 {
            self.flash = None;
            return;
        }
        flash.visible = !flash.visible;
        flash.blinks_left -= 1;
        self.timers
            .schedule(FLASH_INTERVAL_MS, TimerEvent::FlashBlink { generation });
    }
}
