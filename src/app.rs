//! Menu-level game owner
//!
//! Holds everything that outlives a single run: the saved record, key
//! bindings and the leaderboard. "Start game" hands a copy of the record to
//! a new `GameSession`; returning to the menu takes the session back and
//! folds its result into the record.

use crate::config::Config;
use crate::consts::{PRIMARY_COLOURS, SECONDARY_COLOURS};
use crate::error::{InputError, PersistenceError};
use crate::leaderboard::{Leaderboard, LeaderboardEntry};
use crate::persistence::SaveFile;
use crate::settings::{Action, KeyBindings};
use crate::sim::{Cheat, GamePhase, GameSession, GameState};

pub struct App {
    config: Config,
    state: GameState,
    key_bindings: KeyBindings,
    leaderboard: Leaderboard,
    session: Option<GameSession>,
}

impl App {
    /// Load the save file and leaderboard named by `config`
    pub fn load(config: Config) -> Self {
        let save = SaveFile::load_or_default(&config.save_path);
        let leaderboard = Leaderboard::load(&config.leaderboard_path);
        Self {
            config,
            state: save.game_state,
            key_bindings: save.key_bindings,
            leaderboard,
            session: None,
        }
    }

    pub fn game_state(&self) -> &GameState {
        &self.state
    }

    pub fn key_bindings(&self) -> &KeyBindings {
        &self.key_bindings
    }

    pub fn leaderboard_top10(&self) -> &[LeaderboardEntry] {
        self.leaderboard.entries()
    }

    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut GameSession> {
        self.session.as_mut()
    }

    pub fn is_game_over(&self) -> bool {
        self.session.as_ref().is_some_and(GameSession::is_game_over)
    }

    /// Start (or continue) a run from the saved record. A live session is
    /// folded back into the record first, so its progress carries over.
    pub fn start_game(&mut self, seed: u64) -> &mut GameSession {
        if let Some(live) = self.session.take() {
            log::info!("Restarting over a live session (score {})", live.score());
            self.state = live.snapshot();
        }
        if self.state.game_over {
            // The last run ended without a name being submitted
            self.state = self.state.reset_keeping_colours();
        }
        self.session.insert(GameSession::new(self.state.clone(), seed))
    }

    /// Route a keypress: bound keys trigger their action, anything else
    /// goes to the cheat recognizer.
    pub fn on_key_press(&mut self, keysym: &str) -> Option<Cheat> {
        let action = self.key_bindings.action_for(keysym);
        let session = self.session.as_mut()?;
        match action {
            Some(Action::MoveLeft) => {
                session.on_move_left();
            }
            Some(Action::MoveRight) => {
                session.on_move_right();
            }
            Some(Action::PauseGame) => session.on_pause_toggle(),
            Some(Action::BossKey) => session.on_boss_key_toggle(),
            None => return session.on_key_press(keysym),
        }
        None
    }

    /// Let time pass in the running session
    pub fn advance_clock(&mut self, elapsed_ms: u64) {
        if let Some(session) = self.session.as_mut() {
            session.advance_clock(elapsed_ms);
        }
    }

    pub fn submit_custom_score(&mut self, input: &str) -> Result<u64, InputError> {
        self.session
            .as_mut()
            .ok_or(InputError::NoSession)?
            .submit_custom_score(input)
    }

    /// Close a finished run. A non-blank name goes on the leaderboard with
    /// the run's score; the record resets for the next run (keeping the car
    /// paint) and is saved. Returns the leaderboard rank, if any.
    pub fn submit_name(&mut self, name: &str) -> Result<Option<usize>, InputError> {
        let session = self.session.as_ref().ok_or(InputError::NoSession)?;
        if !session.is_game_over() {
            return Err(InputError::NotGameOver);
        }
        let score = session.score();
        self.session = None;

        let name = name.trim();
        let rank = if name.is_empty() {
            None
        } else {
            self.leaderboard.add_score(name, score)
        };
        log::info!("Run finished: {:?} scored {} (rank {:?})", name, score, rank);

        self.state = self.state.reset_keeping_colours();
        self.save_or_warn();
        Ok(rank)
    }

    /// Leave a paused run for the menu. The run continues, paused, from the
    /// next `start_game`.
    pub fn return_to_menu(&mut self) -> Result<(), InputError> {
        let session = self.session.as_ref().ok_or(InputError::NoSession)?;
        if session.phase() != GamePhase::Paused {
            return Err(InputError::NotPaused);
        }
        self.state = session.snapshot();
        self.session = None;
        log::info!("Returned to menu with score {}", self.state.score);
        Ok(())
    }

    /// Pick the car paint from the customisation palette
    pub fn customise_car(&mut self, primary: &str, secondary: &str) -> Result<(), InputError> {
        let primary = find_colour(&PRIMARY_COLOURS, primary)?;
        let secondary = find_colour(&SECONDARY_COLOURS, secondary)?;
        self.state.car_colour_1 = primary.to_string();
        self.state.car_colour_2 = secondary.to_string();
        self.save_or_warn();
        Ok(())
    }

    pub fn rebind(&mut self, action: &str, keysym: &str) -> Result<(), InputError> {
        self.key_bindings.rebind(action, keysym)?;
        self.save_or_warn();
        Ok(())
    }

    /// Write the save file. A running session is saved as it stands.
    pub fn save(&self) -> Result<(), PersistenceError> {
        let game_state = match &self.session {
            Some(session) => session.snapshot(),
            None => self.state.clone(),
        };
        SaveFile {
            game_state,
            key_bindings: self.key_bindings.clone(),
        }
        .save(&self.config.save_path)
    }

    fn save_or_warn(&self) {
        if let Err(e) = self.save() {
            log::warn!("Game not saved: {}", e);
        }
    }
}

fn find_colour(palette: &[&'static str], colour: &str) -> Result<&'static str, InputError> {
    palette
        .iter()
        .copied()
        .find(|c| c.eq_ignore_ascii_case(colour))
        .ok_or_else(|| InputError::UnknownColour(colour.to_string()))
}
