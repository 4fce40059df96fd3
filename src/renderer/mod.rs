//! Frame rendering
//!
//! Turns a `RenderState` into a flat list of draw commands, painted back to
//! front. Frontends clear and repaint every frame; nothing is diffed.

pub mod shapes;

use glam::IVec2;

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::sim::{GamePhase, Prompt, RenderState};

const TEXT_COLOUR: &str = "#1f100e";
const GAME_OVER_COLOUR: &str = "#ff3217";
const FLASH_COLOUR: &str = "orange";

/// A single primitive for the frontend to paint
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    /// Filled rectangle between two corners
    Rect {
        min: IVec2,
        max: IVec2,
        fill: String,
        /// Outline colour and width
        outline: Option<(String, u32)>,
    },
    /// Text centered on `pos`
    Text {
        pos: IVec2,
        text: String,
        colour: String,
        size: u32,
    },
    /// Bitmap asset centered on `pos`
    Image { pos: IVec2, asset: &'static str },
}

impl DrawCommand {
    pub fn rect(min: IVec2, max: IVec2, fill: impl Into<String>) -> Self {
        DrawCommand::Rect {
            min,
            max,
            fill: fill.into(),
            outline: None,
        }
    }

    pub fn text(pos: IVec2, text: impl Into<String>, colour: impl Into<String>, size: u32) -> Self {
        DrawCommand::Text {
            pos,
            text: text.into(),
            colour: colour.into(),
            size,
        }
    }
}

/// Build the draw list for one frame
pub fn render(state: &RenderState) -> Vec<DrawCommand> {
    if state.phase == GamePhase::PausedByBossKey {
        return boss_screen();
    }

    let game_over = state.phase == GamePhase::GameOver;
    let mut commands = Vec::with_capacity(32);

    commands.push(shapes::road(game_over));
    commands.extend(state.lines.iter().map(|&pos| shapes::line(pos)));
    for car in [&state.player, &state.enemy].into_iter().flatten() {
        commands.extend(shapes::car(car));
    }

    commands.push(DrawCommand::text(
        IVec2::new(900, 100),
        format!("Score: {}", state.score),
        "black",
        30,
    ));

    if let Some(message) = state.flash {
        commands.push(DrawCommand::text(IVec2::new(895, 150), message, FLASH_COLOUR, 22));
    }

    match state.phase {
        GamePhase::Paused if state.prompt.is_none() => {
            commands.push(DrawCommand::text(IVec2::new(500, 300), "PAUSED", TEXT_COLOUR, 40));
        }
        GamePhase::GameOver => {
            commands.push(DrawCommand::text(IVec2::new(500, 300), "GAME OVER", GAME_OVER_COLOUR, 70));
        }
        _ => {}
    }

    if let Some(prompt) = state.prompt {
        let (pos, hint) = match prompt {
            Prompt::CustomScore { invalid: false } => (IVec2::new(500, 350), "Your score"),
            Prompt::CustomScore { invalid: true } => (IVec2::new(500, 350), "Invalid input. Enter a number"),
            Prompt::PlayerName => (IVec2::new(500, 360), "Your name"),
        };
        commands.push(DrawCommand::text(pos, hint, TEXT_COLOUR, 22));
    }

    commands
}

/// Opaque cover shown by the boss key
fn boss_screen() -> Vec<DrawCommand> {
    vec![
        DrawCommand::rect(IVec2::ZERO, IVec2::new(SCREEN_WIDTH, SCREEN_HEIGHT), "black"),
        DrawCommand::Image {
            pos: IVec2::new(SCREEN_WIDTH / 2, SCREEN_HEIGHT / 2),
            asset: "boss_key.png",
        },
    ]
}
