//! Shape generation for road and car primitives

use glam::IVec2;

use super::DrawCommand;
use crate::consts::{LINE_LENGTH, LINE_WIDTH};
use crate::sim::{CarView, Facing};

const ROAD_COLOUR: &str = "#797c7e";

/// Asphalt strip with a kerb outline; the kerb turns white on game over
pub fn road(game_over: bool) -> DrawCommand {
    let kerb = if game_over { "white" } else { "grey" };
    DrawCommand::Rect {
        min: IVec2::new(200, -20),
        max: IVec2::new(800, 720),
        fill: ROAD_COLOUR.to_string(),
        outline: Some((kerb.to_string(), 20)),
    }
}

/// One dashed road marking, anchored at its top-left corner
pub fn line(pos: IVec2) -> DrawCommand {
    DrawCommand::Rect {
        min: pos,
        max: pos + IVec2::new(LINE_WIDTH, LINE_LENGTH),
        fill: "white".to_string(),
        outline: Some(("white".to_string(), 2)),
    }
}

/// Body, roof, four wheels and two lights. The roof and the lights shift
/// with the facing so the enemy reads as oncoming traffic.
pub fn car(car: &CarView) -> [DrawCommand; 8] {
    let IVec2 { x, y } = car.pos;
    let rect = |x0: i32, y0: i32, x1: i32, y1: i32, fill: &str| {
        DrawCommand::rect(IVec2::new(x0, y0), IVec2::new(x1, y1), fill)
    };

    let (roof, light) = match car.facing {
        Facing::Forward => (y - 30, y - 85),
        Facing::Reversed => (y - 60, y + 75),
    };

    [
        rect(x - 50, y - 75, x + 50, y + 75, car.colours.primary.as_str()),
        rect(x - 40, roof, x + 40, roof + 90, car.colours.secondary.as_str()),
        rect(x - 65, y - 65, x - 50, y - 20, "black"),
        rect(x + 50, y - 65, x + 65, y - 20, "black"),
        rect(x - 65, y + 20, x - 50, y + 65, "black"),
        rect(x + 50, y + 20, x + 65, y + 65, "black"),
        rect(x - 40, light, x - 20, light + 10, "gold"),
        rect(x + 20, light, x + 40, light + 10, "gold"),
    ]
}
