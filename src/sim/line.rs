//! Scrolling road markings

use glam::IVec2;

use super::speed::SpeedProvider;
use crate::consts::*;

/// A single dashed road marking. Recycles to the top of the band once it
/// scrolls past the bottom.
#[derive(Debug, Clone)]
pub struct Line {
    pub pos: IVec2,
    speed: SpeedProvider,
}

impl Line {
    pub fn new(pos: IVec2, speed: SpeedProvider) -> Self {
        Self { pos, speed }
    }

    /// The standard set of markings down the middle of the road
    pub fn road_markings(speed: &SpeedProvider) -> Vec<Line> {
        (0..LINE_COUNT as i32)
            .map(|i| Line::new(IVec2::new(LINE_X, i * LINE_SPACING + LINE_OFFSET), speed.clone()))
            .collect()
    }

    /// Scroll down by the current speed and wrap into [LINE_WRAP_TOP, LINE_WRAP_BOTTOM)
    pub fn advance(&mut self) {
        self.pos.y += self.speed.get() as i32;
        if self.pos.y >= LINE_WRAP_BOTTOM {
            self.pos.y -= LINE_WRAP_SPAN;
        }
        if self.pos.y < LINE_WRAP_TOP {
            self.pos.y += LINE_WRAP_SPAN;
        }
    }
}
