//! Collision detection
//!
//! Cars are axis-aligned rectangles, so a car-vs-car hit is a plain AABB
//! overlap test. Touching edges count as a hit.

use glam::IVec2;

use crate::consts::{CAR_HALF_HEIGHT, CAR_HALF_WIDTH};

/// Axis-aligned bounding box in screen coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aabb {
    pub min: IVec2,
    pub max: IVec2,
}

impl Aabb {
    /// Box of the given half extents centered on `center`
    pub fn centered(center: IVec2, half_extents: IVec2) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Bounding box of a car body centered on `center`
    pub fn car(center: IVec2) -> Self {
        Self::centered(center, IVec2::new(CAR_HALF_WIDTH, CAR_HALF_HEIGHT))
    }

    /// True when the boxes overlap on both axes at once
    pub fn intersects(&self, other: &Aabb) -> bool {
        !(self.max.x < other.min.x
            || self.min.x > other.max.x
            || self.max.y < other.min.y
            || self.min.y > other.max.y)
    }
}

/// Check whether two car bodies centered at `a` and `b` collide
pub fn cars_collide(a: IVec2, b: IVec2) -> bool {
    Aabb::car(a).intersects(&Aabb::car(b))
}
