//! Shared scroll speed
//!
//! Every road line and the enemy car hold a clone of the same provider so
//! they all move in lock-step. The value lives in an `Rc<Cell<_>>`, which
//! keeps the provider single-threaded (`!Send`).

use std::cell::Cell;
use std::rc::Rc;

/// Handle to the current scroll speed. Clones share the same value.
#[derive(Debug, Clone, Default)]
pub struct SpeedProvider(Rc<Cell<u32>>);

impl SpeedProvider {
    pub fn new(speed: u32) -> Self {
        Self(Rc::new(Cell::new(speed)))
    }

    #[inline]
    pub fn get(&self) -> u32 {
        self.0.get()
    }

    /// No bounds checking; callers keep the value in range
    #[inline]
    pub fn set(&self, speed: u32) {
        self.0.set(speed);
    }
}
