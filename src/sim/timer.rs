//! Cooperative timer queue
//!
//! Stands in for "run this callback after N ms" on a single thread. Events
//! sit in a min-heap keyed by (fire time, insertion order) against a virtual
//! millisecond clock that only moves when the owner advances it.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Things the game session schedules for later
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// Main loop step. Stale if `generation` no longer matches the session.
    Tick { generation: u64 },
    /// Periodic speed increase
    SpeedRamp,
    /// Cheat banner blink. Stale if a newer banner replaced it.
    FlashBlink { generation: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Scheduled {
    fire_at: u64,
    seq: u64,
    event: TimerEvent,
}

impl Ord for Scheduled {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.fire_at, self.seq).cmp(&(other.fire_at, other.seq))
    }
}

impl PartialOrd for Scheduled {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    now_ms: u64,
    next_seq: u64,
    queue: BinaryHeap<Reverse<Scheduled>>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time in milliseconds
    pub fn now(&self) -> u64 {
        self.now_ms
    }

    /// Queue `event` to fire `delay_ms` from now
    pub fn schedule(&mut self, delay_ms: u64, event: TimerEvent) {
        let scheduled = Scheduled {
            fire_at: self.now_ms + delay_ms,
            seq: self.next_seq,
            event,
        };
        self.next_seq += 1;
        self.queue.push(Reverse(scheduled));
    }

    /// Pop the earliest event due at or before `until`, moving the clock to
    /// its fire time
    pub fn pop_due(&mut self, until: u64) -> Option<TimerEvent> {
        let Reverse(next) = self.queue.peek()?;
        if next.fire_at > until {
            return None;
        }
        let Reverse(next) = self.queue.pop()?;
        self.now_ms = self.now_ms.max(next.fire_at);
        Some(next.event)
    }

    /// Move the clock forward without firing anything
    pub fn advance_to(&mut self, time_ms: u64) {
        self.now_ms = self.now_ms.max(time_ms);
    }

    /// Fire time of the earliest pending event
    #[cfg(test)]
    fn next_deadline(&self) -> Option<u64> {
        self.queue.peek().map(|Reverse(s)| s.fire_at)
    }

    #[cfg(test)]
    fn pending(&self) -> usize {
        self.queue.len()
    }
}
