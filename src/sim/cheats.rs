//! Cheat code recognition
//!
//! Keeps a short window of recent keypresses and fires when its tail spells
//! one of the fixed sequences. Unrelated keys may precede a code; the window
//! only drops its oldest key once it is longer than the longest code.

use std::collections::VecDeque;

/// Hidden modifiers unlocked by typing a code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cheat {
    /// G O D
    Invincibility,
    /// D R K
    MirroredControls,
    /// S C R
    CustomScore,
}

impl Cheat {
    /// Checked in this order; the first match wins
    pub const ALL: [Cheat; 3] = [Cheat::Invincibility, Cheat::MirroredControls, Cheat::CustomScore];

    pub fn sequence(&self) -> &'static [&'static str] {
        match self {
            Cheat::Invincibility => &["G", "O", "D"],
            Cheat::MirroredControls => &["D", "R", "K"],
            Cheat::CustomScore => &["S", "C", "R"],
        }
    }

    fn longest_sequence() -> usize {
        Self::ALL.iter().map(|c| c.sequence().len()).max().unwrap_or(0)
    }
}

#[derive(Debug, Clone, Default)]
pub struct CheatCodeRecognizer {
    keys: VecDeque<String>,
}

impl CheatCodeRecognizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one keysym. Returns the cheat whose code was just completed.
    pub fn push(&mut self, keysym: &str) -> Option<Cheat> {
        self.keys.push_back(keysym.to_uppercase());

        if let Some(cheat) = Cheat::ALL.into_iter().find(|c| self.ends_with(c.sequence())) {
            log::debug!("Cheat code entered: {:?}", cheat);
            self.keys.clear();
            return Some(cheat);
        }

        if self.keys.len() > Cheat::longest_sequence() {
            self.keys.pop_front();
        }
        None
    }

    /// Keys currently held in the window (oldest first)
    #[cfg(test)]
    fn buffered(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    fn ends_with(&self, sequence: &[&str]) -> bool {
        self.keys.len() >= sequence.len()
            && self
                .keys
                .iter()
                .skip(self.keys.len() - sequence.len())
                .zip(sequence)
                .all(|(key, expected)| key.as_str() == *expected)
    }
}
