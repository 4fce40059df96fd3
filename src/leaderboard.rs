//! High score leaderboard system
//!
//! Persisted as a bare JSON array of `{name, score}`, tracks top 10 scores
//! with at most one entry per name.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::PersistenceError;
use crate::persistence::{read_json, write_json};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single high score entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: u64,
}

/// High score leaderboard
#[derive(Debug, Clone, Default)]
pub struct Leaderboard {
    /// Where every change is written; `None` keeps it in memory only
    path: Option<PathBuf>,
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    /// Create empty in-memory leaderboard
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from `path`. A missing or malformed file gives an empty table.
    pub fn load(path: &Path) -> Self {
        let entries = match read_json::<Vec<LeaderboardEntry>>(path) {
            Ok(entries) => {
                log::info!("Loaded {} high scores", entries.len());
                entries
            }
            Err(PersistenceError::Missing { .. }) => {
                log::info!("No high scores found, starting fresh");
                Vec::new()
            }
            Err(e) => {
                log::warn!("Ignoring leaderboard: {}", e);
                Vec::new()
            }
        };

        let mut leaderboard = Self {
            path: Some(path.to_path_buf()),
            entries: Vec::with_capacity(entries.len()),
        };
        // Hand-edited files may repeat a name
        for entry in entries {
            leaderboard.merge(entry.name, entry.score);
        }
        leaderboard.rank();
        leaderboard
    }

    /// Record a result. An existing name keeps the better of its two scores.
    /// Saved straight away. Returns the name's rank (1-indexed) if it is on
    /// the board afterwards.
    pub fn add_score(&mut self, name: &str, score: u64) -> Option<usize> {
        self.merge(name.to_string(), score);
        self.rank();

        if let Err(e) = self.save() {
            log::warn!("High scores not saved: {}", e);
        }

        self.entries.iter().position(|e| e.name == name).map(|i| i + 1)
    }

    /// An existing name keeps the better of its two scores
    fn merge(&mut self, name: String, score: u64) {
        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(entry) => entry.score = entry.score.max(score),
            None => self.entries.push(LeaderboardEntry { name, score }),
        }
    }

    /// Stable sort, highest first, then trim to size
    fn rank(&mut self) {
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(MAX_HIGH_SCORES);
    }

    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    /// Check if the leaderboard is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }

    /// Write to disk. No-op for an in-memory board.
    pub fn save(&self) -> Result<(), PersistenceError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        write_json(path, &self.entries)?;
        log::info!("High scores saved ({} entries)", self.entries.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::test_dir::TestDir;
    use proptest::prelude::*;

    fn names(board: &Leaderboard) -> Vec<&str> {
        board.entries().iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_same_name_keeps_best() {
        let mut board = Leaderboard::new();
        assert_eq!(board.add_score("ana", 50), Some(1));
        assert_eq!(board.add_score("ana", 30), Some(1));
        assert_eq!(board.entries().len(), 1);
        assert_eq!(board.top_score(), Some(50));

        board.add_score("ana", 80);
        assert_eq!(board.entries(), &[LeaderboardEntry { name: "ana".into(), score: 80 }]);
    }

    #[test]
    fn test_keeps_ten_best_descending() {
        let mut board = Leaderboard::new();
        for i in 0..11u64 {
            board.add_score(&format!("p{i}"), i * 10);
        }
        assert_eq!(board.entries().len(), MAX_HIGH_SCORES);
        assert_eq!(board.top_score(), Some(100));
        assert!(!names(&board).contains(&"p0"));
        assert!(board.entries().windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_rank_when_pushed_off() {
        let mut board = Leaderboard::new();
        for i in 0..10u64 {
            board.add_score(&format!("p{i}"), 100 + i);
        }
        assert_eq!(board.add_score("low", 1), None);
        assert_eq!(board.add_score("high", 500), Some(1));
    }

    #[test]
    fn test_ties_keep_arrival_order() {
        let mut board = Leaderboard::new();
        board.add_score("first", 40);
        board.add_score("second", 40);
        board.add_score("third", 90);
        assert_eq!(names(&board), vec!["third", "first", "second"]);
    }

    #[test]
    fn test_write_through_and_reload() {
        let dir = TestDir::new("leaderboard");
        let path = dir.path().join("leaderboard.json");

        let mut board = Leaderboard::load(&path);
        assert!(board.is_empty());
        board.add_score("ana", 120);
        board.add_score("bo", 300);

        let json = std::fs::read_to_string(&path).unwrap();
        assert_eq!(json, r#"[{"name":"bo","score":300},{"name":"ana","score":120}]"#);

        let reloaded = Leaderboard::load(&path);
        assert_eq!(reloaded.entries(), board.entries());
    }

    #[test]
    fn test_malformed_file_starts_empty() {
        let dir = TestDir::new("leaderboard");
        let path = dir.path().join("leaderboard.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(Leaderboard::load(&path).is_empty());

        std::fs::write(&path, r#"{"name": "ana"}"#).unwrap();
        assert!(Leaderboard::load(&path).is_empty());
    }

    #[test]
    fn test_loaded_duplicate_names_merge() {
        let dir = TestDir::new("leaderboard");
        let path = dir.path().join("leaderboard.json");
        std::fs::write(
            &path,
            r#"[{"name":"ana","score":30},{"name":"bo","score":40},{"name":"ana","score":50}]"#,
        )
        .unwrap();

        let mut board = Leaderboard::load(&path);
        assert_eq!(names(&board), vec!["ana", "bo"]);
        assert_eq!(board.top_score(), Some(50));

        board.add_score("cy", 10);
        let reloaded = Leaderboard::load(&path);
        assert_eq!(names(&reloaded), vec!["ana", "bo", "cy"]);
    }

    #[test]
    fn test_loaded_table_is_ranked() {
        let dir = TestDir::new("leaderboard");
        let path = dir.path().join("leaderboard.json");
        let entries: Vec<_> = (0..12u64)
            .map(|i| LeaderboardEntry { name: format!("p{i}"), score: i })
            .collect();
        std::fs::write(&path, serde_json::to_string(&entries).unwrap()).unwrap();

        let board = Leaderboard::load(&path);
        assert_eq!(board.entries().len(), MAX_HIGH_SCORES);
        assert_eq!(board.top_score(), Some(11));
    }

    proptest! {
        #[test]
        fn prop_board_invariants(results in proptest::collection::vec((0u8..15, 0u64..1000), 0..60)) {
            let mut board = Leaderboard::new();
            for (who, score) in &results {
                board.add_score(&format!("p{who}"), *score);
            }

            let entries = board.entries();
            prop_assert!(entries.len() <= MAX_HIGH_SCORES);
            prop_assert!(entries.windows(2).all(|w| w[0].score >= w[1].score));
            for (i, entry) in entries.iter().enumerate() {
                prop_assert!(entries[i + 1..].iter().all(|e| e.name != entry.name));
                let best = results
                    .iter()
                    .filter(|(who, _)| format!("p{who}") == entry.name)
                    .map(|(_, s)| *s)
                    .max();
                prop_assert_eq!(Some(entry.score), best);
            }
        }
    }
}
