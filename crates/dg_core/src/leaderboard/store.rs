//! Storage backend for leaderboards. The engine ships an in-memory
//! store; hosts persist the serialized board however they like.

use std::collections::HashMap;

use thiserror::Error;

use super::{Leaderboard, LeaderboardEntry};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unknown board: {board}")]
    UnknownBoard { board: String },
}

/// One leaderboard per named board (typically one per course).
pub trait LeaderboardStore {
    fn load(&self, board: &str) -> Result<Leaderboard, StoreError>;
    fn save(&mut self, board: &str, leaderboard: &Leaderboard) -> Result<(), StoreError>;

    /// Load, record, save. Returns whether the entry made the board.
    fn submit(&mut self, board: &str, entry: LeaderboardEntry) -> Result<bool, StoreError> {
        let mut leaderboard = self.load(board)?;
        let accepted = leaderboard.record_entry(entry);
        if accepted {
            self.save(board, &leaderboard)?;
        }
        Ok(accepted)
    }
}

/// Keeps boards in a map; a missing board reads as empty.
#[derive(Debug, Default)]
pub struct MemoryStore {
    boards: HashMap<String, Leaderboard>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LeaderboardStore for MemoryStore {
    fn load(&self, board: &str) -> Result<Leaderboard, StoreError> {
        Ok(self.boards.get(board).cloned().unwrap_or_default())
    }

    fn save(&mut self, board: &str, leaderboard: &Leaderboard) -> Result<(), StoreError> {
        self.boards.insert(board.to_string(), leaderboard.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_board_reads_empty() {
        let store = MemoryStore::new();
        let board = store.load("augusta_front9").unwrap();
        assert!(board.entries().is_empty());
    }

    #[test]
    fn test_submit_round_trips() {
        let mut store = MemoryStore::new();
        let entry = LeaderboardEntry::new("Sam", "augusta_front9", -2, 9);
        assert!(store.submit("augusta_front9", entry).unwrap());
        let board = store.load("augusta_front9").unwrap();
        assert_eq!(board.entries().len(), 1);
        assert_eq!(board.entries()[0].player_name, "Sam");
        assert_eq!(board.entries()[0].score, -2);
    }
}
