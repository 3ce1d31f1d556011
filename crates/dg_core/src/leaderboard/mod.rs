//! Round-result leaderboard: qualification rules, ordering and the
//! pluggable storage backend.

pub mod store;

pub use store::{LeaderboardStore, MemoryStore, StoreError};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The board never holds more than this many entries.
pub const MAX_ENTRIES: usize = 100;
/// A course with fewer entries than this accepts any score.
const COURSE_ENTRY_FLOOR: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub id: String,
    pub player_name: String,
    pub course_id: String,
    /// Total relative to par for the round.
    pub score: i32,
    /// Holes in the round the score came from (9 or 18).
    #[serde(default)]
    pub hole_count: u32,
    pub date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

impl LeaderboardEntry {
    pub fn new(player_name: &str, course_id: &str, score: i32, hole_count: u32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            player_name: player_name.to_string(),
            course_id: course_id.to_string(),
            score,
            hole_count,
            date: Utc::now(),
            location: None,
        }
    }
}

/// Ordered collection of finished rounds, best score first. Ties go to
/// the more recent round.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    fn course_entries<'a>(
        &'a self,
        course_id: &'a str,
    ) -> impl Iterator<Item = &'a LeaderboardEntry> + 'a {
        self.entries.iter().filter(move |e| e.course_id == course_id)
    }

    /// A score qualifies while the course is under its entry floor,
    /// while the board has room, or when it beats the course's worst
    /// recorded score.
    pub fn is_qualified(&self, course_id: &str, score: i32) -> bool {
        let course_count = self.course_entries(course_id).count();
        if course_count < COURSE_ENTRY_FLOOR || self.entries.len() < MAX_ENTRIES {
            return true;
        }
        match self.course_entries(course_id).map(|e| e.score).max() {
            Some(worst) => score <= worst,
            None => true,
        }
    }

    /// Insert an entry, re-sort and truncate to capacity. Returns false
    /// when the entry did not qualify.
    pub fn record_entry(&mut self, entry: LeaderboardEntry) -> bool {
        if !self.is_qualified(&entry.course_id, entry.score) {
            return false;
        }
        self.entries.push(entry);
        self.resort();
        self.entries.truncate(MAX_ENTRIES);
        true
    }

    fn resort(&mut self) {
        self.entries
            .sort_by(|a, b| a.score.cmp(&b.score).then_with(|| b.date.cmp(&a.date)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn entry(name: &str, course: &str, score: i32, day: u32) -> LeaderboardEntry {
        LeaderboardEntry {
            id: format!("{name}-{day}"),
            player_name: name.to_string(),
            course_id: course.to_string(),
            score,
            hole_count: 9,
            date: Utc.with_ymd_and_hms(2025, 6, day, 12, 0, 0).unwrap(),
            location: None,
        }
    }

    #[test]
    fn test_sorted_by_score_then_recency() {
        let mut board = Leaderboard::new();
        board.record_entry(entry("a", "augusta_front9", 2, 1));
        board.record_entry(entry("b", "augusta_front9", -3, 2));
        board.record_entry(entry("c", "augusta_front9", 2, 5));
        let names: Vec<&str> =
            board.entries().iter().map(|e| e.player_name.as_str()).collect();
        assert_eq!(names, ["b", "c", "a"], "ties go to the newer round");
    }

    #[test]
    fn test_under_floor_always_qualifies() {
        let mut board = Leaderboard::new();
        for day in 1..=5 {
            board.record_entry(entry("x", "augusta_front9", 0, day));
        }
        assert!(board.is_qualified("augusta_front9", 50));
        assert!(board.is_qualified("pebble_front9", 50));
    }

    #[test]
    fn test_full_board_requires_beating_course_worst() {
        let mut board = Leaderboard::new();
        for i in 0..MAX_ENTRIES {
            let mut e = entry("x", "augusta_front9", 5, 1 + (i % 28) as u32);
            e.id = format!("x-{i}");
            board.record_entry(e);
        }
        assert_eq!(board.entries().len(), MAX_ENTRIES);
        assert!(board.is_qualified("augusta_front9", 5));
        assert!(board.is_qualified("augusta_front9", -1));
        assert!(!board.is_qualified("augusta_front9", 6));
        assert!(!board.record_entry(entry("y", "augusta_front9", 6, 7)));
    }

    #[test]
    fn test_board_truncates_at_capacity() {
        let mut board = Leaderboard::new();
        for i in 0..MAX_ENTRIES {
            let mut e = entry("x", "augusta_front9", 10, 1 + (i % 28) as u32);
            e.id = format!("x-{i}");
            board.record_entry(e);
        }
        assert!(board.record_entry(entry("better", "augusta_front9", -5, 3)));
        assert_eq!(board.entries().len(), MAX_ENTRIES);
        assert_eq!(board.entries()[0].player_name, "better");
    }
}
