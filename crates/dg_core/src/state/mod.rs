//! Game state threaded through the reducer.
//!
//! Every engine operation takes the current state and returns a new
//! value; nothing here is global or ambient. The roster's `is_used`
//! flags and the per-hole `selected_golfer` linkage are only touched
//! through the explicit selection / advancement operations.

use serde::{Deserialize, Serialize};

use crate::models::{Course, GolferCard, Hole, Lie, Shot, ShotType, Wind};

/// Per-hole progress: the shots taken so far, penalty bookkeeping and
/// the golfer selected for this hole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoleState {
    pub hole: Hole,
    /// Chronological, append-only.
    pub shots: Vec<Shot>,
    #[serde(default)]
    pub penalty_strokes: u32,
    /// Final score. Valid only once `completed` is true.
    #[serde(default)]
    pub score: u32,
    #[serde(default)]
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_golfer: Option<GolferCard>,
    /// Summary text set when the hole completes ("Hole in one!" etc).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_text: Option<String>,
}

impl HoleState {
    pub fn new(hole: Hole) -> Self {
        Self {
            hole,
            shots: Vec::new(),
            penalty_strokes: 0,
            score: 0,
            completed: false,
            selected_golfer: None,
            completion_text: None,
        }
    }

    pub fn last_shot(&self) -> Option<&Shot> {
        self.shots.last()
    }

    /// Lie and distance the next shot plays from: the last shot's
    /// result, or the tee at full hole length if none has been taken.
    pub fn current_position(&self) -> (Lie, u32) {
        match self.shots.last() {
            Some(shot) => (shot.lie, shot.distance_remaining),
            None => (Lie::Tee, self.hole.length),
        }
    }

    /// Number of putts at the tail of the shot list.
    pub fn trailing_putts(&self) -> usize {
        self.shots.iter().rev().take_while(|s| s.shot_type == ShotType::Putt).count()
    }

    /// Number of trailing shots whose final lie is water.
    pub fn trailing_water_lies(&self) -> usize {
        self.shots.iter().rev().take_while(|s| s.lie == Lie::Water).count()
    }
}

/// The authoritative state of a round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub course: Course,
    /// Shared card pool for the round; replaced wholesale on refresh.
    pub golfer_cards: Vec<GolferCard>,
    pub current_hole_index: usize,
    /// One entry per course hole, pre-created at game start.
    pub holes: Vec<HoleState>,
    pub current_wind: Wind,
    /// Sum of (score - par) over completed holes.
    pub total_score: i32,
    #[serde(default)]
    pub game_completed: bool,
}

impl GameState {
    pub fn new(course: Course, golfer_cards: Vec<GolferCard>) -> Self {
        let holes = course.holes.iter().cloned().map(HoleState::new).collect();
        Self {
            course,
            golfer_cards,
            current_hole_index: 0,
            holes,
            current_wind: Wind::calm(),
            total_score: 0,
            game_completed: false,
        }
    }

    pub fn current_hole(&self) -> &HoleState {
        &self.holes[self.current_hole_index]
    }

    pub fn current_hole_mut(&mut self) -> &mut HoleState {
        &mut self.holes[self.current_hole_index]
    }

    pub fn is_final_hole(&self) -> bool {
        self.current_hole_index + 1 >= self.holes.len()
    }

    /// Rebuild the running total from scratch. Always recomputed over
    /// the full hole list rather than patched incrementally, so the
    /// invariant cannot drift.
    pub fn recompute_total_score(&mut self) {
        self.total_score = self
            .holes
            .iter()
            .filter(|h| h.completed)
            .map(|h| h.score as i32 - h.hole.par as i32)
            .sum();
    }
}
