//! A seeded game session: the state plus the rng that drives it.
//!
//! Two sessions built from the same course and seed and fed the same
//! action sequence produce identical states.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::data::{course_by_id, random_golfers, DEFAULT_HAND_SIZE};
use crate::engine::actions::{reduce, GameAction};
use crate::error::{EngineError, Result};
use crate::models::{Course, GolferCard};
use crate::state::GameState;

pub struct GameSession {
    state: GameState,
    rng: ChaCha8Rng,
}

impl GameSession {
    /// Start a session on a built-in course with a freshly dealt hand.
    pub fn new(course_id: &str, seed: u64) -> Result<Self> {
        let course = course_by_id(course_id)
            .ok_or_else(|| EngineError::UnknownCourse(course_id.to_string()))?;
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let golfer_cards = random_golfers(DEFAULT_HAND_SIZE, &mut rng);
        Ok(Self { state: GameState::new(course, golfer_cards), rng })
    }

    /// Start a session with an explicit course and hand, for callers
    /// that manage their own roster.
    pub fn with_golfers(course: Course, golfer_cards: Vec<GolferCard>, seed: u64) -> Self {
        Self {
            state: GameState::new(course, golfer_cards),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Resume a session from a previously serialized state. The rng is
    /// reseeded, so determinism holds per (state, seed) pair.
    pub fn resume(state: GameState, seed: u64) -> Self {
        Self { state, rng: ChaCha8Rng::seed_from_u64(seed) }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Apply one action and return the resulting state.
    pub fn dispatch(&mut self, action: &GameAction) -> &GameState {
        self.state = reduce(&self.state, action, &mut self.rng);
        &self.state
    }
}
