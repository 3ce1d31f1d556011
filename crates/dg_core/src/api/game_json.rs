//! String-in / string-out entry points. Hosts keep the serialized
//! state between calls and pass it back with each action; the engine
//! itself stays stateless across the boundary.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::data::{course_by_id, random_golfers, DEFAULT_HAND_SIZE};
use crate::engine::{reduce, GameAction};
use crate::error::{EngineError, Result};
use crate::state::GameState;
use crate::SCHEMA_VERSION;

#[derive(Debug, Deserialize)]
pub struct NewGameRequest {
    pub schema_version: u8,
    pub seed: u64,
    pub course_id: String,
    /// Cards dealt at game start; defaults to the standard hand.
    #[serde(default)]
    pub hand_size: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct ActionRequest {
    pub schema_version: u8,
    /// Seed for this call's randomness only; hosts vary it per action.
    pub seed: u64,
    pub state: GameState,
    pub action: GameAction,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GameStateResponse {
    pub schema_version: u8,
    pub state: GameState,
}

fn check_schema(found: u8) -> Result<()> {
    if found != SCHEMA_VERSION {
        return Err(EngineError::SchemaVersionMismatch { expected: SCHEMA_VERSION, found });
    }
    Ok(())
}

/// Create a fresh game on a built-in course and return its serialized
/// state.
pub fn new_game_json(request_json: &str) -> Result<String> {
    let request: NewGameRequest = serde_json::from_str(request_json)?;
    check_schema(request.schema_version)?;

    let course = course_by_id(&request.course_id)
        .ok_or_else(|| EngineError::UnknownCourse(request.course_id.clone()))?;
    let hand_size = request.hand_size.unwrap_or(DEFAULT_HAND_SIZE);
    if hand_size == 0 {
        return Err(EngineError::InvalidParameter("hand_size must be positive".to_string()));
    }

    let mut rng = ChaCha8Rng::seed_from_u64(request.seed);
    let golfer_cards = random_golfers(hand_size, &mut rng);
    let state = GameState::new(course, golfer_cards);

    let response = GameStateResponse { schema_version: SCHEMA_VERSION, state };
    Ok(serde_json::to_string(&response)?)
}

/// Apply a single action to a serialized state and return the next
/// state.
pub fn apply_action_json(request_json: &str) -> Result<String> {
    let request: ActionRequest = serde_json::from_str(request_json)?;
    check_schema(request.schema_version)?;

    let mut rng = ChaCha8Rng::seed_from_u64(request.seed);
    let state = reduce(&request.state, &request.action, &mut rng);

    let response = GameStateResponse { schema_version: SCHEMA_VERSION, state };
    Ok(serde_json::to_string(&response)?)
}
