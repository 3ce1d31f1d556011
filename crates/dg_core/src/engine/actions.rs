//! The action vocabulary and the reducer that applies it.
//!
//! Actions arrive as tagged JSON; anything this build does not
//! recognize deserializes to [`GameAction::Unknown`] and reduces to a
//! no-op, so newer clients cannot wedge an older engine.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::engine::hole::{
    complete_game, complete_hole, is_hole_complete, next_hole, select_golfer, take_shot,
    update_wind,
};
use crate::models::{Course, GolferCard, ShotType};
use crate::state::GameState;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameAction {
    #[serde(rename_all = "camelCase")]
    StartGame { course: Course, golfer_cards: Vec<GolferCard> },
    #[serde(rename_all = "camelCase")]
    SelectGolfer { golfer_id: String },
    #[serde(rename_all = "camelCase")]
    TakeShot {
        shot_type: ShotType,
        /// Externally rolled 2d6 total; the engine rolls when absent.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        dice_roll: Option<u8>,
    },
    UpdateWind,
    CompleteHole,
    NextHole,
    CompleteGame,
    #[serde(other)]
    Unknown,
}

/// Apply one action to the state, producing the next state. Unknown
/// actions and actions that are invalid in the current state leave the
/// state unchanged.
pub fn reduce(state: &GameState, action: &GameAction, rng: &mut impl Rng) -> GameState {
    match action {
        GameAction::StartGame { course, golfer_cards } => {
            GameState::new(course.clone(), golfer_cards.clone())
        }
        GameAction::SelectGolfer { golfer_id } => select_golfer(state, golfer_id),
        GameAction::TakeShot { shot_type, dice_roll } => {
            take_shot(state, *shot_type, *dice_roll, rng)
        }
        GameAction::UpdateWind => update_wind(state, rng),
        // Shots finalize holes themselves; the explicit action only
        // covers hosts that rebuild states by hand.
        GameAction::CompleteHole => {
            if is_hole_complete(state.current_hole()) {
                complete_hole(state)
            } else {
                state.clone()
            }
        }
        GameAction::NextHole => next_hole(state, rng),
        GameAction::CompleteGame => complete_game(state),
        GameAction::Unknown => state.clone(),
    }
}
