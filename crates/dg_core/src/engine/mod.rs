//! The simulation engine: modifier stacking, outcome resolution, hole
//! play, the action reducer and the seeded session wrapper.

pub mod actions;
pub mod hole;
pub mod modifiers;
pub mod outcome;
pub mod session;

pub use actions::{reduce, GameAction};
pub use hole::{
    complete_game, complete_hole, is_hole_complete, next_hole, roll_dice, select_golfer,
    take_shot, update_wind, DICE_MAX, DICE_MIN, MAX_CONSECUTIVE_PUTTS,
};
pub use modifiers::{calculate_modifiers, wind_effect, ModifierSet};
pub use outcome::{hazard_zone, resolve_outcome, ShotOutcome};
pub use session::GameSession;
