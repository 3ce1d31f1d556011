//! JSON boundary for host applications.

pub mod game_json;

pub use game_json::{
    apply_action_json, new_game_json, ActionRequest, GameStateResponse, NewGameRequest,
};
