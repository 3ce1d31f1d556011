//! Value types shared across the engine: golfer cards, courses, shots
//! and wind conditions.

pub mod course;
pub mod golfer;
pub mod shot;
pub mod wind;

pub use course::{Course, GreenBreak, GreenProfile, GreenSpeed, Hole, TerrainProfile};
pub use golfer::{AbilityCategory, GolferCard, SpecialAbility, StatBlock};
pub use shot::{Lie, Shot, ShotTier, ShotType};
pub use wind::{Wind, WindDirection};
