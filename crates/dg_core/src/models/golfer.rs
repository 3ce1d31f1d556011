use serde::{Deserialize, Serialize};

use super::shot::ShotType;

/// The four directional stats of a golfer card, each in -3..=3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBlock {
    pub drive: i8,
    pub accuracy: i8,
    pub short_game: i8,
    pub putting: i8,
}

impl StatBlock {
    /// Stat used for a given shot type: drive -> drive,
    /// approach -> accuracy, chip -> short game, putt -> putting.
    pub fn for_shot(&self, shot_type: ShotType) -> i32 {
        let stat = match shot_type {
            ShotType::Drive => self.drive,
            ShotType::Approach => self.accuracy,
            ShotType::Chip => self.short_game,
            ShotType::Putt => self.putting,
        };
        stat as i32
    }
}

/// Trigger category of a special ability. Name-keyed special-case rules
/// refine these in the modifier pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AbilityCategory {
    Par3,
    Par4,
    Par5,
    Bunker,
    Water,
    Rough,
    Fairway,
    Green,
    Wind,
}

/// A golfer-specific conditional modifier rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecialAbility {
    pub name: String,
    pub description: String,
    pub category: AbilityCategory,
    /// Signed magnitude added to (or substituted into) a modifier.
    pub effect_value: i32,
}

/// A selectable golfer card. Immutable except for `is_used`, which is
/// only toggled through explicit selection / roster refresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GolferCard {
    pub id: String,
    pub name: String,
    pub stats: StatBlock,
    #[serde(default)]
    pub is_used: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_ability: Option<SpecialAbility>,
}
