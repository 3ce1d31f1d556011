use serde::{Deserialize, Serialize};

/// Terrain type the ball currently rests on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lie {
    Tee,
    Fairway,
    Rough,
    Bunker,
    Green,
    Water,
}

impl Lie {
    /// Fixed surface modifier applied to every shot played from this lie.
    pub fn surface_modifier(&self) -> i32 {
        match self {
            Lie::Tee => 2,
            Lie::Fairway => 1,
            Lie::Rough => -1,
            Lie::Bunker => -2,
            Lie::Green => 0,
            Lie::Water => -3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Lie::Tee => "tee",
            Lie::Fairway => "fairway",
            Lie::Rough => "rough",
            Lie::Bunker => "bunker",
            Lie::Green => "green",
            Lie::Water => "water",
        }
    }
}

/// The four club selections a player can make.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShotType {
    Drive,
    Approach,
    Chip,
    Putt,
}

/// Qualitative outcome bucket derived from a shot's total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShotTier {
    Excellent,
    Good,
    Average,
    Poor,
    Terrible,
}

impl ShotTier {
    /// Map a total shot score to its tier. Thresholds are fixed.
    pub fn from_score(total: i32) -> Self {
        if total >= 12 {
            ShotTier::Excellent
        } else if total >= 9 {
            ShotTier::Good
        } else if total >= 6 {
            ShotTier::Average
        } else if total >= 3 {
            ShotTier::Poor
        } else {
            ShotTier::Terrible
        }
    }

    /// Poor and terrible shots are "misses" for ability triggers and
    /// hazard injection.
    pub fn is_miss(&self) -> bool {
        matches!(self, ShotTier::Poor | ShotTier::Terrible)
    }
}

/// A single resolved shot. Append-only once recorded on a hole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shot {
    pub id: String,
    pub shot_type: ShotType,
    /// Total of the two dice.
    pub dice_total: u8,
    pub stat_modifier: i32,
    pub surface_modifier: i32,
    pub wind_modifier: i32,
    pub total_score: i32,
    pub tier: ShotTier,
    pub result_text: String,
    /// Lie the ball ended up on after this shot.
    pub lie: Lie,
    /// Yards to the hole after this shot. 0 means the ball is in the hole.
    pub distance_remaining: u32,
    /// Name of the special ability that fired during this shot, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ability_activated: Option<String>,
    /// True when this shot incurred a water penalty stroke.
    #[serde(default)]
    pub penalty_stroke: bool,
    /// Lie the ball was in before penalty resolution moved it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pre_penalty_lie: Option<Lie>,
}

impl Shot {
    pub fn holed(&self) -> bool {
        self.distance_remaining == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_thresholds() {
        assert_eq!(ShotTier::from_score(12), ShotTier::Excellent);
        assert_eq!(ShotTier::from_score(14), ShotTier::Excellent);
        assert_eq!(ShotTier::from_score(11), ShotTier::Good);
        assert_eq!(ShotTier::from_score(9), ShotTier::Good);
        assert_eq!(ShotTier::from_score(8), ShotTier::Average);
        assert_eq!(ShotTier::from_score(6), ShotTier::Average);
        assert_eq!(ShotTier::from_score(5), ShotTier::Poor);
        assert_eq!(ShotTier::from_score(3), ShotTier::Poor);
        assert_eq!(ShotTier::from_score(2), ShotTier::Terrible);
        assert_eq!(ShotTier::from_score(-4), ShotTier::Terrible);
    }

    #[test]
    fn test_surface_modifiers() {
        assert_eq!(Lie::Tee.surface_modifier(), 2);
        assert_eq!(Lie::Fairway.surface_modifier(), 1);
        assert_eq!(Lie::Rough.surface_modifier(), -1);
        assert_eq!(Lie::Bunker.surface_modifier(), -2);
        assert_eq!(Lie::Green.surface_modifier(), 0);
        assert_eq!(Lie::Water.surface_modifier(), -3);
    }

    #[test]
    fn test_miss_tiers() {
        assert!(ShotTier::Poor.is_miss());
        assert!(ShotTier::Terrible.is_miss());
        assert!(!ShotTier::Average.is_miss());
        assert!(!ShotTier::Excellent.is_miss());
    }

    #[test]
    fn test_lie_serde_names() {
        assert_eq!(serde_json::to_string(&Lie::Fairway).unwrap(), "\"fairway\"");
        assert_eq!(serde_json::to_string(&ShotType::Putt).unwrap(), "\"putt\"");
        assert_eq!(serde_json::to_string(&ShotTier::Excellent).unwrap(), "\"excellent\"");
    }
}
