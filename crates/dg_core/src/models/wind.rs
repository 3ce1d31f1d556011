use rand::Rng;
use serde::{Deserialize, Serialize};

/// Wind direction relative to the line of play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindDirection {
    Tailwind,
    Headwind,
    Crosswind,
    None,
}

/// Current wind conditions. Strength is 0, 1 or 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wind {
    pub direction: WindDirection,
    pub strength: u8,
}

impl Wind {
    pub fn calm() -> Self {
        Self { direction: WindDirection::None, strength: 0 }
    }

    /// Draw fresh wind conditions. Direction is uniform over the four
    /// directions, strength uniform over 0..=2; a `None` direction
    /// forces strength to 0.
    pub fn random(rng: &mut impl Rng) -> Self {
        let direction = match rng.gen_range(0..4) {
            0 => WindDirection::Tailwind,
            1 => WindDirection::Headwind,
            2 => WindDirection::Crosswind,
            _ => WindDirection::None,
        };
        let strength = if direction == WindDirection::None { 0 } else { rng.gen_range(0..=2) };
        Self { direction, strength }
    }

    pub fn is_calm(&self) -> bool {
        self.direction == WindDirection::None || self.strength == 0
    }
}

impl Default for Wind {
    fn default() -> Self {
        Self::calm()
    }
}
