use serde::{Deserialize, Serialize};

/// Percentage weight of each terrain type along a hole. Informational,
/// and used to derive hazard probabilities on poor shots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerrainProfile {
    pub tee: u8,
    pub fairway: u8,
    pub rough: u8,
    pub bunker: u8,
    pub green: u8,
    pub water: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GreenSpeed {
    Slow,
    Normal,
    Fast,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GreenBreak {
    Easy,
    Hard,
}

/// Green characteristics. Descriptive only; preserved for data fidelity
/// but not consumed by the scoring math.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreenProfile {
    pub speed: GreenSpeed,
    #[serde(rename = "break")]
    pub break_: GreenBreak,
}

/// A single hole. Par is 3, 4 or 5; length is in yards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hole {
    pub id: String,
    /// 1-based hole number.
    pub number: u32,
    pub par: u8,
    pub length: u32,
    pub terrain: TerrainProfile,
    pub green: GreenProfile,
}

/// An ordered sequence of holes. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub name: String,
    pub holes: Vec<Hole>,
}

impl Course {
    pub fn hole_count(&self) -> usize {
        self.holes.len()
    }

    /// Sum of par over all holes.
    pub fn total_par(&self) -> u32 {
        self.holes.iter().map(|h| h.par as u32).sum()
    }
}
