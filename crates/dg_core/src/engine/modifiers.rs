//! Modifier calculation for a shot: golfer stat, surface, wind, and the
//! special-ability pass layered on top.

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::{AbilityCategory, Lie, ShotType, Wind, WindDirection};
use crate::state::GameState;

/// Probability that Clutch Putter converts a putt outright.
const CLUTCH_PUTTER_CHANCE: f32 = 0.2;
/// Stat bonus large enough to virtually guarantee a made putt.
const CLUTCH_PUTTER_BONUS: i32 = 5;

/// The additive components of a shot's total score. Ability adjustments
/// are folded into the three numeric fields before the shot is recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModifierSet {
    pub stat: i32,
    pub surface: i32,
    pub wind: i32,
    /// Name of the ability that fired, if any rule applied.
    pub ability_activated: Option<String>,
}

impl ModifierSet {
    pub fn total(&self) -> i32 {
        self.stat + self.surface + self.wind
    }
}

/// Wind only affects long shots: tailwind helps drives, headwind hurts
/// them, crosswind hurts both drives and approaches.
pub fn wind_effect(wind: Wind, shot_type: ShotType) -> i32 {
    if wind.is_calm() {
        return 0;
    }
    let strength = wind.strength as i32;
    match (wind.direction, shot_type) {
        (WindDirection::Tailwind, ShotType::Drive) => strength,
        (WindDirection::Headwind, ShotType::Drive) => -strength,
        (WindDirection::Crosswind, ShotType::Drive | ShotType::Approach) => -strength,
        _ => 0,
    }
}

/// Compute the modifiers for a shot from the current game state.
///
/// Without a selected golfer all components are 0 except the surface
/// modifier. A positive putting stat earns an extra +1 on putts.
pub fn calculate_modifiers(
    state: &GameState,
    shot_type: ShotType,
    current_lie: Lie,
    rng: &mut impl Rng,
) -> ModifierSet {
    let hole_state = state.current_hole();
    let surface = current_lie.surface_modifier();

    let golfer = match &hole_state.selected_golfer {
        Some(g) => g,
        None => {
            return ModifierSet { stat: 0, surface, wind: 0, ability_activated: None };
        }
    };

    let mut stat = golfer.stats.for_shot(shot_type);
    if shot_type == ShotType::Putt && golfer.stats.putting > 0 {
        stat += 1;
    }
    let wind = wind_effect(state.current_wind, shot_type);

    let mut mods = ModifierSet { stat, surface, wind, ability_activated: None };
    apply_special_ability(state, shot_type, current_lie, &mut mods, rng);
    mods
}

/// Run the selected golfer's ability rules against the shot context.
///
/// The category rule fires first, then name-keyed special cases; rules
/// stack cumulatively, so an ability whose category matches and whose
/// special case also matches adjusts the modifiers twice.
fn apply_special_ability(
    state: &GameState,
    shot_type: ShotType,
    current_lie: Lie,
    mods: &mut ModifierSet,
    rng: &mut impl Rng,
) {
    let hole_state = state.current_hole();
    let golfer = match &hole_state.selected_golfer {
        Some(g) => g,
        None => return,
    };
    let ability = match &golfer.special_ability {
        Some(a) => a,
        None => return,
    };
    let hole = &hole_state.hole;
    let mut activated = false;

    match ability.category {
        AbilityCategory::Par3 => {
            if hole.par == 3 {
                mods.stat += ability.effect_value;
                activated = true;
            }
        }
        AbilityCategory::Par4 => {
            if hole.par == 4 {
                mods.stat += ability.effect_value;
                activated = true;
            }
            if ability.name == "Sunday Red" && (state.current_hole_index + 1) % 4 == 0 {
                mods.stat += ability.effect_value;
                activated = true;
            }
            if ability.name == "Longevity" && (13..=18).contains(&hole.number) {
                mods.stat += ability.effect_value;
                activated = true;
            }
            if ability.name == "Major Champion"
                && state.current_hole_index + 1 == state.course.holes.len()
            {
                mods.stat += ability.effect_value;
                activated = true;
            }
        }
        AbilityCategory::Par5 => {
            if hole.par == 5 && shot_type == ShotType::Drive {
                mods.stat += ability.effect_value;
                activated = true;
            }
        }
        AbilityCategory::Fairway => {
            if current_lie == Lie::Fairway {
                match ability.name.as_str() {
                    "Perfect Swing" | "Iron Accuracy" if shot_type == ShotType::Approach => {
                        mods.stat += ability.effect_value;
                        activated = true;
                    }
                    "Smooth Swing" => {
                        mods.stat += ability.effect_value;
                        activated = true;
                    }
                    _ => {}
                }
            }
        }
        AbilityCategory::Rough => {
            if current_lie == Lie::Rough {
                match ability.name.as_str() {
                    "Links Master" if shot_type == ShotType::Chip => {
                        mods.stat += ability.effect_value;
                        activated = true;
                    }
                    "Escape Artist" => {
                        mods.stat += ability.effect_value;
                        activated = true;
                    }
                    _ => {}
                }
            }
        }
        AbilityCategory::Bunker => {
            if current_lie == Lie::Bunker {
                match ability.name.as_str() {
                    "Flop Shot Master" if shot_type == ShotType::Chip => {
                        mods.stat += ability.effect_value;
                        activated = true;
                    }
                    "Escape Artist" => {
                        mods.stat += ability.effect_value;
                        activated = true;
                    }
                    _ => {}
                }
            }
        }
        AbilityCategory::Water => {
            if current_lie == Lie::Water && ability.name == "Escape Artist" {
                mods.stat += ability.effect_value;
                activated = true;
            }
        }
        AbilityCategory::Green => {
            if current_lie == Lie::Green
                && ability.name == "Clutch Putter"
                && shot_type == ShotType::Putt
                && rng.gen::<f32>() < CLUTCH_PUTTER_CHANCE
            {
                mods.stat += CLUTCH_PUTTER_BONUS;
                activated = true;
            }
        }
        AbilityCategory::Wind => {
            if !state.current_wind.is_calm() {
                match ability.name.as_str() {
                    "Global Champion" => {
                        mods.wind = 0;
                        activated = true;
                    }
                    "Fade Master"
                        if state.current_wind.direction == WindDirection::Crosswind =>
                    {
                        mods.wind = ability.effect_value;
                        activated = true;
                    }
                    "Athletic Power" if shot_type == ShotType::Drive => {
                        mods.wind = mods.wind.max(0);
                        mods.stat += ability.effect_value;
                        activated = true;
                    }
                    _ => {}
                }
            }
        }
    }

    // Name-keyed special cases evaluated after the category pass.
    if ability.name == "Science of Power" {
        match shot_type {
            ShotType::Drive => {
                mods.stat += ability.effect_value;
                activated = true;
            }
            ShotType::Putt => {
                mods.stat -= ability.effect_value;
                activated = true;
            }
            _ => {}
        }
    }

    if ability.name == "Psychology Master" {
        if let Some(last) = hole_state.last_shot() {
            if last.tier.is_miss() {
                mods.stat += ability.effect_value;
                activated = true;
            }
        }
    }

    if ability.name == "Power Drive"
        && shot_type == ShotType::Drive
        && current_lie == Lie::Tee
        && hole_state.shots.is_empty()
    {
        mods.stat += ability.effect_value;
        activated = true;
    }

    if activated {
        debug!("ability activated: {} ({})", ability.name, golfer.name);
        mods.ability_activated = Some(ability.name.clone());
    }
}
