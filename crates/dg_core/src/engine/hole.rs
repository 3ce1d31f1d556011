//! Hole play: shot execution, penalty handling, hole completion and
//! progression through the round.
//!
//! Every operation is a pure transition on [`GameState`]; callers pass
//! the rng in, the engine never owns one here.

use log::debug;
use rand::Rng;
use std::collections::HashSet;

use crate::data::random_golfers;
use crate::engine::modifiers::calculate_modifiers;
use crate::engine::outcome::{hazard_zone, resolve_outcome};
use crate::models::{Hole, Lie, Shot, ShotTier, ShotType, Wind};
use crate::state::{GameState, HoleState};

pub const DICE_MIN: u8 = 2;
pub const DICE_MAX: u8 = 12;
/// A putting sequence never runs longer than this; the final putt is
/// conceded.
pub const MAX_CONSECUTIVE_PUTTS: usize = 4;
/// Shortest distance a penalty drop can leave.
const MIN_DROP_DISTANCE: u32 = 5;
/// Wind is re-rolled every this many holes.
const WIND_CHANGE_INTERVAL: usize = 3;

/// Sum of two six-sided dice.
pub fn roll_dice(rng: &mut impl Rng) -> u8 {
    rng.gen_range(1..=6) + rng.gen_range(1..=6)
}

fn shot_id(hole: &Hole, shot_number: usize) -> String {
    format!("{}_s{:02}", hole.id, shot_number)
}

/// Play one shot on the current hole. A no-op once the hole or the
/// round is finished. `dice_override` substitutes an externally rolled
/// total (clamped to the 2d6 range) for the engine's own roll.
pub fn take_shot(
    state: &GameState,
    shot_type: ShotType,
    dice_override: Option<u8>,
    rng: &mut impl Rng,
) -> GameState {
    if state.game_completed || state.current_hole().completed {
        return state.clone();
    }

    let mut next = state.clone();
    let (current_lie, distance) = next.current_hole().current_position();
    let hole = next.current_hole().hole.clone();
    let shot_number = next.current_hole().shots.len() + 1;

    let dice_total = match dice_override {
        Some(d) => d.clamp(DICE_MIN, DICE_MAX),
        None => roll_dice(rng),
    };

    let forced_putt = shot_type == ShotType::Putt
        && next.current_hole().trailing_putts() >= MAX_CONSECUTIVE_PUTTS - 1;

    let mods = calculate_modifiers(&next, shot_type, current_lie, rng);
    let total = dice_total as i32 + mods.total();

    // A conceded putt keeps its real dice and modifiers on the record;
    // only the outcome is overridden.
    let shot = if forced_putt {
        debug!("conceding putt {} on hole {}", shot_number, hole.number);
        Shot {
            id: shot_id(&hole, shot_number),
            shot_type,
            dice_total,
            stat_modifier: mods.stat,
            surface_modifier: mods.surface,
            wind_modifier: mods.wind,
            total_score: total,
            tier: ShotTier::Average,
            result_text: "The ball finally finds the bottom of the cup.".to_string(),
            lie: Lie::Green,
            distance_remaining: 0,
            ability_activated: mods.ability_activated,
            penalty_stroke: false,
            pre_penalty_lie: None,
        }
    } else {
        let tier = ShotTier::from_score(total);
        let mut outcome = resolve_outcome(shot_type, tier, current_lie, distance, &hole, rng);

        let mut penalty_stroke = false;
        let mut pre_penalty_lie = None;
        if outcome.lie == Lie::Water {
            penalty_stroke = true;
            pre_penalty_lie = Some(Lie::Water);
            if next.current_hole().trailing_water_lies() >= 1 {
                // Second straight splash: drop beyond the hazard zone.
                let (_, zone_end) = hazard_zone(&hole);
                let drop =
                    hole.length.saturating_sub(zone_end + 1).max(MIN_DROP_DISTANCE);
                outcome.lie = Lie::Fairway;
                outcome.distance_remaining = drop;
                outcome.text =
                    "Back in the water. Taking a drop beyond the hazard.".to_string();
            }
            next.current_hole_mut().penalty_strokes += 1;
        }

        Shot {
            id: shot_id(&hole, shot_number),
            shot_type,
            dice_total,
            stat_modifier: mods.stat,
            surface_modifier: mods.surface,
            wind_modifier: mods.wind,
            total_score: total,
            tier,
            result_text: outcome.text,
            lie: outcome.lie,
            distance_remaining: outcome.distance_remaining,
            ability_activated: mods.ability_activated,
            penalty_stroke,
            pre_penalty_lie,
        }
    };

    next.current_hole_mut().shots.push(shot);
    if is_hole_complete(next.current_hole()) {
        next = complete_hole(&next);
    }
    next
}

/// Three identical-looking short putts in a row with nothing else going
/// on is a stalemate; treat the next stroke as conceded.
fn putt_loop_detected(hole_state: &HoleState) -> bool {
    if hole_state.shots.len() <= 5 {
        return false;
    }
    let tail: Vec<u32> = hole_state
        .shots
        .iter()
        .rev()
        .take_while(|s| s.shot_type == ShotType::Putt)
        .take(3)
        .map(|s| s.distance_remaining)
        .collect();
    if tail.len() < 3 {
        return false;
    }
    let distinct: HashSet<u32> = tail.iter().copied().collect();
    distinct.len() < 3
}

/// A hole is over when the ball drops, or when the putting guards
/// decide the sequence is not going anywhere.
pub fn is_hole_complete(hole_state: &HoleState) -> bool {
    match hole_state.last_shot() {
        None => false,
        Some(shot) => {
            shot.holed()
                || hole_state.trailing_putts() >= MAX_CONSECUTIVE_PUTTS
                || putt_loop_detected(hole_state)
        }
    }
}

fn completion_text(hole_state: &HoleState) -> String {
    let holed_in_one = hole_state.shots.len() == 1
        && hole_state.penalty_strokes == 0
        && hole_state.last_shot().map(Shot::holed).unwrap_or(false);
    if holed_in_one {
        return "Hole in one!".to_string();
    }
    match hole_state.score as i32 - hole_state.hole.par as i32 {
        d if d <= -3 => "Albatross!".to_string(),
        -2 => "Eagle!".to_string(),
        -1 => "Birdie!".to_string(),
        0 => "Par.".to_string(),
        1 => "Bogey.".to_string(),
        2 => "Double bogey.".to_string(),
        d => format!("+{} on the hole.", d),
    }
}

/// Finalize the current hole: score is strokes plus penalties, and the
/// running total is rebuilt.
pub fn complete_hole(state: &GameState) -> GameState {
    let mut next = state.clone();
    {
        let hole_state = next.current_hole_mut();
        if hole_state.completed {
            return next;
        }
        hole_state.score = hole_state.shots.len() as u32 + hole_state.penalty_strokes;
        hole_state.completed = true;
        hole_state.completion_text = Some(completion_text(hole_state));
    }
    next.recompute_total_score();
    next
}

/// Re-roll the wind, but only on every third hole; anywhere else the
/// current conditions hold.
pub fn update_wind(state: &GameState, rng: &mut impl Rng) -> GameState {
    let mut next = state.clone();
    if next.current_hole_index % WIND_CHANGE_INTERVAL == 0 {
        next.current_wind = Wind::random(rng);
    }
    next
}

/// Advance past a completed hole. Finishing the final hole ends the
/// round; otherwise the wind gets its periodic re-roll (checked on the
/// hole being left), the index moves on, and an exhausted card hand is
/// redealt.
pub fn next_hole(state: &GameState, rng: &mut impl Rng) -> GameState {
    let next = state.clone();
    if next.game_completed || !next.current_hole().completed {
        return next;
    }
    if next.is_final_hole() {
        let mut next = next;
        next.game_completed = true;
        return next;
    }
    let mut next = update_wind(&next, rng);
    next.current_hole_index += 1;
    if next.golfer_cards.iter().all(|g| g.is_used) {
        let hand_size = next.golfer_cards.len();
        debug!("card hand exhausted, dealing {} fresh cards", hand_size);
        next.golfer_cards = random_golfers(hand_size, rng);
    }
    next
}

/// End the round on request, wherever it stands. Holes still open stay
/// uncounted in the total.
pub fn complete_game(state: &GameState) -> GameState {
    let mut next = state.clone();
    next.game_completed = true;
    next.recompute_total_score();
    next
}

/// Commit a golfer card to the current hole. Selection is honored at
/// any point while the hole is live; switching before the first shot
/// releases the previous card, switching later does not. A used card
/// is only refused while the hole has no selection yet.
pub fn select_golfer(state: &GameState, golfer_id: &str) -> GameState {
    let mut next = state.clone();
    if next.game_completed {
        return next;
    }
    let (previous_id, no_shots) = {
        let hole_state = next.current_hole();
        if hole_state.completed {
            return next;
        }
        match &hole_state.selected_golfer {
            Some(g) if g.id == golfer_id => return next,
            Some(g) => (Some(g.id.clone()), hole_state.shots.is_empty()),
            None => (None, hole_state.shots.is_empty()),
        }
    };
    let has_prior = previous_id.is_some();
    let selected = match next
        .golfer_cards
        .iter_mut()
        .find(|g| g.id == golfer_id && (has_prior || !g.is_used))
    {
        Some(card) => {
            card.is_used = true;
            card.clone()
        }
        None => return next,
    };
    if no_shots {
        if let Some(prev) = previous_id {
            if let Some(card) = next.golfer_cards.iter_mut().find(|g| g.id == prev) {
                card.is_used = false;
            }
        }
    }
    next.current_hole_mut().selected_golfer = Some(selected);
    next
}
