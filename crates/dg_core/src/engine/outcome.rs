//! Outcome resolution: maps (shot type, tier, lie, distance, hole) to a
//! narrative outcome with the ball's new lie and remaining distance.
//!
//! Water results are carrier values only; penalty bookkeeping belongs
//! to the hole engine.

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::{Hole, Lie, ShotTier, ShotType};

/// Probability of an excellent chip going straight in.
const CHIP_IN_CHANCE: f32 = 0.3;
/// Probability of a good putt inside 10 yards dropping.
const GOOD_PUTT_HOLE_CHANCE: f32 = 0.6;
/// Probability of an average putt inside 5 yards dropping.
const AVERAGE_PUTT_HOLE_CHANCE: f32 = 0.4;
/// Tap-in range in yards.
const TAP_IN_DISTANCE: u32 = 2;

/// Hazard zone along-hole placement: starts at 45% of hole length, with
/// a width scaled by the hole's combined water+bunker terrain share.
const HAZARD_ZONE_START_PCT: u32 = 45;
/// In-zone / out-of-zone weighting applied to the terrain percentages.
const HAZARD_IN_ZONE_WEIGHT: f32 = 2.0;
const HAZARD_OUT_ZONE_WEIGHT: f32 = 0.5;

/// Resolved narrative outcome of a shot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShotOutcome {
    pub text: String,
    pub lie: Lie,
    pub distance_remaining: u32,
}

impl ShotOutcome {
    fn new(text: &str, lie: Lie, distance_remaining: u32) -> Self {
        Self { text: text.to_string(), lie, distance_remaining }
    }
}

/// The along-hole band `[start, end)` in which hazards are most likely
/// to catch a poor shot.
pub fn hazard_zone(hole: &Hole) -> (u32, u32) {
    let start = hole.length * HAZARD_ZONE_START_PCT / 100;
    let hazard_share = (hole.terrain.water + hole.terrain.bunker) as u32;
    let width = hole.length * hazard_share / 100;
    (start, start + width)
}

/// Resolve a shot's outcome. `distance` is the yards remaining before
/// the shot; the hole supplies terrain data for hazard injection.
pub fn resolve_outcome(
    shot_type: ShotType,
    tier: ShotTier,
    current_lie: Lie,
    distance: u32,
    hole: &Hole,
    rng: &mut impl Rng,
) -> ShotOutcome {
    let mut outcome = match shot_type {
        ShotType::Drive => drive_outcome(tier, distance),
        ShotType::Approach => approach_outcome(tier, rng),
        ShotType::Chip => chip_outcome(tier, current_lie, distance, rng),
        ShotType::Putt => putt_outcome(tier, distance, rng),
    };

    // Only long shots that missed can find a hazard; average or better
    // never does, and short-game shots are exempt entirely.
    if matches!(shot_type, ShotType::Drive | ShotType::Approach) && tier.is_miss() {
        inject_hazard(&mut outcome, hole, rng);
    }

    outcome
}

fn drive_outcome(tier: ShotTier, distance: u32) -> ShotOutcome {
    match tier {
        ShotTier::Excellent => ShotOutcome::new(
            "Booming drive straight down the fairway!",
            Lie::Fairway,
            distance * 3 / 10,
        ),
        ShotTier::Good => ShotOutcome::new(
            "Solid drive, slightly off center but in the fairway.",
            Lie::Fairway,
            distance * 2 / 5,
        ),
        ShotTier::Average => {
            ShotOutcome::new("Average drive, ended up in the rough.", Lie::Rough, distance / 2)
        }
        ShotTier::Poor => ShotOutcome::new(
            "Sliced the drive into the deep rough.",
            Lie::Rough,
            distance * 3 / 5,
        ),
        ShotTier::Terrible => ShotOutcome::new(
            "Drive ended up in a bunker. Tough lie ahead.",
            Lie::Bunker,
            distance * 7 / 10,
        ),
    }
}

fn approach_outcome(tier: ShotTier, rng: &mut impl Rng) -> ShotOutcome {
    match tier {
        ShotTier::Excellent => ShotOutcome::new(
            "Perfect approach! Ball landed on the green near the pin.",
            Lie::Green,
            rng.gen_range(5..=12),
        ),
        ShotTier::Good => ShotOutcome::new(
            "Good approach, on the green but with a long putt ahead.",
            Lie::Green,
            rng.gen_range(20..=30),
        ),
        ShotTier::Average => {
            ShotOutcome::new("Approach landed just off the green.", Lie::Fairway, 30)
        }
        ShotTier::Poor => ShotOutcome::new(
            "Approach missed the green and landed in the rough.",
            Lie::Rough,
            40,
        ),
        ShotTier::Terrible => ShotOutcome::new(
            "Approach shot landed in a bunker near the green.",
            Lie::Bunker,
            35,
        ),
    }
}

fn chip_outcome(
    tier: ShotTier,
    current_lie: Lie,
    distance: u32,
    rng: &mut impl Rng,
) -> ShotOutcome {
    match tier {
        ShotTier::Excellent => {
            if rng.gen::<f32>() < CHIP_IN_CHANCE {
                ShotOutcome::new("Chipped it in! Unbelievable!", Lie::Green, 0)
            } else {
                ShotOutcome::new(
                    "Excellent chip, very close to the hole!",
                    Lie::Green,
                    rng.gen_range(1..=3),
                )
            }
        }
        ShotTier::Good => ShotOutcome::new(
            "Nice chip, on the green with a short putt ahead.",
            Lie::Green,
            rng.gen_range(4..=8),
        ),
        ShotTier::Average => ShotOutcome::new(
            "Decent chip, on the green but with some work left.",
            Lie::Green,
            12,
        ),
        ShotTier::Poor => ShotOutcome::new("Chunky chip, still on the fringe.", Lie::Fairway, 15),
        // A duffed chip stays put; it never accidentally holes out.
        ShotTier::Terrible => ShotOutcome::new(
            "Duffed the chip, barely moved forward.",
            current_lie,
            (distance * 4 / 5).max(1),
        ),
    }
}

fn putt_outcome(tier: ShotTier, distance: u32, rng: &mut impl Rng) -> ShotOutcome {
    // Tap-ins drop for every tier except terrible.
    if distance <= TAP_IN_DISTANCE {
        return if tier == ShotTier::Terrible {
            ShotOutcome::new("Somehow missed the tap-in! The ball lips out.", Lie::Green, 1)
        } else {
            ShotOutcome::new("The tap-in putt drops into the cup!", Lie::Green, 0)
        };
    }

    match tier {
        ShotTier::Excellent => {
            ShotOutcome::new("Perfect putt! Ball drops in the center of the cup!", Lie::Green, 0)
        }
        ShotTier::Good => {
            if distance <= 10 {
                if rng.gen::<f32>() < GOOD_PUTT_HOLE_CHANCE {
                    ShotOutcome::new("Rolled it right in the middle!", Lie::Green, 0)
                } else {
                    ShotOutcome::new("Good putt, just a tap-in remaining.", Lie::Green, 1)
                }
            } else {
                ShotOutcome::new("Strong lag putt, close enough to clean up.", Lie::Green, 2)
            }
        }
        ShotTier::Average => {
            if distance <= 5 {
                if rng.gen::<f32>() < AVERAGE_PUTT_HOLE_CHANCE {
                    ShotOutcome::new("The ball catches the edge and falls in!", Lie::Green, 0)
                } else {
                    ShotOutcome::new("The ball rolls closer to the hole.", Lie::Green, 2)
                }
            } else if distance <= 15 {
                ShotOutcome::new("Decent putt, left a short one.", Lie::Green, (distance / 3).max(2))
            } else {
                ShotOutcome::new(
                    "Lagged it up the green, work still to do.",
                    Lie::Green,
                    (distance / 4).max(3),
                )
            }
        }
        ShotTier::Poor => ShotOutcome::new(
            "Misread the break, left with a challenging putt.",
            Lie::Green,
            (distance * 3 / 5).max(2),
        ),
        // Raced it well past; the hole engine's putt guards bound the
        // sequence, so an equal distance is acceptable here.
        ShotTier::Terrible => ShotOutcome::new(
            "Charged it past the hole! Frustrating result on the green.",
            Lie::Green,
            distance.max(4),
        ),
    }
}

/// Possibly replace a missed long shot's lie with water or bunker,
/// weighted by the hole's terrain distribution and by whether the
/// ball's along-hole position falls inside the hazard zone.
fn inject_hazard(outcome: &mut ShotOutcome, hole: &Hole, rng: &mut impl Rng) {
    let (zone_start, zone_end) = hazard_zone(hole);
    let position = hole.length.saturating_sub(outcome.distance_remaining);
    let in_zone = position >= zone_start && position < zone_end;
    let weight = if in_zone { HAZARD_IN_ZONE_WEIGHT } else { HAZARD_OUT_ZONE_WEIGHT };

    let water_p = hole.terrain.water as f32 / 100.0 * weight;
    let bunker_p = hole.terrain.bunker as f32 / 100.0 * weight;

    let roll = rng.gen::<f32>();
    if roll < water_p {
        debug!(
            "hazard injection: water at {}yd on hole {} (in_zone={})",
            position, hole.number, in_zone
        );
        outcome.text = "Splash! The ball found the water hazard.".to_string();
        outcome.lie = Lie::Water;
    } else if roll < water_p + bunker_p {
        debug!(
            "hazard injection: bunker at {}yd on hole {} (in_zone={})",
            position, hole.number, in_zone
        );
        outcome.text = "The ball bounded into a bunker.".to_string();
        outcome.lie = Lie::Bunker;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GreenBreak, GreenProfile, GreenSpeed, TerrainProfile};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(1)
    }

    fn hole(length: u32, water: u8, bunker: u8) -> Hole {
        Hole {
            id: "t_01".to_string(),
            number: 1,
            par: 4,
            length,
            terrain: TerrainProfile {
                tee: 1,
                fairway: 60,
                rough: 30,
                bunker,
                green: 9,
                water,
            },
            green: GreenProfile { speed: GreenSpeed::Normal, break_: GreenBreak::Easy },
        }
    }

    #[test]
    fn test_excellent_drive_reaches_fairway_at_30_pct() {
        let h = hole(400, 0, 0);
        let out =
            resolve_outcome(ShotType::Drive, ShotTier::Excellent, Lie::Tee, 400, &h, &mut rng());
        assert_eq!(out.lie, Lie::Fairway);
        assert_eq!(out.distance_remaining, 120);
    }

    #[test]
    fn test_drive_tier_distances_scale() {
        let h = hole(400, 0, 0);
        let mut r = rng();
        let good = resolve_outcome(ShotType::Drive, ShotTier::Good, Lie::Tee, 400, &h, &mut r);
        assert_eq!((good.lie, good.distance_remaining), (Lie::Fairway, 160));
        let avg = resolve_outcome(ShotType::Drive, ShotTier::Average, Lie::Tee, 400, &h, &mut r);
        assert_eq!((avg.lie, avg.distance_remaining), (Lie::Rough, 200));
        let poor = resolve_outcome(ShotType::Drive, ShotTier::Poor, Lie::Tee, 400, &h, &mut r);
        assert_eq!((poor.lie, poor.distance_remaining), (Lie::Rough, 240));
        let bad = resolve_outcome(ShotType::Drive, ShotTier::Terrible, Lie::Tee, 400, &h, &mut r);
        assert_eq!((bad.lie, bad.distance_remaining), (Lie::Bunker, 280));
    }

    #[test]
    fn test_approach_jitter_stays_in_band() {
        let h = hole(400, 0, 0);
        let mut r = rng();
        for _ in 0..50 {
            let out =
                resolve_outcome(ShotType::Approach, ShotTier::Excellent, Lie::Fairway, 150, &h, &mut r);
            assert_eq!(out.lie, Lie::Green);
            assert!((5..=12).contains(&out.distance_remaining));

            let out =
                resolve_outcome(ShotType::Approach, ShotTier::Good, Lie::Fairway, 150, &h, &mut r);
            assert_eq!(out.lie, Lie::Green);
            assert!((20..=30).contains(&out.distance_remaining));
        }
        let out =
            resolve_outcome(ShotType::Approach, ShotTier::Average, Lie::Fairway, 150, &h, &mut r);
        assert_eq!((out.lie, out.distance_remaining), (Lie::Fairway, 30));
    }

    #[test]
    fn test_chip_in_rate_is_about_30_pct() {
        let h = hole(400, 0, 0);
        let mut holed = 0;
        for seed in 0..200 {
            let mut r = ChaCha8Rng::seed_from_u64(seed);
            let out = resolve_outcome(ShotType::Chip, ShotTier::Excellent, Lie::Fairway, 20, &h, &mut r);
            if out.distance_remaining == 0 {
                holed += 1;
            } else {
                assert!((1..=3).contains(&out.distance_remaining));
            }
        }
        assert!((20..=110).contains(&holed), "chip-in rate off: {holed}/200");
    }

    #[test]
    fn test_terrible_chip_stays_on_lie_and_never_holes() {
        let h = hole(400, 0, 0);
        let out = resolve_outcome(ShotType::Chip, ShotTier::Terrible, Lie::Bunker, 20, &h, &mut rng());
        assert_eq!(out.lie, Lie::Bunker);
        assert_eq!(out.distance_remaining, 16);

        let out = resolve_outcome(ShotType::Chip, ShotTier::Terrible, Lie::Rough, 1, &h, &mut rng());
        assert_eq!(out.distance_remaining, 1, "a duffed chip must not hole out");
    }

    #[test]
    fn test_tap_in_drops_for_all_but_terrible() {
        let h = hole(400, 0, 0);
        for tier in [ShotTier::Excellent, ShotTier::Good, ShotTier::Average, ShotTier::Poor] {
            let out = resolve_outcome(ShotType::Putt, tier, Lie::Green, 1, &h, &mut rng());
            assert_eq!(out.distance_remaining, 0, "tap-in should drop on {tier:?}");
            let out = resolve_outcome(ShotType::Putt, tier, Lie::Green, 2, &h, &mut rng());
            assert_eq!(out.distance_remaining, 0);
        }
        let out = resolve_outcome(ShotType::Putt, ShotTier::Terrible, Lie::Green, 1, &h, &mut rng());
        assert_eq!(out.distance_remaining, 1);
    }

    #[test]
    fn test_excellent_putt_always_drops() {
        let h = hole(400, 0, 0);
        let out = resolve_outcome(ShotType::Putt, ShotTier::Excellent, Lie::Green, 30, &h, &mut rng());
        assert_eq!(out.distance_remaining, 0);
    }

    #[test]
    fn test_good_putt_bands() {
        let h = hole(400, 0, 0);
        let mut short_holed = 0;
        for seed in 0..200 {
            let mut r = ChaCha8Rng::seed_from_u64(seed);
            let out = resolve_outcome(ShotType::Putt, ShotTier::Good, Lie::Green, 8, &h, &mut r);
            match out.distance_remaining {
                0 => short_holed += 1,
                1 => {}
                d => panic!("good short putt left {d} yards"),
            }
        }
        assert!((80..=160).contains(&short_holed), "60% band off: {short_holed}/200");

        let out = resolve_outcome(ShotType::Putt, ShotTier::Good, Lie::Green, 25, &h, &mut rng());
        assert_eq!(out.distance_remaining, 2);
    }

    #[test]
    fn test_average_putt_bands_strictly_reduce() {
        let h = hole(400, 0, 0);
        let mut r = rng();
        for d in 3..=60 {
            let out = resolve_outcome(ShotType::Putt, ShotTier::Average, Lie::Green, d, &h, &mut r);
            assert!(out.distance_remaining < d, "average putt from {d} left {}", out.distance_remaining);
        }
    }

    #[test]
    fn test_poor_putt_reduces_distance() {
        let h = hole(400, 0, 0);
        for d in 3..=60 {
            let out = resolve_outcome(ShotType::Putt, ShotTier::Poor, Lie::Green, d, &h, &mut rng());
            assert!(out.distance_remaining < d);
            assert!(out.distance_remaining >= 2);
        }
    }

    #[test]
    fn test_terrible_putt_never_drops() {
        let h = hole(400, 0, 0);
        let out = resolve_outcome(ShotType::Putt, ShotTier::Terrible, Lie::Green, 20, &h, &mut rng());
        assert_eq!(out.distance_remaining, 20);
        let out = resolve_outcome(ShotType::Putt, ShotTier::Terrible, Lie::Green, 3, &h, &mut rng());
        assert_eq!(out.distance_remaining, 4);
    }

    #[test]
    fn test_hazard_zone_geometry() {
        let h = hole(400, 10, 10);
        let (start, end) = hazard_zone(&h);
        assert_eq!(start, 180);
        assert_eq!(end, 180 + 80);

        let dry = hole(400, 0, 0);
        let (start, end) = hazard_zone(&dry);
        assert_eq!(start, end);
    }

    #[test]
    fn test_no_hazards_on_dry_hole() {
        let h = hole(400, 0, 0);
        for seed in 0..100 {
            let mut r = ChaCha8Rng::seed_from_u64(seed);
            let out = resolve_outcome(ShotType::Drive, ShotTier::Poor, Lie::Tee, 400, &h, &mut r);
            assert_eq!(out.lie, Lie::Rough);
        }
    }

    #[test]
    fn test_no_hazards_on_average_or_better() {
        let h = hole(400, 50, 50);
        for seed in 0..100 {
            let mut r = ChaCha8Rng::seed_from_u64(seed);
            let out = resolve_outcome(ShotType::Drive, ShotTier::Average, Lie::Tee, 400, &h, &mut r);
            assert_eq!(out.lie, Lie::Rough);
        }
    }

    #[test]
    fn test_hazards_catch_missed_long_shots() {
        // 50% water: a missed approach lands at length - 40 = 160,
        // inside the zone [90, 250), where the doubled water share
        // saturates to certainty.
        let h = hole(200, 50, 30);
        for seed in 0..100 {
            let mut r = ChaCha8Rng::seed_from_u64(seed);
            let out = resolve_outcome(ShotType::Approach, ShotTier::Poor, Lie::Fairway, 150, &h, &mut r);
            assert_eq!(out.lie, Lie::Water);
        }

        // Putts and chips are never redirected into hazards.
        let out = resolve_outcome(ShotType::Putt, ShotTier::Terrible, Lie::Green, 10, &h, &mut rng());
        assert_eq!(out.lie, Lie::Green);
        let out = resolve_outcome(ShotType::Chip, ShotTier::Poor, Lie::Rough, 20, &h, &mut rng());
        assert_eq!(out.lie, Lie::Fairway);
    }
}
