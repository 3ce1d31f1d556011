//! Embedded golfer card pool: legendary and modern golfers with their
//! stat blocks and special abilities.

use once_cell::sync::Lazy;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{AbilityCategory, GolferCard, SpecialAbility, StatBlock};

/// Default number of cards dealt into a round's roster.
pub const DEFAULT_HAND_SIZE: usize = 4;

fn ability(
    name: &str,
    description: &str,
    category: AbilityCategory,
    effect_value: i32,
) -> Option<SpecialAbility> {
    Some(SpecialAbility {
        name: name.to_string(),
        description: description.to_string(),
        category,
        effect_value,
    })
}

fn golfer(
    id: &str,
    name: &str,
    drive: i8,
    accuracy: i8,
    short_game: i8,
    putting: i8,
    special_ability: Option<SpecialAbility>,
) -> GolferCard {
    GolferCard {
        id: id.to_string(),
        name: name.to_string(),
        stats: StatBlock { drive, accuracy, short_game, putting },
        is_used: false,
        special_ability,
    }
}

/// The full card pool. Card ids are stable slugs so rosters and saved
/// states stay comparable across runs.
pub static GOLFER_POOL: Lazy<Vec<GolferCard>> = Lazy::new(|| {
    vec![
        golfer(
            "jack_nicklaus",
            "Jack Nicklaus",
            2,
            3,
            2,
            2,
            ability(
                "Major Champion",
                "Gets a +2 bonus on the final hole of the round",
                AbilityCategory::Par4,
                2,
            ),
        ),
        golfer(
            "tiger_woods",
            "Tiger Woods",
            3,
            1,
            2,
            3,
            ability("Sunday Red", "Every 4th hole, gain +1 to all stats", AbilityCategory::Par4, 1),
        ),
        golfer(
            "arnold_palmer",
            "Arnold Palmer",
            2,
            1,
            3,
            2,
            ability(
                "Army Leader",
                "On par 5s, gain +2 to drive distance",
                AbilityCategory::Par5,
                2,
            ),
        ),
        golfer(
            "ben_hogan",
            "Ben Hogan",
            1,
            3,
            2,
            1,
            ability(
                "Perfect Swing",
                "On fairway lies, gain +2 accuracy",
                AbilityCategory::Fairway,
                2,
            ),
        ),
        golfer(
            "sam_snead",
            "Sam Snead",
            2,
            2,
            2,
            2,
            ability(
                "Longevity",
                "Gain +1 to all stats on holes 13-18",
                AbilityCategory::Par4,
                1,
            ),
        ),
        golfer(
            "phil_mickelson",
            "Phil Mickelson",
            1,
            0,
            3,
            2,
            ability(
                "Flop Shot Master",
                "From bunker lies, gain +3 to short game",
                AbilityCategory::Bunker,
                3,
            ),
        ),
        golfer(
            "rory_mcilroy",
            "Rory McIlroy",
            3,
            2,
            1,
            1,
            ability(
                "Power Drive",
                "First tee shot of each round gains +2",
                AbilityCategory::Par4,
                2,
            ),
        ),
        golfer(
            "jordan_spieth",
            "Jordan Spieth",
            1,
            2,
            2,
            3,
            ability(
                "Clutch Putter",
                "On greens, 20% chance to auto-make any putt",
                AbilityCategory::Green,
                1,
            ),
        ),
        golfer(
            "gary_player",
            "Gary Player",
            1,
            2,
            3,
            2,
            ability(
                "Global Champion",
                "Ignore all wind effects completely",
                AbilityCategory::Wind,
                0,
            ),
        ),
        golfer(
            "tom_watson",
            "Tom Watson",
            1,
            2,
            3,
            2,
            ability("Links Master", "From rough, gain +2 to short game", AbilityCategory::Rough, 2),
        ),
        golfer(
            "seve_ballesteros",
            "Seve Ballesteros",
            1,
            0,
            3,
            3,
            ability(
                "Escape Artist",
                "From trouble (rough/bunker/water), gain +2 to all stats",
                AbilityCategory::Rough,
                2,
            ),
        ),
        golfer(
            "byron_nelson",
            "Byron Nelson",
            2,
            3,
            1,
            2,
            ability("Perfect Season", "On par 4s, gain +1 to all stats", AbilityCategory::Par4, 1),
        ),
        golfer(
            "dustin_johnson",
            "Dustin Johnson",
            3,
            1,
            1,
            1,
            ability(
                "Athletic Power",
                "On drives, gain +1 and ignore negative wind effects",
                AbilityCategory::Wind,
                1,
            ),
        ),
        golfer(
            "brooks_koepka",
            "Brooks Koepka",
            2,
            2,
            1,
            2,
            ability("Major Focus", "On par 3s, gain +2 to accuracy", AbilityCategory::Par3, 2),
        ),
        golfer(
            "bryson_dechambeau",
            "Bryson DeChambeau",
            3,
            0,
            1,
            1,
            ability(
                "Science of Power",
                "All drives gain +1, but -1 to putting",
                AbilityCategory::Par4,
                1,
            ),
        ),
        golfer(
            "sergio_garcia",
            "Sergio Garcia",
            1,
            2,
            1,
            0,
            ability(
                "Iron Accuracy",
                "On approach shots, gain +2 to accuracy",
                AbilityCategory::Fairway,
                2,
            ),
        ),
        golfer(
            "walter_hagen",
            "Walter Hagen",
            1,
            1,
            2,
            3,
            ability(
                "Psychology Master",
                "After a poor or terrible result, next shot gains +2",
                AbilityCategory::Par4,
                2,
            ),
        ),
        golfer(
            "bobby_jones",
            "Bobby Jones",
            2,
            2,
            1,
            2,
            ability("Grand Slam", "On par 3s, gain +2 to all stats", AbilityCategory::Par3, 2),
        ),
        golfer(
            "lee_trevino",
            "Lee Trevino",
            1,
            3,
            2,
            1,
            ability(
                "Fade Master",
                "In crosswinds, gain +2 instead of penalty",
                AbilityCategory::Wind,
                2,
            ),
        ),
        golfer(
            "ernie_els",
            "Ernie Els",
            2,
            2,
            1,
            2,
            ability("Smooth Swing", "On fairway lies, all shots gain +1", AbilityCategory::Fairway, 1),
        ),
        golfer("justin_thomas", "Justin Thomas", 2, 2, 2, 1, None),
        golfer("jon_rahm", "Jon Rahm", 2, 2, 1, 2, None),
        golfer("collin_morikawa", "Collin Morikawa", 1, 3, 1, 1, None),
        golfer("scottie_scheffler", "Scottie Scheffler", 2, 2, 1, 2, None),
        golfer("nick_faldo", "Nick Faldo", 1, 3, 1, 1, None),
        golfer("greg_norman", "Greg Norman", 3, 1, 1, 1, None),
        golfer("vijay_singh", "Vijay Singh", 2, 2, 1, 1, None),
        golfer("fred_couples", "Fred Couples", 2, 1, 2, 1, None),
    ]
});

/// Fresh copies of the whole pool, all unused.
pub fn all_golfers() -> Vec<GolferCard> {
    GOLFER_POOL.clone()
}

/// Draw a shuffled hand of `count` cards from the pool.
pub fn random_golfers(count: usize, rng: &mut impl Rng) -> Vec<GolferCard> {
    let mut pool = GOLFER_POOL.clone();
    pool.shuffle(rng);
    pool.truncate(count);
    pool
}

/// Look up a pool card by its stable id.
pub fn golfer_by_id(id: &str) -> Option<GolferCard> {
    GOLFER_POOL.iter().find(|g| g.id == id).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_pool_size_and_ability_count() {
        assert_eq!(GOLFER_POOL.len(), 28);
        let with_ability = GOLFER_POOL.iter().filter(|g| g.special_ability.is_some()).count();
        assert_eq!(with_ability, 20);
    }

    #[test]
    fn test_pool_ids_unique() {
        let mut ids: Vec<_> = GOLFER_POOL.iter().map(|g| g.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), GOLFER_POOL.len());
    }

    #[test]
    fn test_stats_in_range() {
        for g in GOLFER_POOL.iter() {
            for stat in
                [g.stats.drive, g.stats.accuracy, g.stats.short_game, g.stats.putting]
            {
                assert!((-3..=3).contains(&stat), "{} stat out of range", g.name);
            }
            assert!(!g.is_used);
        }
    }

    #[test]
    fn test_random_golfers_deterministic_per_seed() {
        let mut a = ChaCha8Rng::seed_from_u64(99);
        let mut b = ChaCha8Rng::seed_from_u64(99);
        let hand_a = random_golfers(DEFAULT_HAND_SIZE, &mut a);
        let hand_b = random_golfers(DEFAULT_HAND_SIZE, &mut b);
        assert_eq!(hand_a, hand_b);
        assert_eq!(hand_a.len(), DEFAULT_HAND_SIZE);

        let mut ids: Vec<_> = hand_a.iter().map(|g| g.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), DEFAULT_HAND_SIZE, "drawn hand must not repeat cards");
    }

    #[test]
    fn test_golfer_by_id() {
        let tiger = golfer_by_id("tiger_woods").unwrap();
        assert_eq!(tiger.stats.drive, 3);
        assert_eq!(tiger.special_ability.unwrap().name, "Sunday Red");
        assert!(golfer_by_id("nobody").is_none());
    }
}
