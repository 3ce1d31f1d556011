//! Embedded courses: two 9-hole layouts and their 18-hole combination.

use crate::models::{
    Course, GreenBreak, GreenProfile, GreenSpeed, Hole, TerrainProfile,
};

pub const COURSE_AUGUSTA_FRONT9: &str = "augusta_front9";
pub const COURSE_PEBBLE_FRONT9: &str = "pebble_front9";
pub const COURSE_CHAMPIONSHIP: &str = "championship";

/// Terrain distribution follows the hole's par: par 3s are short
/// carries with no water in play, longer holes trade fairway for
/// rough and water.
fn terrain_for_par(par: u8) -> TerrainProfile {
    if par == 3 {
        TerrainProfile { tee: 1, fairway: 40, rough: 20, bunker: 10, green: 9, water: 0 }
    } else {
        TerrainProfile { tee: 1, fairway: 60, rough: 30, bunker: 10, green: 9, water: 10 }
    }
}

fn hole(
    course_tag: &str,
    number: u32,
    par: u8,
    length: u32,
    speed: GreenSpeed,
    break_: GreenBreak,
) -> Hole {
    Hole {
        id: format!("{}_{:02}", course_tag, number),
        number,
        par,
        length,
        terrain: terrain_for_par(par),
        green: GreenProfile { speed, break_ },
    }
}

pub fn augusta_front_nine() -> Course {
    use GreenBreak::Hard;
    use GreenSpeed::Fast;
    Course {
        id: COURSE_AUGUSTA_FRONT9.to_string(),
        name: "Augusta National (Front 9)".to_string(),
        holes: vec![
            hole("augusta", 1, 4, 445, Fast, Hard),
            hole("augusta", 2, 5, 575, Fast, Hard),
            hole("augusta", 3, 4, 350, Fast, Hard),
            hole("augusta", 4, 3, 240, Fast, Hard),
            hole("augusta", 5, 4, 455, Fast, Hard),
            hole("augusta", 6, 3, 180, Fast, Hard),
            hole("augusta", 7, 4, 450, Fast, Hard),
            hole("augusta", 8, 5, 570, Fast, Hard),
            hole("augusta", 9, 4, 460, Fast, Hard),
        ],
    }
}

pub fn pebble_beach_front_nine() -> Course {
    use GreenBreak::{Easy, Hard};
    use GreenSpeed::Normal;
    Course {
        id: COURSE_PEBBLE_FRONT9.to_string(),
        name: "Pebble Beach (Front 9)".to_string(),
        holes: vec![
            hole("pebble", 1, 4, 380, Normal, Easy),
            hole("pebble", 2, 5, 502, Normal, Easy),
            hole("pebble", 3, 4, 390, Normal, Hard),
            hole("pebble", 4, 4, 331, Normal, Easy),
            hole("pebble", 5, 3, 195, Normal, Hard),
            hole("pebble", 6, 5, 513, Normal, Easy),
            hole("pebble", 7, 3, 106, Normal, Easy),
            hole("pebble", 8, 4, 428, Normal, Hard),
            hole("pebble", 9, 4, 481, Normal, Hard),
        ],
    }
}

/// Both nines combined into a full 18. Holes are renumbered 1..=18 so
/// that late-round ability triggers (holes 13-18, final hole) line up.
pub fn championship_course() -> Course {
    let mut holes = augusta_front_nine().holes;
    holes.extend(pebble_beach_front_nine().holes);
    for (idx, h) in holes.iter_mut().enumerate() {
        h.number = idx as u32 + 1;
        h.id = format!("championship_{:02}", h.number);
    }
    Course {
        id: COURSE_CHAMPIONSHIP.to_string(),
        name: "Championship Course".to_string(),
        holes,
    }
}

/// Resolve a course by its stable id.
pub fn course_by_id(id: &str) -> Option<Course> {
    match id {
        COURSE_AUGUSTA_FRONT9 => Some(augusta_front_nine()),
        COURSE_PEBBLE_FRONT9 => Some(pebble_beach_front_nine()),
        COURSE_CHAMPIONSHIP => Some(championship_course()),
        _ => None,
    }
}
