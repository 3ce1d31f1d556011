// Plays a full seeded round with a naive club policy and prints the
// scorecard. Run with: cargo run --bin play_round -- [seed] [course_id]

use dg_core::data::COURSE_AUGUSTA_FRONT9;
use dg_core::engine::{GameAction, GameSession};
use dg_core::models::{Lie, ShotType};

fn choose_club(lie: Lie, distance: u32) -> ShotType {
    match lie {
        Lie::Green => ShotType::Putt,
        Lie::Tee if distance > 220 => ShotType::Drive,
        _ if distance <= 30 => ShotType::Chip,
        _ => ShotType::Approach,
    }
}

fn main() {
    let mut args = std::env::args().skip(1);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(42);
    let course_id = args.next().unwrap_or_else(|| COURSE_AUGUSTA_FRONT9.to_string());

    let mut session = match GameSession::new(&course_id, seed) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("failed to start game: {}", e);
            std::process::exit(1);
        }
    };

    println!(
        "=== {} | seed {} ===",
        session.state().course.name,
        seed
    );

    while !session.state().game_completed {
        let hole_state = session.state().current_hole();

        if hole_state.completed {
            session.dispatch(&GameAction::NextHole);
            continue;
        }

        if hole_state.selected_golfer.is_none() && hole_state.shots.is_empty() {
            let pick = session
                .state()
                .golfer_cards
                .iter()
                .find(|g| !g.is_used)
                .map(|g| g.id.clone());
            if let Some(golfer_id) = pick {
                session.dispatch(&GameAction::SelectGolfer { golfer_id });
                let hs = session.state().current_hole();
                if let Some(g) = &hs.selected_golfer {
                    let ability = g
                        .special_ability
                        .as_ref()
                        .map(|a| a.name.as_str())
                        .unwrap_or("no ability");
                    println!(
                        "\nHole {} (par {}, {}yd) - {} [{}]",
                        hs.hole.number, hs.hole.par, hs.hole.length, g.name, ability
                    );
                }
                continue;
            }
        }

        let (lie, distance) = hole_state.current_position();
        let shot_type = choose_club(lie, distance);
        session.dispatch(&GameAction::TakeShot { shot_type, dice_roll: None });

        let hs = session.state().current_hole();
        if let Some(shot) = hs.last_shot() {
            println!(
                "  {:?} (dice {}, total {}) [{:?}] -> {} ({}yd, {})",
                shot.shot_type,
                shot.dice_total,
                shot.total_score,
                shot.tier,
                shot.result_text,
                shot.distance_remaining,
                shot.lie.label()
            );
        }
        if hs.completed {
            println!(
                "  {} strokes ({} penalty) — {}",
                hs.shots.len(),
                hs.penalty_strokes,
                hs.completion_text.as_deref().unwrap_or("")
            );
        }
    }

    println!("\n=== Scorecard ===");
    for hs in &session.state().holes {
        let diff = hs.score as i32 - hs.hole.par as i32;
        println!(
            "Hole {:2}: par {} score {:2} ({:+})",
            hs.hole.number, hs.hole.par, hs.score, diff
        );
    }
    println!("Total: {:+}", session.state().total_score);
}
