//! Undead Rush entry point
//!
//! Headless session runner: drives the fixed-step loop with a scripted
//! input pattern, logs events, and commits the final score to the
//! leaderboard file. A real frontend would swap the script for device
//! input and draw each `RenderFrame`.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use undead_rush::consts::*;
use undead_rush::sim::{tick, Action, GameEvent, GamePhase, GameState, InputState, RenderFrame};
use undead_rush::HighScores;

/// Where the leaderboard lives, next to the binary's working directory
fn high_score_path() -> PathBuf {
    PathBuf::from("highscores.json")
}

/// Scripted input for the demo session: constant fire, a slow aim sweep,
/// and a hop every couple of seconds.
fn scripted_input(ticks: u64) -> InputState {
    let mut input = InputState::new();
    input.press(Action::Fire);
    if (ticks / 120).is_multiple_of(2) {
        input.press(Action::AimUp);
    } else {
        input.press(Action::AimDown);
    }
    if ticks.is_multiple_of(150) {
        input.press(Action::Jump);
    }
    input
}

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });

    let mut scores = HighScores::load(&high_score_path());
    let mut state = GameState::new(seed);
    log::info!("Session started (seed {seed})");

    // Fixed-step loop: clamp frame dt, bounded substeps per frame
    let mut accumulator = 0.0f32;
    let mut last = Instant::now();
    // Safety stop so a lucky script cannot run forever
    let max_ticks = 60 * 60 * 5;

    'session: while state.time_ticks < max_ticks {
        let now = Instant::now();
        let dt = now.duration_since(last).as_secs_f32().min(0.1);
        last = now;
        accumulator += dt;

        let mut substeps = 0;
        while accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let input = scripted_input(state.time_ticks);
            let events = tick(&mut state, &input, SIM_DT);
            accumulator -= SIM_DT;
            substeps += 1;

            for event in events {
                match event {
                    GameEvent::EnemyKilled { enemy_id, reward } => {
                        log::info!("Enemy {enemy_id} destroyed (+{reward})");
                    }
                    GameEvent::JumpedOver { enemy_id, bonus } => {
                        log::info!("Cleared enemy {enemy_id} (+{bonus})");
                    }
                    GameEvent::PlayerHit { damage, health } => {
                        log::info!("Player hit (-{damage}), health {health}");
                    }
                    GameEvent::GameOver { score } => {
                        log::info!("Game over at tick {} with score {score}", state.time_ticks);
                        break 'session;
                    }
                }
            }
        }

        // A renderer would consume this snapshot here
        let frame = RenderFrame::capture(&state);
        log::trace!(
            "tick {} score {} enemies {} projectiles {}",
            state.time_ticks,
            frame.score,
            frame.enemies.len(),
            frame.projectiles.len()
        );

        std::thread::sleep(Duration::from_millis(1));
    }

    if state.phase != GamePhase::GameOver {
        log::info!("Session stopped at tick limit with score {}", state.score);
    }

    match scores.add_score(state.score, seed) {
        Some(rank) => log::info!("New high score, rank {rank}"),
        None => log::info!("Score {} did not make the board", state.score),
    }
    scores.save(&high_score_path());

    println!("Final score: {}", state.score);
    for (i, entry) in scores.entries.iter().enumerate() {
        println!("  {}. {:>6}  (seed {})", i + 1, entry.score, entry.seed);
    }
}
