//! Neon Runner headless entry point
//!
//! Plays sessions with the autopilot (or no input at all) and logs how they
//! go. Usage: `neon-runner [settings.json]`

use std::path::PathBuf;

use neon_runner::sim::{GameEvent, GamePhase, Session, TickInput};
use neon_runner::{Autopilot, Settings};

fn main() {
    env_logger::init();
    log::info!("Neon Runner (headless) starting...");

    let settings = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => Settings::load(&path),
        None => Settings::default(),
    };

    let seed = settings.resolve_seed();
    let mut session = Session::new(seed);
    let pilot = Autopilot::new(settings.lead_frames, true);

    let mut finished = 0u32;
    while session.frame() < settings.max_frames && finished < settings.sessions {
        let input = if settings.autopilot {
            pilot.decide(&session.snapshot())
        } else if session.phase() == GamePhase::GameOver {
            TickInput {
                restart: true,
                ..Default::default()
            }
        } else {
            TickInput::default()
        };

        if let Some(GameEvent::Collision { kind, score, .. }) = session.step(&input) {
            finished += 1;
            log::info!("Session {} ended on {:?} with score {}", finished, kind, score);
        }

        if settings.log_interval > 0 && session.frame() % settings.log_interval == 0 {
            let snapshot = session.snapshot();
            log::info!(
                "frame {}: score {} speed {:.3} obstacles {}",
                snapshot.frame,
                snapshot.score,
                snapshot.scroll_speed,
                snapshot.obstacles.len()
            );
        }
    }

    println!(
        "seed {} | frames {} | sessions {} | high score {}",
        seed,
        session.frame(),
        finished,
        session.difficulty().high_score.max(session.difficulty().score)
    );

    if settings.print_snapshot {
        match serde_json::to_string_pretty(&session.snapshot()) {
            Ok(json) => println!("{}", json),
            Err(e) => log::error!("Could not serialize snapshot: {}", e),
        }
    }
}
