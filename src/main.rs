//! Headless demo driver
//!
//! Runs a scripted dive without a renderer: useful for balance checks
//! and as a determinism smoke test. An optional first argument points
//! at a tuning JSON override.

use std::error::Error;
use std::fs;

use abyss_diver::sim::{snapshot, tick, FrameInput, GamePhase, GameState};
use abyss_diver::Tuning;

const DEMO_SEED: u64 = 0x1D1F;
const DEMO_TICKS: u64 = 6000;

fn scripted_input(t: u64) -> FrameInput {
    FrameInput {
        // Kick off the dive, then fire/retrieve the harpoon on a cycle
        action: t == 0 || t % 240 == 0,
        swim_up: t % 97 == 0,
        horizontal: match (t / 120) % 4 {
            0 => 1.0,
            2 => -1.0,
            _ => 0.0,
        },
    }
}

fn run_session(tuning: Tuning) -> Result<GameState, Box<dyn Error>> {
    let mut state = GameState::with_tuning(DEMO_SEED, tuning)?;

    for t in 0..DEMO_TICKS {
        tick(&mut state, &scripted_input(t));

        if t % 600 == 0 {
            log::info!(
                "tick {:5}  depth {:6.1}  phase {:?}  enemies {}",
                state.tick,
                state.depth,
                state.phase,
                state.enemies.len()
            );
        }
        if state.phase == GamePhase::Dead && state.player.died_at == Some(state.tick) {
            log::info!("diver eaten at tick {}", state.tick);
        }
    }

    Ok(state)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let tuning = match std::env::args().nth(1) {
        Some(path) => {
            log::info!("loading tuning overrides from {path}");
            Tuning::from_json(&fs::read_to_string(&path)?)?
        }
        None => Tuning::default(),
    };

    let first = run_session(tuning.clone())?;
    let second = run_session(tuning)?;

    let a = serde_json::to_string(&snapshot::snapshot(&first))?;
    let b = serde_json::to_string(&snapshot::snapshot(&second))?;
    if a != b {
        log::error!("determinism check failed: identical scripts diverged");
        return Err("non-deterministic session".into());
    }

    log::info!(
        "done: depth {:.0} ({} ticks), determinism check passed",
        first.depth,
        first.tick
    );
    Ok(())
}
