//! Enemy lifecycle: patrol, death fade, and the depth-windowed
//! spawn/cull pass
//!
//! Spawning is gated by the explored-depth high-water mark rather than
//! running continuously: a pass fires only when the camera has
//! descended a full step beyond the deepest point seen so far.

use rand::Rng;
use rand_pcg::Pcg32;

use crate::consts::{ENEMY_EDGE_MARGIN, SCREEN_H, SCREEN_W};

use super::state::{Enemy, GameState};

/// Vertical jitter applied to a spawn candidate
const SPAWN_JITTER: f32 = 4.0;

/// Per-frame enemy motion: live fish patrol, dead fish float up and
/// fade, faded fish are removed.
pub fn update_enemies(state: &mut GameState) {
    let tick = state.tick;
    let speed = state.tuning.enemy_speed;
    let rise = state.tuning.dead_rise_rate;

    for enemy in &mut state.enemies {
        match enemy.died_at {
            None => {
                enemy.rect.x += speed * enemy.facing as f32;
                // Reverse when the leading edge crosses the margin
                if enemy.facing < 0 && enemy.rect.left() < ENEMY_EDGE_MARGIN {
                    enemy.facing = 1;
                } else if enemy.facing > 0 && enemy.rect.right() > SCREEN_W - ENEMY_EDGE_MARGIN {
                    enemy.facing = -1;
                }
            }
            Some(_) => {
                enemy.rect.y += rise;
            }
        }
    }

    let fade = state.tuning.enemy_fade_ticks;
    state
        .enemies
        .retain(|e| e.died_at.is_none_or(|died| tick.saturating_sub(died) <= fade));
}

fn spawn_rng(seed: u64, candidate_y: f32) -> Pcg32 {
    // Same derived-seed pattern as terrain: arithmetic on the session
    // seed keyed by the integer candidate position
    Pcg32::new((seed as i64).wrapping_add(candidate_y as i64) as u64, 0)
}

/// Depth-windowed population pass.
///
/// Runs only when current depth exceeds the explored high-water mark by
/// a full step. Culls everything far enough above the camera that it
/// can never reappear, then attempts a single spawn below the visible
/// window, respecting the depth-ramped minimum spacing.
pub fn spawn_and_cull(state: &mut GameState) {
    if state.depth <= state.explored_depth + state.tuning.explored_step {
        return;
    }
    state.explored_depth = state.depth;

    let cull_line = -state.explored_depth + 3.0 * SCREEN_H;
    let before = state.enemies.len();
    state.enemies.retain(|e| e.rect.y <= cull_line);
    if state.enemies.len() != before {
        log::debug!("culled {} enemies above y {:.0}", before - state.enemies.len(), cull_line);
    }

    let candidate_y = -state.depth - SCREEN_H - state.tuning.spawn_lead;
    let spacing = state.tuning.min_spawn_spacing(state.depth);
    if let Some(last) = state.last_spawn_y {
        if last - candidate_y < spacing {
            return;
        }
    }

    let mut rng = spawn_rng(state.seed, candidate_y);
    let x = rng.random_range(ENEMY_EDGE_MARGIN..SCREEN_W - ENEMY_EDGE_MARGIN - crate::consts::ENEMY_W);
    let jitter = rng.random_range(-SPAWN_JITTER..SPAWN_JITTER);
    state.enemies.push(Enemy::spawn(x, candidate_y + jitter));
    state.last_spawn_y = Some(candidate_y);
    log::debug!("spawned enemy at ({:.0}, {:.0})", x, candidate_y + jitter);
}
