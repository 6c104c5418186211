//! Per-frame simulation step
//!
//! One tick consumes one immutable input snapshot and advances the
//! session by exactly one frame. Subsystem order is fixed because later
//! steps read positions written by earlier ones:
//! input -> phase gate -> motion/harpoon -> enemies -> combat ->
//! spawn/cull -> camera.

use crate::clamp_magnitude;
use crate::consts::TREASURE_DEPTH;

use super::state::{GamePhase, GameState, HarpoonState};
use super::{camera, collision, enemy, harpoon};

/// Input snapshot for a single frame
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    /// Swim-up key pressed this frame
    pub swim_up: bool,
    /// Horizontal axis in [-1, 1]
    pub horizontal: f32,
    /// Confirm / fire-harpoon press
    pub action: bool,
}

/// Advance the session by one frame
pub fn tick(state: &mut GameState, input: &FrameInput) {
    match state.phase {
        GamePhase::Title => {
            if input.action {
                state.phase = GamePhase::Playing;
                log::info!("dive started (seed {})", state.seed);
            }
            return;
        }
        GamePhase::Playing | GamePhase::Dead => {}
    }

    state.tick += 1;

    // A single press must not both fire and start retrieval
    let mut action = input.action;

    if state.phase == GamePhase::Dead {
        // The world keeps moving, but the player no longer steers it.
        // Confirm raises the reset request for the host; nothing here
        // performs the reset.
        if action {
            state.reset_requested = true;
        }
    } else {
        swim(state, input);
        handle_fire(state, &mut action);
        handle_retrieve(state, action);
    }

    harpoon::apply_drag(&mut state.harpoon, state.tuning.harpoon_drag);
    apply_gravity(state);
    apply_velocity(state);
    harpoon::apply_rope(
        &mut state.harpoon,
        &state.player,
        state.tuning.retrieve_speed,
        state.tuning.reattach_distance,
    );
    keep_player_inside_world(state);

    enemy::update_enemies(state);
    collision::harpoon_strikes(state);
    collision::enemy_touches_player(state);
    enemy::spawn_and_cull(state);

    camera::update_depth(state);
}

fn swim(state: &mut GameState, input: &FrameInput) {
    let player = &mut state.player;
    if input.swim_up {
        player.velocity.y += state.tuning.swim_lift;
    }
    player.velocity.x = input.horizontal * state.tuning.swim_speed;
    if input.horizontal != 0.0 {
        player.facing = if input.horizontal < 0.0 { -1 } else { 1 };
    }

    // A carried harpoon mirrors the player's facing
    if state.harpoon.is_attached() {
        state.harpoon.facing = player.facing;
    }
}

fn handle_fire(state: &mut GameState, action: &mut bool) {
    if !state.harpoon.is_attached() || !*action {
        return;
    }
    harpoon::fire(
        &mut state.harpoon,
        &state.player,
        state.tuning.harpoon_fire_speed,
        state.tuning.harpoon_flying_gravity,
    );
    *action = false;
}

fn handle_retrieve(state: &mut GameState, action: bool) {
    if state.harpoon.state != HarpoonState::Flying || !action {
        return;
    }
    harpoon::start_retrieve(&mut state.harpoon);
}

/// Gravity for all gravity-bearing entities, before any integration,
/// so this frame's gravity shapes this frame's displacement
/// (semi-implicit Euler)
fn apply_gravity(state: &mut GameState) {
    state.player.velocity.y += state.player.gravity;
    if !state.harpoon.is_attached() {
        state.harpoon.velocity.y += state.harpoon.gravity;
    }
}

fn apply_velocity(state: &mut GameState) {
    let player = &mut state.player;
    player.velocity = clamp_magnitude(player.velocity, player.max_speed);
    player.position += player.velocity;

    if !state.harpoon.is_attached() {
        let h = &mut state.harpoon;
        h.velocity = clamp_magnitude(h.velocity, h.max_speed);
        h.position += h.velocity;
    }
}

/// Hard positional clamp: screen sides, the surface, and the treasure
/// floor. Overrides any velocity-driven overshoot after integration.
fn keep_player_inside_world(state: &mut GameState) {
    let rect = state.player.rect();
    let position = &mut state.player.position;

    if rect.left() < 0.0 {
        position.x -= rect.left();
    }
    if rect.right() > crate::consts::SCREEN_W {
        position.x -= rect.right() - crate::consts::SCREEN_W;
    }
    if rect.top() > 0.0 {
        position.y -= rect.top();
    }
    if rect.bottom() < -TREASURE_DEPTH {
        position.y += -TREASURE_DEPTH - rect.bottom();
    }
}
