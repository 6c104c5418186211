//! Harpoon constraint subsystem
//!
//! The harpoon is a three-state machine: carried at the attach point,
//! thrown (`Flying`), or hauled back (`Retrieving`). While detached the
//! rope acts as a rigid, inextensible constraint: extension beyond the
//! rope length is corrected positionally, never through velocity.

use glam::Vec2;

use super::state::{Harpoon, HarpoonState, Player};

/// Velocity magnitude below which horizontal drag snaps to zero
const DRAG_EPSILON: f32 = 0.01;

/// Throw the harpoon from the attach point.
///
/// The harpoon inherits the player's velocity plus a muzzle kick along
/// its facing, and switches to the reduced flying gravity.
pub fn fire(harpoon: &mut Harpoon, player: &Player, fire_speed: f32, flying_gravity: f32) {
    harpoon.position = Harpoon::attach_point(player);
    harpoon.velocity = Vec2::new(
        player.velocity.x + harpoon.facing as f32 * fire_speed,
        player.velocity.y,
    );
    harpoon.gravity = flying_gravity;
    harpoon.state = HarpoonState::Flying;
}

/// Begin hauling a flying harpoon back in. Gravity stops acting; the
/// rope step steers it from here.
pub fn start_retrieve(harpoon: &mut Harpoon) {
    harpoon.state = HarpoonState::Retrieving;
    harpoon.gravity = 0.0;
}

/// Horizontal water drag, applied whenever the harpoon is detached.
///
/// The guard is deliberately "not attached" rather than "flying":
/// retrieval overrides velocity afterwards anyway, and the original
/// behavior is preserved.
pub fn apply_drag(harpoon: &mut Harpoon, drag: f32) {
    if harpoon.is_attached() || harpoon.velocity.x == 0.0 {
        return;
    }
    harpoon.velocity.x *= drag;
    if harpoon.velocity.x.abs() < DRAG_EPSILON {
        harpoon.velocity.x = 0.0;
    }
}

/// Rope tension and retrieval, evaluated after integration each frame.
///
/// Retrieving: velocity is overridden to point straight at the attach
/// point at `retrieve_speed`; within `reattach_distance` the harpoon
/// reattaches. Flying: extension past the rope length is removed by
/// moving the harpoon back along the separation vector by the excess
/// fraction, leaving velocity untouched.
pub fn apply_rope(
    harpoon: &mut Harpoon,
    player: &Player,
    retrieve_speed: f32,
    reattach_distance: f32,
) {
    if harpoon.is_attached() {
        return;
    }

    let attach = Harpoon::attach_point(player);
    let to_attach = attach - harpoon.position;
    let distance = to_attach.length();

    match harpoon.state {
        HarpoonState::Retrieving => {
            // Zero distance means the constraint is already satisfied
            if distance > 0.0 {
                harpoon.velocity = to_attach / distance * retrieve_speed;
            }
            if distance < reattach_distance {
                harpoon.state = HarpoonState::Attached;
                harpoon.velocity = Vec2::ZERO;
                harpoon.gravity = 0.0;
            }
        }
        HarpoonState::Flying => {
            if distance <= harpoon.rope_length || distance == 0.0 {
                return;
            }
            let excess = (distance - harpoon.rope_length) / distance;
            harpoon.position += to_attach * excess;
        }
        HarpoonState::Attached => {}
    }
}
