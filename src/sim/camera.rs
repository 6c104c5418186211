//! Camera/depth subsystem
//!
//! Scroll depth is derived from the player's vertical position every
//! frame and clamped to the level bounds; the screen-space transform is
//! pure coordinate math applied to queued drawables, never a stored
//! offset.

use crate::consts::{MAX_SCROLL_DEPTH, SCREEN_H};

use super::state::GameState;

/// Scroll depth for a player y, before level clamping
pub fn scroll_depth(player_y: f32) -> f32 {
    (player_y.abs() - SCREEN_H / 2.0).max(0.0).min(MAX_SCROLL_DEPTH)
}

/// Screen-space y for a world-space y at the given scroll depth.
///
/// The visible window spans world y in `[-depth - SCREEN_H, -depth]`,
/// mapped to screen `[0, SCREEN_H]`.
pub fn y_on_screen(depth: f32, y: f32) -> f32 {
    SCREEN_H - ((-depth) - y)
}

/// Depth shown on the HUD, in meters, stepped by tens
pub fn depth_in_meters(depth: f32) -> i64 {
    (depth as i64 / 150) * 10
}

/// Update the session's scroll depth from the player position
pub fn update_depth(state: &mut GameState) {
    state.depth = scroll_depth(state.player.position.y);
}

/// Terrain segments overlap by stepping at a third of a screen
const SEGMENT_STEP: i64 = (SCREEN_H as i64) / 3;

/// Starts of the four overlapping terrain segments covering the
/// visible span at a scroll depth. Pure in `depth`; recomputed per
/// frame so nothing is ever persisted.
pub fn visible_segment_starts(depth: f32) -> [i64; 4] {
    let first = -(depth as i64 / SEGMENT_STEP) * SEGMENT_STEP;
    [
        first,
        first - SEGMENT_STEP,
        first - 2 * SEGMENT_STEP,
        first - 3 * SEGMENT_STEP,
    ]
}
