//! Abyss Diver - an underwater descent arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, harpoon rope, enemies, terrain)
//! - `tuning`: Data-driven game balance with fail-fast validation
//!
//! Rendering, input polling and the host frame loop are external
//! collaborators: the host feeds a [`sim::FrameInput`] into
//! [`sim::tick`] each frame and renders from the [`sim::WorldSnapshot`]
//! it reads back.

pub mod sim;
pub mod tuning;

pub use tuning::{Tuning, TuningError};

use glam::Vec2;

/// Fixed world constants
pub mod consts {
    /// Logical screen width in world units
    pub const SCREEN_W: f32 = 320.0;
    /// Logical screen height in world units
    pub const SCREEN_H: f32 = 180.0;

    /// World units per meter on the depth HUD (depth/150 is shown as 10 m steps)
    pub const ONE_METER: f32 = 15.0;
    /// Depth of the treasure, the hard floor of the level (100 m)
    pub const TREASURE_DEPTH: f32 = 1500.0;
    /// Maximum scroll depth the camera may reach
    pub const MAX_SCROLL_DEPTH: f32 = TREASURE_DEPTH - SCREEN_H + 20.0;

    /// Player sprite extent
    pub const PLAYER_W: f32 = 21.0;
    pub const PLAYER_H: f32 = 12.0;

    /// Enemy fish extent
    pub const ENEMY_W: f32 = 20.0;
    pub const ENEMY_H: f32 = 15.0;
    /// Enemies turn around this far from either screen edge
    pub const ENEMY_EDGE_MARGIN: f32 = 20.0;
}

/// Euclidean length of a vector
#[inline]
pub fn vector_length(v: Vec2) -> f32 {
    v.length()
}

/// Clamp a vector's magnitude to `max`, preserving direction.
///
/// Identity when the vector is already within `max`; idempotent under
/// repeated application at the same magnitude.
#[inline]
pub fn clamp_magnitude(v: Vec2, max: f32) -> Vec2 {
    let length = v.length();
    if length <= max {
        return v;
    }
    v * (max / length)
}
