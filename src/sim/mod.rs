//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, fixed subsystem order
//! - Seeded RNG only, derived fresh from the session seed per use
//! - No rendering or platform dependencies

pub mod camera;
pub mod collision;
pub mod enemy;
pub mod harpoon;
pub mod snapshot;
pub mod state;
pub mod terrain;
pub mod tick;

pub use collision::Rect;
pub use snapshot::{Drawable, EnemyView, HarpoonView, PlayerView, SegmentDescriptor, WorldSnapshot};
pub use state::{Enemy, GamePhase, GameState, Harpoon, HarpoonState, Player};
pub use terrain::{Column, Obstacle};
pub use tick::{FrameInput, tick};
