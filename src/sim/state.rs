//! Game state and core simulation types
//!
//! Everything that must survive from frame to frame lives here; the
//! subsystems in the sibling modules mutate it in a fixed order.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::*;
use crate::tuning::{Tuning, TuningError};

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the confirm press; no simulation runs
    Title,
    /// Active descent
    Playing,
    /// Player died; the world keeps moving, inputs are ignored
    Dead,
}

/// The diver
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Horizontal facing, +1 or -1
    pub facing: i8,
    pub max_speed: f32,
    pub gravity: f32,
    /// Tick of death; `Some` means dead
    pub died_at: Option<u64>,
}

impl Player {
    fn new(tuning: &Tuning) -> Self {
        Self {
            position: Vec2::new(SCREEN_W / 2.0, -30.0),
            velocity: Vec2::ZERO,
            facing: 1,
            max_speed: tuning.player_max_speed,
            gravity: tuning.player_gravity,
            died_at: None,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.died_at.is_none()
    }

    /// Full sprite rectangle, used for screen containment
    pub fn rect(&self) -> Rect {
        Rect::new(self.position.x - 11.0, self.position.y, PLAYER_W, PLAYER_H)
    }

    /// Inset collision rectangle, smaller than the sprite so fin-grazes
    /// don't kill
    pub fn hitbox(&self) -> Rect {
        Rect::new(self.position.x - 8.0, self.position.y + 2.0, 16.0, 8.0)
    }
}

/// Harpoon phase - tethered, thrown, or being hauled back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HarpoonState {
    /// Carried at the attach point; position field is not meaningful
    Attached,
    /// Thrown, sinking slowly, constrained by the rope
    Flying,
    /// Hauled straight back toward the attach point
    Retrieving,
}

/// The tethered harpoon
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Harpoon {
    pub state: HarpoonState,
    /// World position while detached
    pub position: Vec2,
    pub velocity: Vec2,
    /// Facing frozen at fire time, +1 or -1
    pub facing: i8,
    pub max_speed: f32,
    /// Varies by phase: 0 attached/retrieving, reduced while flying
    pub gravity: f32,
    pub rope_length: f32,
}

impl Harpoon {
    fn new(tuning: &Tuning) -> Self {
        Self {
            state: HarpoonState::Attached,
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            facing: 1,
            max_speed: tuning.harpoon_max_speed,
            gravity: 0.0,
            rope_length: tuning.rope_length,
        }
    }

    pub fn is_attached(&self) -> bool {
        self.state == HarpoonState::Attached
    }

    /// Whether the harpoon is being pulled back
    pub fn is_pulling(&self) -> bool {
        self.state == HarpoonState::Retrieving
    }

    /// The point the rope is anchored to: a fixed offset from the
    /// player, mirrored by the player's facing
    pub fn attach_point(player: &Player) -> Vec2 {
        let dx = if player.facing < 0 { -15.0 } else { 10.0 };
        player.position + Vec2::new(dx, 2.0)
    }

    /// Effective position: the attach point while attached, the world
    /// position otherwise
    pub fn effective_position(&self, player: &Player) -> Vec2 {
        if self.is_attached() {
            Self::attach_point(player)
        } else {
            self.position
        }
    }
}

/// A biting fish
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub rect: Rect,
    /// Patrol direction, +1 or -1
    pub facing: i8,
    /// Tick of death; `Some` starts the fade window
    pub died_at: Option<u64>,
}

impl Enemy {
    pub fn spawn(x: f32, y: f32) -> Self {
        Self {
            rect: Rect::new(x, y, ENEMY_W, ENEMY_H),
            facing: 1,
            died_at: None,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.died_at.is_none()
    }
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Session seed; keys terrain and spawn randomness
    pub seed: u64,
    /// Monotonic tick counter, the only time-like value
    pub tick: u64,
    pub phase: GamePhase,
    /// Current scroll depth, non-negative, clamped to the level bound
    pub depth: f32,
    /// High-water mark of depth; gates spawn/cull batching
    pub explored_depth: f32,
    /// Raised on confirm while dead; the host performs the reset
    pub reset_requested: bool,
    pub player: Player,
    pub harpoon: Harpoon,
    /// Spawn-ordered; appended at the tail, removed by cull or fade-out
    pub enemies: Vec<Enemy>,
    /// Candidate y of the most recent spawn, kept even after the enemy
    /// itself is gone so spacing stays monotone
    pub last_spawn_y: Option<f32>,
    pub tuning: Tuning,
}

impl GameState {
    /// Create a session with default tuning
    pub fn new(seed: u64) -> Self {
        Self::from_parts(seed, Tuning::default())
    }

    /// Create a session with host-supplied tuning, failing fast on
    /// invalid configuration
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self::from_parts(seed, tuning))
    }

    fn from_parts(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            tick: 0,
            phase: GamePhase::Title,
            depth: 0.0,
            explored_depth: 0.0,
            reset_requested: false,
            player: Player::new(&tuning),
            harpoon: Harpoon::new(&tuning),
            enemies: Vec::new(),
            last_spawn_y: None,
            tuning,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_defaults() {
        let state = GameState::new(1);
        assert_eq!(state.phase, GamePhase::Title);
        assert_eq!(state.player.position, Vec2::new(160.0, -30.0));
        assert!(state.harpoon.is_attached());
        assert!(!state.harpoon.is_pulling());
        assert!(state.enemies.is_empty());
        assert!(!state.reset_requested);
    }

    #[test]
    fn test_with_tuning_rejects_invalid() {
        let tuning = Tuning {
            rope_length: -5.0,
            ..Default::default()
        };
        assert!(GameState::with_tuning(1, tuning).is_err());
    }

    #[test]
    fn test_attach_point_mirrors_facing() {
        let state = GameState::new(1);
        let mut player = state.player.clone();
        player.facing = 1;
        assert_eq!(Harpoon::attach_point(&player), Vec2::new(170.0, -28.0));
        player.facing = -1;
        assert_eq!(Harpoon::attach_point(&player), Vec2::new(145.0, -28.0));
    }

    #[test]
    fn test_hitbox_is_inset() {
        let state = GameState::new(1);
        let rect = state.player.rect();
        let hitbox = state.player.hitbox();
        assert!(hitbox.left() > rect.left());
        assert!(hitbox.right() < rect.right());
        assert!(hitbox.bottom() > rect.bottom());
        assert!(hitbox.top() < rect.top());
    }
}
