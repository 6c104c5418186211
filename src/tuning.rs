//! Data-driven game balance
//!
//! All gameplay numbers that are not structural world constants live
//! here, so the host can override them from a JSON file. Validation is
//! fail-fast: a `Tuning` that would silently break the simulation
//! (non-positive rope length, zero max speed) is rejected at setup.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::ONE_METER;

#[derive(Debug, Error)]
pub enum TuningError {
    #[error("rope_length must be positive, got {0}")]
    RopeLength(f32),
    #[error("player_max_speed must be positive, got {0}")]
    PlayerMaxSpeed(f32),
    #[error("harpoon_max_speed must be positive, got {0}")]
    HarpoonMaxSpeed(f32),
    #[error("retrieve_speed must be positive, got {0}")]
    RetrieveSpeed(f32),
    #[error("harpoon_drag must be in (0, 1], got {0}")]
    HarpoonDrag(f32),
    #[error("spawn_spacing_floor must be positive, got {0}")]
    SpawnSpacingFloor(f32),
    #[error("invalid tuning JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Gameplay balance values
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Per-frame downward acceleration on the player (negative = sinks)
    pub player_gravity: f32,
    /// Player speed cap (world units per frame)
    pub player_max_speed: f32,
    /// Upward kick per swim-up press
    pub swim_lift: f32,
    /// Horizontal axis to velocity factor
    pub swim_speed: f32,

    /// Harpoon speed cap while detached
    pub harpoon_max_speed: f32,
    /// Reduced gravity on a thrown harpoon (slow sink)
    pub harpoon_flying_gravity: f32,
    /// Horizontal water drag multiplier while detached
    pub harpoon_drag: f32,
    /// Muzzle speed added along facing when fired
    pub harpoon_fire_speed: f32,
    /// Straight-line speed while being pulled back
    pub retrieve_speed: f32,
    /// Distance to the attach point that completes retrieval
    pub reattach_distance: f32,
    /// Maximum rope extension before positional correction
    pub rope_length: f32,

    /// Live enemy patrol speed
    pub enemy_speed: f32,
    /// Upward drift per frame of a dead enemy
    pub dead_rise_rate: f32,
    /// Ticks a dead enemy stays visible before removal
    pub enemy_fade_ticks: u64,

    /// Spawn spacing at the surface
    pub base_spawn_spacing: f32,
    /// Hard floor on spawn spacing (the difficulty ramp may not cross it)
    pub spawn_spacing_floor: f32,
    /// How far below the visible bottom candidates spawn
    pub spawn_lead: f32,
    /// Depth step that triggers a spawn/cull pass
    pub explored_step: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_gravity: -0.01,
            player_max_speed: 1.0,
            swim_lift: 0.5,
            swim_speed: 0.5,

            harpoon_max_speed: 3.0,
            harpoon_flying_gravity: -0.005,
            harpoon_drag: 0.95,
            harpoon_fire_speed: 3.0,
            retrieve_speed: 2.0,
            reattach_distance: 3.0,
            rope_length: 50.0,

            enemy_speed: 0.5,
            dead_rise_rate: 0.5,
            enemy_fade_ticks: 20,

            base_spawn_spacing: 100.0,
            spawn_spacing_floor: 10.0,
            spawn_lead: 20.0,
            explored_step: 20.0,
        }
    }
}

impl Tuning {
    /// Check the values a broken host config could smuggle in
    pub fn validate(&self) -> Result<(), TuningError> {
        if self.rope_length <= 0.0 {
            return Err(TuningError::RopeLength(self.rope_length));
        }
        if self.player_max_speed <= 0.0 {
            return Err(TuningError::PlayerMaxSpeed(self.player_max_speed));
        }
        if self.harpoon_max_speed <= 0.0 {
            return Err(TuningError::HarpoonMaxSpeed(self.harpoon_max_speed));
        }
        if self.retrieve_speed <= 0.0 {
            return Err(TuningError::RetrieveSpeed(self.retrieve_speed));
        }
        if self.harpoon_drag <= 0.0 || self.harpoon_drag > 1.0 {
            return Err(TuningError::HarpoonDrag(self.harpoon_drag));
        }
        if self.spawn_spacing_floor <= 0.0 {
            return Err(TuningError::SpawnSpacingFloor(self.spawn_spacing_floor));
        }
        Ok(())
    }

    /// Parse and validate a host-supplied tuning override
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Minimum vertical distance between consecutive spawns at a depth.
    ///
    /// Ramps down by 5 units per 20 m descended. The raw formula has no
    /// floor and would go non-positive past the treasure; the clamp
    /// keeps the spacing meaningful regardless of level bounds.
    pub fn min_spawn_spacing(&self, depth: f32) -> f32 {
        let ramped = self.base_spawn_spacing - depth / (ONE_METER * 20.0) * 5.0;
        ramped.max(self.spawn_spacing_floor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tuning_is_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_rope() {
        let tuning = Tuning {
            rope_length: 0.0,
            ..Default::default()
        };
        assert!(matches!(tuning.validate(), Err(TuningError::RopeLength(_))));
    }

    #[test]
    fn test_rejects_bad_drag() {
        let tuning = Tuning {
            harpoon_drag: 1.5,
            ..Default::default()
        };
        assert!(matches!(tuning.validate(), Err(TuningError::HarpoonDrag(_))));
    }

    #[test]
    fn test_from_json_partial_override() {
        let tuning = Tuning::from_json(r#"{"rope_length": 80.0}"#).unwrap();
        assert_eq!(tuning.rope_length, 80.0);
        // Untouched fields keep their defaults
        assert_eq!(tuning.player_max_speed, 1.0);
    }

    #[test]
    fn test_from_json_rejects_invalid() {
        assert!(Tuning::from_json(r#"{"harpoon_max_speed": -1.0}"#).is_err());
    }

    #[test]
    fn test_spawn_spacing_ramp() {
        let tuning = Tuning::default();
        assert_eq!(tuning.min_spawn_spacing(0.0), 100.0);
        // 20 m = 300 units: spacing drops by 5
        assert!((tuning.min_spawn_spacing(300.0) - 95.0).abs() < 1e-4);
        // Absurd depth hits the floor instead of going negative
        assert_eq!(tuning.min_spawn_spacing(1.0e6), tuning.spawn_spacing_floor);
    }
}
