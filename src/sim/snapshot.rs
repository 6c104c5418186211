//! World snapshot and drawable projection for the render collaborator
//!
//! The core owns no drawing, but it owns the coordinate math: the host
//! queues drawables in world space and asks the core to project them
//! into screen space once per frame.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::camera::{visible_segment_starts, y_on_screen};
use super::collision::Rect;
use super::state::{GamePhase, GameState};

/// Player view for rendering
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerView {
    pub rect: Rect,
    pub facing: i8,
    pub alive: bool,
}

/// Harpoon view for rendering
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarpoonView {
    pub position: Vec2,
    pub facing: i8,
    pub attached: bool,
    pub pulling: bool,
}

/// Enemy view for rendering; `fade` runs 0..=1 across the death window
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub rect: Rect,
    pub facing: i8,
    pub alive: bool,
    pub fade: f32,
}

/// A terrain segment the renderer can regenerate on demand
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SegmentDescriptor {
    pub base_seed: u64,
    pub start_y: i64,
}

/// Everything the render collaborator needs for one frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldSnapshot {
    /// Tick counter, for sprite animation frame selection
    pub tick: u64,
    pub phase: GamePhase,
    pub depth: f32,
    pub player: PlayerView,
    pub harpoon: HarpoonView,
    pub enemies: Vec<EnemyView>,
    /// Segments overlapping the visible window
    pub terrain: Vec<SegmentDescriptor>,
}

/// Capture the render-facing view of the session
pub fn snapshot(state: &GameState) -> WorldSnapshot {
    let fade_ticks = state.tuning.enemy_fade_ticks.max(1) as f32;
    let enemies = state
        .enemies
        .iter()
        .map(|e| EnemyView {
            rect: e.rect,
            facing: e.facing,
            alive: e.is_alive(),
            fade: e
                .died_at
                .map(|died| (state.tick.saturating_sub(died) as f32 / fade_ticks).min(1.0))
                .unwrap_or(0.0),
        })
        .collect();

    let terrain = visible_segment_starts(state.depth)
        .into_iter()
        .map(|start_y| SegmentDescriptor {
            base_seed: state.seed,
            start_y,
        })
        .collect();

    WorldSnapshot {
        tick: state.tick,
        phase: state.phase,
        depth: state.depth,
        player: PlayerView {
            rect: state.player.rect(),
            facing: state.player.facing,
            alive: state.player.is_alive(),
        },
        harpoon: HarpoonView {
            position: state.harpoon.effective_position(&state.player),
            facing: state.harpoon.facing,
            attached: state.harpoon.is_attached(),
            pulling: state.harpoon.is_pulling(),
        },
        enemies,
        terrain,
    }
}

/// A queued drawing primitive in world coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum Drawable {
    Sprite {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        flip_x: bool,
        flip_y: bool,
    },
    Line {
        x: f32,
        y: f32,
        x2: f32,
        y2: f32,
    },
    Label {
        x: f32,
        y: f32,
        text: String,
    },
    Rect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
    },
}

/// Project queued drawables from world space to screen space for the
/// current scroll depth. Applied exactly once per frame; the transform
/// is never accumulated.
pub fn project_to_screen(drawables: &mut [Drawable], depth: f32) {
    for drawable in drawables {
        match drawable {
            Drawable::Sprite { y, .. } | Drawable::Label { y, .. } | Drawable::Rect { y, .. } => {
                *y = y_on_screen(depth, *y);
            }
            Drawable::Line { y, y2, .. } => {
                *y = y_on_screen(depth, *y);
                *y2 = y_on_screen(depth, *y2);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SCREEN_H;
    use crate::sim::state::{Enemy, Harpoon, HarpoonState};

    #[test]
    fn test_snapshot_attached_harpoon_rides_player() {
        let state = GameState::new(9);
        let snap = snapshot(&state);
        assert!(snap.harpoon.attached);
        assert!(!snap.harpoon.pulling);
        assert_eq!(
            snap.harpoon.position,
            Harpoon::attach_point(&state.player)
        );
    }

    #[test]
    fn test_snapshot_enemy_fade_progress() {
        let mut state = GameState::new(9);
        let mut enemy = Enemy::spawn(30.0, -500.0);
        enemy.died_at = Some(100);
        state.enemies.push(enemy);
        state.tick = 110;

        let snap = snapshot(&state);
        assert!(!snap.enemies[0].alive);
        assert!((snap.enemies[0].fade - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_snapshot_lists_four_segments() {
        let mut state = GameState::new(9);
        state.depth = 250.0;
        let snap = snapshot(&state);
        assert_eq!(snap.terrain.len(), 4);
        assert!(snap.terrain.iter().all(|s| s.base_seed == 9));
    }

    #[test]
    fn test_project_transforms_all_variants() {
        let mut drawables = vec![
            Drawable::Sprite {
                x: 10.0,
                y: -100.0,
                w: 8.0,
                h: 5.0,
                flip_x: false,
                flip_y: false,
            },
            Drawable::Line {
                x: 0.0,
                y: -100.0,
                x2: 5.0,
                y2: -150.0,
            },
            Drawable::Label {
                x: 0.0,
                y: -100.0,
                text: "10m".into(),
            },
        ];
        project_to_screen(&mut drawables, 100.0);

        match &drawables[0] {
            Drawable::Sprite { y, .. } => assert_eq!(*y, SCREEN_H),
            other => panic!("unexpected {other:?}"),
        }
        match &drawables[1] {
            Drawable::Line { y, y2, .. } => {
                assert_eq!(*y, SCREEN_H);
                assert_eq!(*y2, SCREEN_H - 50.0);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_pulling_flag_mirrors_retrieving_state() {
        let mut state = GameState::new(9);
        state.harpoon.state = HarpoonState::Retrieving;
        let harpoon = snapshot(&state).harpoon;
        assert!(harpoon.pulling);
        assert!(!harpoon.attached);
    }
}
