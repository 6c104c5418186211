//! Axis-aligned rectangle tests and combat checks
//!
//! The game only ever needs point-in-rect and rect-overlap; anything
//! fancier belongs to a physics engine this is not.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::GameState;

/// Axis-aligned rectangle in world coordinates, y pointing up
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y + self.h
    }

    /// Whether a point lies inside the rectangle (edges inclusive)
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.bottom()
            && point.y <= self.top()
    }

    /// Whether two rectangles overlap
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.bottom() < other.top()
            && other.bottom() < self.top()
    }
}

/// Minimum horizontal harpoon speed for a strike to count.
///
/// A nearly stopped harpoon drifting inside a fish must not keep
/// re-triggering kills.
pub const STRIKE_MIN_SPEED: f32 = 1.0;

/// Kill every live enemy whose rectangle contains the harpoon point.
///
/// Only a detached, fast-moving harpoon strikes.
pub fn harpoon_strikes(state: &mut GameState) {
    if state.harpoon.is_attached() || state.harpoon.velocity.x.abs() < STRIKE_MIN_SPEED {
        return;
    }

    let point = state.harpoon.position;
    let tick = state.tick;
    for enemy in state.enemies.iter_mut().filter(|e| e.is_alive()) {
        if enemy.rect.contains(point) {
            enemy.died_at = Some(tick);
            log::debug!("harpoon strike at ({:.1}, {:.1})", point.x, point.y);
        }
    }
}

/// Kill the player on contact with any live enemy.
///
/// Uses the player's inset hitbox, not the full sprite rectangle.
/// Death is terminal for the session; the host must reset.
pub fn enemy_touches_player(state: &mut GameState) {
    if !state.player.is_alive() {
        return;
    }

    let hitbox = state.player.hitbox();
    let touched = state
        .enemies
        .iter()
        .filter(|e| e.is_alive())
        .any(|e| e.rect.intersects(&hitbox));

    if touched {
        state.player.died_at = Some(state.tick);
        state.phase = super::state::GamePhase::Dead;
        log::info!("player died at tick {} (depth {:.0})", state.tick, state.depth);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Enemy, GamePhase, GameState, HarpoonState};

    #[test]
    fn test_rect_contains() {
        let rect = Rect::new(30.0, -500.0, 20.0, 15.0);
        assert!(rect.contains(Vec2::new(35.0, -495.0)));
        assert!(rect.contains(Vec2::new(30.0, -500.0))); // corner inclusive
        assert!(!rect.contains(Vec2::new(55.0, -495.0)));
        assert!(!rect.contains(Vec2::new(35.0, -520.0)));
    }

    #[test]
    fn test_rect_intersects() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        let c = Rect::new(20.0, 0.0, 5.0, 5.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
        // Edge-touching rectangles do not overlap
        let d = Rect::new(10.0, 0.0, 5.0, 5.0);
        assert!(!a.intersects(&d));
    }

    #[test]
    fn test_harpoon_strike_kills_enemy() {
        let mut state = GameState::new(7);
        state.enemies.push(Enemy::spawn(30.0, -500.0));
        state.harpoon.state = HarpoonState::Flying;
        state.harpoon.position = Vec2::new(35.0, -495.0);
        state.harpoon.velocity = Vec2::new(1.5, 0.0);
        state.tick = 42;

        harpoon_strikes(&mut state);
        assert_eq!(state.enemies[0].died_at, Some(42));
    }

    #[test]
    fn test_slow_harpoon_does_not_strike() {
        let mut state = GameState::new(7);
        state.enemies.push(Enemy::spawn(30.0, -500.0));
        state.harpoon.state = HarpoonState::Flying;
        state.harpoon.position = Vec2::new(35.0, -495.0);
        state.harpoon.velocity = Vec2::new(0.5, 0.0);

        harpoon_strikes(&mut state);
        assert!(state.enemies[0].is_alive());
    }

    #[test]
    fn test_attached_harpoon_does_not_strike() {
        let mut state = GameState::new(7);
        state.enemies.push(Enemy::spawn(30.0, -500.0));
        state.harpoon.position = Vec2::new(35.0, -495.0);
        state.harpoon.velocity = Vec2::new(3.0, 0.0);
        assert!(state.harpoon.is_attached());

        harpoon_strikes(&mut state);
        assert!(state.enemies[0].is_alive());
    }

    #[test]
    fn test_enemy_touch_kills_player() {
        let mut state = GameState::new(7);
        state.phase = GamePhase::Playing;
        state.tick = 100;
        let hitbox = state.player.hitbox();
        state.enemies.push(Enemy::spawn(hitbox.x, hitbox.y));

        enemy_touches_player(&mut state);
        assert_eq!(state.player.died_at, Some(100));
        assert_eq!(state.phase, GamePhase::Dead);
    }

    #[test]
    fn test_dead_enemy_cannot_kill_player() {
        let mut state = GameState::new(7);
        state.phase = GamePhase::Playing;
        let hitbox = state.player.hitbox();
        let mut enemy = Enemy::spawn(hitbox.x, hitbox.y);
        enemy.died_at = Some(1);
        state.enemies.push(enemy);

        enemy_touches_player(&mut state);
        assert!(state.player.is_alive());
        assert_eq!(state.phase, GamePhase::Playing);
    }
}
