//! Procedural terrain generator
//!
//! Decorative rock columns along both screen margins. Generation is
//! pure in `(base_seed, segment_start)`: a fresh PCG stream is derived
//! arithmetically per segment and column, so the same segment can be
//! regenerated every frame, in any order, with identical output.
//! Nothing is ever stored.

use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::{SCREEN_H, SCREEN_W};

/// Which screen margin a column of obstacles decorates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Column {
    Left,
    Right,
}

/// Sprite footprint of a single rock
pub const OBSTACLE_W: f32 = 16.0;

/// Vertical gap bounds between consecutive rocks in a column
const GAP_MIN: f32 = 10.0;
const GAP_MAX: f32 = 30.0;

/// Horizontal jitter range off the margin
const JITTER_MAX: f32 = 8.0;

/// One decorative rock placement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub column: Column,
    pub x: f32,
    pub y: f32,
    pub flip_x: bool,
    pub flip_y: bool,
}

fn column_rng(base_seed: u64, segment_start: i64, column: Column) -> Pcg32 {
    // Segment-local seed by arithmetic on the base seed; the column
    // selects the PCG stream so left and right are independent
    let seed = (base_seed as i64).wrapping_add(segment_start) as u64;
    Pcg32::new(seed, column as u64)
}

/// Generate the obstacles of one vertical segment.
///
/// A segment spans `[segment_start - SCREEN_H, segment_start]`. Each
/// column marches downward from the segment start by a random gap
/// until the full screen height is covered.
pub fn segment(base_seed: u64, segment_start: i64) -> Vec<Obstacle> {
    let mut obstacles = Vec::new();
    let segment_bottom = segment_start as f32 - SCREEN_H;

    for column in [Column::Left, Column::Right] {
        let mut rng = column_rng(base_seed, segment_start, column);
        let mut y = segment_start as f32;
        loop {
            y -= rng.random_range(GAP_MIN..GAP_MAX);
            if y <= segment_bottom {
                break;
            }
            let jitter = rng.random_range(0.0..JITTER_MAX);
            let x = match column {
                Column::Left => jitter,
                Column::Right => SCREEN_W - OBSTACLE_W - jitter,
            };
            obstacles.push(Obstacle {
                column,
                x,
                y,
                flip_x: rng.random(),
                flip_y: rng.random(),
            });
        }
    }

    obstacles
}
