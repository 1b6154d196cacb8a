//! Parallax backdrop: starfield, floating grid lines and the ground grid
//!
//! Decoration only. Positions are kept here so a renderer can draw them;
//! nothing in here affects collisions or score.

use serde::{Deserialize, Serialize};

use super::rng::GameRng;
use crate::consts::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Star {
    pub x: f32,
    pub y: f32,
    pub size: f32,
}

/// Vertical line segment drifting behind the play field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridLine {
    pub x: f32,
    pub y: f32,
    pub length: f32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Backdrop {
    pub stars: Vec<Star>,
    pub grid_lines: Vec<GridLine>,
    /// Horizontal phase of the perspective ground grid, in [0, GROUND_GRID_SPACING)
    pub ground_offset: f32,
}

impl Backdrop {
    /// Scatter stars and grid lines across the field
    pub fn generate<R: GameRng>(rng: &mut R) -> Self {
        let stars = (0..NUM_STARS)
            .map(|_| Star {
                x: rng.range_f32(0.0, FIELD_WIDTH),
                y: rng.range_f32(0.0, GROUND_Y),
                size: rng.range_f32(1.0, 3.0),
            })
            .collect();
        let grid_lines = (0..NUM_GRID_LINES)
            .map(|_| GridLine {
                x: rng.range_f32(0.0, FIELD_WIDTH),
                y: rng.range_f32(0.0, GROUND_Y),
                length: rng.range_f32(20.0, 100.0),
            })
            .collect();
        Self {
            stars,
            grid_lines,
            ground_offset: 0.0,
        }
    }

    /// Drift both parallax layers left, wrapping to the right edge
    pub fn scroll<R: GameRng>(&mut self, speed: f32, rng: &mut R) {
        for star in &mut self.stars {
            star.x -= speed * STAR_SPEED_FACTOR;
            if star.x < 0.0 {
                star.x = FIELD_WIDTH;
                star.y = rng.range_f32(0.0, GROUND_Y);
            }
        }

        for line in &mut self.grid_lines {
            line.x -= speed * GRID_LINE_SPEED_FACTOR;
            if line.x < 0.0 {
                line.x = FIELD_WIDTH;
                line.y = rng.range_f32(0.0, GROUND_Y - line.length);
                line.length = rng.range_f32(20.0, 100.0);
            }
        }
    }

    /// Slide the ground grid (playing frames only)
    pub fn advance_ground(&mut self, speed: f32) {
        self.ground_offset = (self.ground_offset + speed) % GROUND_GRID_SPACING;
    }
}
