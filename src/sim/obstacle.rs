//! Obstacle lifecycle: spawn at the right edge, scroll left, retire off-screen

use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use super::rng::GameRng;
use crate::consts::*;

/// Obstacle types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Sits on the ground, must be jumped over
    GroundBlock,
    /// Floats above the ground, duck under or jump over
    Flyer,
}

/// A live obstacle (top-left corner plus size)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Obstacle {
    /// Ground block of the given size at `x`, flush with the ground
    pub fn ground_block(x: f32, width: f32, height: f32) -> Self {
        Self {
            kind: ObstacleKind::GroundBlock,
            x,
            y: GROUND_Y - height,
            width,
            height,
        }
    }

    /// Flyer at `x` whose bottom clears the player's head by `lift`
    pub fn flyer(x: f32, lift: f32) -> Self {
        Self {
            kind: ObstacleKind::Flyer,
            x,
            y: GROUND_Y - PLAYER_SIZE - lift,
            width: FLYER_WIDTH,
            height: FLYER_HEIGHT,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Fully past the left edge of the play field
    pub fn is_offscreen(&self) -> bool {
        self.x + self.width < 0.0
    }
}

/// Owns every live obstacle and the spawn timer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstacleManager {
    obstacles: Vec<Obstacle>,
    /// Frames since the last spawn
    spawn_counter: u32,
    /// Frames to wait before the next spawn
    spawn_interval: u32,
    /// Total spawned this session
    spawned: u64,
}

impl Default for ObstacleManager {
    fn default() -> Self {
        Self {
            obstacles: Vec::new(),
            spawn_counter: 0,
            spawn_interval: INITIAL_SPAWN_INTERVAL,
            spawned: 0,
        }
    }
}

impl ObstacleManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Live obstacles, oldest first
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn spawn_interval(&self) -> u32 {
        self.spawn_interval
    }

    pub fn spawned(&self) -> u64 {
        self.spawned
    }

    /// Place an obstacle directly, bypassing the spawn timer
    pub fn push(&mut self, obstacle: Obstacle) {
        self.obstacles.push(obstacle);
    }

    /// Drop every live obstacle, keeping the spawn timer running
    pub fn clear(&mut self) {
        self.obstacles.clear();
    }

    /// Clear the field and restore the initial spawn timer
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Count one frame and spawn when the interval is exceeded.
    /// Returns the kind spawned, if any.
    pub fn spawn_tick<R: GameRng>(&mut self, rng: &mut R) -> Option<ObstacleKind> {
        self.spawn_counter += 1;
        if self.spawn_counter <= self.spawn_interval {
            return None;
        }

        let obstacle = Self::roll_obstacle(rng, self.obstacles.is_empty());
        let kind = obstacle.kind;
        self.obstacles.push(obstacle);
        self.spawned += 1;

        self.spawn_counter = 0;
        self.spawn_interval = rng.range_u32(SPAWN_INTERVAL_MIN, SPAWN_INTERVAL_MAX);
        Some(kind)
    }

    /// Draw a new obstacle at the right edge. An empty field always gets a
    /// ground block, but the kind roll is still consumed.
    fn roll_obstacle<R: GameRng>(rng: &mut R, field_empty: bool) -> Obstacle {
        let roll = rng.next_unit();
        if roll < GROUND_BLOCK_CHANCE || field_empty {
            let height = rng.range_f32(GROUND_BLOCK_HEIGHT_MIN, GROUND_BLOCK_HEIGHT_MAX);
            let width = rng.range_f32(GROUND_BLOCK_WIDTH_MIN, GROUND_BLOCK_WIDTH_MAX);
            Obstacle::ground_block(FIELD_WIDTH, width, height)
        } else {
            let lift = rng.range_f32(FLYER_LIFT_MIN, FLYER_LIFT_MAX);
            Obstacle::flyer(FIELD_WIDTH, lift)
        }
    }

    /// Scroll every obstacle left, retire the ones that left the field and
    /// return the first one overlapping `hitbox`.
    pub fn advance_and_collect(&mut self, scroll_speed: f32, hitbox: &Rect) -> Option<Obstacle> {
        let mut hit = None;
        for obstacle in &mut self.obstacles {
            obstacle.x -= scroll_speed;
            if hit.is_none() && obstacle.rect().intersects(hitbox) {
                hit = Some(obstacle.clone());
            }
        }
        self.obstacles.retain(|o| !o.is_offscreen());
        hit
    }
}
