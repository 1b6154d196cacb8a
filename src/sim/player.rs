//! Player physics: gravity, jump, crouch and the running animation

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use crate::consts::*;

/// The player figure. `pos` is the body centre; x never changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    /// Vertical velocity (negative is up)
    pub vel_y: f32,
    pub on_ground: bool,
    pub crouching: bool,
    /// Running animation frame (0 or 1)
    pub leg_phase: u8,
    /// Grounded frames since the last leg flip
    pub leg_timer: u32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec2::new(PLAYER_X, PLAYER_REST_Y),
            vel_y: 0.0,
            on_ground: true,
            crouching: false,
            leg_phase: 0,
            leg_timer: 0,
        }
    }
}

impl Player {
    /// Put the player back at rest on the ground
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Integrate one frame of gravity and clamp to the ground line
    pub fn advance(&mut self) {
        self.vel_y += GRAVITY;
        self.pos.y += self.vel_y;

        self.on_ground = self.pos.y >= PLAYER_REST_Y;
        if self.pos.y > PLAYER_REST_Y {
            self.pos.y = PLAYER_REST_Y;
            self.vel_y = 0.0;
        }

        if self.on_ground {
            self.leg_timer += 1;
            if self.leg_timer > LEG_ANIM_FRAMES {
                self.leg_phase = (self.leg_phase + 1) % 2;
                self.leg_timer = 0;
            }
        }
    }

    /// On the ground with no jump impulse pending
    pub fn is_grounded(&self) -> bool {
        self.on_ground && self.vel_y >= 0.0
    }

    /// Apply the jump impulse if standing on the ground.
    /// Returns whether the jump happened.
    pub fn try_jump(&mut self) -> bool {
        if self.is_grounded() && !self.crouching {
            self.vel_y = JUMP_VELOCITY;
            true
        } else {
            false
        }
    }

    /// Crouching is only allowed on the ground; standing up always is.
    /// Returns whether the flag changed.
    pub fn set_crouch(&mut self, crouch: bool) -> bool {
        if crouch && !self.is_grounded() {
            return false;
        }
        let changed = self.crouching != crouch;
        self.crouching = crouch;
        changed
    }

    /// Collision box for the current pose
    pub fn hitbox(&self) -> Rect {
        let (height, offset) = if self.crouching {
            (PLAYER_CROUCH_HEIGHT, PLAYER_CROUCH_OFFSET)
        } else {
            (PLAYER_NORMAL_HEIGHT, 0.0)
        };
        Rect::from_center(self.pos.x, self.pos.y + offset, PLAYER_SIZE, height)
    }
}
