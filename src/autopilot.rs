//! Demo-mode player
//!
//! Reads a snapshot and produces the commands a person would press. Used by
//! the headless runner; the simulation never calls into it.

use crate::consts::*;
use crate::sim::{GamePhase, ObstacleKind, Snapshot, TickInput};

/// Simple reflex bot: jump blocks, duck low flyers, restart on game over
#[derive(Debug, Clone)]
pub struct Autopilot {
    /// Frames of warning before an obstacle reaches the player
    pub lead_frames: f32,
    /// Restart automatically after a game over
    pub auto_restart: bool,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            lead_frames: 8.0,
            auto_restart: true,
        }
    }
}

impl Autopilot {
    pub fn new(lead_frames: f32, auto_restart: bool) -> Self {
        Self {
            lead_frames,
            auto_restart,
        }
    }

    /// Decide this frame's input
    pub fn decide(&self, snapshot: &Snapshot<'_>) -> TickInput {
        if snapshot.phase == GamePhase::GameOver {
            return TickInput {
                restart: self.auto_restart,
                ..Default::default()
            };
        }

        let player_left = snapshot.hitbox.left();
        let player_right = snapshot.hitbox.right();
        let reach = player_right + snapshot.scroll_speed * self.lead_frames;

        // Nearest obstacle that has not fully passed the player yet
        let ahead = snapshot
            .obstacles
            .iter()
            .filter(|o| o.x + o.width > player_left)
            .min_by(|a, b| a.x.total_cmp(&b.x));

        let Some(obstacle) = ahead else {
            return TickInput {
                crouch: Some(false),
                ..Default::default()
            };
        };

        let close = obstacle.x <= reach;
        match obstacle.kind {
            ObstacleKind::GroundBlock if close => TickInput {
                jump: true,
                crouch: Some(false),
                ..Default::default()
            },
            ObstacleKind::Flyer if close && snapshot.player.on_ground => {
                // Duck only when the flyer would clip a standing body
                let standing_top = PLAYER_REST_Y - PLAYER_NORMAL_HEIGHT / 2.0;
                TickInput {
                    crouch: Some(obstacle.y + obstacle.height > standing_top),
                    ..Default::default()
                }
            }
            _ => TickInput {
                crouch: Some(false),
                ..Default::default()
            },
        }
    }
}
