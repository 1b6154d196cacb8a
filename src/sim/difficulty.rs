//! Score and scroll-speed progression

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Score counter, scroll speed and the process-lifetime high score.
///
/// Speed grows without a ceiling for as long as a session lasts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Difficulty {
    pub scroll_speed: f32,
    pub score: u64,
    pub high_score: u64,
}

impl Default for Difficulty {
    fn default() -> Self {
        Self {
            scroll_speed: INITIAL_SCROLL_SPEED,
            score: 0,
            high_score: 0,
        }
    }
}

impl Difficulty {
    /// One playing frame: +1 score, +acceleration speed
    pub fn tick(&mut self) {
        self.score += 1;
        self.scroll_speed += SCROLL_ACCELERATION;
    }

    /// Fold the current score into the high score. Returns true on a new record.
    pub fn end_session(&mut self) -> bool {
        if self.score > self.high_score {
            self.high_score = self.score;
            true
        } else {
            false
        }
    }

    /// Back to the starting speed and zero score; the high score survives
    pub fn reset(&mut self) {
        self.scroll_speed = INITIAL_SCROLL_SPEED;
        self.score = 0;
    }
}
