//! Random-interval timer for the screen glitch effect
//!
//! Purely visual: the flag is read by the renderer and never feeds back into
//! gameplay.

use serde::{Deserialize, Serialize};

use super::rng::GameRng;
use crate::consts::*;

/// Glitch timer state, in absolute frame numbers
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlitchScheduler {
    pub active: bool,
    pub activated_at: u64,
    pub next_trigger: u64,
    /// Last frame seen by `tick`, frames must never go backwards
    last_frame: u64,
}

impl GlitchScheduler {
    /// Deactivate and schedule the next trigger relative to `frame`
    pub fn reset<R: GameRng>(&mut self, frame: u64, rng: &mut R) {
        self.active = false;
        self.last_frame = frame;
        self.schedule(frame, rng);
    }

    fn schedule<R: GameRng>(&mut self, frame: u64, rng: &mut R) {
        let interval = rng.range_u32(GLITCH_INTERVAL_MIN, GLITCH_INTERVAL_MAX);
        self.next_trigger = frame + u64::from(interval);
    }

    /// Advance to `frame`. Returns true on the frame a glitch starts.
    ///
    /// A trigger fires at most once per crossing: firing re-arms from the
    /// current frame, so a stalled loop that jumps far past the threshold
    /// still yields a single activation.
    pub fn tick<R: GameRng>(&mut self, frame: u64, rng: &mut R) -> bool {
        assert!(
            frame >= self.last_frame,
            "glitch frame went backwards: {} -> {}",
            self.last_frame,
            frame
        );
        self.last_frame = frame;

        let mut fired = false;
        if frame > self.next_trigger {
            self.active = true;
            self.activated_at = frame;
            self.schedule(frame, rng);
            fired = true;
        }
        if self.active && frame >= self.activated_at + GLITCH_DURATION_FRAMES {
            self.active = false;
        }
        fired
    }
}
