//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One frame per tick, fixed constants only
//! - One seeded (or scripted) RNG per session
//! - Commands land strictly between ticks
//! - No rendering or input dependencies

pub mod backdrop;
pub mod difficulty;
pub mod geometry;
pub mod glitch;
pub mod obstacle;
pub mod player;
pub mod rng;
pub mod session;

pub use backdrop::{Backdrop, GridLine, Star};
pub use difficulty::Difficulty;
pub use geometry::Rect;
pub use glitch::GlitchScheduler;
pub use obstacle::{Obstacle, ObstacleKind, ObstacleManager};
pub use player::Player;
pub use rng::{GameRng, ScriptedRng, SeededRng};
pub use session::{GameEvent, GamePhase, Session, Snapshot, TickInput};
