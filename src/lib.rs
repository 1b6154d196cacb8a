//! Neon Runner - an endless side-scrolling jump-and-crouch game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player physics, obstacles, difficulty, glitch timer)
//! - `autopilot`: Demo-mode input adapter driven by simulation snapshots
//! - `settings`: Headless run configuration

pub mod autopilot;
pub mod settings;
pub mod sim;

pub use autopilot::Autopilot;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Play field dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 400.0;
    /// Ground line (90% of field height)
    pub const GROUND_Y: f32 = FIELD_HEIGHT * 0.9;

    /// Player anchor and body
    pub const PLAYER_X: f32 = 60.0;
    pub const PLAYER_SIZE: f32 = 40.0;
    pub const PLAYER_NORMAL_HEIGHT: f32 = PLAYER_SIZE * 0.9;
    pub const PLAYER_CROUCH_HEIGHT: f32 = PLAYER_SIZE * 0.5;
    /// Crouched body sinks so its bottom stays on the ground
    pub const PLAYER_CROUCH_OFFSET: f32 = (PLAYER_NORMAL_HEIGHT - PLAYER_CROUCH_HEIGHT) / 2.0;
    /// Player centre when resting on the ground
    pub const PLAYER_REST_Y: f32 = GROUND_Y - PLAYER_SIZE / 2.0;

    /// Player physics (per frame)
    pub const GRAVITY: f32 = 0.8;
    pub const JUMP_VELOCITY: f32 = -15.0;
    /// Leg phase flips once the timer exceeds this many grounded frames
    pub const LEG_ANIM_FRAMES: u32 = 5;

    /// Obstacle spawning
    pub const INITIAL_SPAWN_INTERVAL: u32 = 90;
    pub const SPAWN_INTERVAL_MIN: u32 = 90;
    pub const SPAWN_INTERVAL_MAX: u32 = 130;
    pub const GROUND_BLOCK_CHANCE: f32 = 0.7;
    pub const GROUND_BLOCK_HEIGHT_MIN: f32 = 30.0;
    pub const GROUND_BLOCK_HEIGHT_MAX: f32 = 60.0;
    pub const GROUND_BLOCK_WIDTH_MIN: f32 = 20.0;
    pub const GROUND_BLOCK_WIDTH_MAX: f32 = 40.0;
    pub const FLYER_WIDTH: f32 = 35.0;
    pub const FLYER_HEIGHT: f32 = 20.0;
    pub const FLYER_LIFT_MIN: f32 = 20.0;
    pub const FLYER_LIFT_MAX: f32 = 50.0;

    /// Difficulty curve
    pub const INITIAL_SCROLL_SPEED: f32 = 5.0;
    pub const SCROLL_ACCELERATION: f32 = 0.001;

    /// Glitch effect timing (frames)
    pub const GLITCH_DURATION_FRAMES: u64 = 4;
    pub const GLITCH_INTERVAL_MIN: u32 = 120;
    pub const GLITCH_INTERVAL_MAX: u32 = 300;

    /// Backdrop parallax
    pub const NUM_STARS: usize = 100;
    pub const STAR_SPEED_FACTOR: f32 = 0.2;
    pub const NUM_GRID_LINES: usize = 20;
    pub const GRID_LINE_SPEED_FACTOR: f32 = 0.5;
    pub const GROUND_GRID_SPACING: f32 = 50.0;
}
