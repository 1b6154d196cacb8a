//! Session state machine and the per-frame update
//!
//! One `Session` owns every piece of simulation state plus the only random
//! generator. Commands are plain `&mut self` calls, so they always land
//! strictly between two ticks.

use serde::{Deserialize, Serialize};

use super::backdrop::Backdrop;
use super::difficulty::Difficulty;
use super::geometry::Rect;
use super::glitch::GlitchScheduler;
use super::obstacle::{Obstacle, ObstacleKind, ObstacleManager};
use super::player::Player;
use super::rng::{GameRng, SeededRng};

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Collided; frozen until a restart is requested
    GameOver,
}

/// Notable things that happened during a tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The player hit an obstacle and the session ended
    Collision {
        kind: ObstacleKind,
        score: u64,
        new_high_score: bool,
    },
}

/// Input commands gathered for a single tick (applied before it runs)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TickInput {
    /// Jump (space/click)
    pub jump: bool,
    /// Press (`Some(true)`) or release (`Some(false)`) crouch
    pub crouch: Option<bool>,
    /// Start a new session after game over (enter/click)
    pub restart: bool,
}

/// Read-only view of everything a renderer needs
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot<'a> {
    pub frame: u64,
    pub phase: GamePhase,
    pub player: &'a Player,
    pub hitbox: Rect,
    pub obstacles: &'a [Obstacle],
    pub score: u64,
    pub high_score: u64,
    pub scroll_speed: f32,
    pub glitch_active: bool,
    pub backdrop: &'a Backdrop,
}

/// A running game: player, obstacles, difficulty, glitch timer and backdrop
#[derive(Debug, Clone)]
pub struct Session<R: GameRng = SeededRng> {
    rng: R,
    /// Frames since creation, never reset
    frame: u64,
    phase: GamePhase,
    player: Player,
    obstacles: ObstacleManager,
    difficulty: Difficulty,
    glitch: GlitchScheduler,
    backdrop: Backdrop,
}

impl Session<SeededRng> {
    /// New session driven by a seeded PCG generator
    pub fn new(seed: u64) -> Self {
        log::info!("Session created with seed: {}", seed);
        Self::with_rng(SeededRng::new(seed))
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

impl<R: GameRng> Session<R> {
    /// New session drawing from the given generator
    pub fn with_rng(mut rng: R) -> Self {
        let backdrop = Backdrop::generate(&mut rng);
        let mut glitch = GlitchScheduler::default();
        glitch.reset(0, &mut rng);
        Self {
            rng,
            frame: 0,
            phase: GamePhase::Playing,
            player: Player::default(),
            obstacles: ObstacleManager::new(),
            difficulty: Difficulty::default(),
            glitch,
            backdrop,
        }
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        self.obstacles.obstacles()
    }

    pub fn difficulty(&self) -> &Difficulty {
        &self.difficulty
    }

    pub fn glitch(&self) -> &GlitchScheduler {
        &self.glitch
    }

    pub fn backdrop(&self) -> &Backdrop {
        &self.backdrop
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Place an obstacle directly (scripted scenarios, tests)
    pub fn spawn_obstacle(&mut self, obstacle: Obstacle) {
        self.obstacles.push(obstacle);
    }

    /// Remove every live obstacle without touching the spawn timer
    pub fn clear_obstacles(&mut self) {
        self.obstacles.clear();
    }

    /// Jump if playing, grounded and standing. Otherwise a no-op.
    pub fn request_jump(&mut self) {
        if self.phase != GamePhase::Playing {
            return;
        }
        if self.player.try_jump() {
            log::trace!("Jump at frame {}", self.frame);
        }
    }

    /// Press or release crouch. Pressing only works on the ground while
    /// playing; releasing always works.
    pub fn set_crouch(&mut self, crouch: bool) {
        if crouch && self.phase != GamePhase::Playing {
            return;
        }
        self.player.set_crouch(crouch);
    }

    /// Start a fresh session after game over. A no-op while playing.
    pub fn request_restart(&mut self) {
        if self.phase != GamePhase::GameOver {
            return;
        }
        self.difficulty.end_session();

        self.player.reset();
        self.obstacles.reset();
        self.difficulty.reset();
        self.glitch.reset(self.frame, &mut self.rng);
        self.player.set_crouch(false);

        self.phase = GamePhase::Playing;
        log::info!(
            "Restarted at frame {} (high score {})",
            self.frame,
            self.difficulty.high_score
        );
    }

    /// Apply a frame's commands, then advance one tick
    pub fn step(&mut self, input: &TickInput) -> Option<GameEvent> {
        if let Some(crouch) = input.crouch {
            self.set_crouch(crouch);
        }
        if input.jump {
            self.request_jump();
        }
        if input.restart {
            self.request_restart();
        }
        self.tick()
    }

    /// Advance the simulation by one frame
    pub fn tick(&mut self) -> Option<GameEvent> {
        self.frame += 1;

        // Parallax keeps drifting behind the game over screen
        self.backdrop.scroll(self.difficulty.scroll_speed, &mut self.rng);

        if self.phase == GamePhase::GameOver {
            return None;
        }

        self.difficulty.tick();
        self.backdrop.advance_ground(self.difficulty.scroll_speed);
        if self.glitch.tick(self.frame, &mut self.rng) {
            log::debug!(
                "Glitch at frame {}, next after {}",
                self.frame,
                self.glitch.next_trigger
            );
        }
        if let Some(kind) = self.obstacles.spawn_tick(&mut self.rng) {
            log::debug!(
                "Spawned {:?} at frame {} ({} live)",
                kind,
                self.frame,
                self.obstacles.len()
            );
        }
        self.player.advance();

        let hitbox = self.player.hitbox();
        let hit = self
            .obstacles
            .advance_and_collect(self.difficulty.scroll_speed, &hitbox)?;

        self.phase = GamePhase::GameOver;
        let new_high_score = self.difficulty.end_session();
        log::info!(
            "Game over at frame {}: hit {:?}, score {}{}",
            self.frame,
            hit.kind,
            self.difficulty.score,
            if new_high_score { " (new high score)" } else { "" }
        );
        Some(GameEvent::Collision {
            kind: hit.kind,
            score: self.difficulty.score,
            new_high_score,
        })
    }

    /// Run up to `frames` ticks, stopping early at game over
    pub fn run(&mut self, frames: u64) -> Option<GameEvent> {
        for _ in 0..frames {
            if let Some(event) = self.tick() {
                return Some(event);
            }
        }
        None
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            frame: self.frame,
            phase: self.phase,
            player: &self.player,
            hitbox: self.player.hitbox(),
            obstacles: self.obstacles.obstacles(),
            score: self.difficulty.score,
            high_score: self.difficulty.high_score,
            scroll_speed: self.difficulty.scroll_speed,
            glitch_active: self.glitch.active,
            backdrop: &self.backdrop,
        }
    }
}
