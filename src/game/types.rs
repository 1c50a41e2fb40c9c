//! Dino Run data structures.
//!
//! A side-scroller where the dino jumps over cacti rolling in from the right.
//! Coordinates are world units, y-up, origin at the bottom-left of the screen.

use crate::core::config::GameConfig;
use crate::core::constants::{
    CACTUS_BOUNDS_HEIGHT_SHRINK, CACTUS_BOUNDS_OFFSET, CACTUS_BOUNDS_WIDTH_SHRINK,
};
use crate::core::geometry::Rect;
use crate::render::{Asset, CactusVariant, DrawSurface};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Where the session is in its life.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Scene is drawn but frozen until the first press.
    NotStarted,
    Playing,
    /// All lives spent. Simulation stops until a press restarts.
    GameOver,
}

/// One scrolling cactus.
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Horizontal speed in units/s (negative = leftward).
    pub speed: f64,
    pub variant: CactusVariant,
    bounds: Rect,
}

impl Obstacle {
    pub fn new(variant: CactusVariant, x: f64, y: f64, width: f64, height: f64, speed: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            speed,
            variant,
            bounds: Rect::new(
                x + CACTUS_BOUNDS_OFFSET,
                y + CACTUS_BOUNDS_OFFSET,
                width - CACTUS_BOUNDS_WIDTH_SHRINK,
                height - CACTUS_BOUNDS_HEIGHT_SHRINK,
            ),
        }
    }

    /// Scroll by `speed * dt`; the hitbox follows with the same inset.
    pub fn update(&mut self, dt: f64) {
        self.x += self.speed * dt;
        self.bounds
            .set_position(self.x + CACTUS_BOUNDS_OFFSET, self.y + CACTUS_BOUNDS_OFFSET);
    }

    /// Collision rectangle, inset from the sprite.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Full sprite extent.
    pub fn sprite_rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// True once the sprite has scrolled entirely past the left edge.
    pub fn is_offscreen(&self) -> bool {
        self.x + self.width < 0.0
    }

    pub fn render(&self, surface: &mut dyn DrawSurface) {
        surface.draw_sprite(
            Asset::Cactus(self.variant),
            self.x,
            self.y,
            self.width,
            self.height,
        );
    }
}

/// The player character. Horizontal position never changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Dino {
    pub x: f64,
    /// Height of the dino's feet above the screen bottom.
    pub y: f64,
    /// Vertical velocity in units/s (positive = upward).
    pub velocity: f64,
    pub width: f64,
    pub height: f64,
}

impl Dino {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            x: config.dino_x,
            y: config.ground_y,
            velocity: 0.0,
            width: config.dino_width,
            height: config.dino_height,
        }
    }

    /// Collision rectangle; identical to the sprite.
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// Main game state.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub config: GameConfig,
    pub phase: GamePhase,

    pub dino: Dino,
    /// Active cacti, oldest first.
    pub obstacles: Vec<Obstacle>,

    /// Seconds survived. Displayed floored.
    pub score: f64,
    pub lives: u32,

    /// Background scroll distance, kept in `[0, bg_width)`.
    pub bg_offset: f64,
    /// Seconds since the last cactus spawn.
    pub spawn_timer: f64,

    rng: StdRng,
}

impl GameSession {
    /// New session waiting for the first press, with one cactus queued.
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Same as [`GameSession::new`] with a reproducible cactus sequence.
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, rng: StdRng) -> Self {
        let mut session = Self {
            dino: Dino::new(&config),
            phase: GamePhase::NotStarted,
            obstacles: Vec::new(),
            score: 0.0,
            lives: config.starting_lives,
            bg_offset: 0.0,
            spawn_timer: 0.0,
            config,
            rng,
        };
        session.spawn_obstacle();
        session
    }

    /// Put everything back to its starting values and go straight to
    /// `Playing`. The RNG keeps its stream.
    pub fn restart(&mut self) {
        self.dino = Dino::new(&self.config);
        self.obstacles.clear();
        self.score = 0.0;
        self.lives = self.config.starting_lives;
        self.bg_offset = 0.0;
        self.spawn_timer = 0.0;
        self.spawn_obstacle();
        self.phase = GamePhase::Playing;
    }

    /// Append one cactus at the right edge of the screen.
    pub fn spawn_obstacle(&mut self) {
        let variant = CactusVariant::random(&mut self.rng);
        self.obstacles.push(Obstacle::new(
            variant,
            self.config.screen_width,
            self.config.cactus_y,
            self.config.cactus_width,
            self.config.cactus_height,
            self.config.cactus_speed,
        ));
        log::debug!(
            "spawned {} cactus, {} active",
            variant.name(),
            self.obstacles.len()
        );
    }

    /// Score as shown on screen.
    pub fn displayed_score(&self) -> u64 {
        self.score.max(0.0).floor() as u64
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}
