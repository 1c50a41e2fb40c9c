//! Tunable game parameters.
//!
//! Every field has a default from `constants`; a JSON config file only needs
//! the fields it wants to change.

use super::constants::*;
use serde::{Deserialize, Serialize};
use std::io;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub screen_width: f64,
    pub screen_height: f64,

    pub dino_x: f64,
    pub ground_y: f64,
    pub dino_width: f64,
    pub dino_height: f64,
    /// Vertical acceleration in units/s² (negative pulls down).
    pub gravity: f64,
    /// Velocity set by a jump, in units/s.
    pub jump_velocity: f64,

    pub starting_lives: u32,

    pub bg_scroll_speed: f64,
    /// Pixel width of the background art; the scroll offset wraps at this.
    pub bg_width: f64,

    /// Seconds between cactus spawns.
    pub spawn_delay: f64,
    pub cactus_y: f64,
    pub cactus_width: f64,
    pub cactus_height: f64,
    pub cactus_speed: f64,

    pub target_fps: u32,
    /// Upper bound on the frame delta handed to the simulation.
    pub max_frame_dt: f64,

    /// Outline collision rectangles while playing.
    pub debug_bounds: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            dino_x: DINO_X,
            ground_y: DINO_GROUND_Y,
            dino_width: DINO_WIDTH,
            dino_height: DINO_HEIGHT,
            gravity: GRAVITY,
            jump_velocity: JUMP_VELOCITY,
            starting_lives: STARTING_LIVES,
            bg_scroll_speed: BG_SCROLL_SPEED,
            bg_width: BG_WIDTH,
            spawn_delay: CACTUS_SPAWN_DELAY,
            cactus_y: CACTUS_Y,
            cactus_width: CACTUS_WIDTH,
            cactus_height: CACTUS_HEIGHT,
            cactus_speed: CACTUS_SPEED,
            target_fps: TARGET_FPS,
            max_frame_dt: MAX_FRAME_DT,
            debug_bounds: false,
        }
    }
}

impl GameConfig {
    /// Highest allowed y for the dino's feet.
    pub fn ceiling_y(&self) -> f64 {
        self.screen_height - self.dino_height
    }

    /// Wall-clock budget for one frame at `target_fps`.
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.target_fps.max(1) as f64)
    }

    /// Reject configurations the simulation cannot run with.
    pub fn validate(&self) -> io::Result<()> {
        let finite = [
            ("dino_x", self.dino_x),
            ("ground_y", self.ground_y),
            ("gravity", self.gravity),
            ("jump_velocity", self.jump_velocity),
            ("bg_scroll_speed", self.bg_scroll_speed),
            ("cactus_y", self.cactus_y),
            ("cactus_speed", self.cactus_speed),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(invalid(format!("{} must be a finite number, got {}", name, value)));
            }
        }

        let positive = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("dino_width", self.dino_width),
            ("dino_height", self.dino_height),
            ("bg_width", self.bg_width),
            ("spawn_delay", self.spawn_delay),
            ("cactus_width", self.cactus_width),
            ("cactus_height", self.cactus_height),
            ("max_frame_dt", self.max_frame_dt),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid(format!("{} must be positive, got {}", name, value)));
            }
        }

        // The background only scrolls left; the offset wraps at bg_width
        if self.bg_scroll_speed < 0.0 {
            return Err(invalid(format!(
                "bg_scroll_speed must not be negative, got {}",
                self.bg_scroll_speed
            )));
        }
        if self.target_fps == 0 {
            return Err(invalid("target_fps must be at least 1".to_string()));
        }
        if self.starting_lives == 0 {
            return Err(invalid("starting_lives must be at least 1".to_string()));
        }
        if self.ground_y > self.ceiling_y() {
            return Err(invalid(format!(
                "ground_y {} is above the ceiling {} (screen_height - dino_height)",
                self.ground_y,
                self.ceiling_y()
            )));
        }

        Ok(())
    }
}

fn invalid(message: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, message)
}
