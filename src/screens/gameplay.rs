//! Gameplay screen: drives a [`GameSession`] and draws it.

use crate::core::config::GameConfig;
use crate::core::constants::{HUD_LIVES_TOP_MARGIN, HUD_RIGHT_MARGIN, HUD_SCORE_TOP_MARGIN};
use crate::game::{update_session, GamePhase, GameSession, SessionEvent};
use crate::input::FrameInput;
use crate::render::{Asset, DrawSurface, TextStyle};

pub const START_PROMPT: &str = "Tap to Start";
pub const GAME_OVER_TITLE: &str = "Game Over!";
pub const GAME_OVER_PROMPT: &str = "Tap to Respawn";

/// Horizontal shift of the game-over text from screen center.
const GAME_OVER_X_SHIFT: f64 = 50.0;
/// Vertical gap between the two game-over lines.
const GAME_OVER_LINE_GAP: f64 = 50.0;

#[derive(Debug, Clone)]
pub struct GameScreen {
    pub session: GameSession,
}

impl GameScreen {
    /// A fresh session; `seed` fixes the cactus sequence.
    pub fn new(config: GameConfig, seed: Option<u64>) -> Self {
        let session = match seed {
            Some(seed) => GameSession::with_seed(config, seed),
            None => GameSession::new(config),
        };
        Self { session }
    }

    pub fn update(&mut self, dt: f64, input: &FrameInput) -> Vec<SessionEvent> {
        update_session(&mut self.session, dt, input)
    }

    pub fn render(&self, surface: &mut dyn DrawSurface) {
        match self.session.phase {
            GamePhase::NotStarted => {
                self.render_scene(surface);
                let (w, _) = surface.text_size(START_PROMPT, TextStyle::Banner);
                let c = &self.session.config;
                surface.draw_text(
                    START_PROMPT,
                    (c.screen_width - w) / 2.0,
                    c.screen_height / 2.0,
                    TextStyle::Banner,
                );
            }
            GamePhase::Playing => {
                self.render_scene(surface);
                if self.session.config.debug_bounds {
                    self.render_bounds(surface);
                }
            }
            GamePhase::GameOver => self.render_game_over(surface),
        }
    }

    /// Background, dino, HUD, then cacti.
    fn render_scene(&self, surface: &mut dyn DrawSurface) {
        let s = &self.session;
        let c = &s.config;

        // Two copies side by side make the scroll seamless
        surface.draw_sprite(
            Asset::Background,
            -s.bg_offset,
            0.0,
            c.screen_width,
            c.screen_height,
        );
        surface.draw_sprite(
            Asset::Background,
            -s.bg_offset + c.bg_width,
            0.0,
            c.screen_width,
            c.screen_height,
        );

        surface.draw_sprite(Asset::Dino, s.dino.x, s.dino.y, s.dino.width, s.dino.height);

        self.render_hud(surface);

        for obstacle in &s.obstacles {
            obstacle.render(surface);
        }
    }

    fn render_hud(&self, surface: &mut dyn DrawSurface) {
        let c = &self.session.config;
        let x = c.screen_width - HUD_RIGHT_MARGIN;
        surface.draw_text(
            &format!("Score: {}", self.session.displayed_score()),
            x,
            c.screen_height - HUD_SCORE_TOP_MARGIN,
            TextStyle::Hud,
        );
        surface.draw_text(
            &format!("Lives: {}", self.session.lives),
            x,
            c.screen_height - HUD_LIVES_TOP_MARGIN,
            TextStyle::Hud,
        );
    }

    fn render_bounds(&self, surface: &mut dyn DrawSurface) {
        surface.outline_rect(self.session.dino.bounds());
        for obstacle in &self.session.obstacles {
            surface.outline_rect(obstacle.bounds());
        }
    }

    fn render_game_over(&self, surface: &mut dyn DrawSurface) {
        let c = &self.session.config;
        let x = c.screen_width / 2.0 - GAME_OVER_X_SHIFT;
        let y = c.screen_height / 2.0;
        surface.draw_text(GAME_OVER_TITLE, x, y + GAME_OVER_LINE_GAP, TextStyle::Banner);
        surface.draw_text(GAME_OVER_PROMPT, x, y, TextStyle::Banner);
    }

    /// Release the session. Logs how it ended.
    pub fn dispose(&mut self) {
        log::info!(
            "leaving gameplay: phase {:?}, score {}, lives {}, {} cacti active",
            self.session.phase,
            self.session.displayed_score(),
            self.session.lives,
            self.session.obstacles.len()
        );
        self.session.obstacles.clear();
    }
}
