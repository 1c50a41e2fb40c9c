//! Screen state machine: main menu and gameplay.
//!
//! One screen is active at a time. Each frame the active screen updates with
//! the frame's input, then draws. Switching screens disposes the old one.

pub mod gameplay;
pub mod menu;

pub use gameplay::GameScreen;
pub use menu::{MainMenu, MenuAction};

use crate::core::config::GameConfig;
use crate::input::FrameInput;
use crate::render::DrawSurface;

/// A request from the active screen to switch screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    StartGame,
}

/// The currently active screen.
#[derive(Debug, Clone)]
pub enum AppScreen {
    MainMenu(MainMenu),
    Gameplay(Box<GameScreen>),
}

impl AppScreen {
    pub fn name(&self) -> &'static str {
        match self {
            Self::MainMenu(_) => "main menu",
            Self::Gameplay(_) => "gameplay",
        }
    }

    /// Update with this frame's input, then draw.
    pub fn frame(
        &mut self,
        dt: f64,
        input: &FrameInput,
        surface: &mut dyn DrawSurface,
    ) -> Option<Transition> {
        match self {
            Self::MainMenu(menu) => {
                let action = menu.update(input);
                menu.render(surface);
                match action {
                    Some(MenuAction::StartGame) => Some(Transition::StartGame),
                    Some(MenuAction::ToggleControls) | None => None,
                }
            }
            Self::Gameplay(game) => {
                game.update(dt, input);
                game.render(surface);
                None
            }
        }
    }

    pub fn dispose(&mut self) {
        match self {
            Self::MainMenu(_) => {}
            Self::Gameplay(game) => game.dispose(),
        }
    }
}

/// Owns the active screen and applies transitions.
#[derive(Debug)]
pub struct ScreenManager {
    config: GameConfig,
    seed: Option<u64>,
    screen: AppScreen,
}

impl ScreenManager {
    /// Start at the main menu.
    pub fn new(config: GameConfig, seed: Option<u64>) -> Self {
        let screen = AppScreen::MainMenu(MainMenu::new(&config));
        Self {
            config,
            seed,
            screen,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn screen(&self) -> &AppScreen {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut AppScreen {
        &mut self.screen
    }

    /// Run one frame on the active screen and apply any transition it asks for.
    pub fn frame(&mut self, dt: f64, input: &FrameInput, surface: &mut dyn DrawSurface) {
        if let Some(transition) = self.screen.frame(dt, input, surface) {
            self.apply(transition);
        }
    }

    fn apply(&mut self, transition: Transition) {
        let next = match transition {
            Transition::StartGame => {
                AppScreen::Gameplay(Box::new(GameScreen::new(self.config.clone(), self.seed)))
            }
        };
        let mut previous = std::mem::replace(&mut self.screen, next);
        log::info!("{} -> {}", previous.name(), self.screen.name());
        previous.dispose();
    }

    /// Tear down the active screen.
    pub fn dispose(&mut self) {
        log::info!("disposing {}", self.screen.name());
        self.screen.dispose();
    }
}
