//! Dino Run - terminal side-scrolling jump game
//!
//! This module exposes the game logic for testing and external use.

pub mod build_info;
pub mod core;
pub mod game;
pub mod input;
pub mod render;
pub mod screens;
pub mod ui;
pub mod utils;

pub use crate::core::config::GameConfig;
pub use crate::game::{update_session, GamePhase, GameSession, SessionEvent};
pub use crate::input::FrameInput;
pub use crate::render::{DrawList, DrawSurface};
pub use crate::screens::{AppScreen, ScreenManager};
