//! Constants, configuration and geometry shared by the game and its screens.

pub mod config;
pub mod constants;
pub mod geometry;

pub use config::GameConfig;
pub use geometry::{Point, Rect};
