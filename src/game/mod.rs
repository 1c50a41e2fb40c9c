//! The Dino Run gameplay session.
//!
//! A real-time runner: cacti scroll in from the right every few seconds, the
//! player jumps over them, and each hit costs one of three lives.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
