//! Per-frame input.
//!
//! The game only ever sees a [`FrameInput`]: what was pressed since the last
//! frame. [`InputCollector`] builds one from crossterm events between frames.

use crate::core::geometry::Point;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Everything pressed during one frame. Presses are edge-triggered: holding
/// a key does not produce a new press each frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    /// World position of a pointer press (mouse click / touch), if any.
    pub pointer: Option<Point>,
    /// Jump key went down this frame.
    pub jump: bool,
    /// Keyboard confirm (Enter) went down this frame.
    pub confirm: bool,
}

impl FrameInput {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn tap(x: f64, y: f64) -> Self {
        Self {
            pointer: Some(Point::new(x, y)),
            ..Self::default()
        }
    }

    pub fn jump() -> Self {
        Self {
            jump: true,
            ..Self::default()
        }
    }

    pub fn confirm() -> Self {
        Self {
            confirm: true,
            ..Self::default()
        }
    }

    /// A "tap anywhere" press: pointer or keyboard confirm.
    pub fn pressed(&self) -> bool {
        self.pointer.is_some() || self.confirm
    }
}

/// UI-agnostic meaning of a single key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Jump,    // Space or Up
    Confirm, // Enter
    Quit,    // Esc, q, Ctrl-C
    Other,
}

/// Map a key event to its action. Releases and repeats map to `None`.
pub fn map_key(key: KeyEvent) -> Option<KeyAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let action = match key.code {
        KeyCode::Char(' ') | KeyCode::Up => KeyAction::Jump,
        KeyCode::Enter => KeyAction::Confirm,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => KeyAction::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        _ => KeyAction::Other,
    };
    Some(action)
}

/// Accumulates terminal events into the next [`FrameInput`].
#[derive(Debug, Default)]
pub struct InputCollector {
    pending: FrameInput,
    quit_requested: bool,
}

impl InputCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one terminal event in. `to_world` maps a terminal cell to a world
    /// point, returning `None` for cells outside the play field.
    pub fn handle_event<F>(&mut self, event: &Event, to_world: F)
    where
        F: Fn(u16, u16) -> Option<Point>,
    {
        match event {
            Event::Key(key) => match map_key(*key) {
                Some(KeyAction::Jump) => self.pending.jump = true,
                Some(KeyAction::Confirm) => self.pending.confirm = true,
                Some(KeyAction::Quit) => self.quit_requested = true,
                Some(KeyAction::Other) | None => {}
            },
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => {
                if let Some(point) = to_world(*column, *row) {
                    self.pending.pointer = Some(point);
                }
            }
            _ => {}
        }
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Hand over this frame's input and start collecting the next one.
    pub fn take(&mut self) -> FrameInput {
        std::mem::take(&mut self.pending)
    }
}
