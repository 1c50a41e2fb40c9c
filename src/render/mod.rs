//! The drawing boundary between the game and whatever displays it.
//!
//! Screens issue draw requests in world coordinates through [`DrawSurface`].
//! [`DrawList`] records them in order so a front end (the terminal renderer,
//! or a test) can consume them after the frame.

use crate::core::geometry::Rect;
use rand::Rng;

/// Handles to the drawable art the game knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Asset {
    Background,
    Dino,
    Cactus(CactusVariant),
}

/// The fixed palette of cactus sprites an obstacle may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CactusVariant {
    Saguaro,
    Twin,
    Cluster,
}

impl CactusVariant {
    pub const ALL: [CactusVariant; 3] = [
        CactusVariant::Saguaro,
        CactusVariant::Twin,
        CactusVariant::Cluster,
    ];

    /// Uniform pick from the palette.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Saguaro => "saguaro",
            Self::Twin => "twin",
            Self::Cluster => "cluster",
        }
    }
}

/// How a piece of text should look.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    /// Score and lives readout.
    Hud,
    /// Large centered messages ("Game Over!").
    Banner,
    /// Menu title.
    Title,
    /// Label drawn on top of a button.
    ButtonLabel,
    /// Help and prompt text.
    Hint,
}

/// Solid fills for shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    Button,
    Panel,
}

/// Anything the game can draw onto.
pub trait DrawSurface {
    /// Draw `asset` stretched over the rectangle with bottom-left `(x, y)`.
    fn draw_sprite(&mut self, asset: Asset, x: f64, y: f64, width: f64, height: f64);

    /// Draw text hanging down from its top-left corner at `(x, y)`.
    fn draw_text(&mut self, text: &str, x: f64, y: f64, style: TextStyle);

    fn fill_rect(&mut self, rect: Rect, fill: Fill);

    /// Outline only; used by the collision debug overlay.
    fn outline_rect(&mut self, rect: Rect);

    /// Width and height `text` would occupy, in world units.
    fn text_size(&self, text: &str, style: TextStyle) -> (f64, f64);
}

/// One recorded draw request.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Sprite { asset: Asset, rect: Rect },
    Text {
        text: String,
        x: f64,
        y: f64,
        style: TextStyle,
    },
    Fill { rect: Rect, fill: Fill },
    Outline { rect: Rect },
}

/// Glyph cell size used by [`DrawList::new`], in world units.
pub const DEFAULT_GLYPH_WIDTH: f64 = 10.0;
pub const DEFAULT_GLYPH_HEIGHT: f64 = 20.0;

/// A [`DrawSurface`] that records every request in call order.
///
/// Text is measured on a fixed glyph grid; the terminal front end sets the
/// grid to one terminal cell.
#[derive(Debug, Clone)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
    glyph_width: f64,
    glyph_height: f64,
}

impl Default for DrawList {
    fn default() -> Self {
        Self::with_glyph_size(DEFAULT_GLYPH_WIDTH, DEFAULT_GLYPH_HEIGHT)
    }
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_glyph_size(glyph_width: f64, glyph_height: f64) -> Self {
        Self {
            commands: Vec::new(),
            glyph_width,
            glyph_height,
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// All recorded text, in draw order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Rectangles at which `asset` was drawn, in draw order.
    pub fn sprites_of(&self, asset: Asset) -> Vec<Rect> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Sprite { asset: a, rect } if *a == asset => Some(*rect),
                _ => None,
            })
            .collect()
    }

    pub fn outlines(&self) -> Vec<Rect> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Outline { rect } => Some(*rect),
                _ => None,
            })
            .collect()
    }
}

impl DrawSurface for DrawList {
    fn draw_sprite(&mut self, asset: Asset, x: f64, y: f64, width: f64, height: f64) {
        self.commands.push(DrawCommand::Sprite {
            asset,
            rect: Rect::new(x, y, width, height),
        });
    }

    fn draw_text(&mut self, text: &str, x: f64, y: f64, style: TextStyle) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            style,
        });
    }

    fn fill_rect(&mut self, rect: Rect, fill: Fill) {
        self.commands.push(DrawCommand::Fill { rect, fill });
    }

    fn outline_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::Outline { rect });
    }

    fn text_size(&self, text: &str, _style: TextStyle) -> (f64, f64) {
        (
            text.chars().count() as f64 * self.glyph_width,
            self.glyph_height,
        )
    }
}
