//! Mapping between world coordinates and terminal cells.
//!
//! The whole world (`world_width` x `world_height`, y-up) is stretched over
//! the play-field area. Row 0 of the area is the top of the world.

use crate::core::geometry::Point;
use ratatui::layout::Rect as TermRect;

/// Smallest play field worth drawing into.
pub const MIN_COLS: u16 = 20;
pub const MIN_ROWS: u16 = 8;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub area: TermRect,
    pub world_width: f64,
    pub world_height: f64,
}

impl Viewport {
    pub fn new(area: TermRect, world_width: f64, world_height: f64) -> Self {
        Self {
            area,
            world_width,
            world_height,
        }
    }

    pub fn is_usable(&self) -> bool {
        self.area.width >= MIN_COLS && self.area.height >= MIN_ROWS
    }

    /// World units per terminal column.
    pub fn cell_width(&self) -> f64 {
        self.world_width / self.area.width.max(1) as f64
    }

    /// World units per terminal row.
    pub fn cell_height(&self) -> f64 {
        self.world_height / self.area.height.max(1) as f64
    }

    /// Column (relative to the area) containing world `x`. May be out of range.
    pub fn col_of(&self, x: f64) -> i32 {
        (x / self.cell_width()).floor() as i32
    }

    /// Row (relative to the area) containing world `y`. May be out of range.
    pub fn row_of(&self, y: f64) -> i32 {
        self.area.height as i32 - 1 - (y / self.cell_height()).floor() as i32
    }

    /// World position of the center of an area-relative cell.
    pub fn cell_center(&self, col: i32, row: i32) -> Point {
        Point::new(
            (col as f64 + 0.5) * self.cell_width(),
            (self.area.height as f64 - row as f64 - 0.5) * self.cell_height(),
        )
    }

    /// World position under an absolute terminal cell, or `None` outside the
    /// play field.
    pub fn to_world(&self, column: u16, row: u16) -> Option<Point> {
        let a = self.area;
        if column < a.x || column >= a.x + a.width || row < a.y || row >= a.y + a.height {
            return None;
        }
        Some(self.cell_center((column - a.x) as i32, (row - a.y) as i32))
    }
}
