//! Rasterizes a [`DrawList`] into a grid of colored cells, then stamps the
//! grid row-by-row as Paragraph widgets.

use super::sprites::sprite_for;
use super::viewport::Viewport;
use crate::core::geometry::Rect;
use crate::render::{DrawCommand, DrawList, Fill, TextStyle};
use ratatui::{
    layout::Rect as TermRect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const OUTLINE_CHAR: char = '·';
const OUTLINE_COLOR: Color = Color::LightRed;

/// Cell in the render buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
    pub bold: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::Reset,
            bg: Color::Reset,
            bold: false,
        }
    }
}

/// A viewport-sized grid of cells.
#[derive(Debug, Clone)]
pub struct Canvas {
    viewport: Viewport,
    cells: Vec<Vec<Cell>>,
}

impl Canvas {
    pub fn new(viewport: Viewport) -> Self {
        let cols = viewport.area.width as usize;
        let rows = viewport.area.height as usize;
        Self {
            viewport,
            cells: vec![vec![Cell::default(); cols]; rows],
        }
    }

    pub fn cols(&self) -> i32 {
        self.viewport.area.width as i32
    }

    pub fn rows(&self) -> i32 {
        self.viewport.area.height as i32
    }

    pub fn cell(&self, col: i32, row: i32) -> Option<&Cell> {
        if col < 0 || row < 0 {
            return None;
        }
        self.cells.get(row as usize)?.get(col as usize)
    }

    fn cell_mut(&mut self, col: i32, row: i32) -> Option<&mut Cell> {
        if col < 0 || row < 0 {
            return None;
        }
        self.cells.get_mut(row as usize)?.get_mut(col as usize)
    }

    /// Text of one row, for tests and debugging.
    pub fn row_text(&self, row: usize) -> String {
        self.cells
            .get(row)
            .map(|r| r.iter().map(|c| c.ch).collect())
            .unwrap_or_default()
    }

    /// Paint every command in order; later commands cover earlier ones.
    pub fn paint(&mut self, list: &DrawList) {
        for command in list.commands() {
            match command {
                DrawCommand::Sprite { asset, rect } => {
                    let sprite = sprite_for(*asset);
                    self.paint_art(*rect, &sprite.rows(), sprite.fg);
                }
                DrawCommand::Text { text, x, y, style } => self.paint_text(text, *x, *y, *style),
                DrawCommand::Fill { rect, fill } => self.paint_fill(*rect, *fill),
                DrawCommand::Outline { rect } => self.paint_outline(*rect),
            }
        }
    }

    /// Cell range (inclusive) covered by a world rectangle, clipped to the grid.
    fn cell_span(&self, rect: Rect) -> Option<(i32, i32, i32, i32)> {
        let v = &self.viewport;
        let col0 = v.col_of(rect.x).max(0);
        let col1 = v.col_of(rect.right()).min(self.cols() - 1);
        let row0 = v.row_of(rect.top()).max(0);
        let row1 = v.row_of(rect.y).min(self.rows() - 1);
        if col0 > col1 || row0 > row1 {
            None
        } else {
            Some((col0, row0, col1, row1))
        }
    }

    /// Stretch `art` over `rect`, sampling at each cell center.
    fn paint_art(&mut self, rect: Rect, art: &[Vec<char>], fg: Color) {
        let art_h = art.len();
        let art_w = art.first().map_or(0, |r| r.len());
        if art_w == 0 || art_h == 0 || rect.width <= 0.0 || rect.height <= 0.0 {
            return;
        }
        let Some((col0, row0, col1, row1)) = self.cell_span(rect) else {
            return;
        };

        for row in row0..=row1 {
            for col in col0..=col1 {
                let p = self.viewport.cell_center(col, row);
                let u = (p.x - rect.x) / rect.width;
                let v = (rect.top() - p.y) / rect.height;
                if !(0.0..1.0).contains(&u) || !(0.0..1.0).contains(&v) {
                    continue;
                }
                let ch = art[(v * art_h as f64) as usize][(u * art_w as f64) as usize];
                if ch == ' ' {
                    continue;
                }
                if let Some(cell) = self.cell_mut(col, row) {
                    cell.ch = ch;
                    cell.fg = fg;
                    cell.bold = false;
                }
            }
        }
    }

    fn paint_text(&mut self, text: &str, x: f64, y: f64, style: TextStyle) {
        // Text hangs below y: the first row is the one just under it
        let row = self.viewport.row_of(y - self.viewport.cell_height() / 2.0);
        let col = (x / self.viewport.cell_width()).round() as i32;
        let (fg, bold) = text_color(style);

        for (i, ch) in text.chars().enumerate() {
            if let Some(cell) = self.cell_mut(col + i as i32, row) {
                cell.ch = ch;
                cell.fg = fg;
                cell.bold = bold;
            }
        }
    }

    fn paint_fill(&mut self, rect: Rect, fill: Fill) {
        let Some((col0, row0, col1, row1)) = self.cell_span(rect) else {
            return;
        };
        let bg = fill_color(fill);
        for row in row0..=row1 {
            for col in col0..=col1 {
                if !rect.contains(self.viewport.cell_center(col, row)) {
                    continue;
                }
                if let Some(cell) = self.cell_mut(col, row) {
                    *cell = Cell {
                        bg,
                        ..Cell::default()
                    };
                }
            }
        }
    }

    fn paint_outline(&mut self, rect: Rect) {
        let v = self.viewport;
        let (col0, col1) = (v.col_of(rect.x), v.col_of(rect.right()));
        let (row0, row1) = (v.row_of(rect.top()), v.row_of(rect.y));

        for col in col0..=col1 {
            for row in [row0, row1] {
                self.mark_outline(col, row);
            }
        }
        for row in row0..=row1 {
            for col in [col0, col1] {
                self.mark_outline(col, row);
            }
        }
    }

    fn mark_outline(&mut self, col: i32, row: i32) {
        if let Some(cell) = self.cell_mut(col, row) {
            cell.ch = OUTLINE_CHAR;
            cell.fg = OUTLINE_COLOR;
        }
    }

    /// Stamp the grid into the frame, merging runs of identical style.
    pub fn render(&self, frame: &mut Frame) {
        let area = self.viewport.area;

        for (row_idx, row_data) in self.cells.iter().enumerate() {
            let mut spans: Vec<Span> = Vec::new();
            let mut current = Cell::default();
            let mut current_text = String::new();

            for &cell in row_data.iter() {
                let same_style =
                    cell.fg == current.fg && cell.bg == current.bg && cell.bold == current.bold;
                if !same_style && !current_text.is_empty() {
                    spans.push(Span::styled(
                        std::mem::take(&mut current_text),
                        cell_style(&current),
                    ));
                }
                current = cell;
                current_text.push(cell.ch);
            }
            if !current_text.is_empty() {
                spans.push(Span::styled(current_text, cell_style(&current)));
            }

            let line = Paragraph::new(Line::from(spans));
            let row_area = TermRect::new(area.x, area.y + row_idx as u16, area.width, 1);
            frame.render_widget(line, row_area);
        }
    }
}

fn cell_style(cell: &Cell) -> Style {
    let style = Style::default().fg(cell.fg).bg(cell.bg);
    if cell.bold {
        style.add_modifier(Modifier::BOLD)
    } else {
        style
    }
}

fn text_color(style: TextStyle) -> (Color, bool) {
    match style {
        TextStyle::Hud => (Color::White, false),
        TextStyle::Banner => (Color::LightRed, true),
        TextStyle::Title => (Color::White, true),
        TextStyle::ButtonLabel => (Color::White, true),
        TextStyle::Hint => (Color::Gray, false),
    }
}

fn fill_color(fill: Fill) -> Color {
    match fill {
        Fill::Button => Color::Rgb(50, 125, 255),
        Fill::Panel => Color::Rgb(40, 40, 48),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{Asset, DrawSurface};

    fn canvas() -> Canvas {
        // 10 x 20 world units per cell
        Canvas::new(Viewport::new(TermRect::new(0, 0, 80, 24), 800.0, 480.0))
    }

    #[test]
    fn test_text_lands_on_expected_cells() {
        let mut c = canvas();
        let mut list = DrawList::with_glyph_size(10.0, 20.0);
        list.draw_text("Score: 3", 700.0, 470.0, TextStyle::Hud);
        c.paint(&list);

        assert!(c.row_text(0).contains("Score: 3"));
        assert_eq!(c.cell(70, 0).map(|cell| cell.ch), Some('S'));
    }

    #[test]
    fn test_text_clipped_at_edge() {
        let mut c = canvas();
        let mut list = DrawList::new();
        list.draw_text("overflowing", 780.0, 470.0, TextStyle::Hint);
        c.paint(&list);
        assert_eq!(c.row_text(0).trim_end(), format!("{}ov", " ".repeat(78)));
    }

    #[test]
    fn test_fill_covers_rect() {
        let mut c = canvas();
        let mut list = DrawList::new();
        list.fill_rect(Rect::new(300.0, 200.0, 200.0, 60.0), Fill::Button);
        c.paint(&list);

        let filled: usize = (0..24)
            .flat_map(|row| (0..80).map(move |col| (col, row)))
            .filter(|&(col, row)| c.cell(col, row).map(|cell| cell.bg) == Some(fill_color(Fill::Button)))
            .count();
        // 20 columns by 3 rows
        assert_eq!(filled, 60);
    }

    #[test]
    fn test_sprite_clipped_offscreen() {
        let mut c = canvas();
        let mut list = DrawList::new();
        list.draw_sprite(Asset::Dino, -2000.0, 125.0, 88.0, 94.0);
        list.draw_sprite(Asset::Dino, 5000.0, 125.0, 88.0, 94.0);
        c.paint(&list);
        for row in 0..24 {
            assert!(c.row_text(row).trim().is_empty());
        }
    }

    #[test]
    fn test_sprite_drawn_inside_rect() {
        let mut c = canvas();
        let mut list = DrawList::new();
        list.draw_sprite(Asset::Dino, 50.0, 125.0, 88.0, 94.0);
        c.paint(&list);

        let mut painted = Vec::new();
        for row in 0..24 {
            for col in 0..80 {
                if c.cell(col, row).map(|cell| cell.ch) != Some(' ') {
                    painted.push((col, row));
                }
            }
        }
        assert!(!painted.is_empty());
        for (col, row) in painted {
            assert!((5..=13).contains(&col), "col {} outside dino", col);
            assert!((13..=17).contains(&row), "row {} outside dino", row);
        }
    }

    #[test]
    fn test_outline_marks_border() {
        let mut c = canvas();
        let mut list = DrawList::new();
        list.outline_rect(Rect::new(100.0, 100.0, 100.0, 100.0));
        c.paint(&list);

        // cols 10..=20, rows 13..=18
        assert_eq!(c.cell(12, 13).map(|cell| cell.ch), Some(OUTLINE_CHAR));
        assert_eq!(c.cell(20, 18).map(|cell| cell.ch), Some(OUTLINE_CHAR));
        assert_eq!(c.cell(15, 16).map(|cell| cell.ch), Some(' '));
    }

    #[test]
    fn test_later_commands_cover_earlier() {
        let mut c = canvas();
        let mut list = DrawList::new();
        list.fill_rect(Rect::new(0.0, 0.0, 800.0, 480.0), Fill::Panel);
        list.draw_text("X", 0.0, 480.0, TextStyle::Title);
        c.paint(&list);
        assert_eq!(c.cell(0, 0).map(|cell| cell.ch), Some('X'));
    }
}
