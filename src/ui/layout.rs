//! Outer frame and status bar around the play field.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub const TITLE: &str = " Dino Run ";

/// Areas returned by [`create_game_layout`].
pub struct GameLayout {
    /// Play field, inside the border.
    pub content: Rect,
    /// Two lines under the play field.
    pub status_bar: Rect,
}

/// Split `area` into a bordered play field with a status bar at the bottom.
///
/// ```text
/// ┌─ Dino Run ─────────────────────┐
/// │                                │
/// │   [play field]                 │
/// │                                │
/// │ [status bar - 2 lines]         │
/// └────────────────────────────────┘
/// ```
pub fn create_game_layout(frame: &mut Frame, area: Rect, border_color: Color) -> GameLayout {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(TITLE)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(2)])
        .split(inner);

    GameLayout {
        content: chunks[0],
        status_bar: chunks[1],
    }
}

/// Status message on line 1, `(key, action)` hints on line 2.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status_text: &str,
    status_color: Color,
    controls: &[(&str, &str)],
) {
    if area.height < 1 {
        return;
    }

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center);
    frame.render_widget(status, Rect { height: 1, ..area });

    if area.height >= 2 && !controls.is_empty() {
        let mut spans = Vec::new();
        for (i, (key, action)) in controls.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(*key, Style::default().fg(Color::White)));
            spans.push(Span::styled(
                format!(" {}", action),
                Style::default().fg(Color::DarkGray),
            ));
        }

        let controls_line = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(
            controls_line,
            Rect {
                y: area.y + 1,
                height: 1,
                ..area
            },
        );
    }
}

/// Centered notice shown when the terminal cannot fit the play field.
pub fn render_too_small(frame: &mut Frame, area: Rect, min_cols: u16, min_rows: u16) {
    if area.height == 0 {
        return;
    }
    let msg = format!(
        "Terminal too small ({}x{}), need at least {}x{}",
        area.width, area.height, min_cols, min_rows
    );
    let y = area.y + area.height / 2;
    let notice = Paragraph::new(msg)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center);
    frame.render_widget(notice, Rect { y, height: 1, ..area });
}
