pub mod canvas;
pub mod layout;
pub mod sprites;
pub mod viewport;

use crate::game::GamePhase;
use crate::input::FrameInput;
use crate::render::DrawList;
use crate::screens::{AppScreen, ScreenManager};
use canvas::Canvas;
use layout::{create_game_layout, render_status_bar, render_too_small};
use ratatui::{style::Color, Frame};
use viewport::{Viewport, MIN_COLS, MIN_ROWS};

/// Status bar contents: message, its color, and key hints.
pub struct StatusLine {
    pub text: String,
    pub color: Color,
    pub controls: &'static [(&'static str, &'static str)],
}

const MENU_CONTROLS: &[(&str, &str)] = &[
    ("[Enter]", "Start"),
    ("[Click]", "Select"),
    ("[Esc]", "Quit"),
];
const READY_CONTROLS: &[(&str, &str)] = &[("[Space/Click]", "Start"), ("[Esc]", "Quit")];
const PLAYING_CONTROLS: &[(&str, &str)] = &[("[Space/Up]", "Jump"), ("[Esc]", "Quit")];
const GAME_OVER_CONTROLS: &[(&str, &str)] = &[("[Enter/Click]", "Respawn"), ("[Esc]", "Quit")];

pub fn status_line(screen: &AppScreen) -> StatusLine {
    match screen {
        AppScreen::MainMenu(menu) => StatusLine {
            text: if menu.showing_controls {
                "Controls".to_string()
            } else {
                "Main menu".to_string()
            },
            color: Color::Cyan,
            controls: MENU_CONTROLS,
        },
        AppScreen::Gameplay(game) => {
            let session = &game.session;
            match session.phase {
                GamePhase::NotStarted => StatusLine {
                    text: "Ready".to_string(),
                    color: Color::Yellow,
                    controls: READY_CONTROLS,
                },
                GamePhase::Playing => StatusLine {
                    text: format!(
                        "Running  {}s  {} {}",
                        session.displayed_score(),
                        session.lives,
                        if session.lives == 1 { "life" } else { "lives" }
                    ),
                    color: Color::Green,
                    controls: PLAYING_CONTROLS,
                },
                GamePhase::GameOver => StatusLine {
                    text: format!("Game over after {}s", session.displayed_score()),
                    color: Color::LightRed,
                    controls: GAME_OVER_CONTROLS,
                },
            }
        }
    }
}

/// Draw one frame: run the active screen into a draw list, rasterize it into
/// the play field, then the status bar.
///
/// Returns the play field's viewport, or `None` when the terminal is too
/// small. The screen is not advanced in that case.
pub fn draw_frame(
    frame: &mut Frame,
    manager: &mut ScreenManager,
    dt: f64,
    input: &FrameInput,
) -> Option<Viewport> {
    let area = frame.size();
    let layout = create_game_layout(frame, area, Color::Yellow);
    let config = manager.config();
    let viewport = Viewport::new(layout.content, config.screen_width, config.screen_height);

    if !viewport.is_usable() {
        render_too_small(frame, layout.content, MIN_COLS, MIN_ROWS);
        return None;
    }

    let mut list = DrawList::with_glyph_size(viewport.cell_width(), viewport.cell_height());
    manager.frame(dt, input, &mut list);

    let mut canvas = Canvas::new(viewport);
    canvas.paint(&list);
    canvas.render(frame);

    let status = status_line(manager.screen());
    render_status_bar(frame, layout.status_bar, &status.text, status.color, status.controls);

    Some(viewport)
}
