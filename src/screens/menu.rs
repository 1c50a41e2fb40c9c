//! Main menu: title, START and CONTROLS buttons.

use crate::core::config::GameConfig;
use crate::core::constants::{
    MENU_BUTTON_HEIGHT, MENU_BUTTON_WIDTH, MENU_CONTROLS_DROP, MENU_TITLE_RAISE,
};
use crate::core::geometry::{Point, Rect};
use crate::input::FrameInput;
use crate::render::{DrawSurface, Fill, TextStyle};

pub const TITLE: &str = "Dino Game";
pub const START_LABEL: &str = "START";
pub const CONTROLS_LABEL: &str = "CONTROLS";

/// Lines shown in the controls panel.
pub const CONTROLS_HELP: [&str; 4] = [
    "Space / Up     jump",
    "Click / Enter  start, respawn",
    "Esc / q        quit",
    "Three hits and you're out!",
];

/// What a menu frame asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    StartGame,
    ToggleControls,
}

#[derive(Debug, Clone)]
pub struct MainMenu {
    screen_width: f64,
    screen_height: f64,
    pub start_button: Rect,
    pub controls_button: Rect,
    pub showing_controls: bool,
}

impl MainMenu {
    pub fn new(config: &GameConfig) -> Self {
        let (w, h) = (config.screen_width, config.screen_height);
        Self {
            screen_width: w,
            screen_height: h,
            start_button: Rect::centered(
                Point::new(w / 2.0, h / 2.0),
                MENU_BUTTON_WIDTH,
                MENU_BUTTON_HEIGHT,
            ),
            controls_button: Rect::new(
                (w - MENU_BUTTON_WIDTH) / 2.0,
                h / 2.0 - MENU_CONTROLS_DROP,
                MENU_BUTTON_WIDTH,
                MENU_BUTTON_HEIGHT,
            ),
            showing_controls: false,
        }
    }

    /// Which button, if any, a press at `point` lands on.
    pub fn hit_test(&self, point: Point) -> Option<MenuAction> {
        if self.start_button.contains(point) {
            Some(MenuAction::StartGame)
        } else if self.controls_button.contains(point) {
            Some(MenuAction::ToggleControls)
        } else {
            None
        }
    }

    /// Process one frame of input. Returns `StartGame` when play should begin.
    pub fn update(&mut self, input: &FrameInput) -> Option<MenuAction> {
        if input.confirm {
            return Some(MenuAction::StartGame);
        }

        let action = input.pointer.and_then(|p| self.hit_test(p));
        if action == Some(MenuAction::ToggleControls) {
            self.showing_controls = !self.showing_controls;
        }
        action
    }

    pub fn render(&self, surface: &mut dyn DrawSurface) {
        surface.fill_rect(self.start_button, Fill::Button);
        surface.fill_rect(self.controls_button, Fill::Button);

        let (title_w, _) = surface.text_size(TITLE, TextStyle::Title);
        surface.draw_text(
            TITLE,
            (self.screen_width - title_w) / 2.0,
            self.screen_height / 2.0 + MENU_TITLE_RAISE,
            TextStyle::Title,
        );

        draw_centered_label(surface, START_LABEL, self.start_button);
        draw_centered_label(surface, CONTROLS_LABEL, self.controls_button);

        if self.showing_controls {
            self.render_controls_panel(surface);
        }
    }

    fn render_controls_panel(&self, surface: &mut dyn DrawSurface) {
        let (_, line_h) = surface.text_size(CONTROLS_HELP[0], TextStyle::Hint);
        let widest = CONTROLS_HELP
            .iter()
            .map(|line| surface.text_size(line, TextStyle::Hint).0)
            .fold(0.0, f64::max);

        // Below the CONTROLS button, centered
        let padding = line_h / 2.0;
        let panel_h = line_h * CONTROLS_HELP.len() as f64 + padding * 2.0;
        let panel_w = widest + padding * 2.0;
        let top = self.controls_button.y - padding;
        let panel = Rect::new(
            (self.screen_width - panel_w) / 2.0,
            (top - panel_h).max(0.0),
            panel_w,
            panel_h,
        );
        surface.fill_rect(panel, Fill::Panel);

        for (i, line) in CONTROLS_HELP.iter().enumerate() {
            surface.draw_text(
                line,
                panel.x + padding,
                panel.top() - padding - line_h * i as f64,
                TextStyle::Hint,
            );
        }
    }
}

fn draw_centered_label(surface: &mut dyn DrawSurface, label: &str, button: Rect) {
    let (w, h) = surface.text_size(label, TextStyle::ButtonLabel);
    surface.draw_text(
        label,
        button.x + (button.width - w) / 2.0,
        button.y + (button.height + h) / 2.0,
        TextStyle::ButtonLabel,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{DrawCommand, DrawList};

    fn menu() -> MainMenu {
        MainMenu::new(&GameConfig::default())
    }

    #[test]
    fn test_button_layout() {
        let menu = menu();
        // 800 x 480 screen
        assert_eq!(menu.start_button, Rect::new(300.0, 210.0, 200.0, 60.0));
        assert_eq!(menu.controls_button, Rect::new(300.0, 140.0, 200.0, 60.0));
        assert!(!menu.start_button.overlaps(&menu.controls_button));
    }

    #[test]
    fn test_press_on_start() {
        let mut menu = menu();
        let center = menu.start_button.center();
        assert_eq!(
            menu.update(&FrameInput::tap(center.x, center.y)),
            Some(MenuAction::StartGame)
        );
    }

    #[test]
    fn test_press_outside_buttons_does_nothing() {
        let mut menu = menu();
        assert_eq!(menu.update(&FrameInput::tap(10.0, 10.0)), None);
        assert_eq!(menu.update(&FrameInput::jump()), None);
        assert_eq!(menu.update(&FrameInput::none()), None);
        assert!(!menu.showing_controls);
    }

    #[test]
    fn test_confirm_starts() {
        let mut menu = menu();
        assert_eq!(
            menu.update(&FrameInput::confirm()),
            Some(MenuAction::StartGame)
        );
    }

    #[test]
    fn test_controls_toggle() {
        let mut menu = menu();
        let c = menu.controls_button.center();

        assert_eq!(
            menu.update(&FrameInput::tap(c.x, c.y)),
            Some(MenuAction::ToggleControls)
        );
        assert!(menu.showing_controls);

        menu.update(&FrameInput::tap(c.x, c.y));
        assert!(!menu.showing_controls);
    }

    #[test]
    fn test_render_labels_and_buttons() {
        let menu = menu();
        let mut list = DrawList::new();
        menu.render(&mut list);

        assert_eq!(list.texts(), vec![TITLE, START_LABEL, CONTROLS_LABEL]);
        let fills = list
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Fill { fill: Fill::Button, .. }))
            .count();
        assert_eq!(fills, 2);
    }

    #[test]
    fn test_title_is_centered() {
        let menu = menu();
        let mut list = DrawList::new();
        menu.render(&mut list);

        let (x, y) = list
            .commands()
            .iter()
            .find_map(|c| match c {
                DrawCommand::Text { text, x, y, .. } if text == TITLE => Some((*x, *y)),
                _ => None,
            })
            .unwrap();
        // 9 glyphs * 10 units = 90 wide
        assert!((x - 355.0).abs() < 1e-9);
        assert!((y - 340.0).abs() < 1e-9);
    }

    #[test]
    fn test_render_controls_panel_when_open() {
        let mut menu = menu();
        menu.showing_controls = true;
        let mut list = DrawList::new();
        menu.render(&mut list);

        for line in CONTROLS_HELP {
            assert!(list.texts().contains(&line));
        }
        assert!(list
            .commands()
            .iter()
            .any(|c| matches!(c, DrawCommand::Fill { fill: Fill::Panel, .. })));
    }
}
