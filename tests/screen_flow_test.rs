//! Integration test: screen flow and drawing
//!
//! Menu to gameplay, phase prompts, HUD and the debug overlay, checked
//! through the recorded draw list.

use dino_run::render::Asset;
use dino_run::screens::{gameplay, menu};
use dino_run::{AppScreen, DrawList, FrameInput, GameConfig, GamePhase, ScreenManager};

const DT: f64 = 1.0 / 60.0;

fn frame(manager: &mut ScreenManager, input: FrameInput) -> DrawList {
    let mut list = DrawList::new();
    manager.frame(DT, &input, &mut list);
    list
}

fn phase(manager: &ScreenManager) -> Option<GamePhase> {
    match manager.screen() {
        AppScreen::Gameplay(game) => Some(game.session.phase),
        AppScreen::MainMenu(_) => None,
    }
}

#[test]
fn test_menu_draws_title_and_buttons() {
    let mut manager = ScreenManager::new(GameConfig::default(), Some(1));
    let list = frame(&mut manager, FrameInput::none());
    let texts = list.texts();

    assert!(texts.contains(&menu::TITLE));
    assert!(texts.contains(&menu::START_LABEL));
    assert!(texts.contains(&menu::CONTROLS_LABEL));
    assert!(!texts.contains(&menu::CONTROLS_HELP[0]));
}

#[test]
fn test_controls_button_toggles_help() {
    let mut manager = ScreenManager::new(GameConfig::default(), Some(1));
    let controls = match manager.screen() {
        AppScreen::MainMenu(m) => m.controls_button.center(),
        AppScreen::Gameplay(_) => unreachable!(),
    };

    let list = frame(&mut manager, FrameInput::tap(controls.x, controls.y));
    for line in menu::CONTROLS_HELP {
        assert!(list.texts().contains(&line));
    }
    assert!(phase(&manager).is_none());

    let list = frame(&mut manager, FrameInput::tap(controls.x, controls.y));
    assert!(!list.texts().contains(&menu::CONTROLS_HELP[0]));
}

#[test]
fn test_full_flow_menu_to_game_over_and_back() {
    let mut manager = ScreenManager::new(GameConfig::default(), Some(1));

    frame(&mut manager, FrameInput::confirm());
    assert_eq!(phase(&manager), Some(GamePhase::NotStarted));

    let list = frame(&mut manager, FrameInput::none());
    assert!(list.texts().contains(&gameplay::START_PROMPT));

    // Enter starts the run, taps work too
    frame(&mut manager, FrameInput::tap(10.0, 10.0));
    assert_eq!(phase(&manager), Some(GamePhase::Playing));

    let list = frame(&mut manager, FrameInput::none());
    let texts = list.texts();
    assert!(texts.contains(&"Score: 0"));
    assert!(texts.contains(&"Lives: 3"));
    assert_eq!(list.sprites_of(Asset::Background).len(), 2);
    assert_eq!(list.sprites_of(Asset::Dino).len(), 1);

    for _ in 0..(60 * 12) {
        frame(&mut manager, FrameInput::none());
    }
    assert_eq!(phase(&manager), Some(GamePhase::GameOver));

    let list = frame(&mut manager, FrameInput::none());
    assert_eq!(
        list.texts(),
        vec![gameplay::GAME_OVER_TITLE, gameplay::GAME_OVER_PROMPT]
    );
    assert!(list.sprites_of(Asset::Dino).is_empty());

    frame(&mut manager, FrameInput::confirm());
    assert_eq!(phase(&manager), Some(GamePhase::Playing));
}

#[test]
fn test_debug_bounds_outlines_every_hitbox() {
    let config = GameConfig {
        debug_bounds: true,
        ..GameConfig::default()
    };
    let mut manager = ScreenManager::new(config, Some(1));
    frame(&mut manager, FrameInput::confirm());
    frame(&mut manager, FrameInput::confirm());

    let list = frame(&mut manager, FrameInput::none());
    let obstacles = match manager.screen() {
        AppScreen::Gameplay(game) => game.session.obstacles.len(),
        AppScreen::MainMenu(_) => unreachable!(),
    };
    assert_eq!(list.outlines().len(), obstacles + 1);
}

#[test]
fn test_no_outlines_by_default() {
    let mut manager = ScreenManager::new(GameConfig::default(), Some(1));
    frame(&mut manager, FrameInput::confirm());
    frame(&mut manager, FrameInput::confirm());
    let list = frame(&mut manager, FrameInput::none());
    assert!(list.outlines().is_empty());
}
