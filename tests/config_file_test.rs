//! Integration test: loading the JSON config

use dino_run::utils::persistence::{load_config, load_config_from, save_json};
use dino_run::GameConfig;
use std::fs;
use std::io;
use std::path::PathBuf;

fn temp_file(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("dino-run-config-test-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir.join(name)
}

#[test]
fn test_partial_file_keeps_defaults() {
    let path = temp_file("partial.json");
    fs::write(&path, r#"{ "starting_lives": 5, "debug_bounds": true }"#).unwrap();

    let config = load_config(Some(&path)).unwrap();
    assert_eq!(config.starting_lives, 5);
    assert!(config.debug_bounds);
    assert!((config.gravity - GameConfig::default().gravity).abs() < f64::EPSILON);
    assert!((config.spawn_delay - 3.0).abs() < f64::EPSILON);

    fs::remove_file(&path).ok();
}

#[test]
fn test_saved_config_loads_back() {
    let path = temp_file("saved.json");
    let config = GameConfig {
        cactus_speed: -350.0,
        target_fps: 30,
        ..GameConfig::default()
    };
    save_json(&path, &config).unwrap();

    assert_eq!(load_config(Some(&path)).unwrap(), config);
    fs::remove_file(&path).ok();
}

#[test]
fn test_explicit_missing_file_is_an_error() {
    let path = temp_file("does-not-exist.json");
    let err = load_config(Some(&path)).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::NotFound);

    // A missing default file just means defaults
    assert_eq!(load_config_from(&path).unwrap(), GameConfig::default());
}

#[test]
fn test_malformed_and_invalid_files_are_rejected() {
    let path = temp_file("broken.json");
    fs::write(&path, "{ not json").unwrap();
    assert_eq!(
        load_config(Some(&path)).unwrap_err().kind(),
        io::ErrorKind::InvalidData
    );

    fs::write(&path, r#"{ "target_fps": 0 }"#).unwrap();
    assert_eq!(
        load_config(Some(&path)).unwrap_err().kind(),
        io::ErrorKind::InvalidInput
    );

    fs::remove_file(&path).ok();
}

#[test]
fn test_reversed_background_scroll_is_rejected() {
    let path = temp_file("reversed-scroll.json");
    fs::write(&path, r#"{ "bg_scroll_speed": -4.0 }"#).unwrap();

    let err = load_config(Some(&path)).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    assert!(err.to_string().contains("bg_scroll_speed"));

    fs::remove_file(&path).ok();
}
