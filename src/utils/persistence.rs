//! JSON file helpers for ~/.dino-run/ and config loading.

use crate::core::config::GameConfig;
use crate::core::constants::{CONFIG_FILE_NAME, DATA_DIR_NAME};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Get the ~/.dino-run/ directory path, creating it if needed.
pub fn data_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = home_dir.join(DATA_DIR_NAME);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Full path for a file in ~/.dino-run/.
pub fn data_path(filename: &str) -> io::Result<PathBuf> {
    Ok(data_dir()?.join(filename))
}

/// Read and parse a JSON file. Parse failures become `InvalidData`.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> io::Result<T> {
    let json = fs::read_to_string(path)?;
    serde_json::from_str(&json).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("{}: {}", path.display(), e),
        )
    })
}

/// Write a value as pretty-printed JSON.
pub fn save_json<T: Serialize>(path: &Path, data: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(path, json)?;
    Ok(())
}

/// Load the game config.
///
/// An explicit path must exist and parse. Without one, ~/.dino-run/config.json
/// is used if present, otherwise the defaults.
pub fn load_config(explicit: Option<&Path>) -> io::Result<GameConfig> {
    let config = match explicit {
        Some(path) => load_json(path)?,
        None => load_config_from(&data_path(CONFIG_FILE_NAME)?)?,
    };
    config.validate()?;
    Ok(config)
}

/// Like [`load_config`] for a default location: a missing file means defaults.
pub fn load_config_from(path: &Path) -> io::Result<GameConfig> {
    match load_json(path) {
        Ok(config) => Ok(config),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(GameConfig::default()),
        Err(e) => Err(e),
    }
}

/// Write the default config to ~/.dino-run/config.json unless one exists.
/// Returns the path and whether a file was written.
pub fn init_config_file() -> io::Result<(PathBuf, bool)> {
    let path = data_path(CONFIG_FILE_NAME)?;
    if path.exists() {
        return Ok((path, false));
    }
    save_json(&path, &GameConfig::default())?;
    Ok((path, true))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("dino-run-test-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_file("roundtrip.json");
        let config = GameConfig {
            spawn_delay: 2.0,
            starting_lives: 5,
            ..Default::default()
        };
        save_json(&path, &config).expect("save should succeed");

        let loaded: GameConfig = load_json(&path).expect("load should succeed");
        assert_eq!(loaded, config);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_default_config_gives_defaults() {
        let path = temp_file("does-not-exist.json");
        let config = load_config_from(&path).expect("missing file is not an error");
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_missing_explicit_config_is_error() {
        let path = temp_file("explicit-missing.json");
        let err = load_config(Some(&path)).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_malformed_config_is_invalid_data() {
        let path = temp_file("malformed.json");
        fs::write(&path, "{ not json").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_explicit_config_is_validated() {
        let path = temp_file("invalid-values.json");
        fs::write(&path, r#"{ "bg_width": -5.0 }"#).unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_partial_explicit_config() {
        let path = temp_file("partial.json");
        fs::write(&path, r#"{ "debug_bounds": true }"#).unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert!(config.debug_bounds);
        assert_eq!(config.starting_lives, GameConfig::default().starting_lives);

        let _ = fs::remove_file(&path);
    }
}
