//! File logging.
//!
//! The terminal belongs to the game, so log records go to
//! ~/.dino-run/dino-run.log. Nothing is logged unless `RUST_LOG` is set.

use super::persistence::data_path;
use crate::core::constants::LOG_FILE_NAME;
use std::env;
use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;

/// Install the logger if `RUST_LOG` is set. Returns the log file path when
/// logging is active.
pub fn init_logging() -> io::Result<Option<PathBuf>> {
    if env::var_os("RUST_LOG").is_none() {
        return Ok(None);
    }

    let path = data_path(LOG_FILE_NAME)?;
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    log::info!("dino-run logging to {}", path.display());
    Ok(Some(path))
}
