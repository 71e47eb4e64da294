mod config;
pub mod database;
pub mod gateway;

pub use config::{Config, ExportConfig, LoggingConfig, RolloverConfig, SpoonsConfig, TrackerConfig};
pub use database::SqliteGateway;
pub use gateway::{MemoryGateway, StateGateway, STORAGE_KEY};

use std::path::PathBuf;

use crate::error::StorageError;

/// Returns the data directory.
///
/// `FIBRO_BALANCE_DATA_DIR` wins when set. Otherwise this is
/// `~/.config/fibro-balance[-dev]/`, with the `-dev` suffix selected by
/// `FIBRO_BALANCE_ENV=dev`.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    let dir = match std::env::var_os("FIBRO_BALANCE_DATA_DIR") {
        Some(explicit) if !explicit.is_empty() => PathBuf::from(explicit),
        _ => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("FIBRO_BALANCE_ENV").unwrap_or_else(|_| "production".to_string());

            if env == "dev" {
                base_dir.join("fibro-balance-dev")
            } else {
                base_dir.join("fibro-balance")
            }
        }
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| StorageError::DataDir(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
