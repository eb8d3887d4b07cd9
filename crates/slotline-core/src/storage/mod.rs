mod config;

pub use config::{Config, QueryConfig};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns `~/.config/slotline[-dev]/` based on SLOTLINE_ENV.
///
/// Set SLOTLINE_ENV=dev to use development data directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("SLOTLINE_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("slotline-dev")
    } else {
        base_dir.join("slotline")
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| ConfigError::NoConfigDir(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
