//! Settings loading and saving.
//!
//! Loading never fails hard: a missing or unreadable `settings.json` falls
//! back to defaults with a warning, so a corrupt file cannot keep the app
//! from starting.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use super::types::Settings;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Default settings file path, `~/.chordkit/settings.json`.
pub fn default_settings_path() -> PathBuf {
    crate::shortcuts::default_data_dir().join("settings.json")
}

/// Load settings from the default path.
pub fn load_settings() -> Settings {
    load_settings_from(&default_settings_path())
}

/// Load settings from a specific path, degrading to defaults on any failure.
pub fn load_settings_from(path: &Path) -> Settings {
    if !path.exists() {
        info!(path = %path.display(), "Settings file not found, using defaults");
        return Settings::default();
    }

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to read settings, using defaults");
            return Settings::default();
        }
    };

    match serde_json::from_str(&content) {
        Ok(settings) => settings,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to parse settings, using defaults");
            Settings::default()
        }
    }
}

/// Save settings to the default path.
pub fn save_settings(settings: &Settings) -> Result<(), ConfigError> {
    save_settings_to(&default_settings_path(), settings)
}

/// Save settings as pretty JSON, creating parent directories as needed.
pub fn save_settings_to(path: &Path, settings: &Settings) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(settings)?;
    fs::write(path, content)?;
    Ok(())
}
