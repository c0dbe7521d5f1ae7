//! Persisted user settings
//!
//! A single small JSON record, `{"length_limit": 200}`, kept in the user's
//! config directory. Loading never fails the caller: a missing file yields the
//! defaults and an unreadable one is reported through the log and replaced by
//! the defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::config::{APP_DIR_NAME, CONFIG_DIR_ENV, DEFAULT_LENGTH_LIMIT, SETTINGS_FILE_NAME};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_length_limit")]
    pub length_limit: i64,
}

fn default_length_limit() -> i64 {
    DEFAULT_LENGTH_LIMIT
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            length_limit: DEFAULT_LENGTH_LIMIT,
        }
    }
}

impl Settings {
    /// Loads settings from `path`, falling back to the defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            log::debug!("Settings file {path:?} does not exist, using defaults");
            return Self::default();
        }

        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                log::warn!("Could not read settings file {path:?}: {e}. Using defaults.");
                return Self::default();
            }
        };

        match serde_json::from_str::<Settings>(&contents) {
            Ok(settings) => {
                log::debug!("Loaded settings {settings:?} from {path:?}");
                settings
            }
            Err(e) => {
                log::warn!("Settings file {path:?} is not valid JSON: {e}. Using defaults.");
                Self::default()
            }
        }
    }

    /// Writes settings to `path`, creating the parent directory if needed
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create settings directory {}", parent.display())
                })?;
            }
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write settings file {}", path.display()))?;
        log::debug!("Saved settings {self:?} to {path:?}");
        Ok(())
    }

    /// Loads settings from the default location
    pub fn load() -> Self {
        match settings_path() {
            Some(path) => Self::load_from(&path),
            None => {
                log::warn!("Could not determine config directory, using default settings");
                Self::default()
            }
        }
    }

    /// Saves settings to the default location
    pub fn save(&self) -> Result<()> {
        let path = settings_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        self.save_to(&path)
    }
}

/// Location of the settings file
///
/// Priority order:
/// 1. `LONGPATHS_CONFIG_DIR` env var → `$LONGPATHS_CONFIG_DIR/settings.json`
/// 2. Platform config dir → `<config_dir>/longpaths/settings.json`
pub fn settings_path() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        if !dir.is_empty() {
            return Some(PathBuf::from(dir).join(SETTINGS_FILE_NAME));
        }
    }
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(SETTINGS_FILE_NAME))
}
