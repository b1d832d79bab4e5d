/// History settings: load, save, and sanitize.
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default number of past states a store keeps before evicting the oldest.
pub const DEFAULT_LIMIT: usize = 50;

/// Environment variable that overrides the settings file location.
pub const CONFIG_ENV_VAR: &str = "TEMPORAL_STORE_CONFIG";

const CONFIG_FILE_NAME: &str = "settings.json";
const CONFIG_DIR_NAME: &str = "temporal-store";
const FALLBACK_FILE_NAME: &str = "temporal-store.json";

/// User-editable settings for a temporal store.
///
/// Only configuration lives here. History itself is never written to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistorySettings {
    /// Max entries kept in the past stack (minimum 1).
    pub limit: usize,
    /// Record every `set`, even when the new value equals the present.
    pub record_unchanged: bool,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            record_unchanged: false,
        }
    }
}

impl HistorySettings {
    /// Returns the settings file path.
    ///
    /// Resolution order:
    /// 1. `TEMPORAL_STORE_CONFIG` environment variable
    /// 2. `temporal-store/settings.json` under the platform config directory
    /// 3. `temporal-store.json` in the working directory
    pub fn config_path() -> PathBuf {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            return PathBuf::from(path);
        }
        dirs::config_dir()
            .map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(FALLBACK_FILE_NAME))
    }

    /// Loads settings from `path`, creating a default file if it doesn't exist.
    /// Returns defaults on any error (unreadable file, parse error, etc.).
    pub fn load_or_create(path: &Path) -> Self {
        if path.exists() {
            match std::fs::read_to_string(path) {
                Ok(contents) => match serde_json::from_str::<HistorySettings>(&contents) {
                    Ok(mut settings) => {
                        settings.sanitize();
                        tracing::debug!(
                            "Loaded history settings from {}: {settings:?}",
                            path.display()
                        );
                        return settings;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to parse settings at {}: {e}", path.display());
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read settings at {}: {e}", path.display());
                }
            }
            // Don't overwrite a broken file
            Self::default()
        } else {
            let settings = Self::default();
            if let Err(e) = settings.save(path) {
                tracing::warn!(
                    "Failed to create default settings at {}: {e}",
                    path.display()
                );
            }
            settings
        }
    }

    /// Saves settings to `path` as pretty-printed JSON, creating parent
    /// directories as needed.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(path, json)
    }

    /// Clamps values to valid ranges.
    pub fn sanitize(&mut self) {
        if self.limit == 0 {
            tracing::warn!("History limit of 0 is not allowed, using 1");
        }
        self.limit = self.limit.max(1);
    }
}
