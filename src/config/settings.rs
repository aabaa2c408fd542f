//! User settings for outlay-cli
//!
//! Manages display preferences. The settings file is created with defaults
//! on first run and can be edited by hand.

use std::fs;

use serde::{Deserialize, Serialize};

use super::paths::OutlayPaths;
use crate::error::OutlayError;

/// User settings for outlay-cli
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when formatting amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format used when rendering expense rows (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
        }
    }
}

impl Settings {
    /// Load settings from disk, creating the file with defaults if absent
    pub fn load_or_create(paths: &OutlayPaths) -> Result<Self, OutlayError> {
        let path = paths.settings_file();

        if path.exists() {
            let contents = fs::read_to_string(&path)
                .map_err(|e| OutlayError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
            let settings = serde_json::from_str(&contents).map_err(|e| {
                OutlayError::Config(format!("Failed to parse {}: {}", path.display(), e))
            })?;
            return Ok(settings);
        }

        let settings = Settings::default();
        settings.save(paths)?;
        Ok(settings)
    }

    /// Write settings to disk
    pub fn save(&self, paths: &OutlayPaths) -> Result<(), OutlayError> {
        paths.ensure_directories()?;
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(paths.settings_file(), contents)
            .map_err(|e| OutlayError::Io(format!("Failed to write settings: {}", e)))?;
        Ok(())
    }
}
