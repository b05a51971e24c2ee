// SPDX-License-Identifier: MPL-2.0
//! This module handles the indicator configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_indicator::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Keep indicators on screen a little longer
//! config.indicator.display_duration_secs = Some(3.0);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_dir = PathBuf::from("./temp_config_dir");
//! std::fs::create_dir_all(&temp_dir).unwrap();
//! let temp_file = temp_dir.join("test_settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded_config = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded_config.indicator.display_duration_secs, Some(3.0));
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

mod defaults;

pub use defaults::*;

use crate::domain::ui::newtypes::DisplayDuration;
use crate::error::Result;
use crate::ui::indicator::HapticKind;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedIndicator";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Locale used to pick the text direction (e.g. `"ar"`, `"fr"`).
    pub language: Option<String>,
    #[serde(default)]
    pub indicator: IndicatorConfig,
}

/// Presentation preferences applied to every indicator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorConfig {
    #[serde(default)]
    pub display_duration_secs: Option<f32>,
    #[serde(default)]
    pub haptic: Option<HapticKind>,
    #[serde(default)]
    pub dismiss_by_drag: Option<bool>,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            display_duration_secs: Some(DEFAULT_DISPLAY_DURATION_SECS),
            haptic: Some(HapticKind::default()),
            dismiss_by_drag: Some(true),
        }
    }
}

impl IndicatorConfig {
    /// Returns the validated display duration, falling back to the default.
    #[must_use]
    pub fn display_duration(&self) -> DisplayDuration {
        self.display_duration_secs
            .map(DisplayDuration::new)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn haptic(&self) -> HapticKind {
        self.haptic.unwrap_or_default()
    }

    #[must_use]
    pub fn dismiss_by_drag(&self) -> bool {
        self.dismiss_by_drag.unwrap_or(true)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "invalid settings file, using defaults");
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_indicator_settings() {
        let config = Config {
            language: Some("he".to_string()),
            indicator: IndicatorConfig {
                display_duration_secs: Some(2.5),
                haptic: Some(HapticKind::Warning),
                dismiss_by_drag: Some(false),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert!(loaded.language.is_none());
        assert_eq!(loaded.indicator, IndicatorConfig::default());
    }

    #[test]
    fn missing_indicator_table_uses_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "language = \"fr\"\n").expect("failed to write toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.language.as_deref(), Some("fr"));
        assert!(loaded.indicator.dismiss_by_drag());
        assert_eq!(loaded.indicator.haptic(), HapticKind::Success);
    }

    #[test]
    fn haptic_is_stored_in_lowercase() {
        let config = Config {
            language: None,
            indicator: IndicatorConfig {
                haptic: Some(HapticKind::Error),
                ..IndicatorConfig::default()
            },
        };
        let content = toml::to_string_pretty(&config).expect("serialize");
        assert!(content.contains("haptic = \"error\""));
    }

    #[test]
    fn empty_fields_fall_back_to_defaults() {
        let indicator = IndicatorConfig {
            display_duration_secs: None,
            haptic: None,
            dismiss_by_drag: None,
        };
        assert_eq!(indicator.display_duration(), DisplayDuration::default());
        assert_eq!(indicator.haptic(), HapticKind::Success);
        assert!(indicator.dismiss_by_drag());
    }
}
