// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration: loading user
//! preferences from a `settings.toml` file and writing a default one.
//!
//! Only preferences live here. Entered credentials are never persisted.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[window]` - Initial window size
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` or set `ICED_SIGNIN_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_signin::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, _warning) = config::load();
//! println!("{:?}", config.general.language);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::sign_in::Locale;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code ("en" or "ar").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Initial window geometry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WindowConfig {
    #[serde(default = "default_width", skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    #[serde(default = "default_height", skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

impl WindowConfig {
    /// Window size in pixels, clamped to the supported range.
    #[must_use]
    pub fn size(&self) -> (u32, u32) {
        let width = self
            .width
            .unwrap_or(DEFAULT_WINDOW_WIDTH)
            .clamp(MIN_WINDOW_WIDTH, MAX_WINDOW_DIMENSION);
        let height = self
            .height
            .unwrap_or(DEFAULT_WINDOW_HEIGHT)
            .clamp(MIN_WINDOW_HEIGHT, MAX_WINDOW_DIMENSION);
        (width, height)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub window: WindowConfig,
}

impl Config {
    /// The configured language, if it names a supported locale.
    ///
    /// Unknown codes are logged and ignored so a typo never blocks startup.
    #[must_use]
    pub fn locale(&self) -> Option<Locale> {
        let code = self.general.language.as_deref()?;
        let locale = Locale::from_code(code);
        if locale.is_none() {
            log::warn!("ignoring unsupported language {code:?} in {CONFIG_FILE}");
        }
        locale
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_width() -> Option<u32> {
    Some(DEFAULT_WINDOW_WIDTH)
}

fn default_height() -> Option<u32> {
    Some(DEFAULT_WINDOW_HEIGHT)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Returns the path `settings.toml` is read from.
pub fn config_path() -> Option<PathBuf> {
    get_config_path_with_override(None)
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    return (
                        Config::default(),
                        Some(format!("{}: {}", path.display(), err)),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Writes the current settings back to `settings.toml` in the default
/// directory and returns where they went.
pub fn write_current() -> Result<PathBuf> {
    write_current_with_override(None)
}

/// Writes the settings found under `base_dir` back to its `settings.toml`,
/// or the defaults when there is no file yet.
///
/// Fails without touching the file when it exists but does not parse, so
/// the valid settings in it survive.
pub fn write_current_with_override(base_dir: Option<PathBuf>) -> Result<PathBuf> {
    let path = get_config_path_with_override(base_dir)
        .ok_or_else(|| Error::Config("cannot determine config directory".to_string()))?;

    let config = if path.exists() {
        load_from_path(&path).map_err(|err| {
            Error::Config(format!(
                "refusing to overwrite unreadable {}: {err}",
                path.display()
            ))
        })?
    } else {
        Config::default()
    };

    save_to_path(&config, &path)?;
    Ok(path)
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
