// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[swipe]` - Trigger threshold, accepted direction and drag axis
//! - `[animation]` - Spring-back and fly-off parameters
//! - `[list]` - Row geometry
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` or set `ICED_SWIPE_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! Out-of-range values are clamped when converted into runtime settings,
//! so a hand-edited file cannot request a zero threshold or a negative row.
//!
//! # Examples
//!
//! ```no_run
//! use iced_swipe::config::{self, Config};
//!
//! let (mut config, _warning) = config::load();
//! config.swipe.trigger_distance = Some(120.0);
//! config::save(&config).expect("Failed to save config");
//! ```
//!
//! `iced_swipe --write-config` does the same from the command line.

pub mod defaults;

pub use defaults::*;

use crate::animation::{AnimationConfig, SpringConfig, TweenConfig};
use crate::app::paths;
use crate::error::{Error, Result};
use crate::gesture::{Axis, SwipeDirection, Trigger};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Swipe gesture settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SwipeConfig {
    /// Displacement a release must reach to delete the row.
    #[serde(
        default = "default_trigger_distance",
        skip_serializing_if = "Option::is_none"
    )]
    pub trigger_distance: Option<f32>,

    /// Which swipe direction deletes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<SwipeDirection>,

    /// Axis the row foreground may move along.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axis: Option<Axis>,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            trigger_distance: default_trigger_distance(),
            direction: Some(SwipeDirection::default()),
            axis: Some(Axis::default()),
        }
    }
}

/// Release animation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnimationSection {
    #[serde(
        default = "default_spring_stiffness",
        skip_serializing_if = "Option::is_none"
    )]
    pub spring_stiffness: Option<f32>,

    #[serde(
        default = "default_spring_damping",
        skip_serializing_if = "Option::is_none"
    )]
    pub spring_damping: Option<f32>,

    /// Fly-off duration for triggered rows (milliseconds).
    #[serde(default = "default_fly_off_ms", skip_serializing_if = "Option::is_none")]
    pub fly_off_ms: Option<u64>,
}

impl Default for AnimationSection {
    fn default() -> Self {
        Self {
            spring_stiffness: default_spring_stiffness(),
            spring_damping: default_spring_damping(),
            fly_off_ms: default_fly_off_ms(),
        }
    }
}

/// List layout settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListConfig {
    #[serde(default = "default_row_height", skip_serializing_if = "Option::is_none")]
    pub row_height: Option<f32>,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            row_height: default_row_height(),
        }
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
    pub swipe: SwipeConfig,

    #[serde(default)]
    pub animation: AnimationSection,

    #[serde(default)]
    pub list: ListConfig,
}

impl Config {
    /// Trigger threshold with the distance clamped to the supported range.
    #[must_use]
    pub fn trigger(&self) -> Trigger {
        let distance = self
            .swipe
            .trigger_distance
            .unwrap_or(DEFAULT_TRIGGER_DISTANCE);
        Trigger::new(
            clamp_trigger_distance(distance),
            self.swipe.direction.unwrap_or_default(),
        )
    }

    #[must_use]
    pub fn axis(&self) -> Axis {
        self.swipe.axis.unwrap_or_default()
    }

    /// Release animation parameters, with non-positive physics replaced by defaults.
    #[must_use]
    pub fn animation(&self) -> AnimationConfig {
        let positive_or = |value: Option<f32>, fallback: f32| {
            value.filter(|v| v.is_finite() && *v > 0.0).unwrap_or(fallback)
        };

        AnimationConfig {
            spring: SpringConfig {
                stiffness: positive_or(self.animation.spring_stiffness, DEFAULT_SPRING_STIFFNESS),
                damping: positive_or(self.animation.spring_damping, DEFAULT_SPRING_DAMPING),
                mass: DEFAULT_SPRING_MASS,
            },
            fly_off: TweenConfig {
                duration: Duration::from_millis(
                    self.animation
                        .fly_off_ms
                        .unwrap_or(DEFAULT_FLY_OFF_MS)
                        .min(MAX_FLY_OFF_MS),
                ),
            },
        }
    }

    #[must_use]
    pub fn row_height(&self) -> f32 {
        self.list
            .row_height
            .filter(|h| h.is_finite())
            .unwrap_or(DEFAULT_ROW_HEIGHT)
            .clamp(MIN_ROW_HEIGHT, MAX_ROW_HEIGHT)
    }
}

/// Keeps the trigger distance inside the supported range.
#[must_use]
pub fn clamp_trigger_distance(value: f32) -> f32 {
    if value.is_finite() {
        value.clamp(MIN_TRIGGER_DISTANCE, MAX_TRIGGER_DISTANCE)
    } else {
        DEFAULT_TRIGGER_DISTANCE
    }
}

// =============================================================================
// Default Value Functions (for serde)
// =============================================================================

#[allow(clippy::unnecessary_wraps)]
fn default_trigger_distance() -> Option<f32> {
    Some(DEFAULT_TRIGGER_DISTANCE)
}

#[allow(clippy::unnecessary_wraps)]
fn default_spring_stiffness() -> Option<f32> {
    Some(DEFAULT_SPRING_STIFFNESS)
}

#[allow(clippy::unnecessary_wraps)]
fn default_spring_damping() -> Option<f32> {
    Some(DEFAULT_SPRING_DAMPING)
}

#[allow(clippy::unnecessary_wraps)]
fn default_fly_off_ms() -> Option<u64> {
    Some(DEFAULT_FLY_OFF_MS)
}

#[allow(clippy::unnecessary_wraps)]
fn default_row_height() -> Option<f32> {
    Some(DEFAULT_ROW_HEIGHT)
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

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
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
                    tracing::warn!(
                        path = %path.display(),
                        %err,
                        "failed to load config, using defaults"
                    );
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
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
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
