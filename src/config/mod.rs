// SPDX-License-Identifier: MPL-2.0
//! This module handles the player's configuration, including loading and saving
//! tunables to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[layout]` - Frame ratio and paddings of the maximized/minimized layouts
//! - `[transition]` - Snap threshold, fling velocity, dismiss distance, animation
//! - `[playback]` - Playback behaviour (autoplay)
//!
//! Every field is optional; anything missing falls back to [`defaults`].
//! Values are clamped into their supported range when turned into
//! [`PlayerSettings`], so a hand-edited file can never break the layout.
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass a directory to `load_with_override()`/`save_with_override()`
//! 3. Set `DRAGGABLE_PLAYER_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use draggable_player::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.playback.autoplay = Some(false);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

// Re-export all default constants for convenience
pub use defaults::*;

use crate::domain::ui::{AnimationDuration, LayoutMetrics, SnapThreshold};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Application name used for directory naming.
const APP_NAME: &str = "DraggablePlayer";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "DRAGGABLE_PLAYER_CONFIG_DIR";

// =============================================================================
// Section Structs
// =============================================================================

/// Layout settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LayoutConfig {
    /// Width to height ratio of the player outside fullscreen.
    #[serde(
        default = "default_width_height_ratio",
        skip_serializing_if = "Option::is_none"
    )]
    pub width_height_ratio: Option<f32>,

    /// Distance from the top of the parent to the maximized player.
    #[serde(default = "default_top_padding", skip_serializing_if = "Option::is_none")]
    pub top_padding: Option<f32>,

    /// Distance from the bottom of the screen to the minimized player.
    #[serde(
        default = "default_bottom_padding",
        skip_serializing_if = "Option::is_none"
    )]
    pub bottom_padding: Option<f32>,

    /// Width of the minimized player.
    #[serde(
        default = "default_minimized_width",
        skip_serializing_if = "Option::is_none"
    )]
    pub minimized_width: Option<f32>,

    /// Gap between the minimized player and the trailing screen edge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimized_trailing_padding: Option<f32>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            width_height_ratio: default_width_height_ratio(),
            top_padding: default_top_padding(),
            bottom_padding: default_bottom_padding(),
            minimized_width: default_minimized_width(),
            minimized_trailing_padding: Some(DEFAULT_MINIMIZED_TRAILING_PADDING),
        }
    }
}

/// Transition and gesture settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransitionConfig {
    /// Progress above which a released drag minimizes the player.
    #[serde(
        default = "default_minimum_transition_ratio",
        skip_serializing_if = "Option::is_none"
    )]
    pub minimum_transition_ratio: Option<f32>,

    /// Release velocity above which direction decides the snap.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fling_velocity: Option<f32>,

    /// Drag distance past the docked position that dismisses the player.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dismiss_distance: Option<f32>,

    /// Duration of programmatic minimize/maximize animations (milliseconds).
    #[serde(
        default = "default_animation_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub animation_duration_ms: Option<u64>,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            minimum_transition_ratio: default_minimum_transition_ratio(),
            fling_velocity: Some(DEFAULT_FLING_VELOCITY),
            dismiss_distance: Some(DEFAULT_DISMISS_DISTANCE),
            animation_duration_ms: default_animation_duration_ms(),
        }
    }
}

/// Playback settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlaybackConfig {
    /// Start playing as soon as the player is shown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autoplay: Option<bool>,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            autoplay: Some(DEFAULT_AUTOPLAY),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Player configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// Layout settings.
    #[serde(default)]
    pub layout: LayoutConfig,

    /// Transition and gesture settings.
    #[serde(default)]
    pub transition: TransitionConfig,

    /// Playback settings.
    #[serde(default)]
    pub playback: PlaybackConfig,
}

impl Config {
    /// Resolves the optional fields into clamped runtime settings.
    #[must_use]
    pub fn player_settings(&self) -> PlayerSettings {
        let layout = &self.layout;
        let transition = &self.transition;
        PlayerSettings {
            layout: LayoutMetrics::new(
                layout
                    .width_height_ratio
                    .unwrap_or(DEFAULT_WIDTH_HEIGHT_RATIO),
                layout.top_padding.unwrap_or(DEFAULT_TOP_PADDING),
                layout.bottom_padding.unwrap_or(DEFAULT_BOTTOM_PADDING),
                layout.minimized_width.unwrap_or(DEFAULT_MINIMIZED_WIDTH),
                layout
                    .minimized_trailing_padding
                    .unwrap_or(DEFAULT_MINIMIZED_TRAILING_PADDING),
            ),
            snap_threshold: SnapThreshold::new(
                transition
                    .minimum_transition_ratio
                    .unwrap_or(DEFAULT_MINIMUM_TRANSITION_RATIO),
            ),
            fling_velocity: transition.fling_velocity.unwrap_or(DEFAULT_FLING_VELOCITY),
            dismiss_distance: clamp_distance(
                transition
                    .dismiss_distance
                    .unwrap_or(DEFAULT_DISMISS_DISTANCE),
            ),
            animation_duration: AnimationDuration::from_millis(
                transition
                    .animation_duration_ms
                    .unwrap_or(DEFAULT_ANIMATION_DURATION_MS),
            ),
            autoplay: self.playback.autoplay.unwrap_or(DEFAULT_AUTOPLAY),
        }
    }
}

/// Runtime tunables consumed by the player.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerSettings {
    pub layout: LayoutMetrics,
    pub snap_threshold: SnapThreshold,
    pub fling_velocity: f32,
    pub dismiss_distance: f32,
    pub animation_duration: AnimationDuration,
    pub autoplay: bool,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Config::default().player_settings()
    }
}

fn clamp_distance(value: f32) -> f32 {
    if value.is_nan() {
        DEFAULT_DISMISS_DISTANCE
    } else {
        value.clamp(MIN_TRANSITION_DISTANCE, MAX_PADDING)
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_width_height_ratio() -> Option<f32> {
    Some(DEFAULT_WIDTH_HEIGHT_RATIO)
}

fn default_top_padding() -> Option<f32> {
    Some(DEFAULT_TOP_PADDING)
}

fn default_bottom_padding() -> Option<f32> {
    Some(DEFAULT_BOTTOM_PADDING)
}

fn default_minimized_width() -> Option<f32> {
    Some(DEFAULT_MINIMIZED_WIDTH)
}

fn default_minimum_transition_ratio() -> Option<f32> {
    Some(DEFAULT_MINIMUM_TRANSITION_RATIO)
}

fn default_animation_duration_ms() -> Option<u64> {
    Some(DEFAULT_ANIMATION_DURATION_MS)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config directory with an optional override.
///
/// # Resolution Order
///
/// 1. `override_path` parameter (if `Some`)
/// 2. `DRAGGABLE_PLAYER_CONFIG_DIR` environment variable (if set and non-empty)
/// 3. Platform-specific config directory (with app name appended)
pub fn get_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    get_config_dir_with_override(base_dir).map(|mut path| {
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
                    log::warn!("ignoring unreadable config {}: {err}", path.display());
                    return (
                        Config::default(),
                        Some(format!("Failed to load {}: {err}", path.display())),
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

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            layout: LayoutConfig {
                width_height_ratio: Some(16.0 / 9.0),
                top_padding: Some(20.0),
                bottom_padding: Some(40.0),
                minimized_width: Some(200.0),
                minimized_trailing_padding: Some(0.0),
            },
            transition: TransitionConfig {
                minimum_transition_ratio: Some(0.5),
                fling_velocity: Some(800.0),
                dismiss_distance: Some(120.0),
                animation_duration_ms: Some(150),
            },
            playback: PlaybackConfig {
                autoplay: Some(false),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn load_with_override_falls_back_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[layout\nbroken")
            .expect("failed to write invalid toml");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn load_with_override_missing_file_is_silent_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().join("absent")));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn save_with_override_writes_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        save_with_override(&Config::default(), Some(temp_dir.path().to_path_buf()))
            .expect("save should succeed");
        assert!(temp_dir.path().join(CONFIG_FILE).exists());
    }

    #[test]
    fn partial_file_fills_missing_fields_with_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[transition]\nminimum_transition_ratio = 0.25\n")
            .expect("failed to write toml");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded.transition.minimum_transition_ratio, Some(0.25));
        assert_eq!(
            loaded.transition.animation_duration_ms,
            Some(DEFAULT_ANIMATION_DURATION_MS)
        );
        assert_eq!(loaded.layout, LayoutConfig::default());
    }

    #[test]
    fn default_settings_use_build_time_constants() {
        let settings = PlayerSettings::default();
        assert_eq!(settings.layout, LayoutMetrics::default());
        assert_eq!(settings.snap_threshold, SnapThreshold::default());
        assert_eq!(settings.animation_duration, AnimationDuration::default());
        assert!((settings.dismiss_distance - DEFAULT_DISMISS_DISTANCE).abs() < f32::EPSILON);
        assert_eq!(settings.autoplay, DEFAULT_AUTOPLAY);
    }

    #[test]
    fn player_settings_clamp_out_of_range_values() {
        let mut config = Config::default();
        config.transition.minimum_transition_ratio = Some(7.0);
        config.transition.dismiss_distance = Some(-10.0);
        config.transition.animation_duration_ms = Some(u64::MAX);
        config.layout.width_height_ratio = Some(0.0);

        let settings = config.player_settings();
        assert!((settings.snap_threshold.value() - MAX_TRANSITION_RATIO).abs() < f32::EPSILON);
        assert!((settings.dismiss_distance - MIN_TRANSITION_DISTANCE).abs() < f32::EPSILON);
        assert_eq!(settings.animation_duration.millis(), MAX_ANIMATION_DURATION_MS);
        assert!(
            (settings.layout.width_height_ratio() - MIN_WIDTH_HEIGHT_RATIO).abs() < f32::EPSILON
        );
    }
}
