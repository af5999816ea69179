// SPDX-License-Identifier: MPL-2.0
//! This module handles the snackbar configuration, including loading and saving
//! it to a `snackbar.toml` file.
//!
//! # Configuration Sections
//!
//! - `[appearance]` - Animations, spacing, insets and container width shared
//!   by both alignment groups
//! - `[accessibility]` - Reduced motion and screen reader flags for hosts
//!   that cannot query the platform
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `ICED_SNACKBAR_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_snackbar::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Tighten the stack
//! config.appearance.inter_item_spacing = 8.0;
//!
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::animation::AnimationSpec;
use crate::error::{Error, Result};
use crate::snack::Insets;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "snackbar.toml";
const APP_NAME: &str = "IcedSnackbar";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_SNACKBAR_CONFIG_DIR";

// =============================================================================
// Section Structs
// =============================================================================

/// Appearance shared by both alignment groups.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppearanceConfig {
    /// Spacing between two stacked snacks.
    #[serde(default = "default_inter_item_spacing")]
    pub inter_item_spacing: f32,

    /// Maximum width of the container.
    #[serde(default = "default_max_container_width")]
    pub max_container_width: f32,

    /// Distance between the container and the surface edges.
    #[serde(default = "default_content_inset")]
    pub content_inset: Insets,

    /// Animation used when a snack is added.
    #[serde(default = "AnimationSpec::default_insert")]
    pub insert_animation: AnimationSpec,

    /// Animation used when a duplicate snack moves to the growing edge.
    #[serde(default = "AnimationSpec::default_rearrange")]
    pub rearrange_animation: AnimationSpec,

    /// Animation used when a snack is removed.
    #[serde(default = "AnimationSpec::default_remove")]
    pub remove_animation: AnimationSpec,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            inter_item_spacing: default_inter_item_spacing(),
            max_container_width: default_max_container_width(),
            content_inset: default_content_inset(),
            insert_animation: AnimationSpec::default_insert(),
            rearrange_animation: AnimationSpec::default_rearrange(),
            remove_animation: AnimationSpec::default_remove(),
        }
    }
}

impl AppearanceConfig {
    /// Width of the container on a surface `surface_width` wide.
    ///
    /// The container is centered, never exceeds `max_container_width` and
    /// keeps the horizontal insets free.
    #[must_use]
    pub fn container_width(&self, surface_width: f32) -> f32 {
        (surface_width - self.content_inset.horizontal())
            .max(0.0)
            .min(self.max_container_width)
    }
}

/// Accessibility flags for hosts without platform integration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccessibilityConfig {
    /// Replace positional animations by cross-fades.
    #[serde(default)]
    pub reduce_motion: bool,

    /// A screen reader is running; snacks requiring manual dismissal stay.
    #[serde(default)]
    pub screen_reader: bool,
}

/// Complete snackbar configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub appearance: AppearanceConfig,

    #[serde(default)]
    pub accessibility: AccessibilityConfig,
}

// =============================================================================
// Default Functions
// =============================================================================

fn default_inter_item_spacing() -> f32 {
    DEFAULT_INTER_ITEM_SPACING
}

fn default_content_inset() -> Insets {
    Insets::all(DEFAULT_CONTENT_INSET)
}

fn default_max_container_width() -> f32 {
    DEFAULT_MAX_CONTAINER_WIDTH
}

// =============================================================================
// Load / Save
// =============================================================================

fn config_dir_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(dir) = base_dir {
        return Some(dir);
    }
    if let Some(dir) = std::env::var_os(ENV_CONFIG_DIR) {
        return Some(PathBuf::from(dir));
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Loads the configuration from the default location.
///
/// Returns defaults when the file does not exist. When it exists but cannot
/// be read or parsed, returns defaults along with a warning message.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from `base_dir` (or the default location).
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = config_dir_with_override(base_dir).map(|dir| dir.join(CONFIG_FILE)) else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }
    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(err) => (
            Config::default(),
            Some(format!("Using default snackbar settings: {}", err)),
        ),
    }
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(dir) = config_dir_with_override(base_dir) {
        return save_to_path(config, &dir.join(CONFIG_FILE));
    }
    Ok(())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::Curve;
    use tempfile::tempdir;

    #[test]
    fn default_appearance_matches_documented_values() {
        let appearance = AppearanceConfig::default();
        assert_eq!(appearance.inter_item_spacing, 16.0);
        assert_eq!(appearance.content_inset, Insets::all(16.0));
        assert_eq!(appearance.max_container_width, 428.0);
        assert_eq!(appearance.insert_animation, AnimationSpec::default_insert());
        assert_eq!(
            appearance.rearrange_animation,
            AnimationSpec::default_rearrange()
        );
        assert_eq!(appearance.remove_animation, AnimationSpec::default_remove());
    }

    #[test]
    fn save_and_load_round_trip_preserves_values() {
        let mut config = Config::default();
        config.appearance.inter_item_spacing = 4.0;
        config.appearance.remove_animation = AnimationSpec {
            duration: 0.25,
            curve: Curve::Linear,
        };
        config.accessibility.reduce_motion = true;

        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join(CONFIG_FILE);

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join(CONFIG_FILE);
        fs::write(
            &config_path,
            "[appearance]\ninter_item_spacing = 8.0\n\n[accessibility]\nscreen_reader = true\n",
        )
        .expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded.appearance.inter_item_spacing, 8.0);
        assert_eq!(loaded.appearance.max_container_width, 428.0);
        assert_eq!(
            loaded.appearance.insert_animation,
            AnimationSpec::default_insert()
        );
        assert!(loaded.accessibility.screen_reader);
        assert!(!loaded.accessibility.reduce_motion);
    }

    #[test]
    fn load_from_path_reports_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn load_with_override_falls_back_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[appearance\n")
            .expect("failed to write invalid toml");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn load_with_override_returns_defaults_when_file_is_absent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn save_with_override_writes_into_directory() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let dir = temp_dir.path().join("deep");
        save_with_override(&Config::default(), Some(dir.clone())).expect("save should succeed");
        assert!(dir.join(CONFIG_FILE).exists());
    }

    #[test]
    fn container_width_respects_insets_and_maximum() {
        let appearance = AppearanceConfig::default();
        assert_eq!(appearance.container_width(1920.0), 428.0);
        assert_eq!(appearance.container_width(320.0), 288.0);
        assert_eq!(appearance.container_width(10.0), 0.0);
    }
}
