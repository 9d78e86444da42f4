// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - UI language
//! - `[editor]` - Resize constraints and snap guides
//! - `[ingest]` - Frame, placement and EXIF caption for imported images
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` CLI argument or `ICED_COLLAGE_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! Out-of-range values are clamped when read through the accessor methods,
//! so a hand-edited file can never produce an unusable editor.
//!
//! # Examples
//!
//! ```no_run
//! use iced_collage::app::config::{self, Config};
//!
//! let (mut config, _warning) = config::load();
//! config.editor.lock_aspect_ratio = Some(true);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::application::ingest::IngestOptions;
use crate::domain::collage::ResizeConstraints;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "ja").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Layer manipulation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditorConfig {
    /// Layers must stay strictly larger than this in both dimensions.
    #[serde(default = "default_min_layer_size", skip_serializing_if = "Option::is_none")]
    pub min_layer_size: Option<f32>,

    /// Keep a layer's aspect ratio while resizing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lock_aspect_ratio: Option<bool>,

    /// Ratio deviation tolerated before the aspect lock corrects it.
    #[serde(default = "default_aspect_tolerance", skip_serializing_if = "Option::is_none")]
    pub aspect_tolerance: Option<f32>,

    /// Draw center guides for the active layer.
    #[serde(default = "default_show_snap_guides", skip_serializing_if = "Option::is_none")]
    pub show_snap_guides: Option<bool>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            min_layer_size: default_min_layer_size(),
            lock_aspect_ratio: Some(DEFAULT_LOCK_ASPECT_RATIO),
            aspect_tolerance: default_aspect_tolerance(),
            show_snap_guides: default_show_snap_guides(),
        }
    }
}

impl EditorConfig {
    /// Resize constraints with every value clamped into its valid range.
    #[must_use]
    pub fn resize_constraints(&self) -> ResizeConstraints {
        ResizeConstraints {
            min_size: clamped(
                self.min_layer_size,
                DEFAULT_MIN_LAYER_SIZE,
                MIN_MIN_LAYER_SIZE,
                MAX_MIN_LAYER_SIZE,
            ),
            lock_aspect_ratio: self.lock_aspect_ratio.unwrap_or(DEFAULT_LOCK_ASPECT_RATIO),
            aspect_tolerance: clamped(
                self.aspect_tolerance,
                DEFAULT_ASPECT_TOLERANCE,
                MIN_ASPECT_TOLERANCE,
                MAX_ASPECT_TOLERANCE,
            ),
        }
    }

    #[must_use]
    pub fn show_snap_guides(&self) -> bool {
        self.show_snap_guides.unwrap_or(DEFAULT_SHOW_SNAP_GUIDES)
    }
}

/// Image import settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IngestConfig {
    /// Draw imported images on a white frame.
    #[serde(default = "default_frame_enabled", skip_serializing_if = "Option::is_none")]
    pub frame_enabled: Option<bool>,

    /// Frame size relative to the image (1.2 = 20% larger).
    #[serde(default = "default_frame_ratio", skip_serializing_if = "Option::is_none")]
    pub frame_ratio: Option<f64>,

    /// Share of the canvas an imported image fills.
    #[serde(default = "default_placement_scale", skip_serializing_if = "Option::is_none")]
    pub placement_scale: Option<f32>,

    /// Add a caption built from EXIF tags below imported images.
    #[serde(default = "default_exif_caption", skip_serializing_if = "Option::is_none")]
    pub exif_caption: Option<bool>,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            frame_enabled: default_frame_enabled(),
            frame_ratio: default_frame_ratio(),
            placement_scale: default_placement_scale(),
            exif_caption: default_exif_caption(),
        }
    }
}

impl IngestConfig {
    /// Ingest options with every value clamped into its valid range.
    #[must_use]
    pub fn options(&self) -> IngestOptions {
        IngestOptions {
            frame_enabled: self.frame_enabled.unwrap_or(DEFAULT_FRAME_ENABLED),
            frame_ratio: clamped_f64(self.frame_ratio, DEFAULT_FRAME_RATIO, MIN_FRAME_RATIO, MAX_FRAME_RATIO),
            placement_scale: clamped(
                self.placement_scale,
                DEFAULT_PLACEMENT_SCALE,
                MIN_PLACEMENT_SCALE,
                MAX_PLACEMENT_SCALE,
            ),
            exif_caption: self.exif_caption.unwrap_or(DEFAULT_EXIF_CAPTION),
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
    pub editor: EditorConfig,

    #[serde(default)]
    pub ingest: IngestConfig,
}

// =============================================================================
// Serde Default Helpers
// =============================================================================

fn default_min_layer_size() -> Option<f32> {
    Some(DEFAULT_MIN_LAYER_SIZE)
}

fn default_aspect_tolerance() -> Option<f32> {
    Some(DEFAULT_ASPECT_TOLERANCE)
}

fn default_show_snap_guides() -> Option<bool> {
    Some(DEFAULT_SHOW_SNAP_GUIDES)
}

fn default_frame_enabled() -> Option<bool> {
    Some(DEFAULT_FRAME_ENABLED)
}

fn default_frame_ratio() -> Option<f64> {
    Some(DEFAULT_FRAME_RATIO)
}

fn default_placement_scale() -> Option<f32> {
    Some(DEFAULT_PLACEMENT_SCALE)
}

fn default_exif_caption() -> Option<bool> {
    Some(DEFAULT_EXIF_CAPTION)
}

/// Falls back to `default` for missing or non-finite values, then clamps.
fn clamped(value: Option<f32>, default: f32, min: f32, max: f32) -> f32 {
    value.filter(|v| v.is_finite()).unwrap_or(default).clamp(min, max)
}

fn clamped_f64(value: Option<f64>, default: f64, min: f64, max: f64) -> f64 {
    value.filter(|v| v.is_finite()).unwrap_or(default).clamp(min, max)
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
/// default config with the i18n key of a warning explaining what went wrong.
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
                    tracing::warn!(path = %path.display(), %err, "falling back to default config");
                    return (Config::default(), Some("notification-config-load-error".to_string()));
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
            general: GeneralConfig {
                language: Some("ja".to_string()),
            },
            editor: EditorConfig {
                min_layer_size: Some(80.0),
                lock_aspect_ratio: Some(true),
                aspect_tolerance: Some(0.25),
                show_snap_guides: Some(false),
            },
            ingest: IngestConfig {
                frame_enabled: Some(false),
                frame_ratio: Some(1.5),
                placement_scale: Some(0.5),
                exif_caption: Some(false),
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

        match load_from_path(&config_path) {
            Err(Error::Config(message)) => assert!(!message.is_empty()),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[editor]\nlock_aspect_ratio = true\n").expect("write");

        let loaded = load_from_path(&config_path).expect("load");
        assert_eq!(loaded.general, GeneralConfig::default());
        assert_eq!(loaded.ingest, IngestConfig::default());
        assert_eq!(loaded.editor.lock_aspect_ratio, Some(true));
        assert_eq!(loaded.editor.min_layer_size, Some(DEFAULT_MIN_LAYER_SIZE));
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.language, None);

        let constraints = config.editor.resize_constraints();
        assert_eq!(constraints, ResizeConstraints::default());
        assert!(config.editor.show_snap_guides());

        assert_eq!(config.ingest.options(), IngestOptions::default());
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let editor = EditorConfig {
            min_layer_size: Some(-5.0),
            lock_aspect_ratio: None,
            aspect_tolerance: Some(f32::NAN),
            show_snap_guides: None,
        };
        let constraints = editor.resize_constraints();
        assert_eq!(constraints.min_size, MIN_MIN_LAYER_SIZE);
        assert_eq!(constraints.aspect_tolerance, DEFAULT_ASPECT_TOLERANCE);
        assert!(!constraints.lock_aspect_ratio);

        let ingest = IngestConfig {
            frame_ratio: Some(0.5),
            placement_scale: Some(4.0),
            ..IngestConfig::default()
        };
        let options = ingest.options();
        assert_eq!(options.frame_ratio, MIN_FRAME_RATIO);
        assert_eq!(options.placement_scale, MAX_PLACEMENT_SCALE);
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[[[").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn save_with_override_and_load_with_override_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base = temp_dir.path().join("config");
        let mut config = Config::default();
        config.general.language = Some("en-US".into());

        save_with_override(&config, Some(base.clone())).expect("save");
        assert!(base.join(CONFIG_FILE).exists());

        let (loaded, warning) = load_with_override(Some(base));
        assert_eq!(loaded, config);
        assert!(warning.is_none());
    }

    #[test]
    fn saved_config_uses_sectioned_format() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join(CONFIG_FILE);
        save_to_path(&Config::default(), &path).expect("save");

        let content = fs::read_to_string(&path).expect("read");
        assert!(content.contains("[editor]"));
        assert!(content.contains("[ingest]"));
        assert!(content.contains("frame_ratio"));
    }
}
