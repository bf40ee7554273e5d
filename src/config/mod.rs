//! Configuration file support for sketchpad.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/sketchpad/config.toml`. Settings include the canvas size and
//! background, stroke defaults, marquee appearance, undo history size, export naming and
//! keybindings.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod keybindings;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use keybindings::{Action, KeyBinding, KeybindingsConfig};
pub use types::{CanvasConfig, DrawingConfig, ExportConfig, HistoryConfig, SelectionConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Largest accepted canvas edge in pixels.
const MAX_CANVAS_EDGE: u32 = 16384;

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [canvas]
/// width = 1200
/// height = 600
/// background = "white"
///
/// [drawing]
/// default_color = "black"
/// default_thickness = 2.0
/// default_polygon_sides = 5
///
/// [selection]
/// marquee_color = [128, 128, 128]
///
/// [history]
/// limit = 0
///
/// [keybindings]
/// undo = ["Ctrl+Z"]
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Canvas size and background
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Stroke defaults for new shapes
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Selection marquee appearance
    #[serde(default)]
    pub selection: SelectionConfig,

    /// Undo history settings
    #[serde(default)]
    pub history: HistoryConfig,

    /// Export naming for hosts without a save dialog
    #[serde(default)]
    pub export: ExportConfig,

    /// Keyboard shortcuts
    #[serde(default)]
    pub keybindings: KeybindingsConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `canvas.width`, `canvas.height`: 1 - 16384
    /// - `drawing.default_thickness`: 1.0 - 20.0
    /// - `drawing.default_polygon_sides`: 3, 5 or 6
    /// - `selection.dash_length`: 1.0 - 100.0
    fn validate_and_clamp(&mut self) {
        for (name, edge) in [
            ("width", &mut self.canvas.width),
            ("height", &mut self.canvas.height),
        ] {
            if !(1..=MAX_CANVAS_EDGE).contains(edge) {
                log::warn!(
                    "Invalid canvas {} {}, clamping to 1-{} range",
                    name,
                    edge,
                    MAX_CANVAS_EDGE
                );
                *edge = (*edge).clamp(1, MAX_CANVAS_EDGE);
            }
        }

        // NaN fails the range check and lands on the default
        if !(1.0..=20.0).contains(&self.drawing.default_thickness) {
            log::warn!(
                "Invalid default_thickness {:.1}, clamping to 1.0-20.0 range",
                self.drawing.default_thickness
            );
            self.drawing.default_thickness = if self.drawing.default_thickness.is_nan() {
                1.0
            } else {
                self.drawing.default_thickness.clamp(1.0, 20.0)
            };
        }

        if !matches!(self.drawing.default_polygon_sides, 3 | 5 | 6) {
            log::warn!(
                "Invalid default_polygon_sides {}, falling back to 3",
                self.drawing.default_polygon_sides
            );
            self.drawing.default_polygon_sides = 3;
        }

        if !(1.0..=100.0).contains(&self.selection.dash_length) {
            log::warn!(
                "Invalid marquee dash_length {:.1}, clamping to 1.0-100.0 range",
                self.selection.dash_length
            );
            self.selection.dash_length = if self.selection.dash_length.is_nan() {
                10.0
            } else {
                self.selection.dash_length.clamp(1.0, 100.0)
            };
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/sketchpad/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("sketchpad");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config = Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        // Keybindings are checked eagerly so mistakes surface at startup
        config
            .keybindings
            .build_action_map()
            .map_err(anyhow::Error::msg)
            .with_context(|| format!("Invalid keybindings in {}", path.display()))?;

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        config.validate_and_clamp();
        Ok(config)
    }

    /// Parses configuration from a TOML string and clamps it to valid ranges.
    pub fn from_toml(source: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(source).context("Invalid TOML configuration")?;
        config.validate_and_clamp();
        Ok(config)
    }

    /// Saves the current configuration to the default location.
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> Schema {
        schema_for!(Config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.canvas.width, 800);
        assert_eq!(config.canvas.height, 600);
        assert_eq!(config.drawing.default_thickness, 1.0);
        assert_eq!(config.drawing.default_polygon_sides, 3);
        assert_eq!(config.history.limit, 0);
        assert_eq!(config.keybindings.undo, vec!["Ctrl+Z".to_string()]);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = Config::from_toml(
            r#"
            [canvas]
            width = 0
            height = 99999

            [drawing]
            default_thickness = 50.0
            default_polygon_sides = 4

            [selection]
            dash_length = 0.0
            "#,
        )
        .unwrap();

        assert_eq!(config.canvas.width, 1);
        assert_eq!(config.canvas.height, MAX_CANVAS_EDGE);
        assert_eq!(config.drawing.default_thickness, 20.0);
        assert_eq!(config.drawing.default_polygon_sides, 3);
        assert_eq!(config.selection.dash_length, 1.0);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(Config::from_toml("[canvas\nwidth = ").is_err());
    }

    #[test]
    fn load_from_rejects_duplicate_keybindings() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            "[keybindings]\nundo = [\"Escape\"]\nclear_selection = [\"Escape\"]\n",
        )
        .unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("Duplicate keybinding"));
    }

    #[test]
    fn schema_mentions_sections() {
        let schema = serde_json::to_string(&Config::json_schema()).unwrap();
        for section in ["canvas", "drawing", "selection", "history", "export", "keybindings"] {
            assert!(schema.contains(section), "schema lacks {section}");
        }
    }
}
