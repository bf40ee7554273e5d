//! Configuration type definitions.

use super::enums::ColorSpec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Canvas surface settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Canvas width in pixels (valid range: 1 - 16384)
    #[serde(default = "default_canvas_width")]
    pub width: u32,

    /// Canvas height in pixels (valid range: 1 - 16384)
    #[serde(default = "default_canvas_height")]
    pub height: u32,

    /// Background fill, also used for exported images
    #[serde(default = "default_background")]
    pub background: ColorSpec,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_width(),
            height: default_canvas_height(),
            background: default_background(),
        }
    }
}

/// Drawing-related settings.
///
/// Controls the stroke used for new shapes when the canvas first opens.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Default stroke color - either a named color (red, green, blue, yellow, orange,
    /// pink, white, black, gray) or an RGB array like `[255, 0, 0]` for red
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Default stroke thickness in pixels (valid range: 1.0 - 20.0)
    #[serde(default = "default_thickness")]
    pub default_thickness: f64,

    /// Polygon side count used until the user picks one (3, 5 or 6)
    #[serde(default = "default_polygon_sides")]
    pub default_polygon_sides: u32,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_thickness: default_thickness(),
            default_polygon_sides: default_polygon_sides(),
        }
    }
}

/// Selection marquee appearance.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct SelectionConfig {
    /// Marquee outline color
    #[serde(default = "default_marquee_color")]
    pub marquee_color: ColorSpec,

    /// Dash and gap length of the marquee outline (valid range: 1.0 - 100.0)
    #[serde(default = "default_dash_length")]
    pub dash_length: f64,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            marquee_color: default_marquee_color(),
            dash_length: default_dash_length(),
        }
    }
}

/// Undo history settings.
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct HistoryConfig {
    /// Maximum number of undo snapshots to keep (0 = unlimited)
    #[serde(default)]
    pub limit: usize,
}

/// Export settings for hosts that save without a file dialog.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ExportConfig {
    /// Directory for exported images (`~` is expanded). Defaults to
    /// `<Pictures>/Sketchpad` when unset.
    #[serde(default)]
    pub directory: Option<String>,

    /// Filename template using chrono format specifiers; `.png` is appended
    #[serde(default = "default_filename_template")]
    pub filename_template: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: None,
            filename_template: default_filename_template(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_canvas_width() -> u32 {
    800
}

fn default_canvas_height() -> u32 {
    600
}

fn default_background() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

fn default_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_thickness() -> f64 {
    1.0
}

fn default_polygon_sides() -> u32 {
    3
}

fn default_marquee_color() -> ColorSpec {
    ColorSpec::Rgb([128, 128, 128])
}

fn default_dash_length() -> f64 {
    10.0
}

fn default_filename_template() -> String {
    "sketch_%Y-%m-%d_%H%M%S".to_string()
}
