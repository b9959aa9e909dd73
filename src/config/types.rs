//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::draw::FontDescriptor;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Defaults for newly created annotations.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Default stroke and text color - either a named color (red, green, blue,
    /// orange, white, black, gray) or an RGB array like `[255, 0, 0]`
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Default stroke thickness in model units (valid range: 0.5 - 20.0)
    #[serde(default = "default_thickness")]
    pub default_thickness: f64,

    /// Default label font size in points (valid range: 6.0 - 72.0)
    #[serde(default = "default_font_size")]
    pub default_font_size: f64,

    /// Font family name for labels (e.g., "Sans", "Serif", "Helvetica")
    #[serde(default = "default_font_family")]
    pub font_family: String,

    /// Font weight (e.g., "normal", "bold", "light", or 100-900)
    #[serde(default = "default_font_weight")]
    pub font_weight: String,

    /// Font style (e.g., "normal", "italic", "oblique")
    #[serde(default = "default_font_style")]
    pub font_style: String,

    /// Paint an opaque box behind label text
    #[serde(default)]
    pub label_background: bool,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_thickness: default_thickness(),
            default_font_size: default_font_size(),
            font_family: default_font_family(),
            font_weight: default_font_weight(),
            font_style: default_font_style(),
            label_background: false,
        }
    }
}

impl DrawingConfig {
    pub fn font_descriptor(&self) -> FontDescriptor {
        FontDescriptor::new(&self.font_family, &self.font_weight, &self.font_style)
    }
}

/// Arrowhead appearance for new arrows.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ArrowConfig {
    /// Arrowhead length in model units (valid range: 2.0 - 50.0)
    #[serde(default = "default_head_length")]
    pub head_length: f64,

    /// Arrowhead angle in degrees (valid range: 15.0 - 60.0)
    #[serde(default = "default_head_angle")]
    pub head_angle: f64,
}

impl Default for ArrowConfig {
    fn default() -> Self {
        Self {
            head_length: default_head_length(),
            head_angle: default_head_angle(),
        }
    }
}

fn default_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_thickness() -> f64 {
    1.5
}

fn default_font_size() -> f64 {
    12.0
}

fn default_font_family() -> String {
    "Sans".to_string()
}

fn default_font_weight() -> String {
    "normal".to_string()
}

fn default_font_style() -> String {
    "normal".to_string()
}

fn default_head_length() -> f64 {
    10.0
}

fn default_head_angle() -> f64 {
    30.0
}
