use std::path::Path;

use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::error::{SketchError, SketchResult};
use crate::surface::MAX_SURFACE_SIDE;

/// Environment variable naming an optional JSON config file
pub const CONFIG_ENV_VAR: &str = "SKETCHPAD_CONFIG";

/// User-tunable settings for the sketchpad.
///
/// Every field has a default, so a config file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old configs
pub struct SketchConfig {
    /// Side length of the square drawing surface, in pixels
    pub canvas_size: f32,
    /// Background fill as RGB
    pub background: [u8; 3],
    /// Marker colour as RGB
    pub marker_color: [u8; 3],
    pub thin_width: f32,
    pub thick_width: f32,
    /// Built-in sticker palette
    pub stickers: Vec<String>,
    pub sticker_font_size: f32,
    pub export_scale: f32,
    pub export_file_name: String,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            canvas_size: 256.0,
            background: [0x7E, 0xC6, 0xE5],
            marker_color: [0, 0, 0],
            thin_width: 1.0,
            thick_width: 5.0,
            stickers: vec!["🎸".to_owned(), "🌵".to_owned(), "⭐".to_owned()],
            sticker_font_size: 32.0,
            export_scale: 4.0,
            export_file_name: "sketchpad.png".to_owned(),
        }
    }
}

impl SketchConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> SketchResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> SketchResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load the file named by `SKETCHPAD_CONFIG`, or fall back to defaults.
    pub fn from_env() -> Self {
        let Ok(path) = std::env::var(CONFIG_ENV_VAR) else {
            return Self::default();
        };

        match Self::load(&path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path);
                config
            }
            Err(err) => {
                log::warn!("Ignoring config {}: {}", path, err);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> SketchResult<()> {
        let positive = [
            ("canvas_size", self.canvas_size),
            ("thin_width", self.thin_width),
            ("thick_width", self.thick_width),
            ("sticker_font_size", self.sticker_font_size),
            ("export_scale", self.export_scale),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(SketchError::InvalidConfig(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }

        let export_side = self.canvas_size * self.export_scale;
        if export_side > MAX_SURFACE_SIDE as f32 {
            return Err(SketchError::InvalidConfig(format!(
                "canvas_size * export_scale must be at most {}, got {}",
                MAX_SURFACE_SIDE, export_side
            )));
        }

        if self.export_file_name.trim().is_empty() {
            return Err(SketchError::InvalidConfig(
                "export_file_name must not be empty".to_owned(),
            ));
        }

        Ok(())
    }

    pub fn background_color(&self) -> Color32 {
        let [r, g, b] = self.background;
        Color32::from_rgb(r, g, b)
    }

    pub fn marker_color(&self) -> Color32 {
        let [r, g, b] = self.marker_color;
        Color32::from_rgb(r, g, b)
    }
}
