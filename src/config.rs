use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::error::{SketchpadError, SketchpadResult};

/// Settings for a sketchpad instance.
///
/// Missing fields fall back to their defaults when deserializing, so a
/// host only needs to spell out what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchpadConfig {
    /// Side length of the square drawing surface, in logical pixels.
    pub canvas_size: f32,
    pub background: Color32,
    pub thin_marker_width: f32,
    pub thick_marker_width: f32,
    /// Em size of sticker glyphs, in logical pixels.
    pub sticker_size: f32,
    /// Glyphs offered as sticker buttons. Custom stickers are appended here.
    pub stickers: Vec<String>,
    /// Opacity of the tool preview, 0.0 to 1.0.
    pub preview_opacity: f32,
    /// Integer upscale applied to both axes on export.
    pub export_scale: u32,
    pub export_file_name: String,
}

impl Default for SketchpadConfig {
    fn default() -> Self {
        Self {
            canvas_size: 256.0,
            background: Color32::WHITE,
            thin_marker_width: 2.0,
            thick_marker_width: 8.0,
            sticker_size: 32.0,
            stickers: vec!["🐘".to_owned(), "🌵".to_owned(), "🍕".to_owned()],
            preview_opacity: 0.5,
            export_scale: 4,
            export_file_name: "sketchpad.png".to_owned(),
        }
    }
}

impl SketchpadConfig {
    pub fn validate(&self) -> SketchpadResult<()> {
        if !(self.canvas_size > 0.0) {
            return Err(SketchpadError::InvalidConfig(format!(
                "canvas_size must be positive, got {}",
                self.canvas_size
            )));
        }
        if self.export_scale == 0 {
            return Err(SketchpadError::InvalidConfig(
                "export_scale must be at least 1".to_owned(),
            ));
        }
        if !(self.thin_marker_width > 0.0) || !(self.thick_marker_width > 0.0) {
            return Err(SketchpadError::InvalidConfig(format!(
                "marker widths must be positive, got {} and {}",
                self.thin_marker_width, self.thick_marker_width
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = SketchpadConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_zero_export_scale() {
        let config = SketchpadConfig {
            export_scale: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SketchpadError::InvalidConfig(_))
        ));
    }

    #[test]
    fn rejects_nan_canvas_size() {
        let config = SketchpadConfig {
            canvas_size: f32::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
