use egui::{Color32, Pos2};

use super::ToolSelection;
use crate::config::SketchpadConfig;
use crate::element::Element;
use crate::surface::Surface;

/// Ghost of what the next pointer press will produce. Never committed.
#[derive(Debug, Clone, PartialEq)]
pub enum Preview {
    /// Disc the size of the marker tip
    Marker {
        center: Pos2,
        width: f32,
        color: Color32,
    },
    /// The sticker glyph, always upright
    Sticker {
        center: Pos2,
        glyph: String,
        size: f32,
        color: Color32,
    },
}

impl Preview {
    pub fn new(tool: &ToolSelection, center: Pos2, config: &SketchpadConfig) -> Self {
        let opacity = config.preview_opacity.clamp(0.0, 1.0);
        match tool {
            ToolSelection::Marker { width, color } => Preview::Marker {
                center,
                width: *width,
                color: color.gamma_multiply(opacity),
            },
            ToolSelection::Sticker { glyph } => Preview::Sticker {
                center,
                glyph: glyph.clone(),
                size: config.sticker_size,
                color: Color32::BLACK.gamma_multiply(opacity),
            },
        }
    }

    pub fn center(&self) -> Pos2 {
        match self {
            Preview::Marker { center, .. } | Preview::Sticker { center, .. } => *center,
        }
    }
}

impl Element for Preview {
    fn render(&self, surface: &mut dyn Surface) {
        match self {
            Preview::Marker {
                center,
                width,
                color,
            } => surface.disc(*center, *width, *color),
            Preview::Sticker {
                center,
                glyph,
                size,
                color,
            } => surface.glyph(glyph, *center, *size, 0.0, *color),
        }
    }

    fn extend(&mut self, point: Pos2) {
        match self {
            Preview::Marker { center, .. } | Preview::Sticker { center, .. } => *center = point,
        }
    }
}
