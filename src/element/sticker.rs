use egui::{Color32, Pos2};

use super::Element;
use crate::surface::Surface;

/// A glyph stamped at an anchor point with a rotation chosen once, when
/// the sticker is placed.
#[derive(Debug, Clone, PartialEq)]
pub struct StickerPlacement {
    anchor: Pos2,
    glyph: String,
    angle: f32,
    size: f32,
}

impl StickerPlacement {
    pub fn new(anchor: Pos2, glyph: impl Into<String>, angle: f32, size: f32) -> Self {
        Self {
            anchor,
            glyph: glyph.into(),
            angle,
            size,
        }
    }

    pub fn anchor(&self) -> Pos2 {
        self.anchor
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    /// Rotation in radians, fixed at creation.
    pub fn angle(&self) -> f32 {
        self.angle
    }
}

impl Element for StickerPlacement {
    fn render(&self, surface: &mut dyn Surface) {
        surface.glyph(&self.glyph, self.anchor, self.size, self.angle, Color32::BLACK);
    }

    /// Dragging a sticker relocates it; rotation is untouched.
    fn extend(&mut self, point: Pos2) {
        self.anchor = point;
    }
}
