use egui::{Color32, Pos2};

mod glyphs;
mod painter;
mod raster;

pub use glyphs::GlyphSet;
pub use painter::CanvasPainter;
pub use raster::RasterSurface;

/// A drawing target addressed in surface-local logical pixels.
///
/// Commands only ever paint through this trait, so the same command list
/// can be replayed onto the visible canvas or onto an off-screen image.
pub trait Surface {
    /// Replace every pixel with `color`.
    fn fill(&mut self, color: Color32);

    /// Connected line through `points` in order. Fewer than two points is a no-op.
    fn polyline(&mut self, points: &[Pos2], width: f32, color: Color32);

    /// Filled disc centred at `center`.
    fn disc(&mut self, center: Pos2, diameter: f32, color: Color32);

    /// `text` centred at `center`, rotated clockwise by `angle` radians.
    fn glyph(&mut self, text: &str, center: Pos2, size: f32, angle: f32, color: Color32);
}
