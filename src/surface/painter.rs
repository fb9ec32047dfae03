use egui::epaint::TextShape;
use egui::{Color32, FontId, Painter, Pos2, Rect, Shape, Stroke, Vec2, emath::Rot2};

use super::Surface;

/// The visible canvas: an egui [`Painter`] clipped to the canvas rect,
/// translating surface-local points into screen space.
pub struct CanvasPainter<'a> {
    painter: &'a Painter,
    rect: Rect,
}

impl<'a> CanvasPainter<'a> {
    pub fn new(painter: &'a Painter, rect: Rect) -> Self {
        Self { painter, rect }
    }

    fn to_screen(&self, point: Pos2) -> Pos2 {
        self.rect.min + point.to_vec2()
    }
}

impl Surface for CanvasPainter<'_> {
    fn fill(&mut self, color: Color32) {
        self.painter.rect_filled(self.rect, 0.0, color);
    }

    fn polyline(&mut self, points: &[Pos2], width: f32, color: Color32) {
        if points.len() < 2 {
            return;
        }
        let screen_points = points.iter().map(|p| self.to_screen(*p)).collect();
        self.painter
            .add(Shape::line(screen_points, Stroke::new(width, color)));
    }

    fn disc(&mut self, center: Pos2, diameter: f32, color: Color32) {
        self.painter
            .circle_filled(self.to_screen(center), diameter / 2.0, color);
    }

    fn glyph(&mut self, text: &str, center: Pos2, size: f32, angle: f32, color: Color32) {
        if text.is_empty() {
            return;
        }
        let galley = self
            .painter
            .layout_no_wrap(text.to_owned(), FontId::proportional(size), color);

        // Text shapes rotate around their top-left corner, so offset the
        // corner by the rotated half-extent to keep the glyph centred.
        let half: Vec2 = galley.size() / 2.0;
        let top_left = self.to_screen(center) - Rot2::from_angle(angle) * half;

        self.painter
            .add(Shape::Text(TextShape::new(top_left, galley, color).with_angle(angle)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{LayerId, pos2, vec2};

    #[test]
    fn test_canvas_painter_emits_shapes() {
        let ctx = egui::Context::default();
        let output = ctx.run(Default::default(), |ctx| {
            let rect = Rect::from_min_size(pos2(40.0, 40.0), vec2(256.0, 256.0));
            let painter = ctx.layer_painter(LayerId::background());
            let mut surface = CanvasPainter::new(&painter, rect);
            surface.fill(Color32::WHITE);
            surface.polyline(&[pos2(0.0, 0.0)], 2.0, Color32::BLACK);
            surface.polyline(&[pos2(0.0, 0.0), pos2(10.0, 10.0)], 2.0, Color32::BLACK);
            surface.disc(pos2(5.0, 5.0), 8.0, Color32::RED);
            surface.glyph("🐘", pos2(50.0, 50.0), 32.0, 1.0, Color32::BLACK);
        });
        // fill, one polyline (the single point is skipped), disc, glyph
        assert_eq!(output.shapes.len(), 4);
    }
}
