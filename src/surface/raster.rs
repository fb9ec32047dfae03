use egui::{Color32, Pos2, Rect, pos2, vec2};
use image::{Rgba, RgbaImage};

use super::{GlyphSet, Surface};
use crate::element::common::distance_to_line_segment;
use crate::error::{SketchpadError, SketchpadResult};

/// An off-screen surface backed by an RGBA image.
///
/// Logical coordinates are multiplied by `scale` before hitting pixels, so
/// replaying the same commands at `scale = 4` yields a uniformly upscaled
/// copy of the `scale = 1` drawing. Shapes are filled by pixel-centre
/// sampling with no anti-aliasing.
#[derive(Debug, Clone)]
pub struct RasterSurface {
    image: RgbaImage,
    scale: f32,
    glyphs: GlyphSet,
}

impl RasterSurface {
    /// `logical_size` is the side of the square canvas in logical pixels.
    pub fn new(logical_size: f32, scale: u32, glyphs: GlyphSet) -> SketchpadResult<Self> {
        let side = (logical_size * scale as f32).round().max(0.0) as u32;
        if side == 0 {
            return Err(SketchpadError::EmptySurface {
                width: side,
                height: side,
            });
        }
        Ok(Self {
            image: RgbaImage::new(side, side),
            scale: scale as f32,
            glyphs,
        })
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color32> {
        if x >= self.image.width() || y >= self.image.height() {
            return None;
        }
        let [r, g, b, a] = self.image.get_pixel(x, y).0;
        Some(Color32::from_rgba_unmultiplied(r, g, b, a))
    }

    fn blend(&mut self, x: u32, y: u32, color: Color32, coverage: f32) {
        let alpha = (color.a() as f32 / 255.0) * coverage.clamp(0.0, 1.0);
        if alpha <= 0.0 {
            return;
        }
        let [sr, sg, sb, _] = color.to_srgba_unmultiplied();
        let dst = self.image.get_pixel_mut(x, y);
        let [dr, dg, db, da] = dst.0;
        let mix = |s: u8, d: u8| (s as f32 * alpha + d as f32 * (1.0 - alpha)).round() as u8;
        let out_a = (alpha * 255.0 + da as f32 * (1.0 - alpha)).round() as u8;
        *dst = Rgba([mix(sr, dr), mix(sg, dg), mix(sb, db), out_a]);
    }

    /// Pixel range covering `rect` (in device pixels), clamped to the image.
    fn pixel_bounds(&self, rect: Rect) -> Option<(u32, u32, u32, u32)> {
        let max_x = self.image.width() as f32;
        let max_y = self.image.height() as f32;
        let x0 = rect.min.x.floor().clamp(0.0, max_x) as u32;
        let y0 = rect.min.y.floor().clamp(0.0, max_y) as u32;
        let x1 = rect.max.x.ceil().clamp(0.0, max_x) as u32;
        let y1 = rect.max.y.ceil().clamp(0.0, max_y) as u32;
        (x0 < x1 && y0 < y1).then_some((x0, y0, x1, y1))
    }

    fn to_device(&self, point: Pos2) -> Pos2 {
        pos2(point.x * self.scale, point.y * self.scale)
    }
}

impl Surface for RasterSurface {
    fn fill(&mut self, color: Color32) {
        let [r, g, b, a] = color.to_srgba_unmultiplied();
        for pixel in self.image.pixels_mut() {
            *pixel = Rgba([r, g, b, a]);
        }
    }

    fn polyline(&mut self, points: &[Pos2], width: f32, color: Color32) {
        if points.len() < 2 || !(width > 0.0) {
            return;
        }
        let device: Vec<Pos2> = points.iter().map(|p| self.to_device(*p)).collect();
        let radius = (width * self.scale / 2.0).max(0.5);

        let Some(bounds) = crate::element::common::calculate_bounds(&device, radius) else {
            return;
        };
        let Some((x0, y0, x1, y1)) = self.pixel_bounds(bounds) else {
            return;
        };

        // Mark the union of all segment capsules first so joints are not
        // blended twice.
        let mask_width = (x1 - x0) as usize;
        let mut mask = vec![false; mask_width * (y1 - y0) as usize];
        for segment in device.windows(2) {
            let Some(segment_bounds) =
                crate::element::common::calculate_bounds(segment, radius)
            else {
                continue;
            };
            let Some((sx0, sy0, sx1, sy1)) = self.pixel_bounds(segment_bounds) else {
                continue;
            };
            for y in sy0..sy1 {
                for x in sx0..sx1 {
                    let centre = pos2(x as f32 + 0.5, y as f32 + 0.5);
                    if distance_to_line_segment(centre, segment[0], segment[1]) <= radius {
                        mask[(y - y0) as usize * mask_width + (x - x0) as usize] = true;
                    }
                }
            }
        }

        for y in y0..y1 {
            for x in x0..x1 {
                if mask[(y - y0) as usize * mask_width + (x - x0) as usize] {
                    self.blend(x, y, color, 1.0);
                }
            }
        }
    }

    fn disc(&mut self, center: Pos2, diameter: f32, color: Color32) {
        if !(diameter > 0.0) {
            return;
        }
        let centre = self.to_device(center);
        let radius = diameter * self.scale / 2.0;
        let bounds = Rect::from_center_size(centre, vec2(radius * 2.0, radius * 2.0));
        let Some((x0, y0, x1, y1)) = self.pixel_bounds(bounds) else {
            return;
        };
        for y in y0..y1 {
            for x in x0..x1 {
                let sample = pos2(x as f32 + 0.5, y as f32 + 0.5);
                if sample.distance(centre) <= radius {
                    self.blend(x, y, color, 1.0);
                }
            }
        }
    }

    fn glyph(&mut self, text: &str, center: Pos2, size: f32, angle: f32, color: Color32) {
        let Some(mask) = self.glyphs.rasterize(text, size * self.scale) else {
            return;
        };
        let centre = self.to_device(center);
        let half_w = mask.width as f32 / 2.0;
        let half_h = mask.height as f32 / 2.0;

        // The rotated mask fits inside the circle through its corners.
        let reach = (half_w * half_w + half_h * half_h).sqrt();
        let bounds = Rect::from_center_size(centre, vec2(reach * 2.0, reach * 2.0));
        let Some((x0, y0, x1, y1)) = self.pixel_bounds(bounds) else {
            return;
        };

        let (sin, cos) = angle.sin_cos();
        for y in y0..y1 {
            for x in x0..x1 {
                // Inverse-rotate the destination pixel into mask space.
                let dx = x as f32 + 0.5 - centre.x;
                let dy = y as f32 + 0.5 - centre.y;
                let mx = dx * cos + dy * sin + half_w;
                let my = -dx * sin + dy * cos + half_h;
                let coverage = mask.get(mx.floor() as i64, my.floor() as i64);
                if coverage > 0.0 {
                    self.blend(x, y, color, coverage);
                }
            }
        }
    }
}
