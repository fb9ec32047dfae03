use ab_glyph::{Font, FontArc, GlyphId, PxScale, ScaleFont, point};
use egui::{FontDefinitions, FontFamily};

/// Coverage of a laid-out piece of text, row-major, `0.0..=1.0` per pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphMask {
    pub width: u32,
    pub height: u32,
    pub coverage: Vec<f32>,
}

impl GlyphMask {
    pub fn get(&self, x: i64, y: i64) -> f32 {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return 0.0;
        }
        self.coverage[(y as u64 * self.width as u64 + x as u64) as usize]
    }
}

/// Fonts used to rasterise sticker text off-screen.
///
/// Loaded from egui's bundled fonts in proportional-family order, so a
/// glyph resolves to the same face here as on the visible canvas. The
/// first face containing a character wins.
#[derive(Clone)]
pub struct GlyphSet {
    fonts: Vec<FontArc>,
}

impl std::fmt::Debug for GlyphSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlyphSet")
            .field("fonts", &self.fonts.len())
            .finish()
    }
}

impl Default for GlyphSet {
    fn default() -> Self {
        Self::from_egui_defaults()
    }
}

impl GlyphSet {
    pub fn from_egui_defaults() -> Self {
        let definitions = FontDefinitions::default();
        let mut names: Vec<String> = definitions
            .families
            .get(&FontFamily::Proportional)
            .cloned()
            .unwrap_or_default();
        for name in definitions.font_data.keys() {
            if !names.contains(name) {
                names.push(name.clone());
            }
        }

        let fonts = names
            .iter()
            .filter_map(|name| {
                let data = definitions.font_data.get(name)?;
                match FontArc::try_from_vec(data.font.to_vec()) {
                    Ok(font) => Some(font),
                    Err(err) => {
                        log::warn!("Skipping font {name}: {err}");
                        None
                    }
                }
            })
            .collect::<Vec<_>>();

        log::debug!("Loaded {} fonts for sticker rasterisation", fonts.len());
        Self { fonts }
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    fn resolve(&self, ch: char) -> Option<(&FontArc, GlyphId)> {
        self.fonts.iter().find_map(|font| {
            let id = font.glyph_id(ch);
            (id.0 != 0).then_some((font, id))
        })
    }

    /// Rasterise `text` on one line at `size` px per em. Characters no
    /// loaded face covers are skipped. Returns `None` when nothing visible
    /// remains.
    pub fn rasterize(&self, text: &str, size: f32) -> Option<GlyphMask> {
        if !(size > 0.0) {
            return None;
        }
        let scale = PxScale::from(size);

        let resolved: Vec<_> = text.chars().filter_map(|ch| self.resolve(ch)).collect();

        // Shared baseline deep enough for every face on the line.
        let (baseline, depth) = resolved.iter().fold((0.0f32, 0.0f32), |(up, down), (font, _)| {
            let scaled = font.as_scaled(scale);
            (up.max(scaled.ascent()), down.max(-scaled.descent()))
        });

        let mut caret = 0.0f32;
        let mut outlines = Vec::new();
        for (font, id) in resolved {
            let scaled = font.as_scaled(scale);
            let glyph = id.with_scale_and_position(scale, point(caret, baseline));
            caret += scaled.h_advance(id);
            if let Some(outlined) = font.outline_glyph(glyph) {
                outlines.push(outlined);
            }
        }

        let width = caret.ceil().max(0.0) as u32;
        let height = (baseline + depth).ceil().max(0.0) as u32;
        if outlines.is_empty() || width == 0 || height == 0 {
            return None;
        }

        let mut coverage = vec![0.0f32; (width * height) as usize];
        for outlined in outlines {
            let bounds = outlined.px_bounds();
            outlined.draw(|x, y, c| {
                let px = bounds.min.x as i64 + x as i64;
                let py = bounds.min.y as i64 + y as i64;
                if px < 0 || py < 0 || px >= width as i64 || py >= height as i64 {
                    return;
                }
                let slot = &mut coverage[(py as u32 * width + px as u32) as usize];
                *slot = (*slot + c).min(1.0);
            });
        }

        Some(GlyphMask {
            width,
            height,
            coverage,
        })
    }
}
