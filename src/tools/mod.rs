use egui::Color32;

use crate::config::SketchpadConfig;
use crate::random::RandomSource;

mod preview;

pub use preview::Preview;

/// Buttons in the tool row. Selecting one produces a [`ToolSelection`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ToolPreset {
    ThinMarker,
    ThickMarker,
    Sticker(String),
}

impl ToolPreset {
    pub fn label(&self) -> &str {
        match self {
            ToolPreset::ThinMarker => "Thin",
            ToolPreset::ThickMarker => "Thick",
            ToolPreset::Sticker(glyph) => glyph,
        }
    }

    /// Resolve the preset into a concrete tool. Marker colour is rolled
    /// here, once per selection, not per stroke.
    pub fn select(&self, config: &SketchpadConfig, rng: &mut dyn RandomSource) -> ToolSelection {
        match self {
            ToolPreset::ThinMarker => ToolSelection::Marker {
                width: config.thin_marker_width,
                color: rng.next_color(),
            },
            ToolPreset::ThickMarker => ToolSelection::Marker {
                width: config.thick_marker_width,
                color: rng.next_color(),
            },
            ToolPreset::Sticker(glyph) => ToolSelection::Sticker {
                glyph: glyph.clone(),
            },
        }
    }
}

/// The tool new commands are created from.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolSelection {
    Marker { width: f32, color: Color32 },
    Sticker { glyph: String },
}

impl ToolSelection {
    /// The black thin marker the sketchpad starts with.
    pub fn initial(config: &SketchpadConfig) -> Self {
        ToolSelection::Marker {
            width: config.thin_marker_width,
            color: Color32::BLACK,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SequenceRandom;

    #[test]
    fn marker_presets_use_configured_widths() {
        let config = SketchpadConfig::default();
        let mut rng = SequenceRandom::new(vec![0.0]);
        let thin = ToolPreset::ThinMarker.select(&config, &mut rng);
        let thick = ToolPreset::ThickMarker.select(&config, &mut rng);
        assert!(matches!(thin, ToolSelection::Marker { width, .. } if width == 2.0));
        assert!(matches!(thick, ToolSelection::Marker { width, .. } if width == 8.0));
    }

    #[test]
    fn reselecting_a_marker_rolls_a_new_color() {
        let config = SketchpadConfig::default();
        let mut rng = SequenceRandom::new(vec![0.1, 0.2, 0.3, 0.7, 0.8, 0.9]);
        let first = ToolPreset::ThinMarker.select(&config, &mut rng);
        let second = ToolPreset::ThinMarker.select(&config, &mut rng);
        assert_ne!(first, second);
    }

    #[test]
    fn sticker_preset_carries_glyph() {
        let config = SketchpadConfig::default();
        let mut rng = SequenceRandom::new(vec![]);
        let tool = ToolPreset::Sticker("🌵".to_owned()).select(&config, &mut rng);
        assert_eq!(tool, ToolSelection::Sticker { glyph: "🌵".to_owned() });
    }
}
