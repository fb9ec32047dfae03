use eframe::egui;

use crate::tools::ToolPreset;

/// Square button for one tool preset, highlighted while selected.
pub struct ToolButton<'a> {
    pub preset: &'a ToolPreset,
    pub selected: bool,
}

impl<'a> ToolButton<'a> {
    pub fn new(preset: &'a ToolPreset, selected: bool) -> Self {
        Self { preset, selected }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let label = self.preset.label();
        let font_id = egui::FontId::proportional(18.0);
        let text_width = ui
            .painter()
            .layout_no_wrap(label.to_owned(), font_id.clone(), egui::Color32::WHITE)
            .size()
            .x;
        let button_size = egui::vec2((text_width + 12.0).max(32.0), 32.0);
        let (rect, response) = ui.allocate_exact_size(button_size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if self.selected {
                egui::Color32::from_rgb(100, 181, 246) // Light blue when selected
            } else if response.hovered() {
                egui::Color32::from_gray(70)
            } else {
                egui::Color32::from_gray(50)
            };

            ui.painter().rect_filled(rect, 4.0, bg_color);

            let text_color = if self.selected {
                egui::Color32::BLACK
            } else {
                egui::Color32::WHITE
            };

            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                label,
                font_id,
                text_color,
            );

            if self.selected {
                ui.painter().rect_stroke(
                    rect,
                    4.0,
                    egui::Stroke::new(2.0, egui::Color32::from_rgb(33, 150, 243)),
                );
            }
        }

        response
    }
}
