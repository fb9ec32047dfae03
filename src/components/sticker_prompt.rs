use eframe::egui;

/// What the user did with the prompt this frame
#[derive(Debug, Clone, PartialEq)]
pub enum PromptOutcome {
    Pending,
    Submitted(String),
    Cancelled,
}

/// Modal asking for custom sticker text. Holds the text being typed
/// across frames.
#[derive(Debug, Default)]
pub struct StickerPrompt {
    text: String,
}

impl StickerPrompt {
    pub fn show(&mut self, ctx: &egui::Context) -> PromptOutcome {
        let mut outcome = PromptOutcome::Pending;

        egui::Window::new("Custom sticker")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label("Type the text for your sticker:");
                let input = ui.text_edit_singleline(&mut self.text);
                if !input.lost_focus() {
                    input.request_focus();
                }

                ui.separator();
                ui.horizontal(|ui| {
                    let submitted =
                        input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                    if ui.button("OK").clicked() || submitted {
                        outcome = PromptOutcome::Submitted(std::mem::take(&mut self.text));
                    }
                    if ui.button("Cancel").clicked() {
                        outcome = PromptOutcome::Cancelled;
                    }
                });
            });

        if outcome == PromptOutcome::Pending && ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            outcome = PromptOutcome::Cancelled;
        }
        if outcome == PromptOutcome::Cancelled {
            self.text.clear();
        }
        outcome
    }
}
