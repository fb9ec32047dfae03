use crate::components::{PromptOutcome, StickerPrompt};
use crate::config::SketchpadConfig;
use crate::error::SketchpadResult;
use crate::event::RepaintOnChange;
use crate::input::InputHandler;
use crate::panels;
use crate::state::Sketchpad;

pub const APP_NAME: &str = "Sticker Sketchpad";

/// The eframe shell around a [`Sketchpad`]. Nothing here is persisted:
/// a restart starts from a blank canvas.
#[derive(Debug)]
pub struct SketchpadApp {
    pub(crate) sketchpad: Sketchpad,
    pub(crate) input: InputHandler,
    pub(crate) prompt: StickerPrompt,
    /// Result of the last export, shown under the controls
    pub(crate) status: Option<String>,
}

impl SketchpadApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> SketchpadResult<Self> {
        let mut app = Self::with_config(SketchpadConfig::default())?;
        app.sketchpad
            .subscribe(Box::new(RepaintOnChange::new(cc.egui_ctx.clone())));
        Ok(app)
    }

    pub fn with_config(config: SketchpadConfig) -> SketchpadResult<Self> {
        let sketchpad = Sketchpad::new(config)?;
        Ok(Self {
            sketchpad,
            input: InputHandler::new(egui::Rect::NOTHING),
            prompt: StickerPrompt::default(),
            status: None,
        })
    }
}

impl eframe::App for SketchpadApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(APP_NAME);
            panels::central_panel(self, ui);
            ui.add_space(8.0);
            panels::tools_panel(self, ui);
        });

        if self.sketchpad.is_prompting() {
            match self.prompt.show(ctx) {
                PromptOutcome::Pending => {}
                PromptOutcome::Submitted(text) => self.sketchpad.resolve_prompt(Some(text)),
                PromptOutcome::Cancelled => self.sketchpad.resolve_prompt(None),
            }
        }
    }
}
