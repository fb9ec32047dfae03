use egui::Pos2;

use crate::tools::ToolSelection;

/// Notifications emitted by the sketchpad after its state changes.
#[derive(Debug, Clone, PartialEq)]
pub enum SketchpadEvent {
    /// The committed drawing changed: push, extend, undo, redo or clear.
    DrawingChanged,
    /// The idle pointer moved; the preview follows it.
    ToolMoved { position: Option<Pos2> },
    ToolChanged { tool: ToolSelection },
    /// The custom sticker prompt opened (`true`) or closed (`false`).
    PromptChanged { open: bool },
}
