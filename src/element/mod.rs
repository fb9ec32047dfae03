use egui::Pos2;
use uuid::Uuid;

pub(crate) mod common;
mod sticker;
mod stroke;

pub use sticker::StickerPlacement;
pub use stroke::FreehandStroke;

use crate::surface::Surface;

/// Behaviour shared by everything that can sit in the drawing.
pub trait Element {
    /// Paint onto `surface`. Only paints; degenerate geometry draws nothing.
    fn render(&self, surface: &mut dyn Surface);

    /// Follow the pointer while it is held: strokes grow, stickers move.
    fn extend(&mut self, point: Pos2);
}

/// Identity of a draw command, stable across undo and redo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommandId(Uuid);

impl CommandId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CommandId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CommandId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
enum DrawCommandKind {
    Stroke(FreehandStroke),
    Sticker(StickerPlacement),
}

/// One unit of the drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand {
    id: CommandId,
    kind: DrawCommandKind,
}

impl DrawCommand {
    pub fn stroke(stroke: FreehandStroke) -> Self {
        Self {
            id: CommandId::new(),
            kind: DrawCommandKind::Stroke(stroke),
        }
    }

    pub fn sticker(sticker: StickerPlacement) -> Self {
        Self {
            id: CommandId::new(),
            kind: DrawCommandKind::Sticker(sticker),
        }
    }

    pub fn id(&self) -> CommandId {
        self.id
    }

    pub fn as_stroke(&self) -> Option<&FreehandStroke> {
        match &self.kind {
            DrawCommandKind::Stroke(s) => Some(s),
            DrawCommandKind::Sticker(_) => None,
        }
    }

    pub fn as_sticker(&self) -> Option<&StickerPlacement> {
        match &self.kind {
            DrawCommandKind::Sticker(s) => Some(s),
            DrawCommandKind::Stroke(_) => None,
        }
    }

    /// Short label for history listings.
    pub fn label(&self) -> &'static str {
        match self.kind {
            DrawCommandKind::Stroke(_) => "Stroke",
            DrawCommandKind::Sticker(_) => "Sticker",
        }
    }
}

impl Element for DrawCommand {
    fn render(&self, surface: &mut dyn Surface) {
        match &self.kind {
            DrawCommandKind::Stroke(s) => s.render(surface),
            DrawCommandKind::Sticker(s) => s.render(surface),
        }
    }

    fn extend(&mut self, point: Pos2) {
        match &mut self.kind {
            DrawCommandKind::Stroke(s) => s.extend(point),
            DrawCommandKind::Sticker(s) => s.extend(point),
        }
    }
}
