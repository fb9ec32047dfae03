// src/renderer.rs
use egui::Color32;

use crate::element::{DrawCommand, Element};
use crate::surface::Surface;
use crate::tools::Preview;

/// Redraws a surface from scratch out of the committed commands.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    background: Color32,
}

impl Renderer {
    pub fn new(background: Color32) -> Self {
        Self { background }
    }

    /// Repaints the whole surface
    ///
    /// Args:
    ///     surface (Surface): Target to paint; its previous contents are discarded
    ///     commands (&[DrawCommand]): Committed commands, replayed in order
    ///     preview (Option<&Preview>): Tool ghost drawn on top when not drawing
    ///     drawing (bool): True while the pointer is held on a command
    pub fn repaint(
        &self,
        surface: &mut dyn Surface,
        commands: &[DrawCommand],
        preview: Option<&Preview>,
        drawing: bool,
    ) {
        surface.fill(self.background);

        for command in commands {
            command.render(surface);
        }

        if !drawing {
            if let Some(preview) = preview {
                preview.render(surface);
            }
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(Color32::WHITE)
    }
}
