mod bus;
mod events;

pub use bus::EventBus;
pub use events::SketchpadEvent;

pub trait EventHandler: Send {
    fn handle_event(&mut self, event: &SketchpadEvent);
}

/// Asks egui for a new frame whenever the sketchpad changes.
pub struct RepaintOnChange {
    ctx: egui::Context,
}

impl RepaintOnChange {
    pub fn new(ctx: egui::Context) -> Self {
        Self { ctx }
    }
}

impl EventHandler for RepaintOnChange {
    fn handle_event(&mut self, _event: &SketchpadEvent) {
        self.ctx.request_repaint();
    }
}

impl<F> EventHandler for F
where
    F: FnMut(&SketchpadEvent) + Send,
{
    fn handle_event(&mut self, event: &SketchpadEvent) {
        self(event)
    }
}
