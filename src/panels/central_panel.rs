use crate::SketchpadApp;
use crate::surface::CanvasPainter;

/// The drawing surface: routes pointer input into the sketchpad and
/// repaints it from history every frame.
pub fn central_panel(app: &mut SketchpadApp, ui: &mut egui::Ui) {
    let side = app.sketchpad.config().canvas_size;
    let (response, painter) =
        ui.allocate_painter(egui::vec2(side, side), egui::Sense::click_and_drag());
    let canvas_rect = response.rect;

    if response.hovered() || response.dragged() || app.sketchpad.is_drawing() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::None);
    }

    app.input.set_canvas_rect(canvas_rect);
    if !app.sketchpad.is_prompting() {
        let events = app.input.process_input(ui.ctx());
        for event in &events {
            app.sketchpad.handle_event(event);
        }
    }

    let mut surface = CanvasPainter::new(&painter, canvas_rect);
    app.sketchpad.repaint(&mut surface);
}
