use crate::SketchpadApp;
use crate::components::ToolButton;

/// History buttons, tool buttons and export, laid out under the canvas.
pub fn tools_panel(app: &mut SketchpadApp, ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        let can_undo = app.sketchpad.history().can_undo();
        let can_redo = app.sketchpad.history().can_redo();

        if ui.button("Clear").clicked() {
            app.sketchpad.clear();
        }
        if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
            app.sketchpad.undo();
        }
        if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
            app.sketchpad.redo();
        }
        if ui.button("Export").clicked() {
            app.status = match app.sketchpad.export() {
                Ok(()) => Some(format!("Exported {}", app.sketchpad.config().export_file_name)),
                Err(err) => {
                    log::warn!("Export failed: {err}");
                    Some(format!("Export failed: {err}"))
                }
            };
        }
    });

    ui.horizontal_wrapped(|ui| {
        let selected = app.sketchpad.selected_preset().cloned();
        for preset in app.sketchpad.presets() {
            let is_selected = selected.as_ref() == Some(&preset);
            if ToolButton::new(&preset, is_selected).show(ui).clicked() {
                app.sketchpad.select_tool(preset);
            }
        }
        if ui.button("Custom…").clicked() {
            app.sketchpad.request_custom_sticker();
        }
    });

    let history = app.sketchpad.history();
    ui.horizontal(|ui| {
        ui.label(format!("Undo stack size: {}", history.committed().len()));
        ui.label(format!("Redo stack size: {}", history.redo_buffer().len()));
    });

    if let Some(status) = &app.status {
        ui.label(status.as_str());
    }
}
