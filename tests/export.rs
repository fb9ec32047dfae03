use egui::{Color32, pos2};
use sticker_sketchpad::export;
use sticker_sketchpad::surface::GlyphSet;
use sticker_sketchpad::{DrawCommand, FreehandStroke, Sketchpad, SketchpadConfig};

fn diagonal() -> DrawCommand {
    DrawCommand::stroke(FreehandStroke::from_points(
        vec![pos2(0.0, 0.0), pos2(255.0, 255.0)],
        2.0,
        Color32::BLACK,
    ))
}

#[test]
fn test_export_is_upscaled() {
    let config = SketchpadConfig::default();
    let image = export::render_image(&[diagonal()], &config, &GlyphSet::default()).unwrap();
    assert_eq!((image.width(), image.height()), (1024, 1024));

    // The stroke scales with the canvas
    assert_eq!(image.get_pixel(400, 400).0, [0, 0, 0, 255]);
    assert_eq!(image.get_pixel(400, 10).0, [255, 255, 255, 255]);
}

#[test]
fn test_export_produces_png() {
    let config = SketchpadConfig {
        export_scale: 2,
        ..Default::default()
    };
    let png = export::render_png(&[diagonal()], &config, &GlyphSet::default()).unwrap();
    assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");

    let decoded = image::load_from_memory(&png).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (512, 512));
}

#[test]
fn test_export_leaves_sketchpad_untouched() {
    let mut pad = Sketchpad::new(SketchpadConfig::default()).unwrap();
    pad.pointer_move(pos2(100.0, 100.0), true);
    pad.pointer_down(pos2(10.0, 10.0));
    pad.pointer_move(pos2(50.0, 50.0), true);
    pad.pointer_up(None);
    pad.pointer_move(pos2(100.0, 100.0), true);

    let committed = pad.history().committed().to_vec();
    let preview = pad.preview().cloned();
    let png = pad.export_png().unwrap();
    assert!(!png.is_empty());
    assert_eq!(pad.history().committed(), committed.as_slice());
    assert_eq!(pad.preview().cloned(), preview);

    // The preview is not part of the export
    let decoded = image::load_from_memory(&png).unwrap().to_rgba8();
    assert_eq!(decoded.get_pixel(400, 400).0, [255, 255, 255, 255]);
}

#[test]
fn test_config_fields_default_when_missing() {
    let config: SketchpadConfig =
        serde_json::from_str(r#"{ "export_scale": 2, "export_file_name": "out.png" }"#).unwrap();
    assert_eq!(config.export_scale, 2);
    assert_eq!(config.export_file_name, "out.png");
    assert_eq!(config.canvas_size, 256.0);
    assert_eq!(config.stickers, SketchpadConfig::default().stickers);
}
