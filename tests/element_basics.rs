use egui::{Color32, pos2};
use sticker_sketchpad::surface::{GlyphSet, RasterSurface, Surface};
use sticker_sketchpad::{Element, FreehandStroke, StickerPlacement};

fn blank() -> RasterSurface {
    let mut surface = RasterSurface::new(64.0, 1, GlyphSet::default()).unwrap();
    surface.fill(Color32::WHITE);
    surface
}

#[test]
fn test_single_point_stroke_renders_nothing() {
    let stroke = FreehandStroke::new(pos2(20.0, 20.0), 8.0, Color32::RED);
    assert!(stroke.is_degenerate());

    let mut surface = blank();
    stroke.render(&mut surface);
    assert_eq!(surface.image(), blank().image());
}

#[test]
fn test_stroke_renders_through_every_point() {
    let points = vec![pos2(5.0, 5.0), pos2(50.0, 5.0), pos2(50.0, 50.0), pos2(5.0, 50.0)];
    let stroke = FreehandStroke::from_points(points, 3.0, Color32::BLACK);

    let mut surface = blank();
    stroke.render(&mut surface);

    // Midpoints of every segment are inked
    for (x, y) in [(27, 5), (50, 27), (27, 50)] {
        assert_eq!(surface.pixel(x, y), Some(Color32::BLACK), "({x}, {y})");
    }
    // The polyline is open: the closing edge is not drawn
    assert_eq!(surface.pixel(5, 27), Some(Color32::WHITE));
}

#[test]
fn test_stroke_keeps_its_own_style() {
    let thin_red = FreehandStroke::from_points(vec![pos2(0.0, 32.0), pos2(63.0, 32.0)], 2.0, Color32::RED);
    let mut surface = blank();
    thin_red.render(&mut surface);

    assert_eq!(surface.pixel(30, 32), Some(Color32::RED));
    // A thin stroke does not reach a thick marker's radius
    assert_eq!(surface.pixel(30, 36), Some(Color32::WHITE));
}

#[test]
fn test_sticker_renders_same_every_time() {
    let sticker = StickerPlacement::new(pos2(32.0, 32.0), "A", 0.7, 32.0);
    let mut first = blank();
    sticker.render(&mut first);
    let mut second = blank();
    sticker.render(&mut second);

    assert_eq!(first.image(), second.image());
    assert_ne!(first.image(), blank().image());
}

#[test]
fn test_sticker_rotation_is_recorded() {
    let sticker = StickerPlacement::new(pos2(32.0, 32.0), "A", 0.0, 32.0);
    let turned = StickerPlacement::new(pos2(32.0, 32.0), "A", 2.0, 32.0);

    let mut upright = blank();
    sticker.render(&mut upright);
    let mut rotated = blank();
    turned.render(&mut rotated);
    assert_ne!(upright.image(), rotated.image());
}
