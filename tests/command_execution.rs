use std::collections::HashSet;

use egui::{Color32, pos2};
use sticker_sketchpad::element::CommandId;
use sticker_sketchpad::surface::{GlyphSet, RasterSurface};
use sticker_sketchpad::{CommandHistory, DrawCommand, FreehandStroke, Renderer};

fn stroke(points: &[(f32, f32)]) -> DrawCommand {
    let points = points.iter().map(|(x, y)| pos2(*x, *y)).collect();
    DrawCommand::stroke(FreehandStroke::from_points(points, 2.0, Color32::BLACK))
}

fn ids(commands: &[DrawCommand]) -> Vec<CommandId> {
    commands.iter().map(DrawCommand::id).collect()
}

fn raster() -> RasterSurface {
    RasterSurface::new(32.0, 1, GlyphSet::default()).unwrap()
}

#[test]
fn test_undo_redo_scenario() {
    let a = stroke(&[(0.0, 0.0), (5.0, 5.0)]);
    let b = stroke(&[(10.0, 10.0)]);
    let (a_id, b_id) = (a.id(), b.id());

    let mut history = CommandHistory::new();
    history.push(a.clone());
    history.push(b);
    assert_eq!(ids(history.committed()), vec![a_id, b_id]);

    history.undo();
    assert_eq!(ids(history.committed()), vec![a_id]);
    assert_eq!(ids(history.redo_buffer()), vec![b_id]);

    history.undo();
    assert!(history.committed().is_empty());
    assert_eq!(ids(history.redo_buffer()), vec![b_id, a_id]);

    history.redo();
    assert_eq!(ids(history.committed()), vec![a_id]);
    assert_eq!(ids(history.redo_buffer()), vec![b_id]);

    // Only stroke A is on the surface now
    let renderer = Renderer::default();
    let mut replayed = raster();
    renderer.repaint(&mut replayed, history.committed(), None, false);
    let mut only_a = raster();
    renderer.repaint(&mut only_a, &[a], None, false);
    assert_eq!(replayed.image(), only_a.image());
}

#[test]
fn test_commands_are_never_lost_or_duplicated() {
    let mut history = CommandHistory::new();
    for i in 0..6 {
        history.push(stroke(&[(i as f32, 0.0), (i as f32, 4.0)]));
    }

    // Deterministic walk of undos and redos, including past both ends
    let walk = [true, true, false, true, true, true, true, true, true, false, false, true];
    for undo in walk {
        if undo {
            history.undo();
        } else {
            history.redo();
        }
        let all: Vec<CommandId> = history
            .committed()
            .iter()
            .chain(history.redo_buffer())
            .map(DrawCommand::id)
            .collect();
        let unique: HashSet<_> = all.iter().copied().collect();
        assert_eq!(all.len(), 6);
        assert_eq!(unique.len(), 6);
    }
}

#[test]
fn test_push_then_undo_conserves_total() {
    let mut history = CommandHistory::new();
    for i in 0..5 {
        history.push(stroke(&[(i as f32, 0.0), (i as f32, 1.0)]));
    }
    for undos in 1..=7 {
        history.undo();
        assert_eq!(history.committed().len() + history.redo_buffer().len(), 5);
        assert_eq!(history.redo_buffer().len(), undos.min(5));
    }
}

#[test]
fn test_undo_then_redo_restores_exact_sequence() {
    let mut history = CommandHistory::new();
    for i in 0..4 {
        history.push(stroke(&[(0.0, i as f32), (8.0, i as f32)]));
    }
    let before = ids(history.committed());

    history.undo();
    history.undo();
    history.redo();
    history.redo();
    assert_eq!(ids(history.committed()), before);
    assert!(history.redo_buffer().is_empty());
}

#[test]
fn test_push_after_undo_clears_redo() {
    let mut history = CommandHistory::new();
    history.push(stroke(&[(0.0, 0.0), (1.0, 1.0)]));
    history.push(stroke(&[(2.0, 2.0), (3.0, 3.0)]));
    history.undo();
    history.undo();

    let fresh = stroke(&[(4.0, 4.0), (5.0, 5.0)]);
    let fresh_id = fresh.id();
    history.push(fresh);

    assert!(!history.can_redo());
    history.redo();
    assert_eq!(ids(history.committed()), vec![fresh_id]);
}

#[test]
fn test_clear_then_repaint_is_blank() {
    let mut history = CommandHistory::new();
    for i in 0..10 {
        history.push(stroke(&[(0.0, 0.0), (i as f32 * 3.0, 31.0)]));
    }
    history.undo();
    history.clear();
    assert!(!history.can_undo() && !history.can_redo());

    let renderer = Renderer::default();
    let mut cleared = raster();
    renderer.repaint(&mut cleared, history.committed(), None, false);
    let mut blank = raster();
    renderer.repaint(&mut blank, &[], None, false);
    assert_eq!(cleared.image(), blank.image());
}
