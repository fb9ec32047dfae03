use egui::{Context, Key, KeyboardShortcut, Modifiers, Pos2, Rect};

/// Represents the location where an input event occurred
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputLocation {
    /// The position in canvas-local coordinates
    pub position: Pos2,
    /// Whether this position is within the canvas bounds
    pub is_in_canvas: bool,
}

/// Input the sketchpad reacts to, already mapped into canvas space
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed over the canvas
    PointerDown { location: InputLocation },
    /// Pointer moved, held or not
    PointerMove { location: InputLocation },
    /// Primary button released, possibly outside the canvas
    PointerUp { location: Option<InputLocation> },
    /// Pointer left the canvas or the window
    PointerLeave,
    Undo,
    Redo,
}

/// One frame's worth of pointer state, in screen coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSnapshot {
    pub position: Option<Pos2>,
    pub pressed: bool,
    pub released: bool,
}

/// Handles converting raw egui input into canvas-local InputEvents
#[derive(Debug, Clone)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    canvas_rect: Rect,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            last_pointer_pos: None,
            canvas_rect,
        }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    /// Creates an InputLocation from a screen position
    fn make_location(&self, pos: Pos2) -> InputLocation {
        InputLocation {
            position: pos - self.canvas_rect.min.to_vec2(),
            is_in_canvas: self.canvas_rect.contains(pos),
        }
    }

    /// Process raw egui input and generate our InputEvents
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        let snapshot = ctx.input(|input| PointerSnapshot {
            position: input.pointer.latest_pos(),
            pressed: input.pointer.primary_pressed(),
            released: input.pointer.primary_released(),
        });
        let mut events = self.translate(snapshot);

        let undo = KeyboardShortcut::new(Modifiers::COMMAND, Key::Z);
        let redo = KeyboardShortcut::new(Modifiers::COMMAND, Key::Y);
        let redo_shifted = KeyboardShortcut::new(Modifiers::COMMAND | Modifiers::SHIFT, Key::Z);

        // Shifted redo first: the plain undo shortcut would also match it
        ctx.input_mut(|input| {
            if input.consume_shortcut(&redo_shifted) || input.consume_shortcut(&redo) {
                events.push(InputEvent::Redo);
            } else if input.consume_shortcut(&undo) {
                events.push(InputEvent::Undo);
            }
        });

        events
    }

    /// Turn a pointer snapshot into events. Ordering within a frame is
    /// down, move, up, so a quick click still opens and closes a command.
    pub fn translate(&mut self, snapshot: PointerSnapshot) -> Vec<InputEvent> {
        let mut events = Vec::new();

        if snapshot.pressed {
            if let Some(pos) = snapshot.position {
                let location = self.make_location(pos);
                if location.is_in_canvas {
                    events.push(InputEvent::PointerDown { location });
                }
            }
        }

        match snapshot.position {
            Some(pos) if Some(pos) != self.last_pointer_pos => {
                let location = self.make_location(pos);
                let was_inside = self
                    .last_pointer_pos
                    .is_some_and(|last| self.canvas_rect.contains(last));
                events.push(InputEvent::PointerMove { location });
                if was_inside && !location.is_in_canvas {
                    events.push(InputEvent::PointerLeave);
                }
            }
            None if self.last_pointer_pos.is_some() => events.push(InputEvent::PointerLeave),
            _ => {}
        }

        if snapshot.released {
            events.push(InputEvent::PointerUp {
                location: snapshot.position.map(|pos| self.make_location(pos)),
            });
        }

        self.last_pointer_pos = snapshot.position;
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    fn handler() -> InputHandler {
        InputHandler::new(Rect::from_min_size(pos2(100.0, 50.0), egui::vec2(256.0, 256.0)))
    }

    #[test]
    fn positions_are_canvas_local() {
        let mut input = handler();
        let events = input.translate(PointerSnapshot {
            position: Some(pos2(150.0, 100.0)),
            pressed: true,
            released: false,
        });
        assert_eq!(
            events[0],
            InputEvent::PointerDown {
                location: InputLocation {
                    position: pos2(50.0, 50.0),
                    is_in_canvas: true,
                }
            }
        );
    }

    #[test]
    fn press_outside_canvas_is_ignored() {
        let mut input = handler();
        let events = input.translate(PointerSnapshot {
            position: Some(pos2(10.0, 10.0)),
            pressed: true,
            released: false,
        });
        assert!(!events.iter().any(|e| matches!(e, InputEvent::PointerDown { .. })));
    }

    #[test]
    fn release_outside_canvas_still_reported() {
        let mut input = handler();
        let events = input.translate(PointerSnapshot {
            position: Some(pos2(900.0, 900.0)),
            pressed: false,
            released: true,
        });
        assert!(matches!(
            events.last(),
            Some(InputEvent::PointerUp { location: Some(l) }) if !l.is_in_canvas
        ));
    }

    #[test]
    fn leaving_canvas_emits_leave_once() {
        let mut input = handler();
        input.translate(PointerSnapshot {
            position: Some(pos2(120.0, 60.0)),
            ..Default::default()
        });
        let events = input.translate(PointerSnapshot {
            position: Some(pos2(10.0, 10.0)),
            ..Default::default()
        });
        assert_eq!(events.iter().filter(|e| **e == InputEvent::PointerLeave).count(), 1);

        let events = input.translate(PointerSnapshot {
            position: Some(pos2(20.0, 10.0)),
            ..Default::default()
        });
        assert!(!events.contains(&InputEvent::PointerLeave));
    }

    #[test]
    fn unchanged_position_is_not_a_move() {
        let mut input = handler();
        let still = PointerSnapshot {
            position: Some(pos2(120.0, 60.0)),
            ..Default::default()
        };
        input.translate(still);
        assert!(input.translate(still).is_empty());
    }
}
