use crate::event::{EventHandler, SketchpadEvent};

/// Fan-out of [`SketchpadEvent`]s to whoever is listening.
///
/// Handlers run synchronously, in subscription order, before the operation
/// that emitted the event returns.
#[derive(Default)]
pub struct EventBus {
    handlers: Vec<Box<dyn EventHandler>>,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, handler: Box<dyn EventHandler>) {
        self.handlers.push(handler);
    }

    pub fn emit(&mut self, event: SketchpadEvent) {
        log::trace!("{event:?} -> {} handlers", self.handlers.len());
        for handler in &mut self.handlers {
            handler.handle_event(&event);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    #[test]
    fn handlers_run_in_subscription_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut bus = EventBus::new();
        for tag in ["first", "second"] {
            let seen = Arc::clone(&seen);
            bus.subscribe(Box::new(move |_: &SketchpadEvent| seen.lock().unwrap().push(tag)));
        }

        bus.emit(SketchpadEvent::DrawingChanged);
        assert_eq!(*seen.lock().unwrap(), vec!["first", "second"]);
    }
}
