use crate::element::{CommandId, DrawCommand};

/// The drawing as an ordered list of committed commands, plus the commands
/// undo has taken off its tail.
///
/// A command lives in exactly one of the two stacks at a time; undo and
/// redo move it between them without copying.
#[derive(Debug, Default, Clone)]
pub struct CommandHistory {
    /// Replayed in order on every repaint
    committed: Vec<DrawCommand>,
    /// Most recently undone last
    redo_buffer: Vec<DrawCommand>,
}

impl CommandHistory {
    /// Creates a new empty command history
    pub fn new() -> Self {
        Self::default()
    }

    /// Commit a new command. Any redo history is discarded.
    pub fn push(&mut self, command: DrawCommand) {
        log::debug!("push {} {}", command.label(), command.id());
        self.committed.push(command);
        if !self.redo_buffer.is_empty() {
            log::debug!("dropping {} redoable commands", self.redo_buffer.len());
            self.redo_buffer.clear();
        }
    }

    /// Move the most recent committed command onto the redo buffer.
    pub fn undo(&mut self) {
        if let Some(command) = self.committed.pop() {
            log::debug!("undo {} {}", command.label(), command.id());
            self.redo_buffer.push(command);
        }
    }

    /// Move the most recently undone command back onto the drawing.
    pub fn redo(&mut self) {
        if let Some(command) = self.redo_buffer.pop() {
            log::debug!("redo {} {}", command.label(), command.id());
            self.committed.push(command);
        }
    }

    /// Forget everything, including what could have been redone.
    pub fn clear(&mut self) {
        self.committed.clear();
        self.redo_buffer.clear();
    }

    /// Returns true if there are commands that can be undone
    pub fn can_undo(&self) -> bool {
        !self.committed.is_empty()
    }

    /// Returns true if there are commands that can be redone
    pub fn can_redo(&self) -> bool {
        !self.redo_buffer.is_empty()
    }

    pub fn committed(&self) -> &[DrawCommand] {
        &self.committed
    }

    pub fn redo_buffer(&self) -> &[DrawCommand] {
        &self.redo_buffer
    }

    /// The committed command with `id`, for in-place extension while the
    /// pointer is held.
    pub fn committed_mut(&mut self, id: CommandId) -> Option<&mut DrawCommand> {
        // The active command is almost always the tail
        self.committed.iter_mut().rev().find(|c| c.id() == id)
    }
}
