//! The input state machine of the sketchpad.
//!
//! ```text
//!            pointer down              pointer up
//!   ┌──────┐ ───────────► ┌─────────┐ ─────────► ┌──────┐
//!   │ Idle │              │ Drawing │            │ Idle │
//!   └──┬───┘ ◄─────────── └─────────┘            └──────┘
//!      │      (undo/clear removed the active command)
//!      │ custom sticker      ┌───────────┐
//!      └───────────────────► │ Prompting │ ── text or cancel ──► Idle
//!                            └───────────┘
//! ```
//!
//! Pointer input is ignored while prompting.
use crate::element::CommandId;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditorState {
    /// No pointer held
    #[default]
    Idle,
    /// Pointer held; the command is committed and still growing
    Drawing { active: CommandId },
    /// Waiting on the custom sticker prompt
    Prompting,
}

impl EditorState {
    /// Validates whether a transition to the new state is allowed
    pub fn can_transition_to(&self, new_state: &EditorState) -> bool {
        match (self, new_state) {
            (EditorState::Idle, _) => true,
            (EditorState::Drawing { .. }, EditorState::Idle) => true,
            (EditorState::Prompting, EditorState::Idle) => true,
            _ => false,
        }
    }

    /// Returns true if the editor is currently in an idle state
    pub fn is_idle(&self) -> bool {
        matches!(self, EditorState::Idle)
    }

    /// Returns true if the editor is currently in a drawing state
    pub fn is_drawing(&self) -> bool {
        matches!(self, EditorState::Drawing { .. })
    }

    pub fn is_prompting(&self) -> bool {
        matches!(self, EditorState::Prompting)
    }
}
