mod editor_state;
mod sketchpad;

pub use editor_state::EditorState;
pub use sketchpad::Sketchpad;
