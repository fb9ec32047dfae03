mod sticker_prompt;
mod tool_button;

pub use sticker_prompt::{PromptOutcome, StickerPrompt};
pub use tool_button::ToolButton;
