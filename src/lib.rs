#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod components;
pub mod config;
pub mod element;
pub mod error;
pub mod event;
pub mod export;
pub mod input;
pub mod panels;
pub mod random;
pub mod renderer;
pub mod state;
pub mod surface;
pub mod tools;

pub use app::SketchpadApp;
pub use command::CommandHistory;
pub use config::SketchpadConfig;
pub use element::{DrawCommand, Element, FreehandStroke, StickerPlacement};
pub use error::{SketchpadError, SketchpadResult};
pub use event::{EventBus, SketchpadEvent};
pub use input::{InputEvent, InputHandler, InputLocation};
pub use renderer::Renderer;
pub use state::{EditorState, Sketchpad};
pub use tools::{Preview, ToolPreset, ToolSelection};
