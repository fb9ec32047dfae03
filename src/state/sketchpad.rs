use egui::Pos2;

use super::EditorState;
use crate::command::CommandHistory;
use crate::config::SketchpadConfig;
use crate::element::{DrawCommand, Element, FreehandStroke, StickerPlacement};
use crate::error::SketchpadResult;
use crate::event::{EventBus, EventHandler, SketchpadEvent};
use crate::export;
use crate::input::{InputEvent, InputLocation};
use crate::random::{RandomSource, UuidRandom};
use crate::renderer::Renderer;
use crate::surface::{GlyphSet, Surface};
use crate::tools::{Preview, ToolPreset, ToolSelection};

/// Owns everything the sketchpad mutates: the history, the current tool,
/// the preview and the input state machine.
///
/// All mutation goes through `&mut self`, so there is exactly one writer.
/// Every operation is total; none of them can fail.
pub struct Sketchpad {
    config: SketchpadConfig,
    history: CommandHistory,
    tool: ToolSelection,
    selected: Option<ToolPreset>,
    preview: Option<Preview>,
    state: EditorState,
    renderer: Renderer,
    glyphs: GlyphSet,
    rng: Box<dyn RandomSource>,
    events: EventBus,
}

impl std::fmt::Debug for Sketchpad {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sketchpad")
            .field("history", &self.history)
            .field("tool", &self.tool)
            .field("selected", &self.selected)
            .field("preview", &self.preview)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl Sketchpad {
    pub fn new(config: SketchpadConfig) -> SketchpadResult<Self> {
        Self::with_random(config, Box::new(UuidRandom))
    }

    /// Like [`Sketchpad::new`] with an explicit source for marker colours
    /// and sticker rotations.
    pub fn with_random(
        config: SketchpadConfig,
        rng: Box<dyn RandomSource>,
    ) -> SketchpadResult<Self> {
        config.validate()?;
        let glyphs = GlyphSet::from_egui_defaults();
        if glyphs.is_empty() {
            log::warn!("No fonts available; stickers will not appear in exports");
        }
        Ok(Self {
            tool: ToolSelection::initial(&config),
            selected: Some(ToolPreset::ThinMarker),
            renderer: Renderer::new(config.background),
            config,
            history: CommandHistory::new(),
            preview: None,
            state: EditorState::Idle,
            glyphs,
            rng,
            events: EventBus::new(),
        })
    }

    pub fn config(&self) -> &SketchpadConfig {
        &self.config
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn tool(&self) -> &ToolSelection {
        &self.tool
    }

    /// The tool button shown as selected, if the tool came from one
    pub fn selected_preset(&self) -> Option<&ToolPreset> {
        self.selected.as_ref()
    }

    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    pub fn is_drawing(&self) -> bool {
        self.state.is_drawing()
    }

    pub fn is_prompting(&self) -> bool {
        self.state.is_prompting()
    }

    /// Tool buttons in display order: both markers, then every sticker.
    pub fn presets(&self) -> Vec<ToolPreset> {
        let mut presets = vec![ToolPreset::ThinMarker, ToolPreset::ThickMarker];
        presets.extend(self.config.stickers.iter().cloned().map(ToolPreset::Sticker));
        presets
    }

    /// Subscribe a handler to receive events
    pub fn subscribe(&mut self, handler: Box<dyn EventHandler>) {
        self.events.subscribe(handler);
    }

    fn transition(&mut self, next: EditorState) {
        debug_assert!(
            self.state.can_transition_to(&next),
            "invalid transition {:?} -> {:?}",
            self.state,
            next
        );
        self.state = next;
    }

    pub fn handle_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::PointerDown { location } => self.pointer_down(location.position),
            InputEvent::PointerMove { location } => {
                self.pointer_move(location.position, location.is_in_canvas)
            }
            InputEvent::PointerUp { location } => self.pointer_up(*location),
            InputEvent::PointerLeave => self.pointer_leave(),
            InputEvent::Undo => self.undo(),
            InputEvent::Redo => self.redo(),
        }
    }

    /// Start a new command from the current tool and commit it straight away.
    pub fn pointer_down(&mut self, position: Pos2) {
        if !self.state.is_idle() {
            return;
        }
        let command = match &self.tool {
            ToolSelection::Marker { width, color } => {
                DrawCommand::stroke(FreehandStroke::new(position, *width, *color))
            }
            ToolSelection::Sticker { glyph } => DrawCommand::sticker(StickerPlacement::new(
                position,
                glyph.clone(),
                self.rng.next_angle(),
                self.config.sticker_size,
            )),
        };
        let active = command.id();
        self.history.push(command);
        self.transition(EditorState::Drawing { active });
        self.events.emit(SketchpadEvent::DrawingChanged);
    }

    /// Grow the active command, or move the preview when idle.
    pub fn pointer_move(&mut self, position: Pos2, in_canvas: bool) {
        match self.state {
            EditorState::Drawing { active } => {
                if let Some(command) = self.history.committed_mut(active) {
                    command.extend(position);
                    self.events.emit(SketchpadEvent::DrawingChanged);
                } else {
                    // Undo or clear took the command away mid-drag
                    self.transition(EditorState::Idle);
                }
            }
            EditorState::Idle => self.place_preview(Some(position).filter(|_| in_canvas)),
            EditorState::Prompting => {}
        }
    }

    /// Finish the active command. It stays in the history, now frozen, and
    /// the preview reappears under the pointer if it is over the canvas.
    pub fn pointer_up(&mut self, location: Option<InputLocation>) {
        if let EditorState::Drawing { active } = self.state {
            log::debug!("finished command {active}");
            self.transition(EditorState::Idle);
            self.place_preview(location.filter(|l| l.is_in_canvas).map(|l| l.position));
        }
    }

    fn place_preview(&mut self, position: Option<Pos2>) {
        if let Some(position) = position {
            match &mut self.preview {
                Some(preview) => preview.extend(position),
                None => self.preview = Some(Preview::new(&self.tool, position, &self.config)),
            }
        } else {
            self.preview = None;
        }
        self.events.emit(SketchpadEvent::ToolMoved {
            position: self.preview.as_ref().map(Preview::center),
        });
    }

    pub fn pointer_leave(&mut self) {
        if self.state.is_idle() && self.preview.take().is_some() {
            self.events.emit(SketchpadEvent::ToolMoved { position: None });
        }
    }

    /// Switch tools. Redo history is left alone; only a new command clears it.
    pub fn select_tool(&mut self, preset: ToolPreset) {
        if self.state.is_prompting() {
            log::warn!("Ignoring tool selection while the sticker prompt is open");
            return;
        }
        self.tool = preset.select(&self.config, self.rng.as_mut());
        log::info!("Selected {} -> {:?}", preset.label(), self.tool);
        self.selected = Some(preset);

        if let Some(center) = self.preview.as_ref().map(Preview::center) {
            self.preview = Some(Preview::new(&self.tool, center, &self.config));
        }
        self.events.emit(SketchpadEvent::ToolChanged {
            tool: self.tool.clone(),
        });
    }

    pub fn undo(&mut self) {
        if !self.history.can_undo() {
            return;
        }
        self.history.undo();
        self.release_if_detached();
        self.events.emit(SketchpadEvent::DrawingChanged);
    }

    pub fn redo(&mut self) {
        if !self.history.can_redo() {
            return;
        }
        self.history.redo();
        self.events.emit(SketchpadEvent::DrawingChanged);
    }

    pub fn clear(&mut self) {
        log::info!(
            "Clearing {} committed and {} redoable commands",
            self.history.committed().len(),
            self.history.redo_buffer().len()
        );
        self.history.clear();
        self.release_if_detached();
        self.events.emit(SketchpadEvent::DrawingChanged);
    }

    /// Drop out of Drawing when the active command is no longer committed,
    /// so a later move cannot touch a command sitting in the redo buffer.
    fn release_if_detached(&mut self) {
        if let EditorState::Drawing { active } = self.state {
            if !self.history.committed().iter().any(|c| c.id() == active) {
                self.transition(EditorState::Idle);
            }
        }
    }

    /// Open the custom sticker prompt. Returns false when a drag is in progress.
    pub fn request_custom_sticker(&mut self) -> bool {
        match self.state {
            EditorState::Idle => {
                self.transition(EditorState::Prompting);
                self.preview = None;
                self.events.emit(SketchpadEvent::PromptChanged { open: true });
                true
            }
            EditorState::Prompting => true,
            EditorState::Drawing { .. } => false,
        }
    }

    /// Close the prompt. Text is taken verbatim; blank or `None` cancels.
    pub fn resolve_prompt(&mut self, text: Option<String>) {
        if !self.state.is_prompting() {
            return;
        }
        self.transition(EditorState::Idle);
        self.events.emit(SketchpadEvent::PromptChanged { open: false });

        match text {
            Some(text) if !text.trim().is_empty() => {
                if !self.config.stickers.contains(&text) {
                    self.config.stickers.push(text.clone());
                }
                self.select_tool(ToolPreset::Sticker(text));
            }
            _ => log::warn!("Custom sticker cancelled"),
        }
    }

    /// Redraw `surface` from the committed history.
    pub fn repaint(&self, surface: &mut dyn Surface) {
        self.renderer.repaint(
            surface,
            self.history.committed(),
            self.preview.as_ref(),
            self.state.is_drawing(),
        );
    }

    /// Render the committed drawing as an upscaled PNG.
    pub fn export_png(&self) -> SketchpadResult<Vec<u8>> {
        export::render_png(self.history.committed(), &self.config, &self.glyphs)
    }

    /// Export and save (native) or download (web) under the configured name.
    pub fn export(&self) -> SketchpadResult<()> {
        let png = self.export_png()?;
        export::save(&png, &self.config.export_file_name)
    }
}
