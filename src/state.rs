use egui::Color32;

use crate::config::SketchConfig;
use crate::error::SketchResult;
use crate::export;
use crate::history::History;
use crate::input::{InputController, InputEvent};
use crate::renderer::Renderer;
use crate::surface::Surface;
use crate::tools::Tool;

/// Everything a sketching session owns.
///
/// Each operation that changes what is on screen sets a dirty flag, which
/// the host checks once per frame with [`SketchState::take_dirty`].
#[derive(Debug)]
pub struct SketchState {
    config: SketchConfig,
    history: History,
    controller: InputController,
    renderer: Renderer,
    tool: Tool,
    stickers: Vec<String>,
    dirty: bool,
}

impl SketchState {
    pub fn new(config: SketchConfig) -> Self {
        Self {
            history: History::new(),
            controller: InputController::new(),
            renderer: Renderer::new(config.background_color()),
            tool: Tool::Marker {
                width: config.thin_width,
            },
            stickers: config.stickers.clone(),
            config,
            dirty: true,
        }
    }

    pub fn config(&self) -> &SketchConfig {
        &self.config
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn controller(&self) -> &InputController {
        &self.controller
    }

    pub fn tool(&self) -> &Tool {
        &self.tool
    }

    /// Built-in stickers followed by any custom ones
    pub fn stickers(&self) -> &[String] {
        &self.stickers
    }

    fn marker_color(&self) -> Color32 {
        self.config.marker_color()
    }

    pub fn handle_event(&mut self, event: InputEvent) {
        let marker_color = self.marker_color();
        if self
            .controller
            .handle_event(event, &self.tool, marker_color, &mut self.history)
        {
            self.dirty = true;
        }
    }

    /// Arm the marker with `width`. A stroke in progress keeps its own width.
    pub fn select_width(&mut self, width: f32) {
        log::info!("Selected marker width {}", width);
        self.tool = Tool::Marker { width };
    }

    /// Arm a sticker glyph. A sticker in progress keeps its own glyph.
    pub fn select_sticker(&mut self, glyph: impl Into<String>) {
        let glyph = glyph.into();
        log::info!("Selected sticker {}", glyph);
        self.tool = Tool::Sticker {
            glyph,
            font_size: self.config.sticker_font_size,
        };
    }

    /// Add a custom sticker to the palette and arm it. Blank text is ignored.
    pub fn add_custom_sticker(&mut self, text: &str) -> bool {
        let glyph = text.trim();
        if glyph.is_empty() {
            return false;
        }
        if !self.stickers.iter().any(|s| s == glyph) {
            self.stickers.push(glyph.to_owned());
        }
        self.select_sticker(glyph);
        true
    }

    pub fn undo(&mut self) {
        self.dirty |= self.history.undo();
    }

    pub fn redo(&mut self) {
        self.dirty |= self.history.redo();
    }

    pub fn clear(&mut self) {
        self.dirty |= self.history.clear();
    }

    /// Encode the committed drawing as PNG at `scale` times the canvas size
    pub fn export(&self, scale: f32) -> SketchResult<Vec<u8>> {
        export::export_png(&self.history, &self.renderer, self.config.canvas_size, scale)
    }

    /// Full redraw of the canvas onto `surface`
    pub fn render(&self, surface: &mut dyn Surface) {
        self.renderer.redraw(surface, &self.history, &self.controller);
    }

    /// Whether anything changed since the last call
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}
