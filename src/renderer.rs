use egui::Color32;

use crate::history::History;
use crate::input::InputController;
use crate::surface::Surface;

/// Redraws a surface from the model. Every frame is a full redraw.
#[derive(Debug, Clone)]
pub struct Renderer {
    background: Color32,
}

impl Renderer {
    pub fn new(background: Color32) -> Self {
        Self { background }
    }

    pub fn background(&self) -> Color32 {
        self.background
    }

    /// Clear the surface and draw every committed drawable, oldest first.
    ///
    /// This is all an export needs: no in-progress marks, no preview.
    pub fn render_committed(&self, surface: &mut dyn Surface, history: &History) {
        surface.clear();
        surface.fill_background(self.background);
        for drawable in history.drawables() {
            drawable.render(surface);
        }
    }

    /// Full frame: committed drawables, then whatever the pointer is doing
    pub fn redraw(&self, surface: &mut dyn Surface, history: &History, controller: &InputController) {
        self.render_committed(surface, history);

        if let Some(drawable) = controller.in_progress() {
            drawable.render(surface);
        } else if let Some(preview) = controller.preview() {
            preview.render(surface);
        }
    }
}
