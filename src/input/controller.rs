use egui::{Color32, Pos2};

use super::InputEvent;
use crate::drawable::Drawable;
use crate::history::History;
use crate::preview::ToolPreview;
use crate::tools::Tool;

/// Pointer state machine
#[derive(Debug)]
pub enum InputState {
    /// Not drawing; optionally showing where the next mark would land
    Idle { preview: Option<ToolPreview> },
    /// A drawable is in progress and follows the pointer
    Drawing { drawable: Drawable },
}

impl Default for InputState {
    fn default() -> Self {
        Self::Idle { preview: None }
    }
}

/// Turns pointer events into in-progress drawables and commits them
#[derive(Debug, Default)]
pub struct InputController {
    state: InputState,
}

impl InputController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &InputState {
        &self.state
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.state, InputState::Drawing { .. })
    }

    /// The drawable following the pointer, if any
    pub fn in_progress(&self) -> Option<&Drawable> {
        match &self.state {
            InputState::Drawing { drawable } => Some(drawable),
            InputState::Idle { .. } => None,
        }
    }

    /// The idle preview, if any. Always `None` while drawing.
    pub fn preview(&self) -> Option<&ToolPreview> {
        match &self.state {
            InputState::Idle { preview } => preview.as_ref(),
            InputState::Drawing { .. } => None,
        }
    }

    /// Handle one event. Returns `true` if the canvas needs a redraw.
    pub fn handle_event(
        &mut self,
        event: InputEvent,
        tool: &Tool,
        marker_color: Color32,
        history: &mut History,
    ) -> bool {
        match event {
            InputEvent::PointerDown { position } => self.pointer_down(position, tool, marker_color),
            InputEvent::PointerMove { position } => self.pointer_move(position, tool),
            InputEvent::PointerUp => self.pointer_up(history),
            InputEvent::PointerLeave => self.pointer_leave(),
        }
    }

    fn pointer_down(&mut self, pos: Pos2, tool: &Tool, marker_color: Color32) -> bool {
        if self.is_drawing() {
            log::debug!("Ignoring pointer down while drawing");
            return false;
        }
        self.state = InputState::Drawing {
            drawable: tool.begin(pos, marker_color),
        };
        true
    }

    fn pointer_move(&mut self, pos: Pos2, tool: &Tool) -> bool {
        match &mut self.state {
            InputState::Drawing { drawable } => drawable.drag_to(pos),
            // Replaced wholesale, never merged
            InputState::Idle { preview } => *preview = Some(tool.preview_at(pos)),
        }
        true
    }

    fn pointer_up(&mut self, history: &mut History) -> bool {
        match std::mem::take(&mut self.state) {
            InputState::Drawing { drawable } => history.commit(drawable),
            other => {
                self.state = other;
                false
            }
        }
    }

    fn pointer_leave(&mut self) -> bool {
        match &mut self.state {
            InputState::Idle { preview } => preview.take().is_some(),
            InputState::Drawing { .. } => false,
        }
    }
}
