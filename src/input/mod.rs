use egui::{Context, Pos2, Rect};

mod controller;
pub use controller::{InputController, InputState};

/// Pointer events in surface-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed over the canvas
    PointerDown { position: Pos2 },
    /// Pointer moved over the canvas
    PointerMove { position: Pos2 },
    /// Primary button released anywhere in the viewport
    PointerUp,
    /// Pointer left the canvas
    PointerLeave,
}

/// The parts of egui's pointer state we care about for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSnapshot {
    /// Pointer position in screen coordinates, if it is over the window
    pub position: Option<Pos2>,
    pub pressed: bool,
    pub released: bool,
}

impl PointerSnapshot {
    pub fn from_egui(ctx: &Context) -> Self {
        ctx.input(|input| Self {
            position: input.pointer.hover_pos(),
            pressed: input.pointer.primary_pressed(),
            released: input.pointer.primary_released(),
        })
    }
}

/// Converts raw egui pointer input into canvas-local [`InputEvent`]s
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    was_in_canvas: bool,
    canvas_rect: Rect,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            last_pointer_pos: None,
            was_in_canvas: false,
            canvas_rect,
        }
    }

    /// Update the canvas rectangle (e.g. if the layout moved it)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    fn to_local(&self, pos: Pos2) -> Pos2 {
        (pos - self.canvas_rect.min).to_pos2()
    }

    /// Process this frame's egui input
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        self.translate(PointerSnapshot::from_egui(ctx))
    }

    /// Turn one frame of pointer state into events, in the order they
    /// should be handled.
    pub fn translate(&mut self, snapshot: PointerSnapshot) -> Vec<InputEvent> {
        let mut events = Vec::new();
        let in_canvas = snapshot
            .position
            .is_some_and(|pos| self.canvas_rect.contains(pos));

        if let Some(pos) = snapshot.position.filter(|_| in_canvas) {
            let position = self.to_local(pos);
            if snapshot.pressed {
                events.push(InputEvent::PointerDown { position });
            } else if Some(pos) != self.last_pointer_pos {
                events.push(InputEvent::PointerMove { position });
            }
        } else if self.was_in_canvas {
            events.push(InputEvent::PointerLeave);
        }

        // Releases are observed for the whole viewport so a drag that exits
        // the canvas still commits.
        if snapshot.released {
            events.push(InputEvent::PointerUp);
        }

        self.last_pointer_pos = snapshot.position;
        self.was_in_canvas = in_canvas;
        events
    }
}
