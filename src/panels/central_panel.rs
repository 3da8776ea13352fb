use egui::{CursorIcon, Sense, Vec2};

use crate::SketchApp;
use crate::surface::PainterSurface;

pub fn central_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let canvas_size = Vec2::splat(app.state().config().canvas_size);
        let (response, painter) = ui.allocate_painter(canvas_size, Sense::drag());
        let canvas_rect = response.rect;

        if response.hovered() {
            ctx.set_cursor_icon(CursorIcon::Crosshair);
        }

        // Handle input before drawing so this frame shows its effect
        app.input_mut().set_canvas_rect(canvas_rect);
        for event in app.input_mut().process_input(ctx) {
            app.state_mut().handle_event(event);
        }

        let mut surface = PainterSurface::new(&painter, canvas_rect, ui.visuals().panel_fill);
        app.state().render(&mut surface);
    });
}
