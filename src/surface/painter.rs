use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Shape, Stroke as EguiStroke};

use super::Surface;

/// On-screen surface that forwards draw calls to an egui painter.
///
/// Surface-local coordinates are offset by the canvas rect's top-left corner.
pub struct PainterSurface<'a> {
    painter: &'a Painter,
    rect: Rect,
    clear_color: Color32,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a Painter, rect: Rect, clear_color: Color32) -> Self {
        Self {
            painter,
            rect,
            clear_color,
        }
    }

    fn to_screen(&self, pos: Pos2) -> Pos2 {
        self.rect.min + pos.to_vec2()
    }
}

impl Surface for PainterSurface<'_> {
    fn clear(&mut self) {
        self.painter.rect_filled(self.rect, 0.0, self.clear_color);
    }

    fn fill_background(&mut self, color: Color32) {
        self.painter.rect_filled(self.rect, 0.0, color);
    }

    fn stroke_path(&mut self, points: &[Pos2], width: f32, color: Color32) {
        let screen_points: Vec<Pos2> = points.iter().map(|p| self.to_screen(*p)).collect();
        self.painter
            .add(Shape::line(screen_points, EguiStroke::new(width, color)));
    }

    fn stroke_circle(&mut self, center: Pos2, radius: f32, width: f32, color: Color32) {
        self.painter
            .circle_stroke(self.to_screen(center), radius, EguiStroke::new(width, color));
    }

    fn draw_text(&mut self, text: &str, pos: Pos2, font_size: f32, color: Color32) {
        self.painter.text(
            self.to_screen(pos),
            Align2::CENTER_CENTER,
            text,
            FontId::proportional(font_size),
            color,
        );
    }
}
