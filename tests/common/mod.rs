#![allow(dead_code)]

use egui::{Color32, Pos2};
use sketchpad::Surface;

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear,
    FillBackground(Color32),
    StrokePath {
        points: Vec<Pos2>,
        width: f32,
        color: Color32,
    },
    StrokeCircle {
        center: Pos2,
        radius: f32,
    },
    DrawText {
        text: String,
        pos: Pos2,
        font_size: f32,
        color: Color32,
    },
}

/// Surface that records calls instead of drawing
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls that leave a mark, i.e. everything except clearing and background
    pub fn marks(&self) -> Vec<&DrawCall> {
        self.calls
            .iter()
            .filter(|call| !matches!(call, DrawCall::Clear | DrawCall::FillBackground(_)))
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.calls.push(DrawCall::Clear);
    }

    fn fill_background(&mut self, color: Color32) {
        self.calls.push(DrawCall::FillBackground(color));
    }

    fn stroke_path(&mut self, points: &[Pos2], width: f32, color: Color32) {
        self.calls.push(DrawCall::StrokePath {
            points: points.to_vec(),
            width,
            color,
        });
    }

    fn stroke_circle(&mut self, center: Pos2, radius: f32, _width: f32, _color: Color32) {
        self.calls.push(DrawCall::StrokeCircle { center, radius });
    }

    fn draw_text(&mut self, text: &str, pos: Pos2, font_size: f32, color: Color32) {
        self.calls.push(DrawCall::DrawText {
            text: text.to_owned(),
            pos,
            font_size,
            color,
        });
    }
}

pub fn stroke(points: &[(f32, f32)], width: f32) -> sketchpad::Drawable {
    let mut pts = points.iter().map(|&(x, y)| Pos2::new(x, y));
    let first = pts.next().expect("stroke needs a point");
    let mut stroke = sketchpad::Stroke::new(first, width, Color32::BLACK);
    for p in pts {
        stroke.add_point(p);
    }
    stroke.into()
}
