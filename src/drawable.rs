use egui::{Color32, Pos2};

use crate::surface::Surface;

/// A freehand polyline mark
#[derive(Debug, PartialEq)]
pub struct Stroke {
    points: Vec<Pos2>,
    width: f32,
    color: Color32,
}

impl Stroke {
    /// Start a stroke at `start`. Strokes always hold at least one point.
    pub fn new(start: Pos2, width: f32, color: Color32) -> Self {
        Self {
            points: vec![start],
            width,
            color,
        }
    }

    pub fn add_point(&mut self, point: Pos2) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        // A single point is not a line yet
        if self.points.len() < 2 {
            return;
        }
        surface.stroke_path(&self.points, self.width, self.color);
    }
}

/// A single glyph placed at an anchor point
#[derive(Debug, PartialEq)]
pub struct Sticker {
    position: Pos2,
    glyph: String,
    font_size: f32,
}

impl Sticker {
    pub fn new(position: Pos2, glyph: impl Into<String>, font_size: f32) -> Self {
        Self {
            position,
            glyph: glyph.into(),
            font_size,
        }
    }

    pub fn move_to(&mut self, position: Pos2) {
        self.position = position;
    }

    pub fn position(&self) -> Pos2 {
        self.position
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        surface.draw_text(&self.glyph, self.position, self.font_size, Color32::BLACK);
    }
}

/// One mark on the canvas.
///
/// While in progress a drawable is mutated through [`Drawable::drag_to`];
/// once committed to [`crate::History`] it is only ever moved between stacks.
#[derive(Debug, PartialEq)]
pub enum Drawable {
    Stroke(Stroke),
    Sticker(Sticker),
}

impl Drawable {
    /// Extend a stroke with `pos`, or move a sticker to it
    pub fn drag_to(&mut self, pos: Pos2) {
        match self {
            Self::Stroke(stroke) => stroke.add_point(pos),
            Self::Sticker(sticker) => sticker.move_to(pos),
        }
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        match self {
            Self::Stroke(stroke) => stroke.render(surface),
            Self::Sticker(sticker) => sticker.render(surface),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Stroke(_) => "stroke",
            Self::Sticker(_) => "sticker",
        }
    }

    pub fn as_stroke(&self) -> Option<&Stroke> {
        match self {
            Self::Stroke(stroke) => Some(stroke),
            _ => None,
        }
    }

    pub fn as_sticker(&self) -> Option<&Sticker> {
        match self {
            Self::Sticker(sticker) => Some(sticker),
            _ => None,
        }
    }
}

impl From<Stroke> for Drawable {
    fn from(stroke: Stroke) -> Self {
        Self::Stroke(stroke)
    }
}

impl From<Sticker> for Drawable {
    fn from(sticker: Sticker) -> Self {
        Self::Sticker(sticker)
    }
}
