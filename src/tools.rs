use egui::{Color32, Pos2};

use crate::drawable::{Drawable, Sticker, Stroke};
use crate::preview::ToolPreview;

/// The currently selected tool.
///
/// Selecting a tool is a plain value write; it only affects drawables
/// started afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum Tool {
    Marker { width: f32 },
    Sticker { glyph: String, font_size: f32 },
}

impl Tool {
    pub fn name(&self) -> String {
        match self {
            Self::Marker { width } => format!("Marker ({}px)", width),
            Self::Sticker { glyph, .. } => format!("Sticker {}", glyph),
        }
    }

    /// Create the in-progress drawable for a pointer-down at `pos`
    pub fn begin(&self, pos: Pos2, marker_color: Color32) -> Drawable {
        match self {
            Self::Marker { width } => Stroke::new(pos, *width, marker_color).into(),
            Self::Sticker { glyph, font_size } => Sticker::new(pos, glyph.clone(), *font_size).into(),
        }
    }

    /// The idle hint for a pointer hovering at `pos`
    pub fn preview_at(&self, pos: Pos2) -> ToolPreview {
        match self {
            Self::Marker { width } => ToolPreview::Ring {
                position: pos,
                diameter: *width,
            },
            Self::Sticker { glyph, font_size } => ToolPreview::Ghost {
                position: pos,
                glyph: glyph.clone(),
                font_size: *font_size,
            },
        }
    }

    pub fn is_marker_width(&self, width: f32) -> bool {
        matches!(self, Self::Marker { width: w } if *w == width)
    }

    pub fn is_sticker(&self, glyph: &str) -> bool {
        matches!(self, Self::Sticker { glyph: g, .. } if g == glyph)
    }
}
