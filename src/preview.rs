use egui::{Color32, Pos2};

use crate::surface::Surface;

const RING_COLOR: Color32 = Color32::from_gray(40);
const GHOST_COLOR: Color32 = Color32::from_black_alpha(96);

/// Hint of where the next mark would land. Never part of history.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolPreview {
    /// Outline of the marker tip, `diameter` = current marker width
    Ring { position: Pos2, diameter: f32 },
    /// Faded copy of the armed sticker glyph
    Ghost {
        position: Pos2,
        glyph: String,
        font_size: f32,
    },
}

impl ToolPreview {
    pub fn position(&self) -> Pos2 {
        match self {
            Self::Ring { position, .. } | Self::Ghost { position, .. } => *position,
        }
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        match self {
            Self::Ring { position, diameter } => {
                surface.stroke_circle(*position, diameter / 2.0, 1.0, RING_COLOR);
            }
            Self::Ghost {
                position,
                glyph,
                font_size,
            } => {
                surface.draw_text(glyph, *position, *font_size, GHOST_COLOR);
            }
        }
    }
}
