use egui::{Color32, Pos2};

mod painter;
mod raster;

pub use painter::PainterSurface;
pub use raster::{MAX_SURFACE_SIDE, RasterSurface};

/// A 2D drawing target in surface-local pixel coordinates.
///
/// Drawables and previews only ever draw through this trait, so the same
/// model renders on screen and into an off-screen export.
pub trait Surface {
    /// Erase everything drawn so far
    fn clear(&mut self);

    /// Fill the whole surface with a solid colour
    fn fill_background(&mut self, color: Color32);

    /// Stroke an open polyline through `points` in order
    fn stroke_path(&mut self, points: &[Pos2], width: f32, color: Color32);

    /// Stroke the outline of a circle
    fn stroke_circle(&mut self, center: Pos2, radius: f32, width: f32, color: Color32);

    /// Draw `text` centered on `pos`
    fn draw_text(&mut self, text: &str, pos: Pos2, font_size: f32, color: Color32);
}
