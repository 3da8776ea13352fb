use ab_glyph::{Font, FontVec, GlyphId, OutlinedGlyph, PxScale, ScaleFont, point};
use egui::{Color32, Pos2};
use tiny_skia::{
    Color as SkColor, LineCap, LineJoin, Mask, Paint, PathBuilder, Pixmap, Rect as SkRect,
    Stroke as SkStroke, Transform,
};

use super::Surface;
use crate::error::{SketchError, SketchResult};

/// egui's bundled fonts, tried in order for every character
const FONT_FALLBACK_CHAIN: [&str; 3] = ["Ubuntu-Light", "NotoEmoji-Regular", "emoji-icon-font"];

/// Largest pixmap side we are willing to allocate
pub const MAX_SURFACE_SIDE: u32 = 8192;

/// Off-screen RGBA surface used for export.
///
/// Draw calls take logical coordinates and are scaled by `scale`, so a
/// 256px sketch rendered at scale 4 fills a 1024px pixmap.
pub struct RasterSurface {
    pixmap: Pixmap,
    scale: f32,
    fonts: Vec<FontVec>,
}

impl RasterSurface {
    pub fn new(logical_size: f32, scale: f32) -> SketchResult<Self> {
        let side = (logical_size * scale).round() as u32;
        if side > MAX_SURFACE_SIDE {
            return Err(SketchError::InvalidExportSize {
                width: side,
                height: side,
            });
        }
        let pixmap = Pixmap::new(side, side).ok_or(SketchError::InvalidExportSize {
            width: side,
            height: side,
        })?;

        Ok(Self {
            pixmap,
            scale,
            fonts: load_fonts()?,
        })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Copy the pixmap out as straight-alpha RGBA
    pub fn to_rgba_image(&self) -> image::RgbaImage {
        let mut output = image::RgbaImage::new(self.width(), self.height());
        for (pixel, out) in self.pixmap.pixels().iter().zip(output.pixels_mut()) {
            let color = pixel.demultiply();
            *out = image::Rgba([color.red(), color.green(), color.blue(), color.alpha()]);
        }
        output
    }

    fn transform(&self) -> Transform {
        Transform::from_scale(self.scale, self.scale)
    }

    fn glyph_for(&self, c: char) -> Option<(&FontVec, GlyphId)> {
        self.fonts.iter().find_map(|font| {
            let id = font.glyph_id(c);
            (id.0 != 0).then_some((font, id))
        })
    }

    /// Lay out `text` on a baseline at the origin, at pixel size `px_size`
    fn layout(&self, text: &str, px_size: f32) -> Vec<OutlinedGlyph> {
        let mut outlines = Vec::new();
        let mut caret = 0.0;
        for c in text.chars() {
            let Some((font, id)) = self.glyph_for(c) else {
                log::debug!("No bundled glyph for {:?}", c);
                continue;
            };
            let glyph = id.with_scale_and_position(px_size, point(caret, 0.0));
            caret += font.as_scaled(PxScale::from(px_size)).h_advance(id);
            if let Some(outlined) = font.outline_glyph(glyph) {
                outlines.push(outlined);
            }
        }
        outlines
    }
}

fn load_fonts() -> SketchResult<Vec<FontVec>> {
    let definitions = egui::FontDefinitions::default();
    let mut fonts = Vec::new();

    for name in FONT_FALLBACK_CHAIN {
        let Some(data) = definitions.font_data.get(name) else {
            log::warn!("Bundled font {} not found", name);
            continue;
        };
        let font = FontVec::try_from_vec_and_index(data.font.to_vec(), data.index)
            .map_err(|err| SketchError::Font(format!("{}: {}", name, err)))?;
        fonts.push(font);
    }

    if fonts.is_empty() {
        return Err(SketchError::Font("no bundled fonts available".to_owned()));
    }
    Ok(fonts)
}

fn paint_for(color: Color32) -> Paint<'static> {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, a);
    paint.anti_alias = true;
    paint
}

fn sk_stroke(width: f32) -> SkStroke {
    SkStroke {
        width,
        line_cap: LineCap::Round,
        line_join: LineJoin::Round,
        ..SkStroke::default()
    }
}

impl Surface for RasterSurface {
    fn clear(&mut self) {
        self.pixmap.fill(SkColor::TRANSPARENT);
    }

    fn fill_background(&mut self, color: Color32) {
        let [r, g, b, a] = color.to_srgba_unmultiplied();
        self.pixmap.fill(SkColor::from_rgba8(r, g, b, a));
    }

    fn stroke_path(&mut self, points: &[Pos2], width: f32, color: Color32) {
        let [first, rest @ ..] = points else {
            return;
        };
        if rest.is_empty() {
            return;
        }

        let mut builder = PathBuilder::new();
        builder.move_to(first.x, first.y);
        for p in rest {
            builder.line_to(p.x, p.y);
        }
        // Degenerate paths (all points equal) have no bounds and draw nothing
        let Some(path) = builder.finish() else {
            return;
        };

        let transform = self.transform();
        self.pixmap
            .stroke_path(&path, &paint_for(color), &sk_stroke(width), transform, None);
    }

    fn stroke_circle(&mut self, center: Pos2, radius: f32, width: f32, color: Color32) {
        let Some(path) = PathBuilder::from_circle(center.x, center.y, radius) else {
            return;
        };
        let transform = self.transform();
        self.pixmap
            .stroke_path(&path, &paint_for(color), &sk_stroke(width), transform, None);
    }

    fn draw_text(&mut self, text: &str, pos: Pos2, font_size: f32, color: Color32) {
        let outlines = self.layout(text, font_size * self.scale);
        let Some(first) = outlines.first() else {
            return;
        };

        let mut bounds = first.px_bounds();
        for outlined in &outlines[1..] {
            let b = outlined.px_bounds();
            bounds.min.x = bounds.min.x.min(b.min.x);
            bounds.min.y = bounds.min.y.min(b.min.y);
            bounds.max.x = bounds.max.x.max(b.max.x);
            bounds.max.y = bounds.max.y.max(b.max.y);
        }
        let dx = pos.x * self.scale - (bounds.min.x + bounds.max.x) / 2.0;
        let dy = pos.y * self.scale - (bounds.min.y + bounds.max.y) / 2.0;

        let (width, height) = (self.width(), self.height());
        let Some(mut mask) = Mask::new(width, height) else {
            return;
        };
        let data = mask.data_mut();
        for outlined in &outlines {
            let b = outlined.px_bounds();
            let origin_x = (b.min.x + dx).round() as i64;
            let origin_y = (b.min.y + dy).round() as i64;
            outlined.draw(|x, y, coverage| {
                let px = origin_x + i64::from(x);
                let py = origin_y + i64::from(y);
                if px < 0 || py < 0 || px >= i64::from(width) || py >= i64::from(height) {
                    return;
                }
                let idx = py as usize * width as usize + px as usize;
                let value = (coverage.clamp(0.0, 1.0) * 255.0).round() as u8;
                data[idx] = data[idx].max(value);
            });
        }

        let Some(rect) = SkRect::from_xywh(0.0, 0.0, width as f32, height as f32) else {
            return;
        };
        self.pixmap
            .fill_rect(rect, &paint_for(color), Transform::identity(), Some(&mask));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaled_dimensions() {
        let surface = RasterSurface::new(256.0, 4.0).unwrap();
        assert_eq!(surface.width(), 1024);
        assert_eq!(surface.height(), 1024);
    }

    #[test]
    fn test_zero_size_is_rejected() {
        let result = RasterSurface::new(256.0, 0.0);
        assert!(matches!(
            result,
            Err(SketchError::InvalidExportSize { width: 0, height: 0 })
        ));
    }

    #[test]
    fn test_oversized_surface_is_rejected() {
        let result = RasterSurface::new(256.0, 100.0);
        assert!(matches!(
            result,
            Err(SketchError::InvalidExportSize { width: 25600, .. })
        ));
    }

    #[test]
    fn test_background_fill() {
        let mut surface = RasterSurface::new(4.0, 1.0).unwrap();
        surface.fill_background(Color32::from_rgb(10, 20, 30));
        let image = surface.to_rgba_image();
        assert_eq!(image.get_pixel(2, 2).0, [10, 20, 30, 255]);
    }

    #[test]
    fn test_text_marks_pixels_near_anchor() {
        let mut surface = RasterSurface::new(64.0, 1.0).unwrap();
        surface.fill_background(Color32::WHITE);
        surface.draw_text("A", Pos2::new(32.0, 32.0), 32.0, Color32::BLACK);

        let image = surface.to_rgba_image();
        let dark = (20..44)
            .flat_map(|y| (20..44).map(move |x| (x, y)))
            .filter(|&(x, y)| image.get_pixel(x, y).0[0] < 128)
            .count();
        assert!(dark > 0);
    }
}
