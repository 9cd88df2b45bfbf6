//! Single-line text measurement and drawing.
//!
//! The layout origin is the top-left of the line box; the baseline sits
//! `ascent` pixels below it. `measure` and `draw` share one layout pass so
//! drawn ink lands exactly inside the measured box.

use ab_glyph::{point, Font, FontArc, GlyphId, OutlinedGlyph, PxScale, ScaleFont};
use image::{Rgb, RgbImage};
use imageproc::pixelops::weighted_sum;

/// Ink bounding box of a text run, relative to its layout origin.
///
/// `right` and `bottom` are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextBox {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl TextBox {
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    fn union(self, other: TextBox) -> TextBox {
        if self.is_empty() {
            return other;
        }
        TextBox {
            left: self.left.min(other.left),
            top: self.top.min(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }
}

/// Convert an em size in pixels (the way font sizes are usually quoted) into
/// ab_glyph's ascent-to-descent pixel scale.
///
/// One em maps to `size` pixels, so the scale is `size * height / units_per_em`.
/// Faces without a units-per-em value are scaled by `size` directly.
pub fn em_scale(font: &FontArc, size: f32) -> PxScale {
    match font.units_per_em() {
        Some(units_per_em) => PxScale::from(size * font.height_unscaled() / units_per_em),
        None => PxScale::from(size),
    }
}

fn layout_glyphs(font: &FontArc, size: f32, text: &str, mut f: impl FnMut(OutlinedGlyph)) {
    let scale = em_scale(font, size);
    let scaled = font.as_scaled(scale);
    let mut caret = 0.0f32;
    let mut last: Option<GlyphId> = None;

    for c in text.chars() {
        let id = scaled.glyph_id(c);
        if let Some(prev) = last {
            caret += scaled.kern(prev, id);
        }
        let glyph = id.with_scale_and_position(scale, point(caret, scaled.ascent()));
        caret += scaled.h_advance(id);
        last = Some(id);
        if let Some(outlined) = font.outline_glyph(glyph) {
            f(outlined);
        }
    }
}

/// Measure the ink box of `text` rendered at an em size of `size` pixels.
///
/// Whitespace-only and empty strings produce an empty box at the origin.
pub fn measure(font: &FontArc, size: f32, text: &str) -> TextBox {
    let mut bbox = TextBox::default();
    layout_glyphs(font, size, text, |g| {
        let bb = g.px_bounds();
        let glyph_box = TextBox {
            left: bb.min.x as i32,
            top: bb.min.y as i32,
            right: bb.max.x as i32,
            bottom: bb.max.y as i32,
        };
        if !glyph_box.is_empty() {
            bbox = bbox.union(glyph_box);
        }
    });
    bbox
}

/// Draw `text` with its layout origin at `(x, y)`, blending coverage into
/// the canvas. Pixels falling outside the canvas are clipped.
pub fn draw(
    canvas: &mut RgbImage,
    font: &FontArc,
    size: f32,
    x: i32,
    y: i32,
    color: Rgb<u8>,
    text: &str,
) {
    let (width, height) = (canvas.width() as i32, canvas.height() as i32);
    layout_glyphs(font, size, text, |g| {
        let bb = g.px_bounds();
        g.draw(|gx, gy, coverage| {
            let px = x.saturating_add(bb.min.x as i32 + gx as i32);
            let py = y.saturating_add(bb.min.y as i32 + gy as i32);
            if px < 0 || py < 0 || px >= width || py >= height {
                return;
            }
            let coverage = coverage.clamp(0.0, 1.0);
            let dst = canvas.get_pixel_mut(px as u32, py as u32);
            *dst = weighted_sum(*dst, color, 1.0 - coverage, coverage);
        });
    });
}
