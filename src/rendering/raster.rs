/// Executes paint commands against an RGB canvas

use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_line_segment_mut, draw_polygon_mut};
use imageproc::point::Point;
use imageproc::rect::Rect as PixelRect;
use log::trace;

use crate::fonts::FontSet;
use crate::rendering::layout::{layout_thumbnail, Rect};
use crate::rendering::paint::PaintCommand;
use crate::rendering::{text, Thumbnail};
use crate::ThumbnailConfig;

/// Allocate the configured canvas and paint the thumbnail onto it.
pub fn rasterize(config: &ThumbnailConfig, fonts: &FontSet) -> Thumbnail {
    let mut thumbnail = Thumbnail::new(config.width, config.height, config.background.to_rgb());
    for cmd in layout_thumbnail(config, fonts) {
        execute(thumbnail.image_mut(), fonts, &cmd);
    }
    thumbnail
}

pub fn execute(canvas: &mut RgbImage, fonts: &FontSet, cmd: &PaintCommand) {
    trace!("PAINT {}", cmd.name());
    match cmd {
        PaintCommand::Fill { color } => {
            for pixel in canvas.pixels_mut() {
                *pixel = *color;
            }
        }
        PaintCommand::Text {
            x,
            y,
            size,
            role,
            color,
            text: run,
        } => text::draw(canvas, fonts.face(*role), *size, *x, *y, *color, run),
        PaintCommand::StrokeRect { rect, width, color } => {
            stroke_rect(canvas, *rect, *width, *color)
        }
        PaintCommand::Line {
            from,
            to,
            width,
            color,
        } => line(canvas, *from, *to, *width, *color),
    }
}

/// Fill the `width`×`height` block at `(x, y)`, clipped to the canvas.
///
/// Coordinates are widened to `i64` so no input can overflow.
fn fill(canvas: &mut RgbImage, x: i64, y: i64, width: u64, height: u64, color: Rgb<u8>) {
    let left = x.max(0);
    let top = y.max(0);
    let right = (x + width as i64).min(canvas.width() as i64);
    let bottom = (y + height as i64).min(canvas.height() as i64);
    if right <= left || bottom <= top {
        return;
    }
    let rect = PixelRect::at(left as i32, top as i32)
        .of_size((right - left) as u32, (bottom - top) as u32);
    draw_filled_rect_mut(canvas, rect, color);
}

fn stroke_rect(canvas: &mut RgbImage, rect: Rect, stroke: u32, color: Rgb<u8>) {
    if stroke == 0 {
        return;
    }
    // corners are inclusive
    let (x, y) = (rect.x as i64, rect.y as i64);
    let (outer_w, outer_h) = (rect.width as u64 + 1, rect.height as u64 + 1);
    let s = stroke as u64;
    if s * 2 >= outer_w || s * 2 >= outer_h {
        fill(canvas, x, y, outer_w, outer_h, color);
        return;
    }
    let inner_h = outer_h - s * 2;
    fill(canvas, x, y, outer_w, s, color);
    fill(canvas, x, y + (outer_h - s) as i64, outer_w, s, color);
    fill(canvas, x, y + s as i64, s, inner_h, color);
    fill(canvas, x + (outer_w - s) as i64, y + s as i64, s, inner_h, color);
}

fn line(canvas: &mut RgbImage, from: (i32, i32), to: (i32, i32), width: u32, color: Rgb<u8>) {
    if width == 0 {
        return;
    }
    let half = (width / 2) as i64;
    if from.0 == to.0 {
        let (y0, y1) = (from.1.min(to.1) as i64, from.1.max(to.1) as i64);
        fill(canvas, from.0 as i64 - half, y0, width as u64, (y1 - y0 + 1) as u64, color);
        return;
    }
    if from.1 == to.1 {
        let (x0, x1) = (from.0.min(to.0) as i64, from.0.max(to.0) as i64);
        fill(canvas, x0, from.1 as i64 - half, (x1 - x0 + 1) as u64, width as u64, color);
        return;
    }

    let (dx, dy) = (to.0 as f32 - from.0 as f32, to.1 as f32 - from.1 as f32);
    let len = (dx * dx + dy * dy).sqrt();
    let (nx, ny) = (-dy / len * width as f32 / 2.0, dx / len * width as f32 / 2.0);
    let corner = |(x, y): (i32, i32), sign: f32| {
        Point::new(
            (x as f32 + sign * nx).round() as i32,
            (y as f32 + sign * ny).round() as i32,
        )
    };
    let quad = [corner(from, 1.0), corner(to, 1.0), corner(to, -1.0), corner(from, -1.0)];
    if quad[0] == quad[3] {
        // too thin to form a polygon
        draw_line_segment_mut(
            canvas,
            (from.0 as f32, from.1 as f32),
            (to.0 as f32, to.1 as f32),
            color,
        );
        return;
    }
    draw_polygon_mut(canvas, &quad, color);
}

#[cfg(test)]
mod tests {
    use super::*;

    const BG: Rgb<u8> = Rgb([0, 0, 0]);
    const FG: Rgb<u8> = Rgb([255, 255, 255]);

    fn blank(w: u32, h: u32) -> RgbImage {
        RgbImage::from_pixel(w, h, BG)
    }

    fn count(canvas: &RgbImage, color: Rgb<u8>) -> usize {
        canvas.pixels().filter(|p| **p == color).count()
    }

    #[test]
    fn stroke_rect_covers_inclusive_corners_inward() {
        let mut canvas = blank(40, 40);
        let rect = Rect {
            x: 5,
            y: 5,
            width: 20,
            height: 10,
        };
        stroke_rect(&mut canvas, rect, 2, FG);
        // outer corners
        assert_eq!(*canvas.get_pixel(5, 5), FG);
        assert_eq!(*canvas.get_pixel(25, 15), FG);
        // stroke goes inward only
        assert_eq!(*canvas.get_pixel(4, 5), BG);
        assert_eq!(*canvas.get_pixel(26, 15), BG);
        assert_eq!(*canvas.get_pixel(6, 6), FG);
        assert_eq!(*canvas.get_pixel(7, 7), BG);
        // 21x11 outer minus 17x7 hole
        assert_eq!(count(&canvas, FG), 21 * 11 - 17 * 7);
    }

    #[test]
    fn thick_stroke_fills_small_rect() {
        let mut canvas = blank(20, 20);
        let rect = Rect {
            x: 2,
            y: 2,
            width: 3,
            height: 3,
        };
        stroke_rect(&mut canvas, rect, 4, FG);
        assert_eq!(count(&canvas, FG), 16);
    }

    #[test]
    fn vertical_line_is_centered_on_x() {
        let mut canvas = blank(20, 20);
        line(&mut canvas, (10, 2), (10, 12), 4, FG);
        for x in 8..12 {
            assert_eq!(*canvas.get_pixel(x, 2), FG);
            assert_eq!(*canvas.get_pixel(x, 12), FG);
        }
        assert_eq!(*canvas.get_pixel(7, 5), BG);
        assert_eq!(*canvas.get_pixel(12, 5), BG);
        assert_eq!(count(&canvas, FG), 4 * 11);
    }

    #[test]
    fn horizontal_line_accepts_reversed_endpoints() {
        let mut canvas = blank(20, 20);
        line(&mut canvas, (15, 10), (3, 10), 1, FG);
        assert_eq!(count(&canvas, FG), 13);
    }

    #[test]
    fn diagonal_lines_paint_something() {
        let mut thick = blank(30, 30);
        line(&mut thick, (2, 2), (25, 20), 4, FG);
        assert!(count(&thick, FG) > 23);

        let mut thin = blank(30, 30);
        line(&mut thin, (2, 2), (25, 25), 1, FG);
        assert!(count(&thin, FG) >= 23);
    }

    #[test]
    fn shapes_clip_to_canvas() {
        let mut canvas = blank(10, 10);
        let rect = Rect {
            x: -5,
            y: -5,
            width: 30,
            height: 30,
        };
        stroke_rect(&mut canvas, rect, 3, FG);
        line(&mut canvas, (-3, -3), (40, -3), 4, FG);
        assert_eq!(canvas.dimensions(), (10, 10));
    }

    #[test]
    fn extreme_geometry_does_not_overflow() {
        let mut canvas = blank(16, 16);
        let huge = Rect {
            x: i32::MAX,
            y: i32::MAX,
            width: u32::MAX,
            height: u32::MAX,
        };
        stroke_rect(&mut canvas, huge, u32::MAX, FG);
        assert_eq!(count(&canvas, FG), 0);

        let covering = Rect {
            x: i32::MIN,
            y: i32::MIN,
            width: u32::MAX,
            height: u32::MAX,
        };
        // every edge of the outline lies off-canvas
        stroke_rect(&mut canvas, covering, 4, FG);
        assert_eq!(count(&canvas, FG), 0);

        line(&mut canvas, (5, i32::MIN), (5, i32::MAX), 2, FG);
        assert_eq!(count(&canvas, FG), 2 * 16);

        // a stroke wider than the rect fills all of it
        stroke_rect(&mut canvas, covering, u32::MAX, FG);
        assert_eq!(count(&canvas, FG), 16 * 16);

        let mut canvas = blank(16, 16);
        line(&mut canvas, (i32::MIN, 3), (i32::MAX, 3), u32::MAX, FG);
        assert_eq!(count(&canvas, FG), 16 * 16);
    }

    #[test]
    fn fill_command_floods_canvas() {
        let fonts = FontSet::embedded().unwrap();
        let mut canvas = blank(8, 8);
        execute(&mut canvas, &fonts, &PaintCommand::Fill { color: FG });
        assert_eq!(count(&canvas, FG), 64);
    }
}
