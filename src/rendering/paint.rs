/// Display list executed by the rasterizer, in order

use image::Rgb;

use crate::fonts::FontRole;
use crate::rendering::layout::Rect;

#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    /// Flood the whole canvas
    Fill { color: Rgb<u8> },
    /// A single line of text; `(x, y)` is the layout origin, `size` the em size in px
    Text {
        x: i32,
        y: i32,
        size: f32,
        role: FontRole,
        color: Rgb<u8>,
        text: String,
    },
    /// Rectangle outline with the stroke drawn inward; both corners
    /// `(x, y)` and `(x + width, y + height)` are painted
    StrokeRect {
        rect: Rect,
        width: u32,
        color: Rgb<u8>,
    },
    /// Straight segment `width` px thick, centered on the segment
    Line {
        from: (i32, i32),
        to: (i32, i32),
        width: u32,
        color: Rgb<u8>,
    },
}

impl PaintCommand {
    pub fn name(&self) -> &'static str {
        match self {
            PaintCommand::Fill { .. } => "fill",
            PaintCommand::Text { .. } => "text",
            PaintCommand::StrokeRect { .. } => "stroke-rect",
            PaintCommand::Line { .. } => "line",
        }
    }
}
