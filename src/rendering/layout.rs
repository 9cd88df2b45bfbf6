/// Placement of the thumbnail's text runs and decorative icon

use crate::fonts::{FontRole, FontSet};
use crate::rendering::paint::PaintCommand;
use crate::rendering::text::{self, TextBox};
use crate::ThumbnailConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    /// Horizontal center, rounded down
    pub fn center_x(&self) -> i32 {
        self.x.saturating_add((self.width / 2) as i32)
    }

    pub fn bottom(&self) -> i32 {
        self.y.saturating_add_unsigned(self.height)
    }
}

/// Offset that centers `extent` inside `container`, rounded toward negative
/// infinity so oversized content is still centered.
pub fn center_offset(container: i32, extent: i32) -> i32 {
    (container - extent).div_euclid(2)
}

/// Where a measured text run lands on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextPlacement {
    /// Ink box relative to the layout origin
    pub ink: TextBox,
    /// Canvas position of the ink box's top-left corner
    pub ink_x: i32,
    pub ink_y: i32,
}

impl TextPlacement {
    /// Center the ink horizontally on a canvas `canvas_width` wide. The
    /// layout origin sits at `origin_y`, so the ink starts `ink.top` below it.
    pub fn centered(canvas_width: u32, ink: TextBox, origin_y: i32) -> Self {
        Self {
            ink,
            ink_x: center_offset(canvas_width as i32, ink.width()),
            ink_y: origin_y.saturating_add(ink.top),
        }
    }

    /// The origin to hand to the text drawer so the ink lands at `(ink_x, ink_y)`
    pub fn origin(&self) -> (i32, i32) {
        (
            self.ink_x.saturating_sub(self.ink.left),
            self.ink_y.saturating_sub(self.ink.top),
        )
    }

    /// Horizontal ink midpoint on the canvas
    pub fn mid_x(&self) -> f32 {
        self.ink_x as f32 + self.ink.width() as f32 / 2.0
    }
}

/// Resolved geometry for one thumbnail
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbnailLayout {
    pub title: TextPlacement,
    pub subtitle: TextPlacement,
    pub icon: Rect,
    pub spine: ((i32, i32), (i32, i32)),
}

impl ThumbnailLayout {
    /// Stack title and subtitle from already-measured ink boxes.
    ///
    /// Vertical positions are layout origins, not ink tops: the title's origin
    /// is `(height - ink height) // 2 - title_lift`, and the subtitle's origin
    /// sits the title's ink height plus `subtitle_gap` below it.
    pub fn from_boxes(config: &ThumbnailConfig, title: TextBox, subtitle: TextBox) -> Self {
        let title_y = center_offset(config.height as i32, title.height())
            .saturating_sub(config.title_lift);
        let subtitle_y = title_y
            .saturating_add(title.height())
            .saturating_add(config.subtitle_gap);

        let icon = Rect {
            x: config.icon.x,
            y: config.icon.y,
            width: config.icon.width,
            height: config.icon.height,
        };
        let spine_x = icon.center_x();

        Self {
            title: TextPlacement::centered(config.width, title, title_y),
            subtitle: TextPlacement::centered(config.width, subtitle, subtitle_y),
            icon,
            spine: ((spine_x, icon.y), (spine_x, icon.bottom())),
        }
    }

    pub fn measure(config: &ThumbnailConfig, fonts: &FontSet) -> Self {
        let title = text::measure(fonts.face(FontRole::Title), config.title_size, &config.title);
        let subtitle = text::measure(
            fonts.face(FontRole::Subtitle),
            config.subtitle_size,
            &config.subtitle,
        );
        Self::from_boxes(config, title, subtitle)
    }

    /// Ordered display list: background, title, subtitle, icon outline, spine.
    pub fn commands(&self, config: &ThumbnailConfig) -> Vec<PaintCommand> {
        let color = config.text_color.to_rgb();
        let (title_x, title_y) = self.title.origin();
        let (sub_x, sub_y) = self.subtitle.origin();
        vec![
            PaintCommand::Fill {
                color: config.background.to_rgb(),
            },
            PaintCommand::Text {
                x: title_x,
                y: title_y,
                size: config.title_size,
                role: FontRole::Title,
                color,
                text: config.title.clone(),
            },
            PaintCommand::Text {
                x: sub_x,
                y: sub_y,
                size: config.subtitle_size,
                role: FontRole::Subtitle,
                color,
                text: config.subtitle.clone(),
            },
            PaintCommand::StrokeRect {
                rect: self.icon,
                width: config.icon.stroke,
                color,
            },
            PaintCommand::Line {
                from: self.spine.0,
                to: self.spine.1,
                width: config.icon.stroke,
                color,
            },
        ]
    }
}

/// Measure and lay out the configured thumbnail, producing its display list.
pub fn layout_thumbnail(config: &ThumbnailConfig, fonts: &FontSet) -> Vec<PaintCommand> {
    ThumbnailLayout::measure(config, fonts).commands(config)
}
