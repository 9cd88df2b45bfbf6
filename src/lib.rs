//! Bookster thumbnail generator
//!
//! Renders the fixed 1200×630 promotional banner for Bookster: a red
//! background, a centered title and subtitle, and a small outlined book icon
//! in the top-left corner. The result is written as a PNG.
//!
//! # Example
//!
//! ```no_run
//! use bookster_thumbnail::ThumbnailConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ThumbnailConfig {
//!     output_path: "out/banner.png".into(),
//!     ..Default::default()
//! };
//! let thumbnail = bookster_thumbnail::generate_to_file(&config)?;
//! println!("{}x{}", thumbnail.width(), thumbnail.height());
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use log::info;
use serde::{Deserialize, Serialize};

pub mod error;
pub use error::{Error, Result};

pub mod fonts;
pub use fonts::{FontCandidate, FontOrigin, FontRole, FontSet};

pub mod rendering;
pub use rendering::Thumbnail;

/// An 8-bit RGB color, serialized as `[r, g, b]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color(pub [u8; 3]);

impl Color {
    pub const RED: Color = Color([220, 38, 38]);
    pub const WHITE: Color = Color([255, 255, 255]);

    pub fn to_rgb(self) -> image::Rgb<u8> {
        image::Rgb(self.0)
    }
}

/// Decorative book icon: an outlined rectangle split by a vertical spine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconConfig {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    /// Outline and spine thickness in pixels
    pub stroke: u32,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            x: 80,
            y: 80,
            width: 100,
            height: 80,
            stroke: 4,
        }
    }
}

/// Everything that defines a thumbnail.
///
/// The defaults reproduce the Bookster banner. Fields missing from a JSON
/// document fall back to those defaults.
///
/// ```
/// let cfg = bookster_thumbnail::ThumbnailConfig::default();
/// assert_eq!((cfg.width, cfg.height), (1200, 630));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThumbnailConfig {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    pub background: Color,
    /// Color of both text runs and the icon
    pub text_color: Color,
    pub title: String,
    pub subtitle: String,
    /// Title em size in pixels
    pub title_size: f32,
    /// Subtitle em size in pixels
    pub subtitle_size: f32,
    /// How far the title's draw point sits above true vertical center
    pub title_lift: i32,
    /// Added to the title's ink height to space the two draw points
    pub subtitle_gap: i32,
    pub icon: IconConfig,
    /// Font pairs to try before the embedded faces
    pub fonts: Vec<FontCandidate>,
    pub output_path: PathBuf,
}

impl Default for ThumbnailConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 630,
            background: Color::RED,
            text_color: Color::WHITE,
            title: "Bookster".to_string(),
            subtitle: "ISU Student Marketplace & Community".to_string(),
            title_size: 120.0,
            subtitle_size: 50.0,
            title_lift: 60,
            subtitle_gap: 40,
            icon: IconConfig::default(),
            fonts: fonts::default_candidates(),
            output_path: PathBuf::from("public/bookster-thumbnail.png"),
        }
    }
}

/// Largest accepted canvas side, icon side or stroke, in pixels
pub const MAX_EXTENT: u32 = 1 << 14;

/// Largest accepted magnitude for positions and offsets, in pixels
pub const MAX_OFFSET: i32 = 1 << 14;

impl ThumbnailConfig {
    /// Parse a JSON document; absent fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidConfig(format!(
                "canvas must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        let extents = [
            ("width", self.width),
            ("height", self.height),
            ("icon.width", self.icon.width),
            ("icon.height", self.icon.height),
            ("icon.stroke", self.icon.stroke),
        ];
        for (name, value) in extents {
            if value > MAX_EXTENT {
                return Err(Error::InvalidConfig(format!(
                    "{} must be at most {}, got {}",
                    name, MAX_EXTENT, value
                )));
            }
        }
        let offsets = [
            ("icon.x", self.icon.x),
            ("icon.y", self.icon.y),
            ("title_lift", self.title_lift),
            ("subtitle_gap", self.subtitle_gap),
        ];
        for (name, value) in offsets {
            if value.unsigned_abs() > MAX_OFFSET as u32 {
                return Err(Error::InvalidConfig(format!(
                    "{} must be within ±{}, got {}",
                    name, MAX_OFFSET, value
                )));
            }
        }
        let sizes = [("title_size", self.title_size), ("subtitle_size", self.subtitle_size)];
        for (name, size) in sizes {
            if !size.is_finite() || size <= 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "{} must be a positive number, got {}",
                    name, size
                )));
            }
        }
        Ok(())
    }
}

/// Validate the config, acquire fonts and paint the thumbnail in memory.
pub fn generate(config: &ThumbnailConfig) -> Result<Thumbnail> {
    config.validate()?;
    let fonts = FontSet::load(&config.fonts)?;
    Ok(rendering::raster::rasterize(config, &fonts))
}

/// Like [`generate`], then write the PNG to `config.output_path`.
pub fn generate_to_file(config: &ThumbnailConfig) -> Result<Thumbnail> {
    let thumbnail = generate(config)?;
    thumbnail.save(&config.output_path)?;
    info!(
        "wrote {}x{} thumbnail to {}",
        thumbnail.width(),
        thumbnail.height(),
        config.output_path.display()
    );
    Ok(thumbnail)
}
