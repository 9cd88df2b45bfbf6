//! Rendering: text metrics, layout, display list and rasterization

pub mod layout;
pub mod paint;
pub mod raster;
pub mod text;

use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, Rgb, RgbImage};
use sha2::{Digest, Sha256};

use crate::{Error, Result};

/// A rendered thumbnail canvas.
///
/// The dimensions are fixed at allocation and never change afterwards.
#[derive(Debug, Clone)]
pub struct Thumbnail {
    image: RgbImage,
}

impl Thumbnail {
    /// Allocate a canvas filled with `background`
    pub fn new(width: u32, height: u32, background: Rgb<u8>) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, background),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub(crate) fn image_mut(&mut self) -> &mut RgbImage {
        &mut self.image
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }

    /// Encode the canvas as an 8-bit RGB PNG in memory
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let mut png_data = Vec::new();
        self.image
            .write_to(&mut Cursor::new(&mut png_data), ImageFormat::Png)?;
        Ok(png_data)
    }

    /// Write the canvas as PNG to `path`, creating the parent directory if needed
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let io_err = |source: std::io::Error| Error::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        let png_data = self.encode_png()?;
        std::fs::write(path, png_data).map_err(io_err)
    }

    /// Hex SHA-256 of the raw pixel buffer; stable across PNG encoder versions
    pub fn pixel_digest(&self) -> String {
        hex::encode(Sha256::digest(self.image.as_raw()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_thumbnail_is_filled() {
        let t = Thumbnail::new(16, 8, Rgb([220, 38, 38]));
        assert_eq!((t.width(), t.height()), (16, 8));
        assert!(t.image().pixels().all(|p| *p == Rgb([220, 38, 38])));
    }

    #[test]
    fn encode_png_has_signature() {
        let t = Thumbnail::new(4, 4, Rgb([0, 0, 0]));
        let png = t.encode_png().unwrap();
        assert_eq!(&png[0..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn digest_tracks_pixels() {
        let a = Thumbnail::new(4, 4, Rgb([0, 0, 0]));
        let b = Thumbnail::new(4, 4, Rgb([0, 0, 1]));
        assert_eq!(a.pixel_digest().len(), 64);
        assert_eq!(a.pixel_digest(), a.clone().pixel_digest());
        assert_ne!(a.pixel_digest(), b.pixel_digest());
    }

    #[test]
    fn save_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/public/out.png");
        Thumbnail::new(3, 2, Rgb([1, 2, 3])).save(&path).unwrap();
        assert_eq!(image::image_dimensions(&path).unwrap(), (3, 2));
    }

    #[test]
    fn save_reports_path_on_failure() {
        let dir = tempfile::tempdir().unwrap();
        // a file where a directory is expected
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"x").unwrap();
        let err = Thumbnail::new(1, 1, Rgb([0, 0, 0]))
            .save(blocker.join("out.png"))
            .unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
