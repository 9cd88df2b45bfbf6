//! Error types for thumbnail generation

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for thumbnail operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or writing a thumbnail.
///
/// Missing or unreadable font files are not errors: the font loader skips
/// them and falls back to the embedded faces.
///
/// ```
/// use bookster_thumbnail::{Error, ThumbnailConfig};
///
/// let err = ThumbnailConfig::from_json_str(r#"{ "height": 0 }"#).unwrap_err();
/// assert!(matches!(err, Error::InvalidConfig(_)));
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration failed validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration document could not be parsed
    #[error("Invalid configuration document: {0}")]
    Json(#[from] serde_json::Error),

    /// An embedded font face failed to parse
    #[error("Font parse failed: {0}")]
    FontParse(String),

    /// PNG encoding failed
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    /// Writing the output (or creating its directory) failed
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
