//! Error types for the icon renderer

use thiserror::Error;

/// Result type alias for renderer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while rendering or installing an icon
#[derive(Error, Debug)]
pub enum Error {
    /// No installed font provides the requested emoji glyph
    #[cfg(feature = "emoji")]
    #[error("No usable color-emoji font: {0}")]
    FontUnavailable(String),

    /// Glyph rasterization failed
    #[cfg(feature = "emoji")]
    #[error("Glyph rasterization failed: {0}")]
    GlyphRender(String),

    /// PNG encoding failed
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    /// Filesystem error while creating directories or writing the asset
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
