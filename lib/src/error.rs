use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while loading, resizing or encoding an image
#[derive(Error, Debug)]
pub enum ConvertError {
    /// Source file could not be opened or decoded
    #[error("{} is not a valid image source: {source}", path.display())]
    InvalidSource {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Glyph ramp is too short or contains unprintable characters
    #[error("invalid glyph ramp: {0}")]
    InvalidRamp(String),

    /// Requested output format is not one of txt, rtf, docx, html
    #[error("unsupported output format: {0}")]
    InvalidFormat(String),

    /// A configuration value is out of range
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The resampler rejected the source or destination buffer
    #[error("resize failed: {0}")]
    Resize(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Writing the docx container failed
    #[error("docx archive error: {0}")]
    Archive(#[from] zip::result::ZipError),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
