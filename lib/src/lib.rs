//! Colored ASCII - image to character art converter
//!
//! Maps every pixel of an image to a glyph from a brightness ramp and writes
//! the result as plain text, RTF, DOCX or HTML. Color formats keep each
//! pixel's color (RTF through a quantized palette, the others as true RGB).
//!
//! # Example
//! ```no_run
//! use colored_ascii::{ConvertConfig, Format, GlyphRamp, load_image, process_image};
//!
//! let input = load_image("photo.jpg").unwrap();
//! let config = ConvertConfig {
//!     format: Format::Html,
//!     scale: 0.25,
//!     ..Default::default()
//! };
//! let output = process_image(&input, &GlyphRamp::default(), &config).unwrap();
//! std::fs::write(format!("photo.{}", output.extension()), &output.bytes).unwrap();
//! ```

pub mod config;
pub mod encoders;
pub mod error;
pub mod grid;
pub mod luminance;
pub mod palette;
pub mod processor;
pub mod ramp;
pub mod resize;

// Re-export main types for convenience
pub use config::ConvertConfig;
pub use encoders::{Encoded, Encoder, Format, LineSpacing};
pub use error::ConvertError;
pub use grid::GlyphGrid;
pub use palette::Palette;
pub use processor::{load_image, process_file, process_image};
pub use ramp::GlyphRamp;
pub use resize::Resample;
