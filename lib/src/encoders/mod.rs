//! Output formats
//!
//! Every encoder walks the same [`GlyphGrid`] top to bottom, left to right and
//! serializes it in its own syntax. Encoders are stateless apart from their
//! format parameters, so encoding the same grid twice yields identical bytes.

mod docx;
mod html;
mod rtf;
mod text;

use std::fmt;
use std::io::Write;
use std::str::FromStr;

pub use docx::{DOCX_LINE_SPACING_RATIO, DocxEncoder, LineSpacing};
pub use html::HtmlEncoder;
pub use rtf::RtfEncoder;
pub use text::TextEncoder;

use crate::config::ConvertConfig;
use crate::error::{ConvertError, Result};
use crate::grid::GlyphGrid;
use crate::palette::Palette;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Format {
    /// Plain text, no color
    #[default]
    Text,
    /// Rich text with a palette-indexed color table
    Rtf,
    /// Word document with one colored run per glyph
    Docx,
    /// HTML with one styled span per glyph
    Html,
}

impl Format {
    pub const ALL: [Format; 4] = [Format::Text, Format::Rtf, Format::Docx, Format::Html];

    /// File extension, without the dot
    pub fn extension(self) -> &'static str {
        match self {
            Format::Text => "txt",
            Format::Rtf => "rtf",
            Format::Docx => "docx",
            Format::Html => "html",
        }
    }

    /// Look up a format by file extension (case-insensitive)
    ///
    /// # Errors
    /// `InvalidFormat` for anything but txt, rtf, docx and html
    pub fn from_extension(ext: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|format| format.extension().eq_ignore_ascii_case(ext))
            .ok_or_else(|| ConvertError::InvalidFormat(ext.to_string()))
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.extension())
    }
}

impl FromStr for Format {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_extension(s)
    }
}

/// Serializer from a glyph grid to one output format
pub trait Encoder {
    fn format(&self) -> Format;

    /// Write the whole document, header and footer included, into `out`
    fn encode_to(&self, grid: &GlyphGrid, out: &mut dyn Write) -> Result<()>;

    /// Encode into a fresh buffer
    fn encode(&self, grid: &GlyphGrid) -> Result<Encoded> {
        let mut bytes = Vec::new();
        self.encode_to(grid, &mut bytes)?;
        Ok(Encoded {
            format: self.format(),
            bytes,
        })
    }
}

/// Finished output buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    pub format: Format,
    pub bytes: Vec<u8>,
}

impl Encoded {
    /// Suggested file extension for this buffer
    pub fn extension(&self) -> &'static str {
        self.format.extension()
    }
}

/// Build the encoder selected by a configuration
///
/// # Errors
/// `InvalidConfig` if the palette side is out of range
pub fn encoder_for(config: &ConvertConfig) -> Result<Box<dyn Encoder>> {
    let encoder: Box<dyn Encoder> = match config.format {
        Format::Text => Box::new(TextEncoder),
        Format::Rtf => Box::new(RtfEncoder::new(
            Palette::new(config.palette)?,
            config.font_size,
        )),
        Format::Docx => Box::new(DocxEncoder::new(config.font_size, config.line_spacing)),
        Format::Html => Box::new(HtmlEncoder::new(config.font_size)),
    };
    Ok(encoder)
}

/// Entity for a character that cannot appear verbatim in XML or HTML text
fn markup_entity(glyph: char) -> Option<&'static str> {
    match glyph {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '"' => Some("&quot;"),
        _ => None,
    }
}
