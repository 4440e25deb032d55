use std::io::{self, Write};

use super::{Encoder, Format};
use crate::error::Result;
use crate::grid::GlyphGrid;
use crate::palette::Palette;

const HEADER: &str = "{\\rtf1\\ansi\\ansicpg949\\deff0\\nouicompat\\deflangfe1042{\\fonttbl{\\f0\\fnil\\fcharset0 Consolas;}}\n";
const GENERATOR: &str = "{\\*\\generator Riched20 10.0.19041}\\viewkind4\\uc1\n";

/// Rich text with a `side³` color table and bold Consolas glyphs
#[derive(Debug, Clone, Copy)]
pub struct RtfEncoder {
    palette: Palette,
    font_size: u32,
}

impl RtfEncoder {
    /// # Arguments
    /// * `palette` - Color cube; its colors become the color table
    /// * `font_size` - Nominal point size; RTF counts half-points so `\fs` gets twice this
    pub fn new(palette: Palette, font_size: u32) -> Self {
        Self { palette, font_size }
    }

    fn write_color_table(&self, out: &mut dyn Write) -> io::Result<()> {
        // Leading ';' is the reserved auto color at index 0
        out.write_all(b"{\\colortbl ;")?;
        for color in self.palette.colors() {
            let [r, g, b] = color.0;
            write!(out, "\\red{r}\\green{g}\\blue{b};")?;
        }
        out.write_all(b"}\n")
    }
}

impl Encoder for RtfEncoder {
    fn format(&self) -> Format {
        Format::Rtf
    }

    fn encode_to(&self, grid: &GlyphGrid, out: &mut dyn Write) -> Result<()> {
        out.write_all(HEADER.as_bytes())?;
        self.write_color_table(out)?;
        out.write_all(GENERATOR.as_bytes())?;
        write!(
            out,
            "\\pard\\sa200\\sl276\\slmult1\\f0\\fs{}\\lang18\\b",
            self.font_size * 2
        )?;

        for row in grid.rows() {
            for cell in row.cells() {
                write!(out, "\\cf{} ", self.palette.index_of(cell.color))?;
                write_glyph(out, cell.glyph)?;
            }
            out.write_all(b"\\line ")?;
        }

        out.write_all(b"}")?;
        Ok(())
    }
}

/// Write one glyph as RTF text
///
/// Control symbols are backslash-escaped; non-ASCII glyphs become `\uN?`
/// with N the signed 16-bit UTF-16 unit, as `\uc1` declares one fallback char.
fn write_glyph(out: &mut dyn Write, glyph: char) -> io::Result<()> {
    match glyph {
        '\\' | '{' | '}' => write!(out, "\\{glyph}"),
        c if c.is_ascii() => write!(out, "{c}"),
        c => {
            let mut units = [0u16; 2];
            for unit in c.encode_utf16(&mut units) {
                write!(out, "\\u{}?", *unit as i16)?;
            }
            Ok(())
        }
    }
}
