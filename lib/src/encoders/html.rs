use std::io::Write;

use super::{Encoder, Format, markup_entity};
use crate::error::Result;
use crate::grid::GlyphGrid;

const FOOTER: &str = "</body>\n</html>";

/// HTML page with one colored `<span>` per glyph
#[derive(Debug, Clone, Copy)]
pub struct HtmlEncoder {
    font_size: u32,
}

impl HtmlEncoder {
    /// # Arguments
    /// * `font_size` - Glyph size in CSS pixels
    pub fn new(font_size: u32) -> Self {
        Self { font_size }
    }
}

impl Encoder for HtmlEncoder {
    fn format(&self) -> Format {
        Format::Html
    }

    fn encode_to(&self, grid: &GlyphGrid, out: &mut dyn Write) -> Result<()> {
        write!(
            out,
            "<!DOCTYPE HTML>\n<html>\n<body>\n<style type=\"text/css\">\n\tspan {{\n\t\tfont-size: {}px;\n\t\tfont-weight: bold;\n\t\tfont-family: monospace;\n\t}}\n</style>\n",
            self.font_size
        )?;

        for row in grid.rows() {
            for cell in row.cells() {
                let [r, g, b] = cell.color.0;
                write!(out, "<span style=\"color: #{r:02x}{g:02x}{b:02x}\">")?;
                match (cell.glyph, markup_entity(cell.glyph)) {
                    // Keep blank cells from collapsing
                    (' ', _) => out.write_all(b"&nbsp;")?,
                    (_, Some(entity)) => out.write_all(entity.as_bytes())?,
                    (glyph, None) => write!(out, "{glyph}")?,
                }
                out.write_all(b"</span>")?;
            }
            out.write_all(b"<br>")?;
        }

        out.write_all(FOOTER.as_bytes())?;
        Ok(())
    }
}
