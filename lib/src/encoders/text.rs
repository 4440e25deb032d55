use std::io::Write;

use super::{Encoder, Format};
use crate::error::Result;
use crate::grid::GlyphGrid;

/// Plain text: one glyph per pixel, a newline after every row
#[derive(Debug, Clone, Copy, Default)]
pub struct TextEncoder;

impl Encoder for TextEncoder {
    fn format(&self) -> Format {
        Format::Text
    }

    fn encode_to(&self, grid: &GlyphGrid, out: &mut dyn Write) -> Result<()> {
        let mut line = String::with_capacity(grid.width() as usize + 1);

        for row in grid.rows() {
            line.clear();
            line.extend(row.glyphs());
            line.push('\n');
            out.write_all(line.as_bytes())?;
        }

        Ok(())
    }
}
