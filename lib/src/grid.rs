use image::{Rgb, RgbImage};
use rayon::prelude::*;

use crate::luminance::grayscale;
use crate::ramp::GlyphRamp;

/// One character cell of the output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub x: u32,
    pub y: u32,
    pub glyph: char,
    /// True color of the source pixel
    pub color: Rgb<u8>,
}

/// Glyphs and colors for every pixel, row-major
///
/// Glyph shape comes from the grayscale intensity while the color is the
/// untouched source pixel, so color formats never derive glyphs from a
/// quantized color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphGrid {
    width: u32,
    height: u32,
    glyphs: Vec<char>,
    colors: Vec<Rgb<u8>>,
}

impl GlyphGrid {
    /// Map every pixel of an image to a glyph
    ///
    /// # Arguments
    /// * `image` - Source RGB image
    /// * `ramp` - Glyph ramp, darkest first
    pub fn build(image: &RgbImage, ramp: &GlyphRamp) -> Self {
        let (width, height) = image.dimensions();
        let intensity = grayscale(image);

        // Parallelize glyph lookup; collect keeps row-major order
        let glyphs: Vec<char> = intensity
            .as_raw()
            .par_iter()
            .map(|&level| ramp.glyph(level))
            .collect();
        let colors: Vec<Rgb<u8>> = image.pixels().copied().collect();

        Self {
            width,
            height,
            glyphs,
            colors,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// True when there is nothing to draw
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Rows top to bottom; yields nothing for an empty grid
    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        let width = self.width as usize;
        let height = if self.is_empty() { 0 } else { self.height };

        (0..height).map(move |y| {
            let start = y as usize * width;
            Row {
                y,
                glyphs: &self.glyphs[start..start + width],
                colors: &self.colors[start..start + width],
            }
        })
    }

    /// Every cell in traversal order
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.rows().flat_map(Row::cells)
    }
}

/// A single row of the grid
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    y: u32,
    glyphs: &'a [char],
    colors: &'a [Rgb<u8>],
}

impl<'a> Row<'a> {
    pub fn y(&self) -> u32 {
        self.y
    }

    /// Glyphs of this row, left to right
    pub fn glyphs(&self) -> &'a [char] {
        self.glyphs
    }

    /// Cells left to right
    pub fn cells(self) -> impl Iterator<Item = Cell> + 'a {
        let y = self.y;
        self.glyphs
            .iter()
            .zip(self.colors)
            .enumerate()
            .map(move |(x, (&glyph, &color))| Cell {
                x: x as u32,
                y,
                glyph,
                color,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_pixel_image() -> RgbImage {
        let mut img = RgbImage::new(2, 1);
        img.put_pixel(0, 0, Rgb([0, 0, 0]));
        img.put_pixel(1, 0, Rgb([255, 255, 255]));
        img
    }

    #[test]
    fn test_build_maps_luma_to_glyph() {
        let ramp: GlyphRamp = "@#".parse().unwrap();
        let grid = GlyphGrid::build(&two_pixel_image(), &ramp);

        let glyphs: Vec<char> = grid.cells().map(|c| c.glyph).collect();
        assert_eq!(glyphs, vec!['@', '#']);
    }

    #[test]
    fn test_cells_keep_true_color() {
        let ramp = GlyphRamp::default();
        let img = RgbImage::from_pixel(3, 2, Rgb([12, 34, 56]));
        let grid = GlyphGrid::build(&img, &ramp);

        assert_eq!(grid.cells().count(), 6);
        assert!(grid.cells().all(|c| c.color == Rgb([12, 34, 56])));
    }

    #[test]
    fn test_traversal_order() {
        let ramp = GlyphRamp::default();
        let grid = GlyphGrid::build(&RgbImage::new(3, 2), &ramp);

        let positions: Vec<(u32, u32)> = grid.cells().map(|c| (c.x, c.y)).collect();
        assert_eq!(positions, vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);
    }

    #[test]
    fn test_rows() {
        let ramp = GlyphRamp::default();
        let grid = GlyphGrid::build(&RgbImage::new(4, 3), &ramp);

        let rows: Vec<Row<'_>> = grid.rows().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2].y(), 2);
        assert!(rows.iter().all(|row| row.glyphs().len() == 4));
    }

    #[test]
    fn test_empty_image_has_no_rows() {
        let ramp = GlyphRamp::default();

        let zero_width = GlyphGrid::build(&RgbImage::new(0, 5), &ramp);
        assert!(zero_width.is_empty());
        assert_eq!(zero_width.rows().count(), 0);

        let zero_height = GlyphGrid::build(&RgbImage::new(5, 0), &ramp);
        assert_eq!(zero_height.cells().count(), 0);
    }
}
