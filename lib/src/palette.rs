//! Palette cube used by the RTF encoder
//!
//! Each channel is cut into `side` equal buckets, giving `side³` colors. The
//! RTF color table lists them red-major after the reserved "auto" slot 0, so a
//! bucket triple `(r, g, b)` lives at table index `1 + (r * side + g) * side + b`.

use image::Rgb;

use crate::error::{ConvertError, Result};
use crate::ramp::MAX_COLOR_VALUE;

/// Largest supported cube side; buckets must fit in a `u8`
pub const MAX_PALETTE_SIDE: u32 = 256;

/// Discretized RGB cube
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    side: u32,
}

impl Palette {
    /// # Errors
    /// `InvalidConfig` unless `1 <= side <= 256`
    pub fn new(side: u32) -> Result<Self> {
        if side == 0 || side > MAX_PALETTE_SIDE {
            return Err(ConvertError::InvalidConfig(format!(
                "palette must be between 1 and {}, got {}",
                MAX_PALETTE_SIDE, side
            )));
        }
        Ok(Self { side })
    }

    /// Number of colors in the cube, excluding the reserved slot
    pub fn color_count(&self) -> usize {
        (self.side * self.side * self.side) as usize
    }

    /// Bucket of a single channel: `floor(c * side / 256)`, clamped to the cube
    #[inline]
    pub fn bucket(&self, channel: u8) -> u8 {
        let bucket = (u32::from(channel) * self.side) / (MAX_COLOR_VALUE + 1);
        bucket.min(self.side - 1) as u8
    }

    /// Bucket triple of a pixel
    #[inline]
    pub fn quantize(&self, pixel: Rgb<u8>) -> [u8; 3] {
        let [r, g, b] = pixel.0;
        [self.bucket(r), self.bucket(g), self.bucket(b)]
    }

    /// Representative channel value of a bucket: `floor(255 * i / side)`
    pub fn representative(&self, bucket: u8) -> u8 {
        (MAX_COLOR_VALUE * u32::from(bucket) / self.side) as u8
    }

    /// Color-table index of a bucket triple; index 0 is the reserved auto color
    #[inline]
    pub fn table_index(&self, buckets: [u8; 3]) -> u32 {
        let [r, g, b] = buckets.map(u32::from);
        1 + (r * self.side + g) * self.side + b
    }

    /// Color-table index of a pixel
    #[inline]
    pub fn index_of(&self, pixel: Rgb<u8>) -> u32 {
        self.table_index(self.quantize(pixel))
    }

    /// Representative colors in table order, starting at index 1
    pub fn colors(&self) -> impl Iterator<Item = Rgb<u8>> + '_ {
        let side = self.side;
        (0..side).flat_map(move |r| {
            (0..side).flat_map(move |g| {
                (0..side).map(move |b| {
                    Rgb([
                        self.representative(r as u8),
                        self.representative(g as u8),
                        self.representative(b as u8),
                    ])
                })
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_in_range_for_all_sides() {
        for side in 1..=MAX_PALETTE_SIDE {
            let palette = Palette::new(side).unwrap();
            for c in 0..=255u8 {
                assert!(u32::from(palette.bucket(c)) < side, "side {side}, channel {c}");
            }
        }
    }

    #[test]
    fn test_bucket_is_floor_division() {
        let palette = Palette::new(8).unwrap();
        assert_eq!(palette.bucket(0), 0);
        assert_eq!(palette.bucket(31), 0);
        assert_eq!(palette.bucket(32), 1);
        assert_eq!(palette.bucket(255), 7);
    }

    #[test]
    fn test_single_bucket_palette() {
        let palette = Palette::new(1).unwrap();
        assert_eq!(palette.quantize(Rgb([255, 128, 0])), [0, 0, 0]);
        assert_eq!(palette.index_of(Rgb([255, 255, 255])), 1);
        assert_eq!(palette.colors().collect::<Vec<_>>(), vec![Rgb([0, 0, 0])]);
    }

    #[test]
    fn test_representatives() {
        let palette = Palette::new(8).unwrap();
        let values: Vec<u8> = (0..8).map(|i| palette.representative(i)).collect();
        assert_eq!(values, vec![0, 31, 63, 95, 127, 159, 191, 223]);
    }

    #[test]
    fn test_table_index_matches_color_order() {
        // Every bucket triple must point at its own representative color
        let palette = Palette::new(4).unwrap();
        let table: Vec<Rgb<u8>> = palette.colors().collect();
        assert_eq!(table.len(), palette.color_count());

        for r in 0..4u8 {
            for g in 0..4u8 {
                for b in 0..4u8 {
                    let index = palette.table_index([r, g, b]) as usize;
                    let expected = Rgb([
                        palette.representative(r),
                        palette.representative(g),
                        palette.representative(b),
                    ]);
                    assert_eq!(table[index - 1], expected);
                }
            }
        }
    }

    #[test]
    fn test_index_bounds() {
        let palette = Palette::new(8).unwrap();
        assert_eq!(palette.index_of(Rgb([0, 0, 0])), 1);
        assert_eq!(palette.index_of(Rgb([255, 255, 255])), 512);
        assert_eq!(palette.index_of(Rgb([255, 0, 0])), 1 + 7 * 64);
        assert_eq!(palette.index_of(Rgb([0, 0, 255])), 1 + 7);
    }

    #[test]
    fn test_rejects_out_of_range_side() {
        assert!(Palette::new(0).is_err());
        assert!(Palette::new(257).is_err());
    }
}
