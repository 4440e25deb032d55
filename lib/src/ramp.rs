//! Glyph ramps
//!
//! A ramp orders glyphs from darkest (index 0) to brightest. Intensities are
//! bucketed into the ramp with integer floor division.

use std::str::FromStr;

use crate::error::{ConvertError, Result};

/// Highest value a color channel or intensity can take
pub const MAX_COLOR_VALUE: u32 = 255;

/// Built-in ramp, darkest first
///
/// Dense glyphs cover dark pixels so the art reads on a light page
pub const DEFAULT_RAMP: [char; 10] = [
    '@', // 0: darkest
    '%', // 1
    '#', // 2
    '*', // 3
    '+', // 4
    '=', // 5
    '-', // 6
    ':', // 7
    '.', // 8
    ' ', // 9: brightest
];

/// Ordered, validated sequence of glyphs with a precomputed bucket width
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphRamp {
    glyphs: Vec<char>,
    divider: u32,
}

impl GlyphRamp {
    /// Build a ramp from glyphs ordered darkest to brightest
    ///
    /// # Errors
    /// `InvalidRamp` if fewer than two glyphs are given or any glyph is a
    /// control character
    pub fn new(glyphs: impl IntoIterator<Item = char>) -> Result<Self> {
        let glyphs: Vec<char> = glyphs.into_iter().collect();

        if glyphs.len() < 2 {
            return Err(ConvertError::InvalidRamp(format!(
                "at least 2 glyphs are required, got {}",
                glyphs.len()
            )));
        }
        if let Some(bad) = glyphs.iter().find(|c| c.is_control()) {
            return Err(ConvertError::InvalidRamp(format!(
                "glyph {:?} is not printable",
                bad
            )));
        }

        // Intensities above 255 never occur, so a ramp longer than 256 would
        // leave glyphs unreachable
        if glyphs.len() > (MAX_COLOR_VALUE + 1) as usize {
            return Err(ConvertError::InvalidRamp(format!(
                "at most 256 glyphs are supported, got {}",
                glyphs.len()
            )));
        }

        let steps = (glyphs.len() - 1) as u32;
        let divider = MAX_COLOR_VALUE.div_ceil(steps);

        Ok(Self { glyphs, divider })
    }

    /// Parse a ramp file: the first character of every non-empty line
    ///
    /// # Errors
    /// Same conditions as [`GlyphRamp::new`]
    pub fn from_lines(text: &str) -> Result<Self> {
        Self::new(text.lines().filter_map(|line| line.chars().next()))
    }

    /// Width of one intensity bucket, `ceil(255 / (len - 1))`
    pub fn divider(&self) -> u32 {
        self.divider
    }

    /// Bucket index for an intensity
    #[inline]
    pub fn index(&self, intensity: u8) -> usize {
        // Floor division is intended: every bucket but the last spans exactly
        // `divider` intensities
        (u32::from(intensity) / self.divider) as usize
    }

    /// Glyph for an intensity
    #[inline]
    pub fn glyph(&self, intensity: u8) -> char {
        self.glyphs[self.index(intensity)]
    }

    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Always false: a valid ramp holds at least two glyphs
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

impl Default for GlyphRamp {
    fn default() -> Self {
        Self {
            glyphs: DEFAULT_RAMP.to_vec(),
            divider: MAX_COLOR_VALUE.div_ceil(DEFAULT_RAMP.len() as u32 - 1),
        }
    }
}

impl FromStr for GlyphRamp {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s.chars())
    }
}
