use crate::encoders::{Format, LineSpacing};
use crate::error::{ConvertError, Result};
use crate::palette::MAX_PALETTE_SIDE;
use crate::resize::Resample;

/// Largest font size Word accepts, in points
pub const MAX_FONT_SIZE: u32 = 1638;

/// Configuration for one image conversion
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertConfig {
    /// Output
    pub format: Format,          // default txt

    /// Colors
    pub palette: u32,            // RTF palette cube side, 1-256, default 8

    /// Typography
    pub font_size: u32,          // points (px for HTML), default 10
    pub line_spacing: LineSpacing, // docx only, default proportional

    /// Resizing before conversion
    pub scale: f64,              // default 1.0 (no resize)
    pub resample: Resample,      // default Lanczos
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            // Output
            format: Format::Text,

            // Colors
            palette: 8,

            // Typography
            font_size: 10,
            line_spacing: LineSpacing::Proportional,

            // Resizing
            scale: 1.0,
            resample: Resample::Lanczos,
        }
    }
}

impl ConvertConfig {
    /// Validates the configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.palette < 1 || self.palette > MAX_PALETTE_SIDE {
            return Err(ConvertError::InvalidConfig(format!(
                "palette must be between 1 and {}, got {}",
                MAX_PALETTE_SIDE, self.palette
            )));
        }
        if self.font_size < 1 || self.font_size > MAX_FONT_SIZE {
            return Err(ConvertError::InvalidConfig(format!(
                "font_size must be between 1 and {}, got {}",
                MAX_FONT_SIZE, self.font_size
            )));
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(ConvertError::InvalidConfig(format!(
                "scale must be a positive number, got {}",
                self.scale
            )));
        }
        Ok(())
    }
}
