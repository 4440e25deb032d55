//! Optional resize step ahead of conversion
//!
//! Every named filter maps onto a `fast_image_resize` algorithm, so the six
//! classic resampling filters are all available.

use std::fmt;
use std::str::FromStr;

use fast_image_resize::images::Image;
use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer};
use image::RgbImage;

use crate::error::{ConvertError, Result};

/// Largest width or height a resize may produce
pub const MAX_DIMENSION: u32 = u16::MAX as u32;

/// Resampling filter used when scaling the source image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Resample {
    Nearest,
    Bilinear,
    Bicubic,
    Box,
    Hamming,
    #[default]
    Lanczos,
}

impl Resample {
    pub const ALL: [Resample; 6] = [
        Resample::Nearest,
        Resample::Bilinear,
        Resample::Bicubic,
        Resample::Box,
        Resample::Hamming,
        Resample::Lanczos,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Resample::Nearest => "nearest",
            Resample::Bilinear => "bilinear",
            Resample::Bicubic => "bicubic",
            Resample::Box => "box",
            Resample::Hamming => "hamming",
            Resample::Lanczos => "lanczos",
        }
    }

    fn algorithm(self) -> ResizeAlg {
        match self {
            Resample::Nearest => ResizeAlg::Nearest,
            Resample::Bilinear => ResizeAlg::Convolution(FilterType::Bilinear),
            // Catmull-Rom is the a = -0.5 cubic most tools call "bicubic"
            Resample::Bicubic => ResizeAlg::Convolution(FilterType::CatmullRom),
            Resample::Box => ResizeAlg::Convolution(FilterType::Box),
            Resample::Hamming => ResizeAlg::Convolution(FilterType::Hamming),
            Resample::Lanczos => ResizeAlg::Convolution(FilterType::Lanczos3),
        }
    }
}

impl fmt::Display for Resample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Resample {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|filter| filter.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                ConvertError::InvalidConfig(format!(
                    "unknown resample filter {s:?}, expected one of nearest, bilinear, bicubic, box, hamming, lanczos"
                ))
            })
    }
}

/// Target dimensions for a scale factor, truncated toward zero
pub fn scaled_dimensions((width, height): (u32, u32), scale: f64) -> (u32, u32) {
    (
        (f64::from(width) * scale) as u32,
        (f64::from(height) * scale) as u32,
    )
}

/// Scale an image by a factor
///
/// # Arguments
/// * `input` - The RGB image to resize
/// * `scale` - Size multiplier; 1.0 returns an unchanged copy
/// * `filter` - Resampling filter
///
/// # Errors
/// `InvalidConfig` if the scale is not a positive number, collapses a
/// dimension to zero or grows one past [`MAX_DIMENSION`], `Resize` if the
/// resampler rejects the buffers
pub fn resize_image(input: &RgbImage, scale: f64, filter: Resample) -> Result<RgbImage> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(ConvertError::InvalidConfig(format!(
            "scale must be a positive number, got {scale}"
        )));
    }
    if scale == 1.0 {
        return Ok(input.clone());
    }

    let (width, height) = input.dimensions();
    let (target_width, target_height) = scaled_dimensions((width, height), scale);
    if target_width == 0 || target_height == 0 {
        return Err(ConvertError::InvalidConfig(format!(
            "scale {scale} shrinks {width}x{height} to {target_width}x{target_height}"
        )));
    }
    if target_width > MAX_DIMENSION || target_height > MAX_DIMENSION {
        return Err(ConvertError::InvalidConfig(format!(
            "scale {scale} grows {width}x{height} past {MAX_DIMENSION}x{MAX_DIMENSION}"
        )));
    }

    let src = Image::from_vec_u8(width, height, input.as_raw().clone(), PixelType::U8x3)
        .map_err(|e| ConvertError::Resize(e.to_string()))?;
    let mut dst = Image::new(target_width, target_height, PixelType::U8x3);

    let options = ResizeOptions::new().resize_alg(filter.algorithm());
    Resizer::new()
        .resize(&src, &mut dst, &options)
        .map_err(|e| ConvertError::Resize(e.to_string()))?;

    RgbImage::from_raw(target_width, target_height, dst.into_vec()).ok_or_else(|| {
        ConvertError::Resize(format!(
            "resized buffer does not match {target_width}x{target_height}"
        ))
    })
}
