use std::borrow::Cow;
use std::path::Path;

use image::RgbImage;
use log::{debug, info};

use crate::config::ConvertConfig;
use crate::encoders::{Encoded, encoder_for};
use crate::error::{ConvertError, Result};
use crate::grid::GlyphGrid;
use crate::ramp::GlyphRamp;
use crate::resize::{resize_image, scaled_dimensions};

/// Decode an image file into RGB, dropping any alpha channel
///
/// # Errors
/// `InvalidSource` if the file cannot be opened or decoded
pub fn load_image(path: impl AsRef<Path>) -> Result<RgbImage> {
    let path = path.as_ref();
    let image = image::open(path).map_err(|source| ConvertError::InvalidSource {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(
        "loaded {} ({}x{}, {:?})",
        path.display(),
        image.width(),
        image.height(),
        image.color()
    );
    Ok(image.to_rgb8())
}

/// Converts an image to character art in the configured format
///
/// Pipeline:
/// 1. Validate the configuration
/// 2. Resize by `config.scale` (skipped at 1.0)
/// 3. Map every pixel's luma to a glyph, keeping its true color
/// 4. Serialize the grid with the encoder for `config.format`
///
/// # Arguments
/// * `input` - The decoded source image
/// * `ramp` - Glyph ramp, darkest first
/// * `config` - Format and format parameters
///
/// # Returns
/// The finished output buffer and its format
///
/// # Errors
/// `InvalidConfig` for out-of-range parameters, `Resize` if resampling fails,
/// `Io`/`Archive` if the docx container cannot be assembled
pub fn process_image(
    input: &RgbImage,
    ramp: &GlyphRamp,
    config: &ConvertConfig,
) -> Result<Encoded> {
    config.validate()?;

    let working_image = if config.scale == 1.0 {
        Cow::Borrowed(input)
    } else {
        let target = scaled_dimensions(input.dimensions(), config.scale);
        info!(
            "resizing {}x{} -> {}x{} ({})",
            input.width(),
            input.height(),
            target.0,
            target.1,
            config.resample
        );
        Cow::Owned(resize_image(input, config.scale, config.resample)?)
    };

    let grid = GlyphGrid::build(&working_image, ramp);
    let (columns, rows) = grid.dimensions();
    debug!(
        "glyph grid {}x{}, {} glyphs, divider {}",
        columns,
        rows,
        ramp.len(),
        ramp.divider()
    );

    let encoder = encoder_for(config)?;
    let encoded = encoder.encode(&grid)?;
    debug!("encoded {} bytes of {}", encoded.bytes.len(), encoded.format);

    Ok(encoded)
}

/// Load an image file and convert it
///
/// # Errors
/// `InvalidSource` if decoding fails, otherwise as [`process_image`]
pub fn process_file(
    path: impl AsRef<Path>,
    ramp: &GlyphRamp,
    config: &ConvertConfig,
) -> Result<Encoded> {
    // Reject bad parameters before paying for the decode
    config.validate()?;
    let image = load_image(path)?;
    process_image(&image, ramp, config)
}
