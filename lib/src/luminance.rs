use image::{GrayImage, Luma, Rgb, RgbImage};

/// Convert one RGB pixel to an 8-bit intensity
///
/// Formula: L = 0.299*R + 0.587*G + 0.114*B (ITU-R BT.601)
/// Evaluated in 16-bit fixed point with rounding, so identical inputs always
/// produce identical intensities on every platform.
///
/// # Arguments
/// * `pixel` - Input RGB pixel
///
/// # Returns
/// Intensity in [0, 255]
#[inline]
pub fn luma(pixel: Rgb<u8>) -> u8 {
    let [r, g, b] = pixel.0;
    let weighted = 19595 * u32::from(r) + 38470 * u32::from(g) + 7471 * u32::from(b);

    // The weights sum to 65536, so the result never exceeds 255
    ((weighted + 0x8000) >> 16) as u8
}

/// Calculate the intensity grid of an RGB image
///
/// # Arguments
/// * `img` - Input RGB image
///
/// # Returns
/// Grayscale image with the same dimensions
pub fn grayscale(img: &RgbImage) -> GrayImage {
    let (width, height) = img.dimensions();
    let mut output = GrayImage::new(width, height);

    for (x, y, pixel) in img.enumerate_pixels() {
        output.put_pixel(x, y, Luma([luma(*pixel)]));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luma_black() {
        assert_eq!(luma(Rgb([0, 0, 0])), 0);
    }

    #[test]
    fn test_luma_white() {
        assert_eq!(luma(Rgb([255, 255, 255])), 255);
    }

    #[test]
    fn test_luma_gray_is_identity() {
        for v in 0..=255u8 {
            assert_eq!(luma(Rgb([v, v, v])), v);
        }
    }

    #[test]
    fn test_luma_primaries() {
        // 0.299 * 255, 0.587 * 255, 0.114 * 255
        assert_eq!(luma(Rgb([255, 0, 0])), 76);
        assert_eq!(luma(Rgb([0, 255, 0])), 150);
        assert_eq!(luma(Rgb([0, 0, 255])), 29);
    }

    #[test]
    fn test_grayscale_preserves_dimensions() {
        let img = RgbImage::new(7, 3);
        let gray = grayscale(&img);
        assert_eq!(gray.dimensions(), (7, 3));
    }

    #[test]
    fn test_grayscale_matches_luma() {
        let img = RgbImage::from_pixel(4, 4, Rgb([10, 200, 90]));
        let gray = grayscale(&img);
        let expected = luma(Rgb([10, 200, 90]));
        assert!(gray.pixels().all(|p| p[0] == expected));
    }
}
