/// Basic example: Convert a simple test image to every output format
///
/// This creates a test image with some basic shapes and writes it as
/// txt, rtf, docx and html next to the working directory
use colored_ascii::{ConvertConfig, Format, GlyphRamp, process_image};
use image::{Rgb, RgbImage};

fn main() {
    println!("Colored ASCII - Basic Example");
    println!("=============================\n");

    // Small canvas: one glyph per pixel
    let width = 64;
    let height = 32;
    let mut img = RgbImage::from_pixel(width, height, Rgb([240, 240, 240]));

    // Draw a blue circle in the center
    let center_x = width as f32 / 2.0;
    let center_y = height as f32 / 2.0;
    let radius = 12.0;

    for y in 0..height {
        for x in 0..width {
            let dx = x as f32 - center_x;
            // Glyph cells are about twice as tall as wide
            let dy = (y as f32 - center_y) * 2.0;
            let dist = (dx * dx + dy * dy).sqrt();

            if dist < radius {
                img.put_pixel(x, y, Rgb([30, 60, 200]));
            } else if (dist - radius).abs() < 2.0 {
                img.put_pixel(x, y, Rgb([0, 0, 0]));
            }
        }
    }

    // Draw a red diagonal line
    for i in 0..height {
        img.put_pixel(i * 2, i, Rgb([220, 20, 20]));
    }

    println!("Created test image: {}x{}", width, height);

    let ramp = GlyphRamp::default();
    for format in Format::ALL {
        let config = ConvertConfig {
            format,
            palette: 6,
            ..Default::default()
        };

        let output = process_image(&img, &ramp, &config).expect("Failed to convert");
        let path = format!("basic_output.{}", output.extension());
        std::fs::write(&path, &output.bytes).expect("Failed to save output");

        println!("✓ Saved {:>4} to: {} ({} bytes)", format, path, output.bytes.len());
    }

    img.save("basic_input.png").expect("Failed to save input");
    println!("✓ Saved input to: basic_input.png");
    println!("\nConversion complete!");
}
