use colored_ascii::{ConvertConfig, GlyphRamp, Resample, process_image};
use image::{Rgb, RgbImage};

fn main() {
    println!("Colored ASCII - Resize Demo");
    println!("===========================\n");

    // Gradient test image
    let (width, height) = (120, 40);
    let img = RgbImage::from_fn(width, height, |x, y| {
        let gray = ((x * 255) / width) as u8;
        Rgb([gray, gray, ((y * 255) / height) as u8])
    });

    let ramp = GlyphRamp::default();

    for scale in [1.0, 0.5, 0.25] {
        println!("Scale {scale}");

        for filter in Resample::ALL {
            let config = ConvertConfig {
                scale,
                resample: filter,
                ..Default::default()
            };

            let output = process_image(&img, &ramp, &config).expect("Failed to convert");
            let text = String::from_utf8(output.bytes).expect("Text output is UTF-8");
            let rows = text.lines().count();
            let cols = text.lines().next().map_or(0, |line| line.chars().count());

            println!("  {:<8} -> {}x{}", filter, cols, rows);
        }
        println!();
    }

    // Show the smallest rendition
    let config = ConvertConfig {
        scale: 0.25,
        ..Default::default()
    };
    let output = process_image(&img, &ramp, &config).expect("Failed to convert");
    println!("{}", String::from_utf8_lossy(&output.bytes));

    println!("Note: output dimensions are the input dimensions times the scale,");
    println!("truncated toward zero.");
}
