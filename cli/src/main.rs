mod cli;

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use colored_ascii::{load_image, process_image};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Configure logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    let output = run(&cli)?;
    println!("✓ Saved to: {}", output.display());
    Ok(())
}

/// Convert `cli.source` and write the result, returning the written path
///
/// Nothing is written unless every step before the write succeeds.
fn run(cli: &Cli) -> Result<PathBuf> {
    // Resolve everything that can fail before touching the source
    let format = cli.resolve_format()?;
    let ramp = cli.glyph_ramp()?;
    let config = cli.convert_config(format);
    config.validate()?;

    let image = load_image(&cli.source)?;
    log::info!(
        "converting {} ({}x{}) to {} with {} glyphs",
        cli.source.display(),
        image.width(),
        image.height(),
        format,
        ramp.len()
    );

    let start = Instant::now();
    let encoded = process_image(&image, &ramp, &config)
        .with_context(|| format!("failed to convert {}", cli.source.display()))?;
    log::debug!("conversion took {:.1} ms", start.elapsed().as_secs_f64() * 1000.0);

    let output = cli.output_path(encoded.format);
    fs::write(&output, &encoded.bytes)
        .with_context(|| format!("failed to write {}", output.display()))?;

    Ok(output)
}
