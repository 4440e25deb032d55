use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use colored_ascii::{ConvertConfig, Format, GlyphRamp, LineSpacing, Resample};

/// Convert an image into colored ASCII art (.txt, .rtf, .docx, .html)
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path of the source image
    pub source: PathBuf,

    /// Resize the source by this factor before converting. 1.0 keeps the size.
    #[arg(short, long, default_value_t = 1.0)]
    pub scale: f64,

    /// Output path without extension. Defaults to the source name
    /// ("<name>-output" when the source already has the output extension).
    #[arg(short, long, visible_aliases = ["destination", "dst"])]
    pub dest: Option<PathBuf>,

    /// Output format: txt, rtf, docx or html. Defaults to the source extension.
    #[arg(short, long)]
    pub format: Option<String>,

    /// Limit the RTF palette to PALETTE^3 colors.
    #[arg(short, long, default_value_t = 8)]
    pub palette: u32,

    /// Resampling filter: nearest, bilinear, bicubic, box, hamming, lanczos.
    #[arg(short, long, default_value = "lanczos")]
    pub resample: Resample,

    /// Font size in points (pixels for html).
    #[arg(long, visible_alias = "fontsize", default_value_t = 10)]
    pub font_size: u32,

    /// Make docx line spacing exactly the font size. Rows get taller than
    /// wide instead of keeping the image ratio.
    #[arg(short, long, default_value_t = false)]
    pub line_spacing: bool,

    /// Glyphs ordered darkest to brightest, e.g. "@%#*+=-:. ".
    #[arg(long, conflicts_with = "ramp_file")]
    pub ramp: Option<String>,

    /// File with one glyph per line (first character), darkest first.
    #[arg(long)]
    pub ramp_file: Option<PathBuf>,

    /// Log level: error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Output format, falling back to the source file's extension
    ///
    /// # Errors
    /// Returns an error if the format is not txt, rtf, docx or html.
    pub fn resolve_format(&self) -> Result<Format> {
        let name = match &self.format {
            Some(format) => format.clone(),
            None => self.source_extension().with_context(|| {
                format!("{} has no extension; pass --format", self.source.display())
            })?,
        };
        Ok(Format::from_extension(&name)?)
    }

    /// Output file path including the format's extension
    pub fn output_path(&self, format: Format) -> PathBuf {
        let stem = match &self.dest {
            Some(dest) => dest.clone(),
            None => {
                let stem = self.source.with_extension("");
                let same_extension = self
                    .source_extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case(format.extension()));
                if same_extension {
                    append(stem, "-output")
                } else {
                    stem
                }
            }
        };

        append(stem, &format!(".{}", format.extension()))
    }

    /// Glyph ramp from --ramp, --ramp-file or the built-in default
    ///
    /// # Errors
    /// Returns an error if the ramp file cannot be read or the ramp is invalid.
    pub fn glyph_ramp(&self) -> Result<GlyphRamp> {
        if let Some(ramp) = &self.ramp {
            return Ok(ramp.parse()?);
        }
        if let Some(path) = &self.ramp_file {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read ramp file {}", path.display()))?;
            return GlyphRamp::from_lines(&text)
                .with_context(|| format!("invalid ramp file {}", path.display()));
        }
        Ok(GlyphRamp::default())
    }

    pub fn convert_config(&self, format: Format) -> ConvertConfig {
        ConvertConfig {
            format,
            palette: self.palette,
            font_size: self.font_size,
            line_spacing: if self.line_spacing {
                LineSpacing::Exact
            } else {
                LineSpacing::Proportional
            },
            scale: self.scale,
            resample: self.resample,
        }
    }

    fn source_extension(&self) -> Option<String> {
        self.source
            .extension()
            .map(|ext| ext.to_string_lossy().into_owned())
    }
}

fn append(path: impl AsRef<Path>, suffix: &str) -> PathBuf {
    let mut name = OsString::from(path.as_ref());
    name.push(suffix);
    PathBuf::from(name)
}
