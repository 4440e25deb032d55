use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

use super::{Encoder, Format, markup_entity};
use crate::error::Result;
use crate::grid::GlyphGrid;

/// Line height relative to font size that keeps Consolas glyph cells close to square
pub const DOCX_LINE_SPACING_RATIO: f64 = 0.55;

const WORDML_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

const CONTENT_TYPES: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    "\n",
    r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
    r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#,
    r#"<Default Extension="xml" ContentType="application/xml"/>"#,
    r#"<Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>"#,
    r#"<Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/>"#,
    "</Types>",
);

const PACKAGE_RELS: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    "\n",
    r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>"#,
    "</Relationships>",
);

const DOCUMENT_RELS: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    "\n",
    r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>"#,
    "</Relationships>",
);

const ROW_BREAK: &str = "<w:r><w:br/></w:r>";

/// Paragraph line height
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineSpacing {
    /// Exactly the font size; glyph cells come out taller than wide
    Exact,
    /// Font size scaled by [`DOCX_LINE_SPACING_RATIO`] to keep the image aspect ratio
    #[default]
    Proportional,
}

impl LineSpacing {
    /// Line height in twentieths of a point for a font size in points
    pub fn twips(self, font_size: u32) -> u32 {
        let points = match self {
            LineSpacing::Exact => f64::from(font_size),
            LineSpacing::Proportional => f64::from(font_size) * DOCX_LINE_SPACING_RATIO,
        };
        (points * 20.0).round() as u32
    }
}

/// Word document: one centered paragraph, one colored run per glyph
#[derive(Debug, Clone, Copy)]
pub struct DocxEncoder {
    font_size: u32,
    line_spacing: LineSpacing,
}

impl DocxEncoder {
    /// # Arguments
    /// * `font_size` - Point size of the document-wide Consolas style
    /// * `line_spacing` - How tall each row of glyphs is
    pub fn new(font_size: u32, line_spacing: LineSpacing) -> Self {
        Self {
            font_size,
            line_spacing,
        }
    }

    fn styles_xml(&self) -> String {
        let half_points = self.font_size * 2;
        let run_props = format!(
            r#"<w:rPr><w:rFonts w:ascii="Consolas" w:hAnsi="Consolas" w:eastAsia="Consolas" w:cs="Consolas"/><w:sz w:val="{half_points}"/><w:szCs w:val="{half_points}"/></w:rPr>"#
        );

        format!(
            concat!(
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
                "\n",
                r#"<w:styles xmlns:w="{ns}">"#,
                "<w:docDefaults><w:rPrDefault>{rpr}</w:rPrDefault></w:docDefaults>",
                r#"<w:style w:type="paragraph" w:default="1" w:styleId="Normal">"#,
                r#"<w:name w:val="Normal"/><w:qFormat/>{rpr}</w:style>"#,
                "</w:styles>",
            ),
            ns = WORDML_NS,
            rpr = run_props,
        )
    }

    fn document_xml(&self, grid: &GlyphGrid) -> String {
        // A run with color and text is roughly 100 bytes
        let cells = grid.width() as usize * grid.height() as usize;
        let mut xml = String::with_capacity(cells * 100 + 512);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(&format!(
            concat!(
                r#"<w:document xmlns:w="{ns}"><w:body><w:p><w:pPr>"#,
                r#"<w:spacing w:before="0" w:after="0" w:line="{line}" w:lineRule="exact"/>"#,
                r#"<w:ind w:left="0" w:right="0"/>"#,
                r#"<w:jc w:val="center"/>"#,
                "</w:pPr>",
            ),
            ns = WORDML_NS,
            line = self.line_spacing.twips(self.font_size),
        ));

        for row in grid.rows() {
            for cell in row.cells() {
                let [r, g, b] = cell.color.0;
                xml.push_str(&format!(
                    concat!(
                        r#"<w:r><w:rPr><w:color w:val="{r:02X}{g:02X}{b:02X}"/></w:rPr>"#,
                        r#"<w:t xml:space="preserve">"#,
                    ),
                    r = r,
                    g = g,
                    b = b,
                ));
                match markup_entity(cell.glyph) {
                    Some(entity) => xml.push_str(entity),
                    None => xml.push(cell.glyph),
                }
                xml.push_str("</w:t></w:r>");
            }
            xml.push_str(ROW_BREAK);
        }

        xml.push_str("</w:p></w:body></w:document>");
        xml
    }
}

impl Encoder for DocxEncoder {
    fn format(&self) -> Format {
        Format::Docx
    }

    fn encode_to(&self, grid: &GlyphGrid, out: &mut dyn Write) -> Result<()> {
        // Fixed timestamps keep the archive byte-identical across runs
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .last_modified_time(DateTime::default());

        let styles = self.styles_xml();
        let document = self.document_xml(grid);
        let parts: [(&str, &str); 5] = [
            ("[Content_Types].xml", CONTENT_TYPES),
            ("_rels/.rels", PACKAGE_RELS),
            ("word/_rels/document.xml.rels", DOCUMENT_RELS),
            ("word/styles.xml", styles.as_str()),
            ("word/document.xml", document.as_str()),
        ];

        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        for (name, body) in parts {
            zip.start_file(name, options)?;
            zip.write_all(body.as_bytes())?;
        }
        let archive = zip.finish()?.into_inner();

        out.write_all(&archive)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ramp::GlyphRamp;
    use image::{Rgb, RgbImage};
    use std::io::Read;
    use zip::ZipArchive;

    fn encode(img: &RgbImage, ramp: &str, line_spacing: LineSpacing) -> Vec<u8> {
        let ramp: GlyphRamp = ramp.parse().unwrap();
        let grid = GlyphGrid::build(img, &ramp);
        DocxEncoder::new(10, line_spacing).encode(&grid).unwrap().bytes
    }

    fn read_part(archive: &[u8], name: &str) -> String {
        let mut zip = ZipArchive::new(Cursor::new(archive)).unwrap();
        let mut part = zip.by_name(name).unwrap();
        let mut text = String::new();
        part.read_to_string(&mut text).unwrap();
        text
    }

    #[test]
    fn test_package_parts() {
        let bytes = encode(&RgbImage::new(1, 1), "@#", LineSpacing::default());
        let zip = ZipArchive::new(Cursor::new(&bytes[..])).unwrap();
        let mut names: Vec<&str> = zip.file_names().collect();
        names.sort_unstable();
        assert_eq!(
            names,
            vec![
                "[Content_Types].xml",
                "_rels/.rels",
                "word/_rels/document.xml.rels",
                "word/document.xml",
                "word/styles.xml",
            ]
        );
    }

    #[test]
    fn test_one_run_per_glyph_and_break_per_row() {
        let mut img = RgbImage::new(2, 1);
        img.put_pixel(1, 0, Rgb([255, 255, 255]));
        let bytes = encode(&img, "@#", LineSpacing::default());
        let document = read_part(&bytes, "word/document.xml");

        assert!(document.contains(concat!(
            r#"<w:r><w:rPr><w:color w:val="000000"/></w:rPr>"#,
            r#"<w:t xml:space="preserve">@</w:t></w:r>"#,
            r#"<w:r><w:rPr><w:color w:val="FFFFFF"/></w:rPr>"#,
            r#"<w:t xml:space="preserve">#</w:t></w:r>"#,
            r#"<w:r><w:br/></w:r></w:p>"#,
        )));
        assert_eq!(document.matches("<w:br/>").count(), 1);
    }

    fn run_texts(document: &str) -> Vec<&str> {
        document
            .split(r#"<w:t xml:space="preserve">"#)
            .skip(1)
            .filter_map(|run| run.split("</w:t>").next())
            .collect()
    }

    #[test]
    fn test_uniform_color_runs() {
        let color = Rgb([0x10, 0x80, 0xf0]);
        let img = RgbImage::from_pixel(3, 2, color);
        let bytes = encode(&img, "@%#*+=-:. ", LineSpacing::default());
        let document = read_part(&bytes, "word/document.xml");
        assert_eq!(document.matches(r#"<w:color w:val="1080F0"/>"#).count(), 6);
        assert_eq!(document.matches("<w:color ").count(), 6);
        assert_eq!(document.matches(ROW_BREAK).count(), 2);

        let glyph = GlyphRamp::default().glyph(crate::luminance::luma(color));
        assert_ne!(glyph, '@');
        let texts = run_texts(&document);
        assert_eq!(texts.len(), 6);
        assert!(texts.iter().all(|text| *text == glyph.to_string()));
    }

    #[test]
    fn test_paragraph_formatting() {
        let bytes = encode(&RgbImage::new(1, 1), "@#", LineSpacing::Proportional);
        let document = read_part(&bytes, "word/document.xml");
        assert!(document.contains(r#"<w:jc w:val="center"/>"#));
        assert!(document.contains(r#"w:line="110" w:lineRule="exact""#));
        assert_eq!(document.matches("<w:p>").count(), 1);

        let bytes = encode(&RgbImage::new(1, 1), "@#", LineSpacing::Exact);
        let exact = read_part(&bytes, "word/document.xml");
        assert!(exact.contains(r#"w:line="200" w:lineRule="exact""#));
    }

    #[test]
    fn test_style_font() {
        let bytes = encode(&RgbImage::new(1, 1), "@#", LineSpacing::default());
        let styles = read_part(&bytes, "word/styles.xml");
        assert!(styles.contains(r#"w:ascii="Consolas""#));
        assert!(styles.contains(r#"<w:sz w:val="20"/>"#));
        assert!(styles.contains(r#"w:styleId="Normal""#));
    }

    #[test]
    fn test_escapes_glyphs() {
        let img = RgbImage::from_pixel(1, 1, Rgb([0, 0, 0]));
        let document = read_part(&encode(&img, "<#", LineSpacing::default()), "word/document.xml");
        assert!(document.contains(r#"<w:t xml:space="preserve">&lt;</w:t>"#));
    }

    #[test]
    fn test_empty_image() {
        let bytes = encode(&RgbImage::new(0, 0), "@#", LineSpacing::default());
        let document = read_part(&bytes, "word/document.xml");
        assert!(document.ends_with("</w:pPr></w:p></w:body></w:document>"));
    }

    #[test]
    fn test_idempotent() {
        let img = RgbImage::from_fn(6, 3, |x, y| Rgb([(x * 40) as u8, (y * 80) as u8, 7]));
        let first = encode(&img, "@%#*+=-:. ", LineSpacing::default());
        let second = encode(&img, "@%#*+=-:. ", LineSpacing::default());
        assert_eq!(first, second);
    }

    #[test]
    fn test_line_spacing_twips() {
        assert_eq!(LineSpacing::Exact.twips(10), 200);
        assert_eq!(LineSpacing::Proportional.twips(10), 110);
        assert_eq!(LineSpacing::Proportional.twips(7), 77);
    }
}
