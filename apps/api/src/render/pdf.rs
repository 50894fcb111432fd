//! HTML → PDF conversion.
//!
//! `HtmlToPdf` is the seam the download handler depends on; `GenPdfConverter` is the
//! default engine. It understands the block structure our templates emit
//! (`h1`/`h2`/`h3`/`p`/`li`) and lays it out with genpdf using the bundled DejaVu Sans
//! family, so no font files are needed at runtime.

use genpdf::{elements, fonts, style, Element as _};
use scraper::{Html, Selector};
use thiserror::Error;

const FONT_REGULAR: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");
const FONT_BOLD: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans-Bold.ttf");
const FONT_ITALIC: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans-Oblique.ttf");
const FONT_BOLD_ITALIC: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans-BoldOblique.ttf");

const BLOCK_SELECTOR: &str = "h1, h2, h3, p, li";
const BODY_FONT_SIZE: u8 = 10;
const PAGE_MARGINS_MM: i32 = 15;

#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("font error: {0}")]
    Font(String),

    #[error("HTML parse error: {0}")]
    Html(String),

    #[error("PDF layout error: {0}")]
    Layout(String),
}

/// Converts a complete HTML document into PDF bytes.
pub trait HtmlToPdf: Send + Sync {
    fn convert(&self, html: &str) -> Result<Vec<u8>, ConversionError>;
}

/// A renderable block pulled out of the HTML, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Block {
    Heading { level: u8, text: String },
    Paragraph(String),
    ListItem(String),
}

#[derive(Debug, Default, Clone, Copy)]
pub struct GenPdfConverter;

impl GenPdfConverter {
    pub fn new() -> Self {
        Self
    }

    fn font_family() -> Result<fonts::FontFamily<fonts::FontData>, ConversionError> {
        let load = |data: &[u8], label: &str| {
            fonts::FontData::new(data.to_vec(), None)
                .map_err(|e| ConversionError::Font(format!("{label}: {e}")))
        };

        Ok(fonts::FontFamily {
            regular: load(FONT_REGULAR, "regular")?,
            bold: load(FONT_BOLD, "bold")?,
            italic: load(FONT_ITALIC, "italic")?,
            bold_italic: load(FONT_BOLD_ITALIC, "bold italic")?,
        })
    }
}

impl HtmlToPdf for GenPdfConverter {
    fn convert(&self, html: &str) -> Result<Vec<u8>, ConversionError> {
        let (title, blocks) = extract_blocks(html)?;

        let mut doc = genpdf::Document::new(Self::font_family()?);
        doc.set_title(title.unwrap_or_else(|| "Resume".to_string()));
        doc.set_minimal_conformance();
        doc.set_font_size(BODY_FONT_SIZE);
        doc.set_line_spacing(1.25);

        let mut decorator = genpdf::SimplePageDecorator::new();
        decorator.set_margins(PAGE_MARGINS_MM);
        doc.set_page_decorator(decorator);

        for block in blocks {
            match block {
                Block::Heading { level: 1, text } => {
                    doc.push(
                        elements::Paragraph::new(text)
                            .styled(style::Style::new().bold().with_font_size(18)),
                    );
                }
                Block::Heading { level: 2, text } => {
                    doc.push(elements::Break::new(1.0));
                    doc.push(
                        elements::Paragraph::new(text)
                            .styled(style::Style::new().bold().with_font_size(13)),
                    );
                }
                Block::Heading { text, .. } => {
                    doc.push(
                        elements::Paragraph::new(text)
                            .styled(style::Style::new().bold().with_font_size(11)),
                    );
                }
                Block::Paragraph(text) => {
                    for line in text.lines() {
                        doc.push(elements::Paragraph::new(line.to_string()));
                    }
                }
                Block::ListItem(text) => {
                    doc.push(
                        elements::BulletPoint::new(elements::Paragraph::new(text))
                            .with_bullet("•"),
                    );
                }
            }
        }

        let mut buffer = Vec::new();
        doc.render(&mut buffer)
            .map_err(|e| ConversionError::Layout(e.to_string()))?;
        Ok(buffer)
    }
}

/// Pulls the `<title>` and the block-level text out of an HTML document.
/// Blank blocks are dropped; paragraph line breaks are kept, other whitespace collapsed.
fn extract_blocks(html: &str) -> Result<(Option<String>, Vec<Block>), ConversionError> {
    let doc = Html::parse_document(html);
    let block_sel =
        Selector::parse(BLOCK_SELECTOR).map_err(|e| ConversionError::Html(e.to_string()))?;
    let title_sel = Selector::parse("title").map_err(|e| ConversionError::Html(e.to_string()))?;

    let title = doc
        .select(&title_sel)
        .next()
        .map(|t| collapse_whitespace(&t.text().collect::<String>()))
        .filter(|t| !t.is_empty());

    let blocks = doc
        .select(&block_sel)
        .filter_map(|el| {
            let raw: String = el.text().collect();
            let block = match el.value().name() {
                "h1" => Block::Heading {
                    level: 1,
                    text: collapse_whitespace(&raw),
                },
                "h2" => Block::Heading {
                    level: 2,
                    text: collapse_whitespace(&raw),
                },
                "h3" => Block::Heading {
                    level: 3,
                    text: collapse_whitespace(&raw),
                },
                "li" => Block::ListItem(collapse_whitespace(&raw)),
                _ => Block::Paragraph(collapse_lines(&raw)),
            };
            (!block.is_blank()).then_some(block)
        })
        .collect();

    Ok((title, blocks))
}

impl Block {
    fn is_blank(&self) -> bool {
        match self {
            Block::Heading { text, .. } | Block::Paragraph(text) | Block::ListItem(text) => {
                text.is_empty()
            }
        }
    }
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn collapse_lines(s: &str) -> String {
    s.lines()
        .map(collapse_whitespace)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
