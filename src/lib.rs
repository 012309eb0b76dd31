//! # soaldoc
//!
//! Turns the free-text Markdown returned by a text-generation service (an
//! exam-paper draft with headings, prose, and pipe tables) into a structured
//! document with real tables, a title heading, and bold section labels.
//!
//! ## Quick Start
//!
//! ```
//! use soaldoc::{render, to_document, RenderOptions};
//!
//! fn main() -> soaldoc::Result<()> {
//!     let response = "**KISI-KISI SOAL**\n\n| No | Soal |\n|---|---|\n| 1 | What is X? |\n";
//!     let doc = to_document(response, "SMA Negeri 1");
//!     assert_eq!(doc.element_count(), 4);
//!
//!     let markdown = render::to_markdown(&doc, &RenderOptions::default())?;
//!     println!("{}", markdown);
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! - [`parser`]: line-by-line scan into table, paragraph, and blank blocks
//! - [`builder`]: one document element per block, after a centered title
//! - [`render`]: Markdown, plain text, JSON, and HTML sinks
//! - [`convert`]: all of the above in one call, with parallel batches
//!
//! Parsing and building are total: any input string produces a document.

pub mod builder;
pub mod convert;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use builder::{build, DocumentBuilder};
pub use convert::{ConvertOptions, ConvertResult, Converter, OutputFormat};
pub use error::{Error, Result};
pub use model::{Alignment, Document, Element, Heading, Metadata, Paragraph, Table, TableRow};
pub use parser::{parse, Block, MarkdownBlockParser, ParagraphBlock, ParseOptions, TableBlock};
pub use render::{ConversionStats, JsonFormat, RenderOptions, RowPolicy};

/// Parse a response and build a document titled `title`.
///
/// # Example
///
/// ```
/// use soaldoc::{to_document, Element, Paragraph};
///
/// let doc = to_document("Hello world", "Judul");
/// assert_eq!(doc.body(), &[Element::Paragraph(Paragraph::new("Hello world"))]);
/// ```
pub fn to_document(raw: &str, title: &str) -> Document {
    build(parse(raw), title)
}

/// Convert a response to Markdown with default options.
pub fn to_markdown(raw: &str, title: &str) -> Result<String> {
    render::to_markdown(&to_document(raw, title), &RenderOptions::default())
}

/// Convert a response to plain text with default options.
pub fn to_text(raw: &str, title: &str) -> Result<String> {
    render::to_text(&to_document(raw, title), &RenderOptions::default())
}

/// Convert a response to JSON.
///
/// # Example
///
/// ```
/// use soaldoc::{to_json, JsonFormat};
///
/// let json = to_json("| A | B |", "T", JsonFormat::Compact)?;
/// assert!(json.contains(r#""rows":[["A","B"]]"#));
/// # Ok::<(), soaldoc::Error>(())
/// ```
pub fn to_json(raw: &str, title: &str, format: JsonFormat) -> Result<String> {
    render::to_json(&to_document(raw, title), format)
}

/// Convert a response to the HTML exam-paper preview.
pub fn to_html(raw: &str, title: &str) -> Result<String> {
    render::to_html(&to_document(raw, title), &RenderOptions::default())
}

/// Builder for converting generated responses.
///
/// # Example
///
/// ```
/// use soaldoc::Soaldoc;
///
/// let html = Soaldoc::new()
///     .with_section_keyword("RUBRIK")
///     .with_html_class("paper")
///     .convert("**RUBRIK PENILAIAN**", "SMA Negeri 1")
///     .to_html()?;
/// assert!(html.contains("<strong>RUBRIK PENILAIAN</strong>"));
/// # Ok::<(), soaldoc::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Soaldoc {
    parse_options: ParseOptions,
    render_options: RenderOptions,
    timestamp: bool,
}

impl Soaldoc {
    /// Create a new Soaldoc builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the section keywords.
    pub fn with_section_keywords<S: Into<String>>(
        mut self,
        keywords: impl IntoIterator<Item = S>,
    ) -> Self {
        self.parse_options = self.parse_options.with_section_keywords(keywords);
        self
    }

    /// Add a section keyword.
    pub fn with_section_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.parse_options = self.parse_options.add_section_keyword(keyword);
        self
    }

    /// Skip Unicode normalization of the input.
    pub fn without_normalization(mut self) -> Self {
        self.parse_options = self.parse_options.with_unicode_normalization(false);
        self
    }

    /// Enable frontmatter in Markdown output.
    pub fn with_frontmatter(mut self) -> Self {
        self.render_options = self.render_options.with_frontmatter(true);
        self
    }

    /// Set the row policy for grid outputs.
    pub fn with_row_policy(mut self, policy: RowPolicy) -> Self {
        self.render_options = self.render_options.with_row_policy(policy);
        self
    }

    /// Set the CSS class of the HTML wrapper.
    pub fn with_html_class(mut self, class: impl Into<String>) -> Self {
        self.render_options = self.render_options.with_html_class(class);
        self
    }

    /// Stamp documents with the conversion time.
    pub fn with_timestamp(mut self) -> Self {
        self.timestamp = true;
        self
    }

    /// Parse and build a response.
    pub fn convert(&self, raw: &str, title: &str) -> SoaldocResult {
        let options = ConvertOptions::new()
            .with_parse_options(self.parse_options.clone())
            .with_timestamp(self.timestamp);
        let (document, stats) = Converter::new(options).build_document(raw, title);
        SoaldocResult {
            document,
            stats,
            render_options: self.render_options.clone(),
        }
    }
}

/// A built document ready for rendering.
#[derive(Debug, Clone)]
pub struct SoaldocResult {
    /// The built document
    pub document: Document,
    /// Statistics gathered while building
    pub stats: ConversionStats,
    render_options: RenderOptions,
}

impl SoaldocResult {
    /// Convert to Markdown.
    pub fn to_markdown(&self) -> Result<String> {
        render::to_markdown(&self.document, &self.render_options)
    }

    /// Convert to plain text.
    pub fn to_text(&self) -> Result<String> {
        render::to_text(&self.document, &self.render_options)
    }

    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Convert to the HTML exam-paper preview.
    pub fn to_html(&self) -> Result<String> {
        render::to_html(&self.document, &self.render_options)
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Consume self and return the document.
    pub fn into_document(self) -> Document {
        self.document
    }
}
