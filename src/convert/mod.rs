//! One-call conversion from a generated response to rendered output.
//!
//! # Example
//!
//! ```
//! use soaldoc::convert::{ConvertOptions, Converter, OutputFormat};
//!
//! let converter = Converter::new(ConvertOptions::new().with_format(OutputFormat::Text));
//! let result = converter.convert("**KARTU SOAL**\n| No | Soal |", "SMA Negeri 1").unwrap();
//! assert_eq!(result.content, "SMA Negeri 1\nKARTU SOAL\nNo\tSoal");
//! assert_eq!(result.mime_type, "text/plain");
//! ```

use std::fmt;
use std::str::FromStr;

use rayon::prelude::*;

use crate::builder::DocumentBuilder;
use crate::error::{Error, Result};
use crate::model::{Document, Metadata};
use crate::parser::{MarkdownBlockParser, ParseOptions};
use crate::render::{self, ConversionStats, JsonFormat, RenderOptions};

/// Options for response conversion.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Scanning options
    pub parse: ParseOptions,

    /// Rendering options
    pub render: RenderOptions,

    /// Whether to collect statistics during conversion
    pub collect_stats: bool,

    /// Whether to stamp the document with the conversion time
    pub timestamp: bool,

    /// Output format
    pub output_format: OutputFormat,

    /// JSON layout when the output format is JSON
    pub json_format: JsonFormat,
}

impl ConvertOptions {
    /// Create new conversion options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set scanning options.
    pub fn with_parse_options(mut self, options: ParseOptions) -> Self {
        self.parse = options;
        self
    }

    /// Set rendering options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render = options;
        self
    }

    /// Enable statistics collection.
    pub fn with_stats(mut self, collect: bool) -> Self {
        self.collect_stats = collect;
        self
    }

    /// Enable the creation timestamp.
    pub fn with_timestamp(mut self, timestamp: bool) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Set output format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Set JSON layout.
    pub fn with_json_format(mut self, format: JsonFormat) -> Self {
        self.json_format = format;
        self
    }
}

/// Output format for conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Markdown format
    #[default]
    Markdown,

    /// Plain text
    Text,

    /// JSON structure
    Json,

    /// HTML exam-paper preview
    Html,
}

impl OutputFormat {
    /// MIME type of the rendered output.
    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Markdown => "text/markdown",
            OutputFormat::Text => "text/plain",
            OutputFormat::Json => "application/json",
            OutputFormat::Html => "text/html",
        }
    }

    /// Conventional file extension, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Markdown => "md",
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
            OutputFormat::Html => "html",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Markdown => "markdown",
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Html => "html",
        };
        f.write_str(name)
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "html" | "htm" => Ok(OutputFormat::Html),
            other => Err(Error::InvalidOption(format!(
                "unknown output format: {}",
                other
            ))),
        }
    }
}

/// Result of response conversion.
#[derive(Debug, Clone)]
pub struct ConvertResult {
    /// Converted content
    pub content: String,

    /// Document metadata
    pub metadata: Metadata,

    /// Conversion statistics (if collected)
    pub stats: Option<ConversionStats>,

    /// MIME type of the output
    pub mime_type: &'static str,
}

impl ConvertResult {
    /// Create a new conversion result.
    pub fn new(content: String, metadata: Metadata) -> Self {
        Self {
            content,
            metadata,
            stats: None,
            mime_type: "text/markdown",
        }
    }

    /// Set conversion statistics.
    pub fn with_stats(mut self, stats: ConversionStats) -> Self {
        self.stats = Some(stats);
        self
    }

    /// Set MIME type.
    pub fn with_mime_type(mut self, mime_type: &'static str) -> Self {
        self.mime_type = mime_type;
        self
    }

    /// Get content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }
}

/// Parses, builds, and renders generated responses.
///
/// Holds configuration only; every call works on its own input.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    options: ConvertOptions,
}

impl Converter {
    /// Create a converter.
    pub fn new(options: ConvertOptions) -> Self {
        Self { options }
    }

    /// Get the conversion options.
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Parse and build a document without rendering it.
    pub fn build_document(&self, raw: &str, title: &str) -> (Document, ConversionStats) {
        let parser = MarkdownBlockParser::new(self.options.parse.clone());
        let (blocks, summary) = parser.parse_with_summary(raw);

        let mut builder = DocumentBuilder::new(title).with_summary(&summary);
        if self.options.timestamp {
            builder = builder.with_timestamp();
        }
        builder.extend(blocks);
        builder.finish_with_stats()
    }

    /// Convert one response into the configured output format.
    pub fn convert(&self, raw: &str, title: &str) -> Result<ConvertResult> {
        let (doc, mut stats) = self.build_document(raw, title);
        let format = self.options.output_format;

        let content = match format {
            OutputFormat::Markdown => render::to_markdown(&doc, &self.options.render)?,
            OutputFormat::Text => render::to_text(&doc, &self.options.render)?,
            OutputFormat::Json => render::to_json(&doc, self.options.json_format)?,
            OutputFormat::Html => render::to_html(&doc, &self.options.render)?,
        };

        let mut result =
            ConvertResult::new(content, doc.metadata).with_mime_type(format.mime_type());
        if self.options.collect_stats {
            stats.count_text(&result.content);
            result = result.with_stats(stats);
        }
        Ok(result)
    }

    /// Convert many independent responses in parallel.
    ///
    /// Results are returned in input order.
    pub fn convert_batch<R, T>(&self, inputs: &[(R, T)]) -> Vec<Result<ConvertResult>>
    where
        R: AsRef<str> + Sync,
        T: AsRef<str> + Sync,
    {
        log::debug!("Converting batch of {} responses", inputs.len());
        inputs
            .par_iter()
            .map(|(raw, title)| self.convert(raw.as_ref(), title.as_ref()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_options_builder() {
        let options = ConvertOptions::new()
            .with_stats(true)
            .with_timestamp(true)
            .with_format(OutputFormat::Html)
            .with_json_format(JsonFormat::Compact);

        assert!(options.collect_stats);
        assert!(options.timestamp);
        assert_eq!(options.output_format, OutputFormat::Html);
        assert_eq!(options.json_format, JsonFormat::Compact);
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("md".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
        assert_eq!(" HTML ".parse::<OutputFormat>().unwrap(), OutputFormat::Html);
        assert_eq!("txt".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!(matches!(
            "docx".parse::<OutputFormat>(),
            Err(Error::InvalidOption(_))
        ));
    }

    #[test]
    fn test_output_format_display_round_trip() {
        for format in [
            OutputFormat::Markdown,
            OutputFormat::Text,
            OutputFormat::Json,
            OutputFormat::Html,
        ] {
            assert_eq!(format.to_string().parse::<OutputFormat>().unwrap(), format);
        }
    }

    #[test]
    fn test_convert_markdown_default() {
        let result = Converter::default().convert("Hello world", "T").unwrap();
        assert_eq!(result.content, "# T\n\nHello world");
        assert_eq!(result.mime_type, "text/markdown");
        assert!(result.stats.is_none());
        assert_eq!(result.metadata.title, "T");
    }

    #[test]
    fn test_convert_with_stats() {
        let converter = Converter::new(ConvertOptions::new().with_stats(true));
        let result = converter
            .convert("**KARTU SOAL**\n\n| A | B |\n|---|---|\n|---|\n", "T")
            .unwrap();

        let stats = result.stats.unwrap();
        assert_eq!(stats.source_lines, 5);
        assert_eq!(stats.section_label_count, 1);
        assert_eq!(stats.blank_count, 1);
        assert_eq!(stats.table_count, 1);
        assert_eq!(stats.separator_lines, 2);
        assert_eq!(stats.dropped_lines, 0);
        assert!(stats.word_count > 0);
    }

    #[test]
    fn test_convert_batch_preserves_order() {
        let converter = Converter::new(ConvertOptions::new().with_format(OutputFormat::Text));
        let inputs = vec![("a", "One"), ("b", "Two"), ("c", "Three")];
        let results = converter.convert_batch(&inputs);

        let contents: Vec<String> = results.into_iter().map(|r| r.unwrap().content).collect();
        assert_eq!(contents, vec!["One\na", "Two\nb", "Three\nc"]);
    }
}
