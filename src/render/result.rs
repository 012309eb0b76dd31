//! Rendering result with metadata and statistics.

use crate::model::{Metadata, Table};
use serde::{Deserialize, Serialize};

/// Result of rendering a document, including content and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered content (Markdown, text, etc.)
    pub content: String,

    /// Document metadata (copied from source document)
    pub metadata: Metadata,

    /// Conversion statistics
    pub stats: ConversionStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(content: String, metadata: Metadata, stats: ConversionStats) -> Self {
        Self {
            content,
            metadata,
            stats,
        }
    }

    /// Create a simple result with just content.
    pub fn content_only(content: String) -> Self {
        Self {
            content,
            metadata: Metadata::default(),
            stats: ConversionStats::default(),
        }
    }

    /// Get the content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }
}

/// Statistics collected while converting a response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionStats {
    /// Lines in the source response
    pub source_lines: usize,

    /// Heading elements (the title)
    pub heading_count: usize,

    /// Plain text paragraphs
    pub paragraph_count: usize,

    /// Bold section-label paragraphs
    pub section_label_count: usize,

    /// Empty spacing paragraphs
    pub blank_count: usize,

    /// Tables
    pub table_count: usize,

    /// Rows across all tables
    pub table_row_count: usize,

    /// Tables whose rows differ in width
    pub ragged_table_count: usize,

    /// Separator lines discarded
    pub separator_lines: usize,

    /// Lines consumed without producing an element
    pub dropped_lines: usize,

    /// Approximate word count of the rendered output
    pub word_count: usize,

    /// Non-whitespace character count of the rendered output
    pub char_count: usize,
}

impl ConversionStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment heading count.
    pub fn add_heading(&mut self) {
        self.heading_count += 1;
    }

    /// Increment paragraph count.
    pub fn add_paragraph(&mut self) {
        self.paragraph_count += 1;
    }

    /// Increment section label count.
    pub fn add_section_label(&mut self) {
        self.section_label_count += 1;
    }

    /// Increment blank paragraph count.
    pub fn add_blank(&mut self) {
        self.blank_count += 1;
    }

    /// Record a table.
    pub fn add_table(&mut self, table: &Table) {
        self.table_count += 1;
        self.table_row_count += table.row_count();
        if table.is_ragged() {
            self.ragged_table_count += 1;
        }
    }

    /// Total number of elements, the title included.
    pub fn element_count(&self) -> usize {
        self.heading_count
            + self.paragraph_count
            + self.section_label_count
            + self.blank_count
            + self.table_count
    }

    /// Add word and character counts from text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count();
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count();
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &ConversionStats) {
        self.source_lines += other.source_lines;
        self.heading_count += other.heading_count;
        self.paragraph_count += other.paragraph_count;
        self.section_label_count += other.section_label_count;
        self.blank_count += other.blank_count;
        self.table_count += other.table_count;
        self.table_row_count += other.table_row_count;
        self.ragged_table_count += other.ragged_table_count;
        self.separator_lines += other.separator_lines;
        self.dropped_lines += other.dropped_lines;
        self.word_count += other.word_count;
        self.char_count += other.char_count;
    }
}
