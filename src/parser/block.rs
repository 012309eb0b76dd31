//! Block types produced by the scanner.

use serde::{Deserialize, Serialize};

/// A maximal run of input lines sharing one classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// Consecutive pipe-prefixed lines with at least one data row
    Table(TableBlock),

    /// One non-empty text line, markers removed
    Paragraph(ParagraphBlock),

    /// One empty line
    Blank,
}

impl Block {
    /// Number of input lines this block consumed.
    pub fn line_count(&self) -> usize {
        match self {
            Block::Table(t) => t.line_count,
            Block::Paragraph(_) | Block::Blank => 1,
        }
    }

    /// Check if this block is a table.
    pub fn is_table(&self) -> bool {
        matches!(self, Block::Table(_))
    }

    /// Check if this block is a paragraph.
    pub fn is_paragraph(&self) -> bool {
        matches!(self, Block::Paragraph(_))
    }

    /// Check if this block is a blank line.
    pub fn is_blank(&self) -> bool {
        matches!(self, Block::Blank)
    }
}

/// Rows of a pipe table, separators removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableBlock {
    /// Data rows in input order; the first row has no header semantics
    pub rows: Vec<Vec<String>>,

    /// Lines consumed, separators included
    pub line_count: usize,

    /// Separator lines that were recognized and discarded
    pub separator_count: usize,
}

impl TableBlock {
    /// Record a separator line.
    pub(crate) fn push_separator(&mut self) {
        self.line_count += 1;
        self.separator_count += 1;
    }

    /// Record a data row.
    pub(crate) fn push_row(&mut self, cells: Vec<String>) {
        self.line_count += 1;
        self.rows.push(cells);
    }

    /// Check if no data rows survived separator removal.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A single cleaned text line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParagraphBlock {
    /// Text with `**` and `###` removed
    pub text: String,

    /// Whether the text contains a section keyword
    pub is_section_label: bool,
}
