//! Markdown block parsing.
//!
//! A generated response is read line by line. Pipe-prefixed runs become
//! [`Block::Table`], empty lines become [`Block::Blank`], and everything else
//! becomes a [`Block::Paragraph`] with emphasis markers removed.

mod block;
mod line;
mod options;
mod scanner;

pub use block::{Block, ParagraphBlock, TableBlock};
pub use line::{
    clean_markers, is_section_label, is_separator_line, is_table_line, split_cells, LineKind,
    BOLD_MARKER, HEADING_MARKER,
};
pub use options::{ParseOptions, DEFAULT_SECTION_KEYWORDS};
pub use scanner::{Blocks, MarkdownBlockParser, ParseSummary};

/// Parse a response into blocks with default options.
pub fn parse(raw: &str) -> Vec<Block> {
    MarkdownBlockParser::default().parse(raw)
}

/// Parse a response into blocks with custom options.
pub fn parse_with_options(raw: &str, options: &ParseOptions) -> Vec<Block> {
    MarkdownBlockParser::new(options.clone()).parse(raw)
}
