//! Block sequence to structured document.

use chrono::Utc;

use crate::model::{Document, Element, Paragraph, Table};
use crate::parser::{Block, ParseSummary};
use crate::render::ConversionStats;

/// Build a document from blocks, starting with a centered `title` heading.
pub fn build(blocks: impl IntoIterator<Item = Block>, title: &str) -> Document {
    let mut builder = DocumentBuilder::new(title);
    builder.extend(blocks);
    builder.finish()
}

/// Appends one element per block to a document.
///
/// Blocks are never merged, reordered, or deduplicated.
///
/// # Example
///
/// ```
/// use soaldoc::builder::DocumentBuilder;
/// use soaldoc::parser::parse;
///
/// let mut builder = DocumentBuilder::new("SMA Negeri 1");
/// builder.extend(parse("**KARTU SOAL**\n| No | Soal |"));
/// let doc = builder.finish();
/// assert_eq!(doc.element_count(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct DocumentBuilder {
    document: Document,
    stats: ConversionStats,
}

impl DocumentBuilder {
    /// Start a document with a centered title heading.
    pub fn new(title: impl Into<String>) -> Self {
        let mut stats = ConversionStats::new();
        stats.add_heading();
        Self {
            document: Document::with_title(title),
            stats,
        }
    }

    /// Stamp the document with the current time.
    pub fn with_timestamp(mut self) -> Self {
        self.document.metadata.created = Some(Utc::now());
        self
    }

    /// Record what the scanner consumed.
    pub fn with_summary(mut self, summary: &ParseSummary) -> Self {
        self.document.metadata.source_lines = summary.lines;
        self.stats.source_lines = summary.lines;
        self.stats.separator_lines = summary.separator_lines;
        self.stats.dropped_lines = summary.dropped_lines;
        self
    }

    /// Append the element for one block.
    pub fn push(&mut self, block: Block) {
        let element = match block {
            Block::Table(table) => {
                let table = Table::from_rows(table.rows);
                self.stats.add_table(&table);
                Element::Table(table)
            }
            Block::Paragraph(p) => {
                if p.is_section_label {
                    self.stats.add_section_label();
                } else {
                    self.stats.add_paragraph();
                }
                Element::Paragraph(Paragraph {
                    text: p.text,
                    bold: p.is_section_label,
                })
            }
            Block::Blank => {
                self.stats.add_blank();
                Element::Paragraph(Paragraph::blank())
            }
        };
        self.document.push(element);
    }

    /// Append the elements for a sequence of blocks.
    pub fn extend(&mut self, blocks: impl IntoIterator<Item = Block>) {
        for block in blocks {
            self.push(block);
        }
    }

    /// The document built so far.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Finish and return the document.
    pub fn finish(self) -> Document {
        self.document
    }

    /// Finish and return the document with its statistics.
    pub fn finish_with_stats(self) -> (Document, ConversionStats) {
        log::debug!(
            "Built document with {} elements ({} tables, {} section labels)",
            self.document.element_count(),
            self.stats.table_count,
            self.stats.section_label_count
        );
        (self.document, self.stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Alignment;
    use crate::parser::{ParagraphBlock, TableBlock};

    fn paragraph(text: &str, label: bool) -> Block {
        Block::Paragraph(ParagraphBlock {
            text: text.to_string(),
            is_section_label: label,
        })
    }

    #[test]
    fn test_title_only() {
        let doc = build(Vec::new(), "Judul");
        assert_eq!(doc.element_count(), 1);
        match &doc.elements[0] {
            Element::Heading(h) => {
                assert_eq!(h.text, "Judul");
                assert_eq!(h.alignment, Alignment::Center);
            }
            other => panic!("expected heading, got {:?}", other),
        }
    }

    #[test]
    fn test_block_mapping() {
        let table = TableBlock {
            rows: vec![vec!["A".to_string(), "B".to_string()]],
            line_count: 2,
            separator_count: 1,
        };
        let doc = build(
            vec![
                paragraph("KISI-KISI SOAL", true),
                Block::Blank,
                Block::Table(table),
                paragraph("Soal 1", false),
            ],
            "T",
        );

        assert_eq!(
            doc.body(),
            &[
                Element::Paragraph(Paragraph::bold("KISI-KISI SOAL")),
                Element::Paragraph(Paragraph::blank()),
                Element::Table(Table::from_rows(vec![vec![
                    "A".to_string(),
                    "B".to_string()
                ]])),
                Element::Paragraph(Paragraph::new("Soal 1")),
            ]
        );
    }

    #[test]
    fn test_ragged_rows_kept_verbatim() {
        let table = TableBlock {
            rows: vec![
                vec!["A".to_string()],
                vec!["1".to_string(), "2".to_string(), "3".to_string()],
            ],
            line_count: 2,
            separator_count: 0,
        };
        let doc = build(vec![Block::Table(table)], "T");
        let built = doc.tables().next().unwrap();
        assert_eq!(built.rows[1].cells, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_duplicate_blocks_not_merged() {
        let doc = build(vec![Block::Blank, Block::Blank, paragraph("x", false)], "T");
        assert_eq!(doc.body().len(), 3);
    }

    #[test]
    fn test_stats() {
        let mut builder = DocumentBuilder::new("T");
        builder.extend(vec![
            paragraph("NASKAH SOAL", true),
            paragraph("Soal", false),
            Block::Blank,
        ]);
        let (doc, stats) = builder.finish_with_stats();

        assert_eq!(doc.element_count(), 4);
        assert_eq!(stats.heading_count, 1);
        assert_eq!(stats.section_label_count, 1);
        assert_eq!(stats.paragraph_count, 1);
        assert_eq!(stats.blank_count, 1);
        assert!(doc.metadata.created.is_none());
    }

    #[test]
    fn test_timestamp_and_summary() {
        let summary = ParseSummary {
            lines: 7,
            separator_lines: 2,
            dropped_lines: 1,
            ..Default::default()
        };
        let (doc, stats) = DocumentBuilder::new("T")
            .with_timestamp()
            .with_summary(&summary)
            .finish_with_stats();

        assert!(doc.metadata.created.is_some());
        assert_eq!(doc.metadata.source_lines, 7);
        assert_eq!(stats.separator_lines, 2);
        assert_eq!(stats.dropped_lines, 1);
    }
}
