//! Forward-only block scanner.

use std::borrow::Cow;
use std::iter::Peekable;
use std::str::Lines;

use serde::{Deserialize, Serialize};

use super::line::{clean_markers, is_section_label, is_table_line, split_cells, LineKind};
use super::{Block, ParagraphBlock, ParseOptions, TableBlock};

/// Scans a generated Markdown response into typed blocks.
///
/// The scanner is total: every string, including the empty string,
/// yields a (possibly empty) block sequence.
#[derive(Debug, Clone, Default)]
pub struct MarkdownBlockParser {
    options: ParseOptions,
}

impl MarkdownBlockParser {
    /// Create a parser with the given options.
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Get the parser options.
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parse a response into blocks.
    pub fn parse(&self, raw: &str) -> Vec<Block> {
        self.parse_with_summary(raw).0
    }

    /// Parse a response into blocks and report what was consumed.
    pub fn parse_with_summary(&self, raw: &str) -> (Vec<Block>, ParseSummary) {
        let mut blocks = self.blocks(raw);
        let collected: Vec<Block> = blocks.by_ref().collect();
        let summary = blocks.into_summary();

        log::debug!(
            "Parsed {} lines into {} blocks ({} tables, {} separator lines, {} lines dropped)",
            summary.lines,
            summary.blocks,
            summary.tables,
            summary.separator_lines,
            summary.dropped_lines
        );

        (collected, summary)
    }

    /// Lazily scan a response.
    ///
    /// Yields exactly the blocks [`parse`](Self::parse) returns.
    pub fn blocks<'a>(&'a self, raw: &'a str) -> Blocks<'a> {
        Blocks::new(raw, Cow::Borrowed(&self.options))
    }
}

/// Lazy iterator over the blocks of a response.
///
/// Lines are pulled one at a time and prepared (normalized) individually;
/// a pipe-prefixed line switches the scanner into table mode until the
/// first line that is not pipe-prefixed.
pub struct Blocks<'a> {
    lines: Peekable<Lines<'a>>,
    options: Cow<'a, ParseOptions>,
    summary: ParseSummary,
}

impl<'a> Blocks<'a> {
    /// Create a block iterator over `text`.
    pub fn new(text: &'a str, options: Cow<'a, ParseOptions>) -> Self {
        let mut summary = ParseSummary::default();

        // Whitespace-only input carries no content at all.
        let lines = if text.trim().is_empty() {
            summary.lines = text.lines().count();
            summary.dropped_lines = summary.lines;
            "".lines().peekable()
        } else {
            text.lines().peekable()
        };

        Self {
            lines,
            options,
            summary,
        }
    }

    /// Statistics for the lines consumed so far.
    pub fn summary(&self) -> &ParseSummary {
        &self.summary
    }

    /// Consume the iterator and return its statistics.
    pub fn into_summary(self) -> ParseSummary {
        self.summary
    }

    fn paragraph(&self, line: &str) -> ParagraphBlock {
        let text = clean_markers(line);
        let is_section_label = is_section_label(&text, &self.options.section_keywords);
        ParagraphBlock {
            text,
            is_section_label,
        }
    }

    fn table_run(&mut self, first: LineKind<'_>) -> Option<TableBlock> {
        let mut table = TableBlock::default();
        absorb(&mut table, first);

        while let Some(raw) = self.lines.next_if(|l| is_table_line(l.trim())) {
            self.summary.lines += 1;
            let line = self.options.prepare(raw);
            absorb(&mut table, LineKind::classify(line.trim()));
        }

        self.summary.separator_lines += table.separator_count;
        if table.is_empty() {
            log::debug!(
                "Dropping separator-only table run of {} lines",
                table.line_count
            );
            self.summary.dropped_lines += table.line_count;
            return None;
        }
        Some(table)
    }
}

impl Iterator for Blocks<'_> {
    type Item = Block;

    fn next(&mut self) -> Option<Block> {
        loop {
            let raw = self.lines.next()?;
            self.summary.lines += 1;
            log::trace!("line {}: {:?}", self.summary.lines, raw);

            let line = self.options.prepare(raw);

            let block = match LineKind::classify(line.trim()) {
                LineKind::Blank => Block::Blank,
                LineKind::Text(text) => Block::Paragraph(self.paragraph(text)),
                table_line => match self.table_run(table_line) {
                    Some(table) => Block::Table(table),
                    None => continue,
                },
            };

            self.summary.record(&block);
            return Some(block);
        }
    }
}

fn absorb(table: &mut TableBlock, kind: LineKind<'_>) {
    match kind {
        LineKind::Separator => table.push_separator(),
        LineKind::TableRow(line) => table.push_row(split_cells(line)),
        LineKind::Blank | LineKind::Text(_) => {}
    }
}

/// Counts gathered while scanning a response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseSummary {
    /// Input lines consumed
    pub lines: usize,

    /// Blocks emitted
    pub blocks: usize,

    /// Table blocks emitted
    pub tables: usize,

    /// Paragraph blocks emitted
    pub paragraphs: usize,

    /// Paragraph blocks flagged as section labels
    pub section_labels: usize,

    /// Blank blocks emitted
    pub blanks: usize,

    /// Separator lines discarded (inside emitted and dropped tables)
    pub separator_lines: usize,

    /// Lines consumed without producing a block
    pub dropped_lines: usize,
}

impl ParseSummary {
    fn record(&mut self, block: &Block) {
        self.blocks += 1;
        match block {
            Block::Table(_) => self.tables += 1,
            Block::Paragraph(p) => {
                self.paragraphs += 1;
                if p.is_section_label {
                    self.section_labels += 1;
                }
            }
            Block::Blank => self.blanks += 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> Vec<Block> {
        MarkdownBlockParser::default().parse(raw)
    }

    #[test]
    fn test_single_paragraph() {
        let blocks = parse("Hello world");
        assert_eq!(
            blocks,
            vec![Block::Paragraph(ParagraphBlock {
                text: "Hello world".to_string(),
                is_section_label: false,
            })]
        );
    }

    #[test]
    fn test_table_with_separator() {
        let blocks = parse("| No | Soal |\n|---|---|\n| 1 | What is X? |");
        assert_eq!(blocks.len(), 1);
        match &blocks[0] {
            Block::Table(t) => {
                assert_eq!(t.rows, vec![vec!["No", "Soal"], vec!["1", "What is X?"]]);
                assert_eq!(t.line_count, 3);
                assert_eq!(t.separator_count, 1);
            }
            other => panic!("expected table, got {:?}", other),
        }
    }

    #[test]
    fn test_label_blank_table() {
        let blocks = parse("**KISI-KISI SOAL**\n\n| A | B |\n");
        assert_eq!(blocks.len(), 3);
        assert_eq!(
            blocks[0],
            Block::Paragraph(ParagraphBlock {
                text: "KISI-KISI SOAL".to_string(),
                is_section_label: true,
            })
        );
        assert_eq!(blocks[1], Block::Blank);
        assert!(blocks[2].is_table());
    }

    #[test]
    fn test_separator_only_run_is_dropped() {
        let (blocks, summary) =
            MarkdownBlockParser::default().parse_with_summary("|---|\n|:--:|\n");
        assert!(blocks.is_empty());
        assert_eq!(summary.lines, 2);
        assert_eq!(summary.separator_lines, 2);
        assert_eq!(summary.dropped_lines, 2);
    }

    #[test]
    fn test_table_ends_at_first_non_pipe_line() {
        let blocks = parse("| a |\nText\n| b |");
        assert_eq!(blocks.len(), 3);
        assert!(blocks[0].is_table());
        assert!(blocks[1].is_paragraph());
        assert!(blocks[2].is_table());
    }

    #[test]
    fn test_indented_table_lines() {
        let blocks = parse("   | a | b |\n\t|---|---|\n  | 1 | 2 |  ");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].line_count(), 3);
    }

    #[test]
    fn test_blank_line_inside_table_splits_it() {
        let blocks = parse("| a |\n\n| b |");
        assert_eq!(blocks.len(), 3);
        assert!(blocks[1].is_blank());
    }

    #[test]
    fn test_empty_and_whitespace_input() {
        assert!(parse("").is_empty());

        let (blocks, summary) = MarkdownBlockParser::default().parse_with_summary("  \n\t\n ");
        assert!(blocks.is_empty());
        assert_eq!(summary.lines, 3);
        assert_eq!(summary.dropped_lines, 3);
    }

    #[test]
    fn test_crlf_lines() {
        let blocks = parse("Soal\r\n\r\n| a |\r\n|---|\r\n");
        assert_eq!(blocks.len(), 3);
        assert!(blocks[1].is_blank());
        match &blocks[2] {
            Block::Table(t) => assert_eq!(t.rows, vec![vec!["a"]]),
            other => panic!("expected table, got {:?}", other),
        }
    }

    #[test]
    fn test_custom_keywords() {
        let parser =
            MarkdownBlockParser::new(ParseOptions::new().with_section_keywords(["RUBRIK"]));
        let blocks = parser.parse("RUBRIK PENILAIAN\nKARTU SOAL");
        match (&blocks[0], &blocks[1]) {
            (Block::Paragraph(a), Block::Paragraph(b)) => {
                assert!(a.is_section_label);
                assert!(!b.is_section_label);
            }
            other => panic!("unexpected blocks {:?}", other),
        }
    }

    #[test]
    fn test_lazy_blocks_summary() {
        let parser = MarkdownBlockParser::default();
        let mut blocks = parser.blocks("A\n\n| x |\n|---|");
        assert!(blocks.next().unwrap().is_paragraph());
        assert_eq!(blocks.summary().lines, 1);

        let rest: Vec<Block> = blocks.by_ref().collect();
        assert_eq!(rest.len(), 2);

        let summary = blocks.into_summary();
        assert_eq!(summary.lines, 4);
        assert_eq!(summary.blocks, 3);
        assert_eq!(summary.paragraphs, 1);
        assert_eq!(summary.blanks, 1);
        assert_eq!(summary.tables, 1);
    }

    #[test]
    fn test_marker_only_line_is_empty_paragraph() {
        let (blocks, summary) =
            MarkdownBlockParser::default().parse_with_summary("**  **\n### **KARTU SOAL**");
        assert_eq!(
            blocks,
            vec![
                Block::Paragraph(ParagraphBlock {
                    text: String::new(),
                    is_section_label: false,
                }),
                Block::Paragraph(ParagraphBlock {
                    text: "KARTU SOAL".to_string(),
                    is_section_label: true,
                }),
            ]
        );
        assert_eq!(summary.blanks, 0);
        assert_eq!(summary.dropped_lines, 0);
    }

    #[test]
    fn test_lazy_blocks_match_parse() {
        let parser = MarkdownBlockParser::default();
        for raw in [
            "Soal e\u{301}",
            "**KARTU SOAL**\n| Cafe\u{301} | A\u{30a} |\n|---|",
            "NASKAH\u{301}\n\n| x |",
        ] {
            let lazy: Vec<Block> = parser.blocks(raw).collect();
            assert_eq!(parser.parse(raw), lazy, "input {:?}", raw);
        }

        let blocks: Vec<Block> = parser.blocks("Soal e\u{301}").collect();
        match &blocks[0] {
            Block::Paragraph(p) => assert_eq!(p.text, "Soal \u{e9}"),
            other => panic!("expected paragraph, got {:?}", other),
        }
    }
}
