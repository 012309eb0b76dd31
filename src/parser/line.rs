//! Line classifiers.
//!
//! Every function here takes a line that has already been trimmed.

use regex::Regex;
use std::sync::OnceLock;

/// Bold emphasis marker removed from text lines.
pub const BOLD_MARKER: &str = "**";

/// Heading marker removed from text lines.
pub const HEADING_MARKER: &str = "###";

/// Classification of a single trimmed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// A pipe-prefixed line made only of pipes, dashes, colons and spaces
    Separator,
    /// A pipe-prefixed data line
    TableRow(&'a str),
    /// An empty line
    Blank,
    /// Anything else
    Text(&'a str),
}

impl<'a> LineKind<'a> {
    /// Classify a trimmed line.
    pub fn classify(line: &'a str) -> Self {
        if is_table_line(line) {
            if is_separator_line(line) {
                LineKind::Separator
            } else {
                LineKind::TableRow(line)
            }
        } else if line.is_empty() {
            LineKind::Blank
        } else {
            LineKind::Text(line)
        }
    }

    /// Check if the line belongs to a table run.
    pub fn is_table(&self) -> bool {
        matches!(self, LineKind::Separator | LineKind::TableRow(_))
    }
}

fn separator_regex() -> &'static Regex {
    static SEPARATOR: OnceLock<Regex> = OnceLock::new();
    SEPARATOR.get_or_init(|| Regex::new(r"^[|\s:-]+$").expect("separator pattern is valid"))
}

/// Check if a trimmed line starts a table row.
pub fn is_table_line(line: &str) -> bool {
    line.starts_with('|')
}

/// Check if a trimmed line is a structural separator such as `|---|:--:|`.
pub fn is_separator_line(line: &str) -> bool {
    separator_regex().is_match(line)
}

/// Split a table line into trimmed, non-empty cells.
///
/// A literal pipe inside a cell is indistinguishable from a column
/// boundary and splits the cell.
pub fn split_cells(line: &str) -> Vec<String> {
    line.split('|')
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .map(String::from)
        .collect()
}

/// Remove bold and heading markers from a text line.
pub fn clean_markers(line: &str) -> String {
    if !line.contains(BOLD_MARKER) && !line.contains(HEADING_MARKER) {
        return line.to_string();
    }
    line.replace(BOLD_MARKER, "")
        .replace(HEADING_MARKER, "")
        .trim()
        .to_string()
}

/// Check if cleaned text contains any section keyword (case-sensitive).
pub fn is_section_label<S: AsRef<str>>(text: &str, keywords: &[S]) -> bool {
    keywords.iter().any(|k| {
        let k: &str = k.as_ref();
        !k.is_empty() && text.contains(k)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::DEFAULT_SECTION_KEYWORDS;

    #[test]
    fn test_separator_lines() {
        assert!(is_separator_line("|---|---|"));
        assert!(is_separator_line("|:--:|"));
        assert!(is_separator_line("| --- | :---: | ---: |"));
        assert!(is_separator_line("| |"));

        assert!(!is_separator_line("| No | Soal |"));
        assert!(!is_separator_line("|---|x|"));
        assert!(!is_separator_line(""));
    }

    #[test]
    fn test_classify() {
        assert_eq!(LineKind::classify("|---|"), LineKind::Separator);
        assert_eq!(LineKind::classify("| A |"), LineKind::TableRow("| A |"));
        assert_eq!(LineKind::classify(""), LineKind::Blank);
        assert_eq!(LineKind::classify("Soal 1"), LineKind::Text("Soal 1"));
        // Dashes without a leading pipe are plain text
        assert_eq!(LineKind::classify("---"), LineKind::Text("---"));
    }

    #[test]
    fn test_split_cells() {
        assert_eq!(split_cells("| No | Soal |"), vec!["No", "Soal"]);
        assert_eq!(split_cells("|1|What is X?"), vec!["1", "What is X?"]);
        // Empty cells are dropped
        assert_eq!(split_cells("| a || b |  |"), vec!["a", "b"]);
        // A cell meant to read "A | B" comes out as two cells
        assert_eq!(split_cells("| 1 | A | B |"), vec!["1", "A", "B"]);
    }

    #[test]
    fn test_clean_markers() {
        assert_eq!(clean_markers("**KISI-KISI SOAL**"), "KISI-KISI SOAL");
        assert_eq!(clean_markers("### Bagian A"), "Bagian A");
        assert_eq!(clean_markers("Soal **penting** ini"), "Soal penting ini");
        assert_eq!(clean_markers("#### Judul"), "# Judul");
        assert_eq!(clean_markers("**  **"), "");
        assert_eq!(clean_markers("### **"), "");
    }

    #[test]
    fn test_clean_markers_idempotent() {
        for line in ["Hello world", "1. Apa itu *fotosintesis*?", "# satu", "a * b"] {
            assert_eq!(clean_markers(line), line);
            assert_eq!(clean_markers(&clean_markers(line)), clean_markers(line));
        }
    }

    #[test]
    fn test_section_label_case_sensitive() {
        assert!(is_section_label("KARTU SOAL", &DEFAULT_SECTION_KEYWORDS));
        assert!(is_section_label("Lampiran: NASKAH SOAL", &DEFAULT_SECTION_KEYWORDS));
        assert!(!is_section_label("kartu soal", &DEFAULT_SECTION_KEYWORDS));
        assert!(!is_section_label("anything", &[""]));
    }
}
