//! Document-level types.

use super::{Heading, Paragraph, Table};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A structured exam-paper document.
///
/// The first element of a built document is always the title [`Heading`];
/// every later element comes from exactly one parsed block, in input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Document metadata (title, creation time, source size)
    pub metadata: Metadata,

    /// Top-level elements in reading order
    pub elements: Vec<Element>,
}

impl Document {
    /// Create a new empty document with no elements.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document that starts with a centered title heading.
    pub fn with_title(title: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            metadata: Metadata::with_title(title.clone()),
            elements: vec![Element::Heading(Heading::centered(title))],
        }
    }

    /// Append an element.
    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// Append a paragraph.
    pub fn add_paragraph(&mut self, paragraph: Paragraph) {
        self.elements.push(Element::Paragraph(paragraph));
    }

    /// Append a table.
    pub fn add_table(&mut self, table: Table) {
        self.elements.push(Element::Table(table));
    }

    /// Get the number of elements, including the title heading.
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Get the title heading, if the document has one.
    pub fn heading(&self) -> Option<&Heading> {
        self.elements.iter().find_map(|e| match e {
            Element::Heading(h) => Some(h),
            _ => None,
        })
    }

    /// Elements after the leading title heading.
    pub fn body(&self) -> &[Element] {
        match self.elements.first() {
            Some(Element::Heading(_)) => &self.elements[1..],
            _ => &self.elements,
        }
    }

    /// Iterate over all paragraphs.
    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.elements.iter().filter_map(|e| match e {
            Element::Paragraph(p) => Some(p),
            _ => None,
        })
    }

    /// Iterate over all tables.
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.elements.iter().filter_map(|e| match e {
            Element::Table(t) => Some(t),
            _ => None,
        })
    }

    /// Check if the document has nothing besides its title.
    pub fn is_empty(&self) -> bool {
        self.body().is_empty()
    }

    /// Get plain text content of the entire document.
    pub fn plain_text(&self) -> String {
        self.elements
            .iter()
            .map(Element::plain_text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A top-level document element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Element {
    /// The document title
    Heading(Heading),

    /// A paragraph of body text (possibly empty, possibly bold)
    Paragraph(Paragraph),

    /// A grid of text cells
    Table(Table),
}

impl Element {
    /// Check if this element is a heading.
    pub fn is_heading(&self) -> bool {
        matches!(self, Element::Heading(_))
    }

    /// Check if this element is a paragraph.
    pub fn is_paragraph(&self) -> bool {
        matches!(self, Element::Paragraph(_))
    }

    /// Check if this element is a table.
    pub fn is_table(&self) -> bool {
        matches!(self, Element::Table(_))
    }

    /// Get plain text representation.
    pub fn plain_text(&self) -> String {
        match self {
            Element::Heading(h) => h.text.clone(),
            Element::Paragraph(p) => p.text.clone(),
            Element::Table(t) => t.plain_text(),
        }
    }
}

/// Document metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Document title (institution or subject name)
    pub title: String,

    /// Time the document was built
    pub created: Option<DateTime<Utc>>,

    /// Number of lines in the source response
    pub source_lines: usize,
}

impl Metadata {
    /// Create metadata with a title.
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Convert metadata to YAML frontmatter format.
    pub fn to_yaml_frontmatter(&self) -> String {
        let mut lines = vec!["---".to_string()];

        lines.push(format!("title: \"{}\"", escape_yaml(&self.title)));
        if let Some(ref created) = self.created {
            lines.push(format!("created: {}", created.to_rfc3339()));
        }
        lines.push(format!("source_lines: {}", self.source_lines));

        lines.push("---".to_string());
        lines.push(String::new());

        lines.join("\n")
    }
}

/// Escape special characters for YAML strings.
fn escape_yaml(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
