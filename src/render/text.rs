//! Plain text rendering for structured documents.

use crate::error::Result;
use crate::model::{Document, Element};

use super::RenderOptions;

/// Convert a document to plain text.
///
/// One line per heading or paragraph (spacing paragraphs become empty
/// lines) and one tab-separated line per table row.
pub fn to_text(doc: &Document, options: &RenderOptions) -> Result<String> {
    let mut lines: Vec<String> = Vec::with_capacity(doc.element_count());

    for element in &doc.elements {
        match element {
            Element::Heading(h) => lines.push(h.text.clone()),
            Element::Paragraph(p) => lines.push(p.text.clone()),
            Element::Table(t) => {
                let width = t.column_count();
                lines.extend(
                    t.rows
                        .iter()
                        .map(|row| options.row_policy.apply(&row.cells, width).join("\t")),
                );
            }
        }
    }

    Ok(lines.join("\n").trim().to_string())
}
