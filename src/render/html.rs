//! HTML exam-paper preview rendering.

use crate::error::Result;
use crate::model::{Document, Element, Heading, Paragraph, Table};

use super::RenderOptions;

/// Convert a document to an HTML fragment wrapped in the exam-paper `<div>`.
pub fn to_html(doc: &Document, options: &RenderOptions) -> Result<String> {
    let mut output = String::new();
    output.push_str(&format!(
        "<div class=\"{}\">\n",
        escape_html(&options.html_class)
    ));

    for element in &doc.elements {
        match element {
            Element::Heading(h) => render_heading(&mut output, h),
            Element::Paragraph(p) => render_paragraph(&mut output, p),
            Element::Table(t) => render_table(&mut output, t, options),
        }
    }

    output.push_str("</div>");
    Ok(output)
}

fn render_heading(output: &mut String, heading: &Heading) {
    output.push_str(&format!(
        "<h2 style=\"text-align: {}\">{}</h2>\n",
        heading.alignment.as_css(),
        escape_html(&heading.text)
    ));
}

fn render_paragraph(output: &mut String, para: &Paragraph) {
    if para.is_blank() {
        output.push_str("<br>\n");
    } else if para.bold {
        output.push_str(&format!("<p><strong>{}</strong></p>\n", escape_html(&para.text)));
    } else {
        output.push_str(&format!("<p>{}</p>\n", escape_html(&para.text)));
    }
}

fn render_table(output: &mut String, table: &Table, options: &RenderOptions) {
    let width = table.column_count();
    if width == 0 {
        return;
    }

    output.push_str("<table>\n");
    for row in &table.rows {
        output.push_str("<tr>");
        for cell in options.row_policy.apply(&row.cells, width) {
            output.push_str(&format!("<td>{}</td>", escape_html(cell)));
        }
        output.push_str("</tr>\n");
    }
    output.push_str("</table>\n");
}

/// Escape text for HTML element content and attribute values.
fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a < b & c"), "a &lt; b &amp; c");
        assert_eq!(escape_html("\"x\""), "&quot;x&quot;");
    }

    #[test]
    fn test_render_html() {
        let mut doc = Document::with_title("Lembar Ujian");
        doc.add_paragraph(Paragraph::bold("NASKAH SOAL"));
        doc.add_paragraph(Paragraph::blank());
        doc.add_paragraph(Paragraph::new("1 < 2?"));
        doc.add_table(Table::from_rows(vec![
            vec!["A".to_string(), "B".to_string()],
            vec!["1".to_string()],
        ]));

        let html = to_html(&doc, &RenderOptions::default()).unwrap();
        let expected = "<div class=\"exam-paper\">\n\
                        <h2 style=\"text-align: center\">Lembar Ujian</h2>\n\
                        <p><strong>NASKAH SOAL</strong></p>\n\
                        <br>\n\
                        <p>1 &lt; 2?</p>\n\
                        <table>\n\
                        <tr><td>A</td><td>B</td></tr>\n\
                        <tr><td>1</td><td></td></tr>\n\
                        </table>\n\
                        </div>";
        assert_eq!(html, expected);
    }

    #[test]
    fn test_custom_class() {
        let doc = Document::with_title("T");
        let html = to_html(&doc, &RenderOptions::new().with_html_class("paper")).unwrap();
        assert!(html.starts_with("<div class=\"paper\">"));
    }
}
