//! Markdown rendering for structured documents.

use crate::error::Result;
use crate::model::{Document, Element, Heading, Paragraph, Table};

use super::{ConversionStats, RenderOptions, RenderResult};

/// Convert a document to Markdown.
pub fn to_markdown(doc: &Document, options: &RenderOptions) -> Result<String> {
    let renderer = MarkdownRenderer::new(options.clone());
    renderer.render(doc)
}

/// Convert a document to Markdown with statistics.
pub fn to_markdown_with_stats(doc: &Document, options: &RenderOptions) -> Result<RenderResult> {
    let renderer = MarkdownRenderer::new(options.clone());
    renderer.render_with_stats(doc)
}

/// Markdown renderer.
pub struct MarkdownRenderer {
    options: RenderOptions,
    stats: ConversionStats,
}

impl MarkdownRenderer {
    /// Create a new Markdown renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            stats: ConversionStats::new(),
        }
    }

    /// Render a document to Markdown.
    pub fn render(mut self, doc: &Document) -> Result<String> {
        self.render_internal(doc)
    }

    /// Render a document to Markdown with statistics.
    pub fn render_with_stats(mut self, doc: &Document) -> Result<RenderResult> {
        let content = self.render_internal(doc)?;
        self.stats.source_lines = doc.metadata.source_lines;
        self.stats.count_text(&content);
        Ok(RenderResult::new(content, doc.metadata.clone(), self.stats))
    }

    fn render_internal(&mut self, doc: &Document) -> Result<String> {
        let mut output = String::new();

        if self.options.include_frontmatter {
            output.push_str(&doc.metadata.to_yaml_frontmatter());
        }

        for element in &doc.elements {
            match element {
                Element::Heading(h) => self.render_heading(&mut output, h),
                Element::Paragraph(p) => self.render_paragraph(&mut output, p),
                Element::Table(t) => self.render_table(&mut output, t),
            }
        }

        Ok(output.trim_end().to_string())
    }

    fn render_heading(&mut self, output: &mut String, heading: &Heading) {
        self.stats.add_heading();
        output.push_str(&"#".repeat(self.options.title_level as usize));
        output.push(' ');
        output.push_str(&self.escape(&heading.text));
        output.push_str("\n\n");
    }

    fn render_paragraph(&mut self, output: &mut String, para: &Paragraph) {
        // Markdown collapses spacing paragraphs anyway.
        if para.is_blank() {
            self.stats.add_blank();
            return;
        }

        let text = self.escape(&para.text);
        if para.bold {
            self.stats.add_section_label();
            output.push_str(&format!("**{}**", text));
        } else {
            self.stats.add_paragraph();
            if self.options.escape_special_chars {
                output.push_str(&escape_block_start(&text));
            } else {
                output.push_str(&text);
            }
        }
        output.push_str("\n\n");
    }

    fn render_table(&mut self, output: &mut String, table: &Table) {
        let width = table.column_count();
        if width == 0 {
            return;
        }
        self.stats.add_table(table);

        for (i, row) in table.rows.iter().enumerate() {
            output.push('|');
            for cell in self.options.row_policy.apply(&row.cells, width) {
                output.push_str(&format!(" {} |", escape_cell(&self.escape(cell))));
            }
            output.push('\n');

            if i == 0 {
                output.push('|');
                output.push_str(&" --- |".repeat(width));
                output.push('\n');
            }
        }

        output.push('\n');
    }

    fn escape(&self, text: &str) -> String {
        if self.options.escape_special_chars {
            escape_markdown(text)
        } else {
            text.to_string()
        }
    }
}

/// Escape special Markdown characters.
/// Only escape characters that could be misinterpreted as Markdown syntax.
fn escape_markdown(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' | '`' | '*' | '_' | '[' | ']' | '|' => {
                result.push('\\');
                result.push(c);
            }
            _ => result.push(c),
        }
    }
    result
}

/// Keep a plain paragraph from opening a heading, quote, or list.
///
/// Leading `#`, `>`, `-`, `+` are escaped, as is the `.` or `)` after a
/// leading number. `*` is already escaped by [`escape_markdown`].
fn escape_block_start(text: &str) -> String {
    if text.starts_with(|c: char| matches!(c, '#' | '>' | '-' | '+')) {
        return format!("\\{}", text);
    }

    let digits = text.bytes().take_while(u8::is_ascii_digit).count();
    let rest = &text[digits..];
    if digits > 0 && rest.starts_with(|c: char| c == '.' || c == ')') {
        return format!("{}\\{}", &text[..digits], rest);
    }

    text.to_string()
}

/// Cell text must never open a new column, escaped or not.
fn escape_cell(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut escaped = false;
    for c in text.chars() {
        if c == '|' && !escaped {
            result.push('\\');
        }
        escaped = c == '\\' && !escaped;
        result.push(c);
    }
    // A lone trailing backslash would escape the closing delimiter.
    if escaped {
        result.push('\\');
    }
    result
}
