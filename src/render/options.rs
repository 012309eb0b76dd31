//! Rendering options and configuration.

/// Options for rendering a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Include YAML frontmatter with metadata (Markdown only)
    pub include_frontmatter: bool,

    /// Escape special Markdown characters in paragraph and cell text
    pub escape_special_chars: bool,

    /// How rows that differ in width from the first row are rendered
    pub row_policy: RowPolicy,

    /// Markdown heading level used for the title (1-6)
    pub title_level: u8,

    /// CSS class of the HTML wrapper element
    pub html_class: String,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable frontmatter.
    pub fn with_frontmatter(mut self, include: bool) -> Self {
        self.include_frontmatter = include;
        self
    }

    /// Enable or disable Markdown escaping.
    pub fn with_escaping(mut self, escape: bool) -> Self {
        self.escape_special_chars = escape;
        self
    }

    /// Set the row policy.
    pub fn with_row_policy(mut self, policy: RowPolicy) -> Self {
        self.row_policy = policy;
        self
    }

    /// Set the Markdown title level.
    pub fn with_title_level(mut self, level: u8) -> Self {
        self.title_level = level.clamp(1, 6);
        self
    }

    /// Set the CSS class of the HTML wrapper.
    pub fn with_html_class(mut self, class: impl Into<String>) -> Self {
        self.html_class = class.into();
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            include_frontmatter: false,
            escape_special_chars: true,
            row_policy: RowPolicy::ClipAndPad,
            title_level: 1,
            html_class: "exam-paper".to_string(),
        }
    }
}

/// Width handling for table rows in grid outputs.
///
/// The first row of a table fixes its column count. Cells beyond it are
/// always dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowPolicy {
    /// Drop excess cells and leave short rows short
    Clip,
    /// Drop excess cells and pad short rows with empty cells
    #[default]
    ClipAndPad,
}

impl RowPolicy {
    /// Lay out `cells` against a table of `width` columns.
    pub fn apply<'a>(&self, cells: &'a [String], width: usize) -> Vec<&'a str> {
        if cells.len() > width {
            log::debug!(
                "Clipping table row from {} to {} cells",
                cells.len(),
                width
            );
        }
        let mut out: Vec<&str> = cells.iter().take(width).map(String::as_str).collect();
        if *self == RowPolicy::ClipAndPad {
            out.resize(width, "");
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_render_options_builder() {
        let options = RenderOptions::new()
            .with_frontmatter(true)
            .with_escaping(false)
            .with_row_policy(RowPolicy::Clip)
            .with_title_level(9)
            .with_html_class("paper");

        assert!(options.include_frontmatter);
        assert!(!options.escape_special_chars);
        assert_eq!(options.row_policy, RowPolicy::Clip);
        assert_eq!(options.title_level, 6);
        assert_eq!(options.html_class, "paper");
    }

    #[test]
    fn test_row_policy_clip() {
        let row = cells(&["a", "b", "c"]);
        assert_eq!(RowPolicy::Clip.apply(&row, 2), vec!["a", "b"]);
        assert_eq!(RowPolicy::Clip.apply(&row[..1], 2), vec!["a"]);
    }

    #[test]
    fn test_row_policy_pad() {
        let row = cells(&["a"]);
        assert_eq!(RowPolicy::ClipAndPad.apply(&row, 3), vec!["a", "", ""]);
        assert_eq!(RowPolicy::ClipAndPad.apply(&cells(&["a", "b"]), 1), vec!["a"]);
    }
}
