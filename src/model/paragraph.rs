//! Heading and paragraph types.

use serde::{Deserialize, Serialize};

/// The document title heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    /// Heading text
    pub text: String,

    /// Horizontal alignment
    pub alignment: Alignment,
}

impl Heading {
    /// Create a left-aligned heading.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            alignment: Alignment::Left,
        }
    }

    /// Create a centered heading.
    pub fn centered(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            alignment: Alignment::Center,
        }
    }
}

/// A paragraph of body text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Paragraph text, free of Markdown emphasis markers
    pub text: String,

    /// Whether the whole paragraph is rendered bold (section labels)
    pub bold: bool,
}

impl Paragraph {
    /// Create a plain paragraph.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
        }
    }

    /// Create a bold paragraph.
    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
        }
    }

    /// Create an empty spacing paragraph.
    pub fn blank() -> Self {
        Self::default()
    }

    /// Check if the paragraph carries no text.
    pub fn is_blank(&self) -> bool {
        self.text.is_empty()
    }
}

/// Text alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left alignment (default)
    #[default]
    Left,
    /// Center alignment
    Center,
    /// Right alignment
    Right,
}

impl Alignment {
    /// CSS `text-align` value.
    pub fn as_css(&self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        }
    }
}
