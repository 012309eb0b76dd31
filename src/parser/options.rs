//! Parsing options and configuration.

use std::borrow::Cow;
use unicode_normalization::{is_nfc, UnicodeNormalization};

/// Keywords that mark a paragraph as a section label.
pub const DEFAULT_SECTION_KEYWORDS: [&str; 3] = ["KISI-KISI", "KARTU SOAL", "NASKAH"];

/// Options for scanning a generated response into blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Case-sensitive substrings that flag a paragraph as a section label
    pub section_keywords: Vec<String>,

    /// Normalize the response to Unicode NFC before scanning
    pub normalize_unicode: bool,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the section keyword list.
    pub fn with_section_keywords<S: Into<String>>(
        mut self,
        keywords: impl IntoIterator<Item = S>,
    ) -> Self {
        self.section_keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Add one section keyword to the current list.
    pub fn add_section_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.section_keywords.push(keyword.into());
        self
    }

    /// Enable or disable NFC normalization.
    pub fn with_unicode_normalization(mut self, normalize: bool) -> Self {
        self.normalize_unicode = normalize;
        self
    }

    /// Apply input preparation (normalization) to one raw line.
    ///
    /// Borrows the input when it is already in the requested form.
    pub fn prepare<'a>(&self, raw: &'a str) -> Cow<'a, str> {
        if self.normalize_unicode && !is_nfc(raw) {
            Cow::Owned(raw.nfc().collect())
        } else {
            Cow::Borrowed(raw)
        }
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            section_keywords: DEFAULT_SECTION_KEYWORDS
                .iter()
                .map(|k| k.to_string())
                .collect(),
            normalize_unicode: true,
        }
    }
}
