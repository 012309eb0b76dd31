//! Rendering module for converting documents to text output formats.
//!
//! These are the crate's own sinks. Binary DOCX/PDF writers can consume
//! [`Document`](crate::model::Document) directly; every sink here clips
//! table rows to the width of the first row.

mod html;
mod json;
mod markdown;
mod options;
mod result;
mod text;

pub use html::to_html;
pub use json::{to_json, JsonFormat};
pub use markdown::{to_markdown, to_markdown_with_stats, MarkdownRenderer};
pub use options::{RenderOptions, RowPolicy};
pub use result::{ConversionStats, RenderResult};
pub use text::to_text;
