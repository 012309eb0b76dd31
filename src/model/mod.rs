//! Document model types for the structured exam-paper document.
//!
//! This module defines the renderer-agnostic tree produced by the
//! [`DocumentBuilder`](crate::builder::DocumentBuilder) and consumed by the
//! sinks in [`render`](crate::render).

mod document;
mod paragraph;
mod table;

pub use document::{Document, Element, Metadata};
pub use paragraph::{Alignment, Heading, Paragraph};
pub use table::{Table, TableRow};
