//! Error types for soaldoc library.
//!
//! Parsing and building never fail; errors only come from the
//! surroundings (I/O, serialization, option validation).

use std::io;
use thiserror::Error;

/// Result type alias for soaldoc operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur around document conversion.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error during rendering (Markdown, text, JSON, HTML).
    #[error("Rendering error: {0}")]
    Render(String),

    /// An option value was rejected.
    #[error("Invalid option: {0}")]
    InvalidOption(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Render(format!("JSON serialization error: {}", err))
    }
}
