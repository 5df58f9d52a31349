//! Error types for docfix.

use std::io;
use thiserror::Error;

/// Result type alias for docfix operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading, editing or writing a document.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is not a Word .docx file.
    #[error("{0}")]
    InvalidFormat(String),

    /// Error reading the ZIP container.
    #[error("ZIP archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// docx-rs could not parse the document.
    #[error("Failed to read document: {0}")]
    Read(String),

    /// docx-rs could not pack the edited document.
    #[error("Failed to write document: {0}")]
    Write(String),

    /// A rules file could not be parsed.
    #[error("Invalid rules: {0}")]
    Rules(String),

    /// A rule carries a regex that does not compile.
    #[error("Invalid pattern `{pattern}`: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The settings file could not be parsed or written.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<docx_rs::ReaderError> for Error {
    fn from(err: docx_rs::ReaderError) -> Self {
        Error::Read(err.to_string())
    }
}
