//! Error types for qpaper library.

use std::io;
use thiserror::Error;

/// Result type alias for qpaper operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building a question paper.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is neither a PDF nor UTF-8 text.
    #[error("Unknown file format: expected a PDF or UTF-8 text file")]
    UnknownFormat,

    /// The PDF version header is malformed.
    #[error("Unsupported PDF version: {0}")]
    UnsupportedVersion(String),

    /// Error reading or writing PDF structure.
    #[error("PDF error: {0}")]
    Pdf(String),

    /// The PDF document is encrypted.
    #[error("Document is encrypted")]
    Encrypted,

    /// Error extracting text content.
    #[error("Text extraction error: {0}")]
    TextExtract(String),

    /// Invalid page range specification.
    #[error("Invalid page range: {0}")]
    InvalidPageRange(String),

    /// A detection pattern failed to compile.
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Layout options that cannot produce a valid paper.
    #[error("Invalid layout: {0}")]
    InvalidLayout(String),

    /// Error during rendering (PDF, text, Markdown).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Error reading or writing JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Extraction produced no usable text.
    #[error("No text extracted. Ensure the PDF is text-based (not scanned).")]
    EmptyText,

    /// Segmentation found no unit boundaries.
    #[error("No valid units detected. Check the document formatting.")]
    NoUnits,

    /// The selection snapshot has no selected question.
    #[error("Select at least one question to generate the paper.")]
    NoSelection,
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::Pdf(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            Error::NoUnits.to_string(),
            "No valid units detected. Check the document formatting."
        );
        assert_eq!(
            Error::InvalidPageRange("0-2".to_string()).to_string(),
            "Invalid page range: 0-2"
        );
    }

    #[test]
    fn test_pipeline_errors_are_distinct() {
        let messages = [
            Error::EmptyText.to_string(),
            Error::NoUnits.to_string(),
            Error::NoSelection.to_string(),
        ];
        assert_ne!(messages[0], messages[1]);
        assert_ne!(messages[1], messages[2]);
        assert_ne!(messages[0], messages[2]);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
