//! Error types for the sucre PDF walking library.

use thiserror::Error;

/// Primary error type for PDF walking operations.
#[derive(Error, Debug)]
pub enum PdfError {
    #[error("Malformed PDF: {0}")]
    MalformedPdf(String),

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("type error: expected {expected}, got {got}")]
    TypeError {
        expected: &'static str,
        got: &'static str,
    },

    #[error("decode error: {0}")]
    DecodeError(String),

    #[error("unknown glyph name: {0}")]
    UnknownGlyph(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type alias for PdfError.
pub type Result<T> = std::result::Result<T, PdfError>;
