//! Error types for statement text extraction

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures that abort a single parse request.
///
/// Pattern misses are not errors: they leave the field as `None`.
/// An unrecognised bank is not an error either.
#[derive(Error, Debug)]
pub enum Error {
    /// The text-layer backend cannot be invoked (not compiled in, or failed to initialise)
    #[error("text extraction unavailable: {reason}")]
    ExtractionUnavailable { reason: String },

    /// File missing or unreadable
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Not a PDF container we can open (corrupt, truncated, encrypted)
    #[error("invalid PDF {path}: {reason}")]
    InvalidPdf { path: String, reason: String },
}

impl Error {
    /// Sanitized message for display; paths and library errors are omitted.
    /// Log the full error before calling this.
    pub fn client_message(&self) -> String {
        match self {
            Error::ExtractionUnavailable { .. } => "PDF text extraction is not available".to_string(),
            Error::Io(e) if e.kind() == std::io::ErrorKind::NotFound => "PDF not found".to_string(),
            Error::Io(_) => "I/O error".to_string(),
            Error::InvalidPdf { .. } => "Invalid PDF file".to_string(),
        }
    }
}
