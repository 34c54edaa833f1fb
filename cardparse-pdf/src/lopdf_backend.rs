//! Pure-Rust text-layer extraction with lopdf

use std::io;
use std::path::Path;

use cardparse_core::{Error, Result, TextExtractor};
use lopdf::Document;
use tracing::{debug, warn};

use crate::join_pages;

/// Reads each page's text layer in page order.
///
/// Pages whose content stream cannot be decoded contribute an empty string
/// rather than failing the whole document; scanned statements therefore come
/// back as blank text, not as an error.
#[derive(Debug, Default, Clone, Copy)]
pub struct LopdfExtractor;

impl LopdfExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl TextExtractor for LopdfExtractor {
    fn extract_text(&self, path: &Path) -> Result<String> {
        // Surface missing/unreadable files as I/O errors, not parse errors
        if !std::fs::metadata(path)?.is_file() {
            return Err(io::Error::new(io::ErrorKind::InvalidInput, "not a regular file").into());
        }

        let document = Document::load(path).map_err(|e| Error::InvalidPdf {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        if document.is_encrypted() {
            return Err(Error::InvalidPdf {
                path: path.display().to_string(),
                reason: "document is encrypted".to_string(),
            });
        }

        let pages = document.get_pages();
        debug!(path = %path.display(), pages = pages.len(), "PDF loaded");

        let texts = pages.keys().map(|&page_number| {
            document.extract_text(&[page_number]).unwrap_or_else(|e| {
                warn!(page = page_number, error = %e, "page has no readable text layer");
                String::new()
            })
        });

        Ok(join_pages(texts))
    }
}
