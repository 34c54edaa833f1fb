//! cardparse-pdf: PDF text-layer extraction and the top-level `parse` entry point

#[cfg(feature = "lopdf")]
pub mod lopdf_backend;

use std::path::Path;

use cardparse_core::{ParsedStatement, Result, TextExtractor};
use tracing::debug;

#[cfg(feature = "lopdf")]
pub use lopdf_backend::LopdfExtractor;

/// Concatenate page texts in order, each followed by a newline.
pub fn join_pages<I, S>(pages: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut text = String::new();
    for page in pages {
        text.push_str(page.as_ref());
        text.push('\n');
    }
    text
}

/// The backend compiled into this build.
#[cfg(feature = "lopdf")]
pub fn default_extractor() -> Result<Box<dyn TextExtractor>> {
    Ok(Box::new(LopdfExtractor::new()))
}

/// The backend compiled into this build.
#[cfg(not(feature = "lopdf"))]
pub fn default_extractor() -> Result<Box<dyn TextExtractor>> {
    Err(cardparse_core::Error::ExtractionUnavailable {
        reason: "built without the `lopdf` feature".to_string(),
    })
}

/// Raw statement text of the PDF at `path`.
pub fn extract_text(path: impl AsRef<Path>) -> Result<String> {
    default_extractor()?.extract_text(path.as_ref())
}

/// Extract text with `extractor`, then detect the bank and pull its fields.
pub fn parse_with(extractor: &dyn TextExtractor, path: impl AsRef<Path>) -> Result<ParsedStatement> {
    let path = path.as_ref();
    let text = extractor.extract_text(path)?;
    debug!(path = %path.display(), chars = text.len(), "text extracted");
    Ok(cardparse_ingest::extract_statement(&text))
}

/// Parse the statement PDF at `path` with the default backend.
///
/// Fails only when the text layer cannot be read; field misses and
/// unrecognised banks are reported inside the returned record.
pub fn parse(path: impl AsRef<Path>) -> Result<ParsedStatement> {
    let extractor = default_extractor()?;
    parse_with(&*extractor, path)
}
