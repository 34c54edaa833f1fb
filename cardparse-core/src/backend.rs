use std::path::Path;

use crate::error::Result;

/// Trait for PDF text-layer backends.
///
/// Implementors turn a PDF on disk into one text blob: every page's text in
/// page order, each followed by a newline. A document without any text layer
/// yields an empty (or whitespace-only) string, not an error.
pub trait TextExtractor: Send + Sync {
    fn extract_text(&self, path: &Path) -> Result<String>;
}
