//! cardparse-ingest: bank detection and bank-specific statement field extractors.

pub mod detect;
pub mod dispatch;
pub mod parsers;
pub mod patterns;

pub use detect::detect_bank;
pub use dispatch::{Extractor, extract_statement, extractor_for};
