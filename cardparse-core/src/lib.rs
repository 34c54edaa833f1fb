//! cardparse-core: statement data model, error taxonomy and the text-extraction seam

pub mod backend;
pub mod error;
pub mod statement;

pub use backend::TextExtractor;
pub use error::{Error, Result};
pub use statement::{BankLabel, ExtractedStatement, Field, ParsedStatement};
