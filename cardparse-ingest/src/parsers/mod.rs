//! Per-issuer field extractors. Each one is a pure `&str -> ExtractedStatement`.

pub mod axis;
pub mod hdfc;
pub mod icici;
pub mod idfc;
pub mod syndicate;

pub use axis::parse_axis_bank;
pub use hdfc::parse_hdfc_bank;
pub use icici::parse_icici_bank;
pub use idfc::parse_idfc_bank;
pub use syndicate::parse_syndicate_bank;
