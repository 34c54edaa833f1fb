//! Route statement text to the extractor for its issuer.

use cardparse_core::{BankLabel, ExtractedStatement, ParsedStatement};
use tracing::{info, warn};

use crate::detect::detect_bank;
use crate::parsers;

pub type Extractor = fn(&str) -> ExtractedStatement;

/// Field extractor for `bank`, if its layout is implemented
pub fn extractor_for(bank: BankLabel) -> Option<Extractor> {
    match bank {
        BankLabel::AxisBank => Some(parsers::parse_axis_bank),
        BankLabel::IciciBank => Some(parsers::parse_icici_bank),
        BankLabel::IdfcFirstBank => Some(parsers::parse_idfc_bank),
        BankLabel::SyndicateBank => Some(parsers::parse_syndicate_bank),
        BankLabel::HdfcBank => Some(parsers::parse_hdfc_bank),
        BankLabel::SbiCard | BankLabel::Unknown => None,
    }
}

/// Detect the issuer and extract its fields.
///
/// Unrecognised text comes back as [`ParsedStatement::Unclassified`] with the
/// raw text attached; a recognised issuer without a layout comes back as
/// [`ParsedStatement::NotImplemented`].
pub fn extract_statement(text: &str) -> ParsedStatement {
    let bank = detect_bank(text);

    match extractor_for(bank) {
        Some(extract) => {
            let stmt = extract(text);
            info!(%bank, found = stmt.found_fields(), "statement extracted");
            ParsedStatement::Extracted(stmt)
        }
        None if bank == BankLabel::Unknown => {
            info!("no known bank marker; returning raw text");
            ParsedStatement::unclassified(text)
        }
        None => {
            warn!(%bank, "no extractor implemented for this issuer");
            ParsedStatement::not_implemented(bank, text)
        }
    }
}
