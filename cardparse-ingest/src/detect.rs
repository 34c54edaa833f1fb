//! Issuer detection from statement text.
//!
//! Forwarded or co-branded statements can mention several banks, so rules
//! are evaluated in table order and the first hit wins.

use cardparse_core::BankLabel;
use tracing::debug;

/// Ordered (markers, label) rules. Markers are upper-case; any one suffices.
pub const DETECTION_RULES: &[(&[&str], BankLabel)] = &[
    (&["AXIS BANK"], BankLabel::AxisBank),
    (&["ICICI BANK"], BankLabel::IciciBank),
    (&["IDFC FIRST BANK"], BankLabel::IdfcFirstBank),
    (&["SYNDICATE BANK", "GLOBAL CREDIT CARD"], BankLabel::SyndicateBank),
    (&["HDFC BANK"], BankLabel::HdfcBank),
    (&["SBI CARD", "STATE BANK OF INDIA"], BankLabel::SbiCard),
];

/// Classify statement text by case-insensitive marker search.
/// Total: anything without a marker is [`BankLabel::Unknown`].
pub fn detect_bank(text: &str) -> BankLabel {
    let upper = text.to_uppercase();

    for (markers, label) in DETECTION_RULES {
        if let Some(marker) = markers.iter().find(|m| upper.contains(*m)) {
            debug!(%label, marker, "bank detected");
            return *label;
        }
    }

    debug!("no bank marker found");
    BankLabel::Unknown
}
