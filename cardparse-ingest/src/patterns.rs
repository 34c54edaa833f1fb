//! Ordered pattern lists for groups of related statement fields.
//!
//! A statement prints related values under a row of labels, so one regex
//! usually captures several fields at once. Each group holds its patterns
//! in priority order: the label-anchored composite first, then looser
//! positional fallbacks for text layers that dropped or garbled the labels.

use cardparse_core::{ExtractedStatement, Field};
use regex::Regex;
use tracing::trace;

/// Grouped amount, western or lakh grouping: `12,345.67`, `1,23,456.78`
pub const AMOUNT: &str = r"\d{1,3}(?:,\d{2,3})*\.\d{2}";

/// Any comma-grouped amount with paise, including Indian grouping: `1,92,000.00`
pub const LOOSE_AMOUNT: &str = r"[\d,]+\.\d{2}";

/// Like [`LOOSE_AMOUNT`] but paise optional (`1,92,000`)
pub const WHOLE_OR_DECIMAL: &str = r"[\d,]+(?:\.\d{2})?";

/// Place before a numeric capture so it cannot start inside a larger figure.
/// Non-capturing; consumes the preceding character.
pub const FIGURE_START: &str = r"(?:^|[^\d,])";

/// `DD/MM/YYYY`
pub const SLASH_DATE: &str = r"\d{2}/\d{2}/\d{4}";

/// `DD MMM YYYY`
pub const TEXT_MONTH_DATE: &str = r"\d{2}\s[A-Z]{3}\s\d{4}";

/// A set of fields captured together, with fallback patterns.
///
/// Capture group `i` of whichever pattern matches first is written to
/// `fields[i - 1]`.
#[derive(Debug)]
pub struct FieldGroup {
    name: &'static str,
    fields: &'static [Field],
    patterns: Vec<Regex>,
}

impl FieldGroup {
    /// Compile a group. Patterns are fixed at build time, so an invalid one
    /// is a programming error and panics on first use.
    pub fn new<I, S>(name: &'static str, fields: &'static [Field], patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|p| Regex::new(p.as_ref()).unwrap())
            .collect();
        Self {
            name,
            fields,
            patterns,
        }
    }

    /// Try each pattern in order; on the first match, write its captures.
    ///
    /// Returns whether any pattern matched. Captures that are empty after
    /// trimming leave their field untouched.
    pub fn apply(&self, text: &str, stmt: &mut ExtractedStatement) -> bool {
        for (stage, re) in self.patterns.iter().enumerate() {
            let Some(caps) = re.captures(text) else {
                continue;
            };

            for (field, m) in self.fields.iter().zip(caps.iter().skip(1)) {
                if let Some(value) = m.map(|m| m.as_str().trim()).filter(|v| !v.is_empty()) {
                    stmt.set(*field, value);
                }
            }
            trace!(group = self.name, stage, "pattern matched");
            return true;
        }

        trace!(group = self.name, "no pattern matched");
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardparse_core::BankLabel;
    use pretty_assertions::assert_eq;

    fn dues_group() -> FieldGroup {
        FieldGroup::new(
            "test.dues",
            &[Field::TotalAmountDue, Field::MinimumAmountDue],
            [
                format!(r"(?s)Total\s*Due.*?({AMOUNT}).*?Min\s*Due.*?({AMOUNT})"),
                format!(r"(?s)({AMOUNT})\s*Dr.*?({AMOUNT})\s*Dr"),
            ],
        )
    }

    #[test]
    fn test_primary_pattern_wins() {
        let text = "Total Due 1,234.00 Dr\nMin Due 100.00 Dr";
        let mut rec = ExtractedStatement::new(BankLabel::AxisBank);

        assert!(dues_group().apply(text, &mut rec));
        assert_eq!(rec.total_amount_due.as_deref(), Some("1,234.00"));
        assert_eq!(rec.minimum_amount_due.as_deref(), Some("100.00"));
    }

    #[test]
    fn test_fallback_used_when_labels_missing() {
        let text = "T0tal ??? 9,999.99 Dr garbled 250.50 Dr";
        let mut rec = ExtractedStatement::new(BankLabel::AxisBank);

        assert!(dues_group().apply(text, &mut rec));
        assert_eq!(rec.total_amount_due.as_deref(), Some("9,999.99"));
        assert_eq!(rec.minimum_amount_due.as_deref(), Some("250.50"));
    }

    #[test]
    fn test_miss_leaves_defaults() {
        let mut rec = ExtractedStatement::new(BankLabel::AxisBank);
        assert!(!dues_group().apply("nothing to see here", &mut rec));
        assert_eq!(rec, ExtractedStatement::new(BankLabel::AxisBank));
    }

    #[test]
    fn test_captures_are_trimmed() {
        let group = FieldGroup::new(
            "test.name",
            &[Field::CardholderName],
            [r"Name:\s*([A-Z][A-Z\s]+)"],
        );
        let mut rec = ExtractedStatement::new(BankLabel::AxisBank);
        group.apply("Name: JANE DOE   \n", &mut rec);
        assert_eq!(rec.cardholder_name.as_deref(), Some("JANE DOE"));
    }

    #[test]
    fn test_figure_start_rejects_mid_number() {
        let re = Regex::new(&format!(r"{FIGURE_START}({AMOUNT})\s*Dr")).unwrap();

        let caps = re.captures("Due\n1,23,456.78 Dr").unwrap();
        assert_eq!(&caps[1], "1,23,456.78");

        // the only way to match "1234,567.00" would start mid-figure
        assert!(re.captures("Due 1234,567.00 Dr").is_none());
    }

    #[test]
    fn test_amount_building_blocks() {
        let amount = Regex::new(&format!("^{AMOUNT}$")).unwrap();
        assert!(amount.is_match("12,345.67"));
        assert!(amount.is_match("1,92,000.00"));
        assert!(!amount.is_match("1234.56"));
        assert!(!amount.is_match(",345.67"));

        let loose = Regex::new(&format!("^{LOOSE_AMOUNT}$")).unwrap();
        assert!(loose.is_match("1,92,000.00"));
        assert!(!loose.is_match("1,92,000"));

        let whole = Regex::new(&format!("^{WHOLE_OR_DECIMAL}$")).unwrap();
        assert!(whole.is_match("1,92,000"));
        assert!(whole.is_match("0.00"));
    }
}
