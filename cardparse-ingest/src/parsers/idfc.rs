//! IDFC FIRST Bank credit card statement parser
//!
//! The rupee sign comes out of the text layer either as `₹` or as a bare
//! `r` token, so both are rewritten to ` r ` before matching:
//!   Total Amount Due Minimum Amount Due
//!   ₹ 18,450.75 ₹ 922.54
//!   Credit Limit Available Credit Limit
//!   r 1,92,000 r 1,73,549

use std::borrow::Cow;

use cardparse_core::{BankLabel, ExtractedStatement, Field};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::patterns::{FieldGroup, LOOSE_AMOUNT, SLASH_DATE, WHOLE_OR_DECIMAL};

static CURRENCY_GLYPH: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+[r₹]\s+").unwrap());

static NAME: Lazy<FieldGroup> = Lazy::new(|| {
    FieldGroup::new(
        "idfc.name",
        &[Field::CardholderName],
        [
            r"Customer Name\s*:\s*([A-Za-z\s]+?)\s*Card Number",
            r"(?m)^([A-Za-z \t]+?)\s*Statement Date",
        ],
    )
});

static LAST4: Lazy<FieldGroup> = Lazy::new(|| {
    FieldGroup::new(
        "idfc.last4",
        &[Field::CardLast4],
        [r"Card Number\s*[:\s]*[\d*]+(\d{4})"],
    )
});

static DATES: Lazy<FieldGroup> = Lazy::new(|| {
    FieldGroup::new(
        "idfc.dates",
        &[Field::StatementDate, Field::PaymentDueDate],
        [format!(
            r"(?si)Statement Date\s*Payment Due Date.*?({d})\s*({d})",
            d = SLASH_DATE
        )],
    )
});

static AMOUNTS: Lazy<FieldGroup> = Lazy::new(|| {
    FieldGroup::new(
        "idfc.amounts",
        &[Field::TotalAmountDue, Field::MinimumAmountDue],
        [format!(
            r"(?si)Total Amount Due\s*Minimum Amount Due.*?r\s*({a})\s*r\s*({a})",
            a = LOOSE_AMOUNT
        )],
    )
});

// Limits are printed in whole rupees
static CREDIT: Lazy<FieldGroup> = Lazy::new(|| {
    FieldGroup::new(
        "idfc.credit",
        &[Field::CreditLimit, Field::AvailableCreditLimit],
        [format!(
            r"(?si)Credit Limit\s*Available Credit Limit.*?r\s*({w})\s*r\s*({w})",
            w = WHOLE_OR_DECIMAL
        )],
    )
});

static PERIOD: Lazy<FieldGroup> = Lazy::new(|| {
    FieldGroup::new(
        "idfc.period",
        &[Field::StatementPeriodStart, Field::StatementPeriodEnd],
        [format!(
            r"(?si)Statement Period.*?From:\s*({d})\s*To:\s*({d})",
            d = SLASH_DATE
        )],
    )
});

/// Collapse the currency token and the whitespace around it to ` r `.
fn normalize(text: &str) -> Cow<'_, str> {
    CURRENCY_GLYPH.replace_all(text, " r ")
}

/// Extract the IDFC FIRST Bank field set. Never fails; unmatched fields stay `None`.
pub fn parse_idfc_bank(text: &str) -> ExtractedStatement {
    let text = normalize(text);
    let mut stmt = ExtractedStatement::new(BankLabel::IdfcFirstBank);

    NAME.apply(&text, &mut stmt);
    LAST4.apply(&text, &mut stmt);
    DATES.apply(&text, &mut stmt);
    AMOUNTS.apply(&text, &mut stmt);
    CREDIT.apply(&text, &mut stmt);
    PERIOD.apply(&text, &mut stmt);

    stmt
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = r#"
IDFC FIRST Bank
Customer Name : Neha Gupta Card Number : 414767******3321
Statement Date Payment Due Date
18/05/2024 07/06/2024
Total Amount Due Minimum Amount Due
₹ 18,450.75 ₹ 922.54
Credit Limit Available Credit Limit
₹ 1,92,000 ₹ 1,73,549
Statement Period
From: 19/04/2024 To: 18/05/2024
"#;

    #[test]
    fn test_parses_header_fields() {
        let stmt = parse_idfc_bank(SAMPLE);

        assert_eq!(stmt.bank_name, BankLabel::IdfcFirstBank);
        assert_eq!(stmt.cardholder_name.as_deref(), Some("Neha Gupta"));
        assert_eq!(stmt.card_last_4.as_deref(), Some("3321"));
        assert_eq!(stmt.statement_date.as_deref(), Some("18/05/2024"));
        assert_eq!(stmt.payment_due_date.as_deref(), Some("07/06/2024"));
        assert_eq!(stmt.statement_period_start.as_deref(), Some("19/04/2024"));
        assert_eq!(stmt.statement_period_end.as_deref(), Some("18/05/2024"));
    }

    #[test]
    fn test_amounts_behind_rupee_glyph() {
        let stmt = parse_idfc_bank(SAMPLE);

        assert_eq!(stmt.total_amount_due.as_deref(), Some("18,450.75"));
        assert_eq!(stmt.minimum_amount_due.as_deref(), Some("922.54"));
    }

    #[test]
    fn test_whole_rupee_credit_limits() {
        let stmt = parse_idfc_bank(SAMPLE);

        assert_eq!(stmt.credit_limit.as_deref(), Some("1,92,000"));
        assert_eq!(stmt.available_credit_limit.as_deref(), Some("1,73,549"));
    }

    #[test]
    fn test_bare_r_token_is_accepted() {
        let text = "Credit Limit Available Credit Limit\nr 1,92,000 r 50,000\n";
        let stmt = parse_idfc_bank(text);

        assert_eq!(stmt.credit_limit.as_deref(), Some("1,92,000"));
        assert_eq!(stmt.available_credit_limit.as_deref(), Some("50,000"));
    }

    #[test]
    fn test_name_on_line_before_dates() {
        let text = "IDFC FIRST BANK\nNEHA GUPTA\nStatement Date Payment Due Date\n18/05/2024 07/06/2024\n";
        let stmt = parse_idfc_bank(text);
        assert_eq!(stmt.cardholder_name.as_deref(), Some("NEHA GUPTA"));
    }

    #[test]
    fn test_normalize_only_touches_isolated_glyph() {
        assert_eq!(normalize("Due\n₹ 10.00"), "Due r 10.00");
        assert_eq!(normalize("Transfer 500"), "Transfer 500");
    }

    #[test]
    fn test_amounts_require_currency_marker() {
        let text = "Total Amount Due Minimum Amount Due\n18,450.75 922.54\n";
        let stmt = parse_idfc_bank(text);

        assert_eq!(stmt.total_amount_due, None);
        assert_eq!(stmt.minimum_amount_due, None);
    }
}
