//! ICICI Bank credit card statement parser
//!
//! The text layer renders the rupee glyph as a backtick and uses em-dashes
//! after some labels; both are normalized before matching:
//!   Customer Name Card Account No
//!   MR ARJUN MEHTA 4375 XXXX XXXX 1007
//!   Statement Date Minimum Amount Due Your Total Amount Due
//!   15/03/2024 `1,250.00 `24,980.50

use cardparse_core::{BankLabel, ExtractedStatement, Field};
use once_cell::sync::Lazy;

use crate::patterns::{FieldGroup, LOOSE_AMOUNT, SLASH_DATE};

static NAME: Lazy<FieldGroup> = Lazy::new(|| {
    FieldGroup::new(
        "icici.name",
        &[Field::CardholderName],
        [r"Customer\s*Name\s*(?:Card\s*Account\s*No)?\s+([A-Z][A-Z\s]+?)\s+\d{4}"],
    )
});

static LAST4: Lazy<FieldGroup> = Lazy::new(|| {
    FieldGroup::new(
        "icici.last4",
        &[Field::CardLast4],
        [r"Card Number\s*:\s*[\dXx\s]+(\d{4})", r"XXXX\s+(\d{4})"],
    )
});

static SUMMARY: Lazy<FieldGroup> = Lazy::new(|| {
    FieldGroup::new(
        "icici.summary",
        &[Field::StatementDate, Field::MinimumAmountDue, Field::TotalAmountDue],
        [format!(
            concat!(
                r"(?si)Statement\s*Date\s*Minimum\s*Amount\s*Due\s*Your\s*Total\s*Amount\s*Due",
                r".*?({d})\s*({a}).*?({a})",
            ),
            d = SLASH_DATE,
            a = LOOSE_AMOUNT
        )],
    )
});

static DUE_DATE: Lazy<FieldGroup> = Lazy::new(|| {
    FieldGroup::new(
        "icici.due_date",
        &[Field::PaymentDueDate],
        [format!(r"Due\s*Date\s*[:\-]?\s*({SLASH_DATE})")],
    )
});

static PERIOD: Lazy<FieldGroup> = Lazy::new(|| {
    FieldGroup::new(
        "icici.period",
        &[Field::StatementPeriodStart, Field::StatementPeriodEnd],
        [format!(
            r"(?i)Statement\s*Period\s*:\s*From\s*({d})\s*to\s*({d})",
            d = SLASH_DATE
        )],
    )
});

static CREDIT: Lazy<FieldGroup> = Lazy::new(|| {
    FieldGroup::new(
        "icici.credit",
        &[Field::CreditLimit, Field::AvailableCreditLimit],
        [format!(
            r"(?si)Credit\s*Limit\s*Available\s*Credit.*?({a})\s+({a})",
            a = LOOSE_AMOUNT
        )],
    )
});

/// Undo ICICI text-layer artifacts. Line breaks are preserved.
fn normalize(text: &str) -> String {
    text.replace('—', "-").replace('`', " ")
}

/// Extract the ICICI Bank field set. Never fails; unmatched fields stay `None`.
pub fn parse_icici_bank(text: &str) -> ExtractedStatement {
    let text = normalize(text);
    let mut stmt = ExtractedStatement::new(BankLabel::IciciBank);

    NAME.apply(&text, &mut stmt);
    LAST4.apply(&text, &mut stmt);
    SUMMARY.apply(&text, &mut stmt);
    DUE_DATE.apply(&text, &mut stmt);
    PERIOD.apply(&text, &mut stmt);
    CREDIT.apply(&text, &mut stmt);

    stmt
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = r#"
ICICI Bank Credit Card Statement
Customer Name Card Account No
MR ARJUN MEHTA 4375 XXXX XXXX 1007
Statement Date Minimum Amount Due Your Total Amount Due
15/03/2024 `1,250.00 `24,980.50
Payment Due Date — 02/04/2024
Statement Period : From 16/02/2024 to 15/03/2024
Credit Limit Available Credit Cash Limit
`3,00,000.00 `2,75,019.50 `60,000.00
"#;

    #[test]
    fn test_parses_summary_row() {
        let stmt = parse_icici_bank(SAMPLE);

        assert_eq!(stmt.bank_name, BankLabel::IciciBank);
        assert_eq!(stmt.statement_date.as_deref(), Some("15/03/2024"));
        assert_eq!(stmt.minimum_amount_due.as_deref(), Some("1,250.00"));
        assert_eq!(stmt.total_amount_due.as_deref(), Some("24,980.50"));
    }

    #[test]
    fn test_em_dash_after_due_date_label() {
        let stmt = parse_icici_bank(SAMPLE);
        assert_eq!(stmt.payment_due_date.as_deref(), Some("02/04/2024"));
    }

    #[test]
    fn test_parses_period_name_and_card() {
        let stmt = parse_icici_bank(SAMPLE);

        assert_eq!(stmt.statement_period_start.as_deref(), Some("16/02/2024"));
        assert_eq!(stmt.statement_period_end.as_deref(), Some("15/03/2024"));
        assert_eq!(stmt.cardholder_name.as_deref(), Some("MR ARJUN MEHTA"));
        assert_eq!(stmt.card_last_4.as_deref(), Some("1007"));
    }

    #[test]
    fn test_credit_limits_after_backticks() {
        let stmt = parse_icici_bank(SAMPLE);

        assert_eq!(stmt.credit_limit.as_deref(), Some("3,00,000.00"));
        assert_eq!(stmt.available_credit_limit.as_deref(), Some("2,75,019.50"));
    }

    #[test]
    fn test_labelled_card_number_preferred() {
        let text = "Card Number : 4375 XXXX XXXX 2211\nStatement Date\nXXXX 9999\n";
        let stmt = parse_icici_bank(text);
        assert_eq!(stmt.card_last_4.as_deref(), Some("2211"));
    }

    #[test]
    fn test_unlabelled_text_leaves_fields_empty() {
        let stmt = parse_icici_bank("ICICI BANK\n15/03/2024 1,250.00 24,980.50\n");

        assert_eq!(stmt.statement_date, None);
        assert_eq!(stmt.total_amount_due, None);
        assert_eq!(stmt.statement_period_start, None);
        assert_eq!(stmt.found_fields(), 0);
    }
}
