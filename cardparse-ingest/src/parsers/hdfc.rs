//! HDFC Bank credit card statement parser
//!
//! Some HDFC text layers spell labels letter by letter (`N a m e :`), and
//! credit limits are often printed without paise:
//!   Payment Due Date Total Dues Minimum Amount Due
//!   02/07/2024 8,945.00 450.00
//!   Credit Limit Available Credit Limit Available Cash Limit
//!   30,000 21,055.00 12,000

use cardparse_core::{BankLabel, ExtractedStatement, Field};
use once_cell::sync::Lazy;

use crate::patterns::{FIGURE_START, FieldGroup, LOOSE_AMOUNT, SLASH_DATE, WHOLE_OR_DECIMAL};

static NAME: Lazy<FieldGroup> = Lazy::new(|| {
    FieldGroup::new(
        "hdfc.name",
        &[Field::CardholderName],
        [
            r"(?i)N\s*a\s*m\s*e\s*:?\s*([A-Z][A-Z\s]+?)\s+Statement",
            // "Card" split by the text layer leaves a dangling "rd" before the name
            r"\brd\s+([A-Z][A-Z\s]+?)\s+Statement\b",
        ],
    )
});

static LAST4: Lazy<FieldGroup> = Lazy::new(|| {
    FieldGroup::new(
        "hdfc.last4",
        &[Field::CardLast4],
        [r"Card\s*No[: ]*[\dXx\s]+(\d{4})"],
    )
});

static STATEMENT_DATE: Lazy<FieldGroup> = Lazy::new(|| {
    FieldGroup::new(
        "hdfc.statement_date",
        &[Field::StatementDate],
        [format!(r"Statement\s*Date[: ]*({SLASH_DATE})")],
    )
});

static DUES: Lazy<FieldGroup> = Lazy::new(|| {
    FieldGroup::new(
        "hdfc.dues",
        &[Field::PaymentDueDate, Field::TotalAmountDue, Field::MinimumAmountDue],
        [format!(
            concat!(
                r"(?si)Payment\s*Due\s*Date\s*Total\s*Dues\s*Minimum\s*Amount\s*Due",
                r".*?({d})\s+({a})\s+({a})",
            ),
            d = SLASH_DATE,
            a = LOOSE_AMOUNT
        )],
    )
});

static CREDIT: Lazy<FieldGroup> = Lazy::new(|| {
    FieldGroup::new(
        "hdfc.credit",
        &[Field::CreditLimit, Field::AvailableCreditLimit],
        [format!(
            r"(?si)Credit\s*Limit\s*Available\s*Credit\s*Limit.*?{s}({w})\s+({w})\b",
            s = FIGURE_START,
            w = WHOLE_OR_DECIMAL
        )],
    )
});

/// Extract the HDFC Bank field set. Never fails; unmatched fields stay `None`.
pub fn parse_hdfc_bank(text: &str) -> ExtractedStatement {
    let mut stmt = ExtractedStatement::new(BankLabel::HdfcBank);

    NAME.apply(text, &mut stmt);
    LAST4.apply(text, &mut stmt);
    STATEMENT_DATE.apply(text, &mut stmt);
    DUES.apply(text, &mut stmt);
    CREDIT.apply(text, &mut stmt);

    stmt
}
