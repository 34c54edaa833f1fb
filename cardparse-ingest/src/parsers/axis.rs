//! Axis Bank credit card statement parser
//!
//! Expected text after PDF-to-text (each summary label followed by its value):
//!   Total Payment Due          12,345.67 Dr
//!   Minimum Payment Due        500.00 Dr
//!   Statement Period           01/01/2024 - 31/01/2024
//!   Payment Due Date           20/02/2024
//!   Statement Generation Date  01/02/2024
//!   Credit Limit   Available Credit Limit
//!   1,00,000.00    87,654.33

use cardparse_core::{BankLabel, ExtractedStatement, Field};
use once_cell::sync::Lazy;

use crate::patterns::{AMOUNT, FIGURE_START, FieldGroup, LOOSE_AMOUNT, SLASH_DATE};

static NAME: Lazy<FieldGroup> = Lazy::new(|| {
    FieldGroup::new(
        "axis.name",
        &[Field::CardholderName],
        [
            r"Name\s*[:\-]?\s*([A-Z][A-Z \t]+)",
            r"([A-Z][A-Z \t]+)\s+Statement",
        ],
    )
});

static LAST4: Lazy<FieldGroup> = Lazy::new(|| {
    FieldGroup::new("axis.last4", &[Field::CardLast4], [r"(?:\*{4}|[Xx]{4})\s*(\d{4})"])
});

static DUES: Lazy<FieldGroup> = Lazy::new(|| {
    FieldGroup::new(
        "axis.dues",
        &[
            Field::TotalAmountDue,
            Field::MinimumAmountDue,
            Field::StatementPeriodStart,
            Field::StatementPeriodEnd,
            Field::PaymentDueDate,
            Field::StatementDate,
        ],
        [
            format!(
                concat!(
                    r"(?s)Total\s*Payment\s*Due.*?{s}({a})\s*Dr",
                    r".*?Minimum\s*Payment\s*Due.*?{s}({a})\s*Dr",
                    r".*?Statement\s*Period.*?({d})\s*-\s*({d})",
                    r".*?Payment\s*Due\s*Date.*?({d})",
                    r".*?Statement\s*Generation\s*Date.*?({d})",
                ),
                s = FIGURE_START,
                a = AMOUNT,
                d = SLASH_DATE
            ),
            // Labels lost in extraction: same values, same order
            format!(
                r"(?s){s}({a})\s*Dr.*?{s}({a})\s*Dr.*?({d}).*?({d}).*?({d}).*?({d})",
                s = FIGURE_START,
                a = AMOUNT,
                d = SLASH_DATE
            ),
        ],
    )
});

static CREDIT: Lazy<FieldGroup> = Lazy::new(|| {
    FieldGroup::new(
        "axis.credit",
        &[Field::CreditLimit, Field::AvailableCreditLimit],
        [format!(
            r"(?si)Credit\s*Limit\s*Available\s*Credit\s*Limit.*?({a})\s+({a})",
            a = LOOSE_AMOUNT
        )],
    )
});

/// Extract the Axis Bank field set. Never fails; unmatched fields stay `None`.
pub fn parse_axis_bank(text: &str) -> ExtractedStatement {
    let mut stmt = ExtractedStatement::new(BankLabel::AxisBank);

    NAME.apply(text, &mut stmt);
    LAST4.apply(text, &mut stmt);
    DUES.apply(text, &mut stmt);
    CREDIT.apply(text, &mut stmt);

    stmt
}
