//! Syndicate Bank (Global Credit Card) statement parser
//!
//! Dates use a textual month (`05 JAN 2024`). The card's last four digits
//! lead the amounts row:
//!   Card Account Number Total Payment Due Minimum Payment Due
//!   7788 15,300.00 765.00

use cardparse_core::{BankLabel, ExtractedStatement, Field};
use once_cell::sync::Lazy;

use crate::patterns::{FieldGroup, LOOSE_AMOUNT, TEXT_MONTH_DATE};

static NAME: Lazy<FieldGroup> = Lazy::new(|| {
    FieldGroup::new(
        "syndicate.name",
        &[Field::CardholderName],
        [r"Name\s*(MR\.\s*[A-Z\s]+?)\s*Credit Card No"],
    )
});

static AMOUNTS: Lazy<FieldGroup> = Lazy::new(|| {
    FieldGroup::new(
        "syndicate.amounts",
        &[Field::CardLast4, Field::TotalAmountDue, Field::MinimumAmountDue],
        [format!(
            r"(?si)Card Account Number\s*Total Payment Due\s*Minimum Payment Due.*?\b(\d{{4}})\s+({a})\s+({a})",
            a = LOOSE_AMOUNT
        )],
    )
});

static DATES: Lazy<FieldGroup> = Lazy::new(|| {
    FieldGroup::new(
        "syndicate.dates",
        &[Field::StatementDate, Field::PaymentDueDate],
        [format!(
            r"(?si)Statement Date\s*Payment Due Date.*?({d})\s*({d})",
            d = TEXT_MONTH_DATE
        )],
    )
});

static CREDIT: Lazy<FieldGroup> = Lazy::new(|| {
    FieldGroup::new(
        "syndicate.credit",
        &[Field::CreditLimit, Field::AvailableCreditLimit],
        [format!(
            r"(?si)Credit\s*Limit\s*Available\s*Credit\s*Limit.*?({a})\s+({a})",
            a = LOOSE_AMOUNT
        )],
    )
});

static LAST4_FALLBACK: Lazy<FieldGroup> = Lazy::new(|| {
    FieldGroup::new(
        "syndicate.last4",
        &[Field::CardLast4],
        [r"Credit Card No\s*[\dXx\s]+(\d{4})"],
    )
});

/// Extract the Syndicate Bank field set. Never fails; unmatched fields stay `None`.
pub fn parse_syndicate_bank(text: &str) -> ExtractedStatement {
    let mut stmt = ExtractedStatement::new(BankLabel::SyndicateBank);

    NAME.apply(text, &mut stmt);
    AMOUNTS.apply(text, &mut stmt);
    DATES.apply(text, &mut stmt);
    CREDIT.apply(text, &mut stmt);

    // The amounts row is authoritative for the card number
    if stmt.card_last_4.is_none() {
        LAST4_FALLBACK.apply(text, &mut stmt);
    }

    stmt
}
