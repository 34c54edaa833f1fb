//! Statement record types shared by the extractors and the presentation shell

use serde::{Deserialize, Serialize};

/// Issuer layouts the detector can tell apart
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum BankLabel {
    #[serde(rename = "Axis Bank")]
    AxisBank,
    #[serde(rename = "ICICI Bank")]
    IciciBank,
    #[serde(rename = "IDFC First Bank")]
    IdfcFirstBank,
    #[serde(rename = "Syndicate Bank")]
    SyndicateBank,
    #[serde(rename = "HDFC Bank")]
    HdfcBank,
    #[serde(rename = "SBI Card")]
    SbiCard,
    #[serde(rename = "Unknown")]
    Unknown,
}

impl BankLabel {
    /// Human-readable issuer name (same string the record serializes to)
    pub fn display_name(&self) -> &'static str {
        match self {
            BankLabel::AxisBank => "Axis Bank",
            BankLabel::IciciBank => "ICICI Bank",
            BankLabel::IdfcFirstBank => "IDFC First Bank",
            BankLabel::SyndicateBank => "Syndicate Bank",
            BankLabel::HdfcBank => "HDFC Bank",
            BankLabel::SbiCard => "SBI Card",
            BankLabel::Unknown => "Unknown",
        }
    }

    /// Whether a field extractor exists for this layout
    pub fn has_extractor(&self) -> bool {
        !matches!(self, BankLabel::SbiCard | BankLabel::Unknown)
    }
}

impl std::fmt::Display for BankLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// The optional fields of [`ExtractedStatement`], in schema order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    CardholderName,
    CardLast4,
    StatementDate,
    PaymentDueDate,
    TotalAmountDue,
    MinimumAmountDue,
    StatementPeriodStart,
    StatementPeriodEnd,
    CreditLimit,
    AvailableCreditLimit,
}

impl Field {
    pub const ALL: [Field; 10] = [
        Field::CardholderName,
        Field::CardLast4,
        Field::StatementDate,
        Field::PaymentDueDate,
        Field::TotalAmountDue,
        Field::MinimumAmountDue,
        Field::StatementPeriodStart,
        Field::StatementPeriodEnd,
        Field::CreditLimit,
        Field::AvailableCreditLimit,
    ];

    /// Serialized key for this field
    pub fn name(&self) -> &'static str {
        match self {
            Field::CardholderName => "cardholder_name",
            Field::CardLast4 => "card_last_4",
            Field::StatementDate => "statement_date",
            Field::PaymentDueDate => "payment_due_date",
            Field::TotalAmountDue => "total_amount_due",
            Field::MinimumAmountDue => "minimum_amount_due",
            Field::StatementPeriodStart => "statement_period_start",
            Field::StatementPeriodEnd => "statement_period_end",
            Field::CreditLimit => "credit_limit",
            Field::AvailableCreditLimit => "available_credit_limit",
        }
    }
}

/// Fixed-schema record produced by a bank's field extractor.
///
/// Values are verbatim substrings of the statement text (amounts keep their
/// digit grouping, dates keep the issuer's format). A field the patterns
/// could not locate is `None` and serializes as `null`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ExtractedStatement {
    pub bank_name: BankLabel,
    pub cardholder_name: Option<String>,
    /// Last four digits of the card number
    pub card_last_4: Option<String>,
    pub statement_date: Option<String>,
    pub payment_due_date: Option<String>,
    pub total_amount_due: Option<String>,
    pub minimum_amount_due: Option<String>,
    pub statement_period_start: Option<String>,
    pub statement_period_end: Option<String>,
    pub credit_limit: Option<String>,
    pub available_credit_limit: Option<String>,
}

impl ExtractedStatement {
    /// Empty record for `bank`; every optional field starts as `None`
    pub fn new(bank: BankLabel) -> Self {
        Self {
            bank_name: bank,
            cardholder_name: None,
            card_last_4: None,
            statement_date: None,
            payment_due_date: None,
            total_amount_due: None,
            minimum_amount_due: None,
            statement_period_start: None,
            statement_period_end: None,
            credit_limit: None,
            available_credit_limit: None,
        }
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        let slot = match field {
            Field::CardholderName => &self.cardholder_name,
            Field::CardLast4 => &self.card_last_4,
            Field::StatementDate => &self.statement_date,
            Field::PaymentDueDate => &self.payment_due_date,
            Field::TotalAmountDue => &self.total_amount_due,
            Field::MinimumAmountDue => &self.minimum_amount_due,
            Field::StatementPeriodStart => &self.statement_period_start,
            Field::StatementPeriodEnd => &self.statement_period_end,
            Field::CreditLimit => &self.credit_limit,
            Field::AvailableCreditLimit => &self.available_credit_limit,
        };
        slot.as_deref()
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::CardholderName => &mut self.cardholder_name,
            Field::CardLast4 => &mut self.card_last_4,
            Field::StatementDate => &mut self.statement_date,
            Field::PaymentDueDate => &mut self.payment_due_date,
            Field::TotalAmountDue => &mut self.total_amount_due,
            Field::MinimumAmountDue => &mut self.minimum_amount_due,
            Field::StatementPeriodStart => &mut self.statement_period_start,
            Field::StatementPeriodEnd => &mut self.statement_period_end,
            Field::CreditLimit => &mut self.credit_limit,
            Field::AvailableCreditLimit => &mut self.available_credit_limit,
        };
        *slot = Some(value.into());
    }

    /// Number of optional fields that were located
    pub fn found_fields(&self) -> usize {
        Field::ALL.iter().filter(|f| self.get(**f).is_some()).count()
    }
}

/// Dispatcher output.
///
/// Serializes untagged so each variant renders as the bare record: a known
/// layout gives the full schema, an unclassified statement gives exactly
/// `bank_name` and `raw_text`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ParsedStatement {
    Extracted(ExtractedStatement),
    /// Issuer recognised but no layout is implemented for it
    NotImplemented {
        bank_name: BankLabel,
        status: &'static str,
        raw_text: String,
    },
    Unclassified {
        bank_name: BankLabel,
        raw_text: String,
    },
}

impl ParsedStatement {
    pub const NOT_IMPLEMENTED_STATUS: &'static str = "extractor_not_implemented";

    pub fn unclassified(raw_text: impl Into<String>) -> Self {
        ParsedStatement::Unclassified {
            bank_name: BankLabel::Unknown,
            raw_text: raw_text.into(),
        }
    }

    pub fn not_implemented(bank: BankLabel, raw_text: impl Into<String>) -> Self {
        ParsedStatement::NotImplemented {
            bank_name: bank,
            status: Self::NOT_IMPLEMENTED_STATUS,
            raw_text: raw_text.into(),
        }
    }

    pub fn bank(&self) -> BankLabel {
        match self {
            ParsedStatement::Extracted(s) => s.bank_name,
            ParsedStatement::NotImplemented { bank_name, .. }
            | ParsedStatement::Unclassified { bank_name, .. } => *bank_name,
        }
    }

    pub fn extracted(&self) -> Option<&ExtractedStatement> {
        match self {
            ParsedStatement::Extracted(s) => Some(s),
            _ => None,
        }
    }

    /// Raw text carried by records that could not be extracted
    pub fn raw_text(&self) -> Option<&str> {
        match self {
            ParsedStatement::Extracted(_) => None,
            ParsedStatement::NotImplemented { raw_text, .. }
            | ParsedStatement::Unclassified { raw_text, .. } => Some(raw_text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_record_serializes_every_key() {
        let rec = ExtractedStatement::new(BankLabel::HdfcBank);
        let json = serde_json::to_value(&rec).unwrap();
        let obj = json.as_object().unwrap();

        assert_eq!(obj.len(), 11);
        assert_eq!(obj["bank_name"], "HDFC Bank");
        for field in Field::ALL {
            assert!(obj[field.name()].is_null(), "{} should be null", field.name());
        }
    }

    #[test]
    fn test_set_and_get_roundtrip_through_field() {
        let mut rec = ExtractedStatement::new(BankLabel::AxisBank);
        rec.set(Field::CreditLimit, "1,00,000.00");
        rec.set(Field::CardLast4, "1234");

        assert_eq!(rec.credit_limit.as_deref(), Some("1,00,000.00"));
        assert_eq!(rec.get(Field::CardLast4), Some("1234"));
        assert_eq!(rec.get(Field::StatementDate), None);
        assert_eq!(rec.found_fields(), 2);
    }

    #[test]
    fn test_unclassified_has_only_two_keys() {
        let parsed = ParsedStatement::unclassified("hello\n");
        let json = serde_json::to_value(&parsed).unwrap();
        assert_eq!(json, serde_json::json!({"bank_name": "Unknown", "raw_text": "hello\n"}));
        assert_eq!(parsed.bank(), BankLabel::Unknown);
        assert_eq!(parsed.raw_text(), Some("hello\n"));
        assert!(parsed.extracted().is_none());
    }

    #[test]
    fn test_not_implemented_carries_status() {
        let parsed = ParsedStatement::not_implemented(BankLabel::SbiCard, "SBI CARD");
        let json = serde_json::to_value(&parsed).unwrap();
        assert_eq!(json["bank_name"], "SBI Card");
        assert_eq!(json["status"], "extractor_not_implemented");
        assert_eq!(json["raw_text"], "SBI CARD");
    }

    #[test]
    fn test_extracted_record_rejects_foreign_keys() {
        let json = r#"{"bank_name": "Unknown", "raw_text": "x"}"#;
        assert!(serde_json::from_str::<ExtractedStatement>(json).is_err());
    }

    #[test]
    fn test_extractor_coverage() {
        assert!(BankLabel::AxisBank.has_extractor());
        assert!(BankLabel::SyndicateBank.has_extractor());
        assert!(!BankLabel::SbiCard.has_extractor());
        assert!(!BankLabel::Unknown.has_extractor());
        assert_eq!(BankLabel::IdfcFirstBank.to_string(), "IDFC First Bank");
    }
}
