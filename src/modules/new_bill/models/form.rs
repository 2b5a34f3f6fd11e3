// New-bill form state
//
// The raw field values of the submission form, as the host captured them.
// Numeric fields stay text here; parsing is lenient and happens when the
// draft is built, because a typo must never block a submission.

use rust_decimal::Decimal;

use crate::modules::bills::models::{BillDraft, BillStatus};

/// Expense categories offered by the form
pub const EXPENSE_TYPES: [&str; 7] = [
    "Transports",
    "Restaurants et bars",
    "Hôtel et logement",
    "Services en ligne",
    "IT et électronique",
    "Équipement et matériel",
    "Fournitures de bureau",
];

/// Tax percentage applied when the field is blank or unparseable
pub const DEFAULT_PCT: u32 = 20;

/// Raw values of the new-bill form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBillForm {
    pub expense_type: String,
    pub name: String,
    pub date: String,
    pub amount: String,
    pub vat: String,
    pub pct: String,
    pub commentary: String,
}

impl Default for NewBillForm {
    fn default() -> Self {
        Self {
            expense_type: EXPENSE_TYPES[0].to_string(),
            name: String::new(),
            date: String::new(),
            amount: String::new(),
            vat: String::new(),
            pct: String::new(),
            commentary: String::new(),
        }
    }
}

impl NewBillForm {
    /// Build the pending draft for the submitting employee.
    ///
    /// Parsing is best-effort: a numeric field that does not parse becomes
    /// `0`, except the percentage which falls back to its default.
    pub fn build_draft(&self, email: &str) -> BillDraft {
        BillDraft {
            email: email.to_string(),
            bill_type: self.expense_type.clone(),
            name: self.name.clone(),
            amount: parse_amount(&self.amount),
            date: self.date.clone(),
            vat: parse_amount(&self.vat),
            pct: parse_pct(&self.pct),
            commentary: self.commentary.clone(),
            file_url: None,
            file_name: None,
            status: BillStatus::Pending,
        }
    }
}

fn parse_amount(raw: &str) -> Decimal {
    raw.trim().parse().unwrap_or(Decimal::ZERO)
}

fn parse_pct(raw: &str) -> Decimal {
    raw.trim()
        .parse()
        .unwrap_or_else(|_| Decimal::from(DEFAULT_PCT))
}
