// Bill record model with validation
//
// A bill is an expense-reimbursement request submitted by an employee.
// It carries the expense details, the proof-of-purchase asset and the
// review status; only an administrative reviewer moves a bill out of
// `pending`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::draft::BillDraft;
use crate::core::{AppError, Result};

/// Review status lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BillStatus {
    /// Submitted, waiting for administrative review
    #[serde(rename = "pending")]
    Pending,

    /// Approved for reimbursement
    #[serde(rename = "accepted")]
    Accepted,

    /// Rejected by the reviewer
    #[serde(rename = "refused")]
    Refused,
}

impl Default for BillStatus {
    fn default() -> Self {
        BillStatus::Pending
    }
}

impl std::fmt::Display for BillStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BillStatus::Pending => write!(f, "pending"),
            BillStatus::Accepted => write!(f, "accepted"),
            BillStatus::Refused => write!(f, "refused"),
        }
    }
}

impl std::str::FromStr for BillStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "pending" => Ok(BillStatus::Pending),
            "accepted" => Ok(BillStatus::Accepted),
            "refused" => Ok(BillStatus::Refused),
            other => Err(AppError::validation(format!(
                "Invalid bill status: {}",
                other
            ))),
        }
    }
}

impl BillStatus {
    /// French label shown in the listing
    pub fn display_label(&self) -> &'static str {
        match self {
            BillStatus::Pending => "En attente",
            BillStatus::Accepted => "Accepté",
            BillStatus::Refused => "Refusé",
        }
    }

    /// Whether a stored bill may be rewritten with `new_status`.
    ///
    /// Review is one-way: a pending bill can be accepted or refused, and a
    /// record may always be rewritten with its current status. Reviewed
    /// bills never go back to pending or flip to the other verdict.
    pub fn can_transition_to(&self, new_status: BillStatus) -> bool {
        match (self, new_status) {
            (BillStatus::Pending, _) => true,
            (current, next) => *current == next,
        }
    }
}

/// Represents a persisted expense bill
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillRecord {
    /// Unique identifier, assigned by the store on creation
    pub id: String,

    /// Email of the submitting employee
    pub email: String,

    /// Expense category label
    #[serde(rename = "type")]
    pub bill_type: String,

    /// Short description
    pub name: String,

    /// Expense amount, currency-agnostic
    pub amount: Decimal,

    /// Expense date as an ISO `YYYY-MM-DD` string; kept raw because it is
    /// the sort key and corrupted values must still be listable
    pub date: String,

    /// Tax amount
    pub vat: Decimal,

    /// Tax percentage
    pub pct: Decimal,

    /// Free-text note from the employee
    pub commentary: String,

    /// Location of the uploaded proof asset
    #[serde(rename = "fileUrl", skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,

    /// Original file name of the proof asset
    #[serde(rename = "fileName", skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,

    /// Current review status
    pub status: BillStatus,

    /// Reviewer note, present only after administrative review
    #[serde(rename = "commentAdmin", skip_serializing_if = "Option::is_none")]
    pub comment_admin: Option<String>,
}

impl BillRecord {
    pub fn has_proof(&self) -> bool {
        self.file_url.is_some() && self.file_name.is_some()
    }

    /// Validate the record invariants
    pub fn validate(&self) -> Result<()> {
        Self::validate_amounts(self.amount, self.vat, self.pct)?;
        Self::validate_proof_pairing(&self.file_url, &self.file_name)?;
        Ok(())
    }

    /// Rewrite this record with the contents of a submitted draft.
    ///
    /// This is what the store does when it applies an update: the draft is
    /// validated, the status transition is checked against the stored
    /// status, then the stored fields are replaced.
    pub fn merge_draft(&mut self, draft: &BillDraft) -> Result<()> {
        draft.validate()?;

        if !self.status.can_transition_to(draft.status) {
            return Err(AppError::validation(format!(
                "Invalid status transition from {} to {}",
                self.status, draft.status
            )));
        }

        self.email = draft.email.clone();
        self.bill_type = draft.bill_type.clone();
        self.name = draft.name.clone();
        self.amount = draft.amount;
        self.date = draft.date.clone();
        self.vat = draft.vat;
        self.pct = draft.pct;
        self.commentary = draft.commentary.clone();
        self.file_url = draft.file_url.clone();
        self.file_name = draft.file_name.clone();
        self.status = draft.status;

        Ok(())
    }

    // Validation methods

    pub(crate) fn validate_amounts(amount: Decimal, vat: Decimal, pct: Decimal) -> Result<()> {
        if amount < Decimal::ZERO {
            return Err(AppError::validation("Amount cannot be negative"));
        }

        if vat < Decimal::ZERO {
            return Err(AppError::validation("VAT cannot be negative"));
        }

        if pct < Decimal::ZERO {
            return Err(AppError::validation("Tax percentage cannot be negative"));
        }

        Ok(())
    }

    pub(crate) fn validate_proof_pairing(
        file_url: &Option<String>,
        file_name: &Option<String>,
    ) -> Result<()> {
        match (file_url, file_name) {
            (Some(_), Some(_)) | (None, None) => Ok(()),
            _ => Err(AppError::validation(
                "Proof URL and file name must both be set or both be absent",
            )),
        }
    }
}
