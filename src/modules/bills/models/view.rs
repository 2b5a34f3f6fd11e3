// Listing view models
//
// Pre-shaped data for the host UI: table rows, the proof modal descriptor
// and the failure surface. The host renders these as-is.

use serde::Serialize;

use super::bill::BillRecord;
use crate::core::{dates, AppError};

/// Title of the proof modal
pub const PROOF_MODAL_TITLE: &str = "Justificatif";

/// Message shown when a failure carries no HTTP status
pub const GENERIC_ERROR_MESSAGE: &str = "Une erreur est survenue";

/// One row of the bills table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BillRow {
    pub id: String,

    #[serde(rename = "type")]
    pub bill_type: String,

    pub name: String,

    /// Raw ISO date, the sort key
    pub date: String,

    /// Human-readable form of `date`, e.g. `4 Avr. 04`
    pub display_date: String,

    /// Amount with the currency suffix, e.g. `400 €`
    pub amount_label: String,

    /// French review-status label
    pub status_label: String,

    /// Proof asset location, absent when the bill was stored without one
    pub proof_url: Option<String>,
}

impl BillRow {
    pub fn from_record(record: &BillRecord) -> Self {
        Self {
            id: record.id.clone(),
            bill_type: record.bill_type.clone(),
            name: record.name.clone(),
            date: record.date.clone(),
            display_date: dates::format_display(&record.date),
            amount_label: format!("{} €", record.amount),
            status_label: record.status.display_label().to_string(),
            proof_url: record.file_url.clone(),
        }
    }
}

/// Modal descriptor for a row's proof asset
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProofView {
    pub title: String,
    pub image_url: String,
}

impl ProofView {
    /// `None` when the bill was stored without a proof; the host disables
    /// the control instead of opening an empty modal.
    pub fn for_row(row: &BillRow) -> Option<Self> {
        row.proof_url.as_ref().map(|url| Self {
            title: PROOF_MODAL_TITLE.to_string(),
            image_url: url.clone(),
        })
    }
}

/// Static failure surface rendered when the listing cannot load
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorView {
    pub message: String,
}

impl ErrorView {
    /// Select the displayed message from the structured error, never from
    /// message text.
    pub fn from_error(error: &AppError) -> Self {
        let message = match error.status() {
            Some(status) => format!("Erreur {}", status),
            None => GENERIC_ERROR_MESSAGE.to_string(),
        };
        Self { message }
    }
}

/// Outcome of loading the listing
#[derive(Debug, Clone, PartialEq)]
pub enum BillsView {
    Loaded(Vec<BillRow>),
    Failed(ErrorView),
}

impl BillsView {
    pub fn rows(&self) -> Option<&[BillRow]> {
        match self {
            BillsView::Loaded(rows) => Some(rows),
            BillsView::Failed(_) => None,
        }
    }

    pub fn error(&self) -> Option<&ErrorView> {
        match self {
            BillsView::Failed(view) => Some(view),
            BillsView::Loaded(_) => None,
        }
    }
}
