// Draft bill under construction
//
// A draft is the not-yet-persisted shape of a bill: everything a record
// carries except the store-assigned identifier. The store's update call
// receives it as the `data` payload.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::bill::{BillRecord, BillStatus};
use crate::core::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillDraft {
    pub email: String,

    #[serde(rename = "type")]
    pub bill_type: String,

    pub name: String,

    pub amount: Decimal,

    pub date: String,

    pub vat: Decimal,

    pub pct: Decimal,

    pub commentary: String,

    #[serde(rename = "fileUrl", skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,

    #[serde(rename = "fileName", skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,

    pub status: BillStatus,
}

impl BillDraft {
    /// Attach the upload result to the draft. URL and file name always
    /// travel together.
    pub fn attach_proof(&mut self, file_url: impl Into<String>, file_name: impl Into<String>) {
        self.file_url = Some(file_url.into());
        self.file_name = Some(file_name.into());
    }

    pub fn has_proof(&self) -> bool {
        self.file_url.is_some() && self.file_name.is_some()
    }

    /// Same invariants the persisted record obeys
    pub fn validate(&self) -> Result<()> {
        BillRecord::validate_amounts(self.amount, self.vat, self.pct)?;
        BillRecord::validate_proof_pairing(&self.file_url, &self.file_name)?;
        Ok(())
    }
}
