// Store call payloads
//
// Request and response shapes of the bills store contract.

use serde::{Deserialize, Serialize};

use super::proof::ProofFile;
use crate::modules::bills::models::BillDraft;

/// Request to upload a proof and open a bill for the submitting employee
#[derive(Debug, Clone, PartialEq)]
pub struct CreateBillPayload {
    pub file: ProofFile,
    pub email: String,
}

/// Result of the create call: where the proof landed and the identifier
/// the follow-up update must target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadReceipt {
    #[serde(rename = "fileUrl")]
    pub file_url: String,

    #[serde(rename = "fileName")]
    pub file_name: String,

    pub key: String,
}

/// Request to rewrite the bill identified by `selector`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateBillPayload {
    pub data: BillDraft,
    pub selector: String,
}
