mod payloads;
mod proof;

pub use payloads::{CreateBillPayload, UpdateBillPayload, UploadReceipt};
pub use proof::{media_type_for_extension, ProofFile, ALLOWED_MEDIA_TYPES};
