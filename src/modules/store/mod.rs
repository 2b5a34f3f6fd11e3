// Store module

pub mod models;
pub mod services;

pub use models::{
    media_type_for_extension, CreateBillPayload, ProofFile, UpdateBillPayload, UploadReceipt,
    ALLOWED_MEDIA_TYPES,
};
pub use services::{fixture_bills, BillsStore, MockBillsStore, RestBillsStore, MOCK_UPLOAD_URL};
