pub mod new_bill_service;

pub use new_bill_service::{NewBillService, MISSING_PROOF_WARNING, PROOF_TYPE_WARNING};
