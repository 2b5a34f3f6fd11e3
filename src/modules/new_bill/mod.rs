// New-bill module

pub mod models;
pub mod services;

pub use models::{NewBillForm, SubmitState, EXPENSE_TYPES};
pub use services::{NewBillService, MISSING_PROOF_WARNING, PROOF_TYPE_WARNING};
