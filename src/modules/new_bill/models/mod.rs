mod form;
mod submission;

pub use form::{NewBillForm, DEFAULT_PCT, EXPENSE_TYPES};
pub use submission::SubmitState;
