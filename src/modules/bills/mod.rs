// Bills module

pub mod models;
pub mod services;

pub use models::{BillDraft, BillRecord, BillRow, BillStatus, BillsView, ErrorView, ProofView};
pub use services::BillsService;
