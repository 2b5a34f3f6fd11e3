mod bill;
mod draft;
mod view;

pub use bill::{BillRecord, BillStatus};
pub use draft::BillDraft;
pub use view::{
    BillRow, BillsView, ErrorView, ProofView, GENERIC_ERROR_MESSAGE, PROOF_MODAL_TITLE,
};
