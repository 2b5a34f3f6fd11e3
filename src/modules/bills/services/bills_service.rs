// Bills listing workflow
//
// Fetches the employee's bills from the store and shapes them for the
// listing page: most recent first, dates and statuses formatted for
// display. A failed fetch becomes a typed error surface instead of rows.

use std::sync::Arc;

use crate::core::{Navigator, Route};
use crate::modules::bills::models::{BillRecord, BillRow, BillsView, ErrorView, ProofView};
use crate::modules::store::BillsStore;

/// Employee-facing bills listing workflow
pub struct BillsService {
    store: Arc<dyn BillsStore>,
    navigator: Arc<dyn Navigator>,
}

impl BillsService {
    pub fn new(store: Arc<dyn BillsStore>, navigator: Arc<dyn Navigator>) -> Self {
        Self { store, navigator }
    }

    /// Fetch the bills and shape them for display, most recent first
    pub async fn load_bills(&self) -> BillsView {
        match self.store.list().await {
            Ok(records) => {
                tracing::debug!(
                    store = self.store.name(),
                    count = records.len(),
                    "bills loaded"
                );
                BillsView::Loaded(Self::to_rows(records))
            }
            Err(err) => {
                tracing::error!(store = self.store.name(), error = %err, "failed to load bills");
                BillsView::Failed(ErrorView::from_error(&err))
            }
        }
    }

    /// Modal descriptor for a row's proof, `None` when the bill has none
    pub fn proof_view(&self, row: &BillRow) -> Option<ProofView> {
        ProofView::for_row(row)
    }

    /// Leave the listing for the new-bill form
    pub fn open_new_bill(&self) {
        self.navigator.navigate(Route::NewBill);
    }

    fn to_rows(mut records: Vec<BillRecord>) -> Vec<BillRow> {
        // ISO dates sort lexicographically; ties keep their input order
        records.sort_by(|a, b| b.date.cmp(&a.date));
        records.iter().map(BillRow::from_record).collect()
    }
}
