// Bills store contract
//
// The remote persistence collaborator. Workflows consume it as a trait
// object; the crate ships a REST implementation and a fixture-backed mock.

use async_trait::async_trait;

use crate::core::Result;
use crate::modules::bills::models::BillRecord;
use crate::modules::store::models::{CreateBillPayload, UpdateBillPayload, UploadReceipt};

/// Remote store for the `bills` resource
#[async_trait]
pub trait BillsStore: Send + Sync {
    /// Fetch every bill visible to the caller
    async fn list(&self) -> Result<Vec<BillRecord>>;

    /// Upload a proof and open a bill. The receipt carries the asset
    /// location and the selector the follow-up update must target.
    async fn create(&self, payload: CreateBillPayload) -> Result<UploadReceipt>;

    /// Rewrite the bill identified by the payload selector
    async fn update(&self, payload: UpdateBillPayload) -> Result<BillRecord>;

    /// Implementation name, for diagnostics
    fn name(&self) -> &str;
}
