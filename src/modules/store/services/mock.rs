// Mock bills store
//
// Fixture-backed implementation of the store contract so the workflows can
// run without a backend. Supports one-shot failure injection per operation
// and records every payload it receives, which is what the workflow tests
// assert exactly-once behavior against.

use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use uuid::Uuid;

use crate::core::{AppError, Result};
use crate::modules::bills::models::{BillRecord, BillStatus};
use crate::modules::store::models::{CreateBillPayload, UpdateBillPayload, UploadReceipt};

use super::fixtures::{fixture_bills, MOCK_UPLOAD_URL};
use super::store_trait::BillsStore;

/// In-memory bills store backed by fixture data
#[derive(Default)]
pub struct MockBillsStore {
    records: Mutex<Vec<BillRecord>>,
    list_failure: Mutex<Option<u16>>,
    create_failure: Mutex<Option<u16>>,
    update_failure: Mutex<Option<u16>>,
    list_calls: AtomicUsize,
    created: Mutex<Vec<CreateBillPayload>>,
    updated: Mutex<Vec<UpdateBillPayload>>,
}

impl MockBillsStore {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with the four fixture bills
    pub fn with_fixtures() -> Self {
        let store = Self::new();
        store.seed(fixture_bills());
        store
    }

    /// Replace the stored records
    pub fn seed(&self, records: Vec<BillRecord>) {
        *self.records.lock().unwrap() = records;
    }

    /// Make the next `list` call fail with the given HTTP status
    pub fn fail_next_list(&self, status: u16) {
        *self.list_failure.lock().unwrap() = Some(status);
    }

    /// Make the next `create` call fail with the given HTTP status
    pub fn fail_next_create(&self, status: u16) {
        *self.create_failure.lock().unwrap() = Some(status);
    }

    /// Make the next `update` call fail with the given HTTP status
    pub fn fail_next_update(&self, status: u16) {
        *self.update_failure.lock().unwrap() = Some(status);
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    /// Payloads received by `create`, in call order
    pub fn created_payloads(&self) -> Vec<CreateBillPayload> {
        self.created.lock().unwrap().clone()
    }

    /// Payloads received by `update`, in call order
    pub fn update_payloads(&self) -> Vec<UpdateBillPayload> {
        self.updated.lock().unwrap().clone()
    }

    /// Current stored records
    pub fn records(&self) -> Vec<BillRecord> {
        self.records.lock().unwrap().clone()
    }

    fn take_failure(slot: &Mutex<Option<u16>>) -> Option<u16> {
        slot.lock().unwrap().take()
    }

    fn stub_record(key: &str, payload: &CreateBillPayload, receipt: &UploadReceipt) -> BillRecord {
        BillRecord {
            id: key.to_string(),
            email: payload.email.clone(),
            bill_type: String::new(),
            name: String::new(),
            amount: Decimal::ZERO,
            date: String::new(),
            vat: Decimal::ZERO,
            pct: Decimal::ZERO,
            commentary: String::new(),
            file_url: Some(receipt.file_url.clone()),
            file_name: Some(receipt.file_name.clone()),
            status: BillStatus::Pending,
            comment_admin: None,
        }
    }
}

#[async_trait]
impl BillsStore for MockBillsStore {
    async fn list(&self) -> Result<Vec<BillRecord>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(status) = Self::take_failure(&self.list_failure) {
            return Err(AppError::api(status));
        }

        Ok(self.records.lock().unwrap().clone())
    }

    async fn create(&self, payload: CreateBillPayload) -> Result<UploadReceipt> {
        self.created.lock().unwrap().push(payload.clone());

        if let Some(status) = Self::take_failure(&self.create_failure) {
            return Err(AppError::api(status));
        }

        let key = Uuid::new_v4().to_string();
        let receipt = UploadReceipt {
            file_url: MOCK_UPLOAD_URL.to_string(),
            file_name: payload.file.file_name.clone(),
            key: key.clone(),
        };

        let stub = Self::stub_record(&key, &payload, &receipt);
        self.records.lock().unwrap().push(stub);

        Ok(receipt)
    }

    async fn update(&self, payload: UpdateBillPayload) -> Result<BillRecord> {
        self.updated.lock().unwrap().push(payload.clone());

        if let Some(status) = Self::take_failure(&self.update_failure) {
            return Err(AppError::api(status));
        }

        let mut records = self.records.lock().unwrap();
        let record = records
            .iter_mut()
            .find(|record| record.id == payload.selector)
            .ok_or_else(|| AppError::api(404))?;

        if let Err(err) = record.merge_draft(&payload.data) {
            tracing::debug!(error = %err, selector = %payload.selector, "mock store refused update");
            return Err(AppError::api(400));
        }

        Ok(record.clone())
    }

    fn name(&self) -> &str {
        "mock"
    }
}
