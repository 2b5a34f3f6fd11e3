// New-bill submission workflow integration tests
//
// Drives NewBillService end to end against the mock store: the two-step
// create/update pipeline, the sequenced navigation, the in-flight guard
// and the logged-but-swallowed failure paths.

use std::sync::Arc;

use rust_decimal_macros::dec;

use billed::bills::BillStatus;
use billed::core::{ErrorKind, Route};
use billed::new_bill::{NewBillService, SubmitState};
use billed::store::{MockBillsStore, MOCK_UPLOAD_URL};

#[path = "../helpers/mod.rs"]
mod helpers;

use helpers::{init_tracing, RecordingNavigator, TestDataFactory};

fn service() -> (NewBillService, Arc<MockBillsStore>, Arc<RecordingNavigator>) {
    init_tracing();
    let store = Arc::new(MockBillsStore::new());
    let navigator = Arc::new(RecordingNavigator::new());
    let service = NewBillService::new(
        store.clone(),
        navigator.clone(),
        TestDataFactory::employee_session(),
    );
    (service, store, navigator)
}

#[tokio::test]
async fn test_submission_creates_updates_then_navigates_once() {
    let (mut service, store, navigator) = service();

    service.select_proof(TestDataFactory::jpg_proof()).unwrap();
    let state = service.submit(&TestDataFactory::filled_form()).await;

    assert_eq!(state, SubmitState::Succeeded);
    assert_eq!(store.created_payloads().len(), 1);
    assert_eq!(store.update_payloads().len(), 1);
    assert_eq!(navigator.routes(), vec![Route::Bills]);
}

#[tokio::test]
async fn test_submitted_record_carries_the_form_and_the_upload() {
    let (mut service, store, _) = service();

    service.select_proof(TestDataFactory::jpg_proof()).unwrap();
    service.submit(&TestDataFactory::filled_form()).await;

    let records = store.records();
    assert_eq!(records.len(), 1);

    let bill = &records[0];
    assert_eq!(bill.email, "a@a");
    assert_eq!(bill.bill_type, "Hôtel et logement");
    assert_eq!(bill.amount, dec!(400));
    assert_eq!(bill.vat, dec!(80));
    assert_eq!(bill.pct, dec!(20));
    assert_eq!(bill.date, "2004-04-04");
    assert_eq!(bill.status, BillStatus::Pending);
    assert_eq!(bill.file_url.as_deref(), Some(MOCK_UPLOAD_URL));
    assert_eq!(
        bill.file_name.as_deref(),
        Some("preview-facture-free-201801-pdf-1.jpg")
    );
    bill.validate().unwrap();
}

#[tokio::test]
async fn test_update_targets_the_selector_from_the_receipt() {
    let (mut service, store, _) = service();

    service.select_proof(TestDataFactory::jpg_proof()).unwrap();
    service.submit(&TestDataFactory::filled_form()).await;

    let updates = store.update_payloads();
    assert_eq!(updates.len(), 1);
    assert_eq!(updates[0].selector, store.records()[0].id);
    assert!(updates[0].data.has_proof());
}

#[tokio::test]
async fn test_failed_upload_keeps_the_user_on_the_form() {
    let (mut service, store, navigator) = service();
    store.fail_next_create(500);

    service.select_proof(TestDataFactory::jpg_proof()).unwrap();
    let state = service.submit(&TestDataFactory::filled_form()).await;

    assert_eq!(state, SubmitState::Failed(ErrorKind::Api));
    assert_eq!(navigator.navigation_count(), 0);
    assert!(store.update_payloads().is_empty());
}

#[tokio::test]
async fn test_failed_update_does_not_navigate() {
    let (mut service, store, navigator) = service();
    store.fail_next_update(404);

    service.select_proof(TestDataFactory::jpg_proof()).unwrap();
    let state = service.submit(&TestDataFactory::filled_form()).await;

    assert_eq!(state, SubmitState::Failed(ErrorKind::Api));
    assert_eq!(navigator.navigation_count(), 0);
}

#[tokio::test]
async fn test_submit_without_a_proof_never_reaches_the_store() {
    let (mut service, store, navigator) = service();

    let state = service.submit(&TestDataFactory::filled_form()).await;

    assert_eq!(state, SubmitState::Failed(ErrorKind::Validation));
    assert!(store.created_payloads().is_empty());
    assert!(store.update_payloads().is_empty());
    assert_eq!(navigator.navigation_count(), 0);
}

#[tokio::test]
async fn test_refused_proof_blocks_the_submission() {
    let (mut service, store, _) = service();

    assert!(service.select_proof(TestDataFactory::video_file()).is_err());
    let state = service.submit(&TestDataFactory::filled_form()).await;

    assert_eq!(state, SubmitState::Failed(ErrorKind::Validation));
    assert!(store.created_payloads().is_empty());
}

#[tokio::test]
async fn test_a_succeeded_form_ignores_further_submits() {
    let (mut service, store, navigator) = service();

    service.select_proof(TestDataFactory::jpg_proof()).unwrap();
    service.submit(&TestDataFactory::filled_form()).await;
    assert!(!service.can_submit());

    let state = service.submit(&TestDataFactory::filled_form()).await;

    assert_eq!(state, SubmitState::Succeeded);
    assert_eq!(store.created_payloads().len(), 1);
    assert_eq!(store.update_payloads().len(), 1);
    assert_eq!(navigator.navigation_count(), 1);
}

#[tokio::test]
async fn test_a_failed_form_may_be_retried() {
    let (mut service, store, navigator) = service();
    store.fail_next_create(500);

    service.select_proof(TestDataFactory::jpg_proof()).unwrap();
    let first = service.submit(&TestDataFactory::filled_form()).await;
    assert_eq!(first, SubmitState::Failed(ErrorKind::Api));
    assert!(service.can_submit());

    let second = service.submit(&TestDataFactory::filled_form()).await;

    assert_eq!(second, SubmitState::Succeeded);
    assert_eq!(store.created_payloads().len(), 2);
    assert_eq!(store.update_payloads().len(), 1);
    assert_eq!(navigator.routes(), vec![Route::Bills]);
}
