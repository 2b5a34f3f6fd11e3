pub mod fixtures;
pub mod mock;
pub mod rest;
pub mod store_trait;

pub use fixtures::{fixture_bills, MOCK_UPLOAD_URL};
pub use mock::MockBillsStore;
pub use rest::RestBillsStore;
pub use store_trait::BillsStore;
