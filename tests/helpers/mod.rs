// Test Helper Modules
//
// Shared infrastructure for the workflow test suites: canned domain data
// and a navigator that records where the workflows send the user.
//
// Each test binary pulls this in with a path attribute:
//
//   #[path = "../helpers/mod.rs"]
//   mod helpers;
//
// Usage:
//   let navigator = Arc::new(RecordingNavigator::new());
//   let store = Arc::new(MockBillsStore::with_fixtures());
//   let form = TestDataFactory::filled_form();

pub mod factories;
pub mod navigation;

// Re-export commonly used types and functions
pub use factories::*;
pub use navigation::*;

/// Install the test tracing subscriber, controlled through `RUST_LOG`
/// (e.g. `RUST_LOG=billed=debug cargo test`)
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "billed=info".into()),
        )
        .with_test_writer()
        .try_init();
}
