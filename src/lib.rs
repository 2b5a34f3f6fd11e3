//! Billed Employee Expense Workflows Library
//!
//! This library provides the employee-facing workflows of the Billed
//! expense-report application: listing submitted bills and submitting a
//! new bill against the remote bills store.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use modules::bills;
pub use modules::new_bill;
pub use modules::store;
