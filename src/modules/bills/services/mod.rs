pub mod bills_service;

pub use bills_service::BillsService;
