// Test Data Factory
//
// Canned domain objects matching the fixture data set, so workflow tests
// read like the scenarios they verify.

use rust_decimal::Decimal;

use billed::bills::{BillRecord, BillStatus};
use billed::core::Session;
use billed::new_bill::NewBillForm;
use billed::store::ProofFile;

pub struct TestDataFactory;

impl TestDataFactory {
    /// The signed-in employee the fixture bills belong to
    pub fn employee_session() -> Session {
        Session::employee("a@a")
    }

    /// A jpg proof the validator accepts
    pub fn jpg_proof() -> ProofFile {
        ProofFile::new(
            "preview-facture-free-201801-pdf-1.jpg",
            "image/jpeg",
            vec![0xff, 0xd8, 0xff, 0xe0],
        )
    }

    /// A file the validator refuses
    pub fn video_file() -> ProofFile {
        ProofFile::new("vacances.mp4", "video/mp4", vec![0x00, 0x00, 0x00, 0x18])
    }

    /// A completely filled form matching the hotel fixture bill
    pub fn filled_form() -> NewBillForm {
        NewBillForm {
            expense_type: "Hôtel et logement".to_string(),
            name: "encore".to_string(),
            date: "2004-04-04".to_string(),
            amount: "400".to_string(),
            vat: "80".to_string(),
            pct: "20".to_string(),
            commentary: "séminaire billed".to_string(),
        }
    }

    /// Minimal pending record for listing scenarios that seed their own data
    pub fn bill_record(id: &str, date: &str) -> BillRecord {
        BillRecord {
            id: id.to_string(),
            email: "a@a".to_string(),
            bill_type: "Transports".to_string(),
            name: format!("note {}", id),
            amount: Decimal::from(100),
            date: date.to_string(),
            vat: Decimal::from(20),
            pct: Decimal::from(20),
            commentary: String::new(),
            file_url: Some(format!("https://test.storage.tld/{}.jpg", id)),
            file_name: Some(format!("{}.jpg", id)),
            status: BillStatus::Pending,
            comment_admin: None,
        }
    }
}
