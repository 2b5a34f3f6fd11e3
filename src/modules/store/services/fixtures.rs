// Fixture bills
//
// The data set the mock store is seeded with. One bill is stored without
// a proof asset so the degraded row action stays exercised.

use rust_decimal::Decimal;

use crate::modules::bills::models::{BillRecord, BillStatus};

/// Canonical URL the mock store answers proof uploads with
pub const MOCK_UPLOAD_URL: &str = "https://localhost:3456/images/test.jpg";

/// The four bills the mock store is seeded with
pub fn fixture_bills() -> Vec<BillRecord> {
    vec![
        BillRecord {
            id: "47qAXb6fIm2zOKkLzMro".to_string(),
            email: "a@a".to_string(),
            bill_type: "Hôtel et logement".to_string(),
            name: "encore".to_string(),
            amount: Decimal::from(400),
            date: "2004-04-04".to_string(),
            vat: Decimal::from(80),
            pct: Decimal::from(20),
            commentary: "séminaire billed".to_string(),
            file_url: Some(
                "https://test.storage.tld/preview-facture-free-201801-pdf-1.jpg".to_string(),
            ),
            file_name: Some("preview-facture-free-201801-pdf-1.jpg".to_string()),
            status: BillStatus::Pending,
            comment_admin: Some("ok".to_string()),
        },
        BillRecord {
            id: "BeKy5Mo4jkmdfPGYpTxZ".to_string(),
            email: "a@a".to_string(),
            bill_type: "Transports".to_string(),
            name: "test1".to_string(),
            amount: Decimal::from(100),
            date: "2001-01-01".to_string(),
            vat: Decimal::ZERO,
            pct: Decimal::from(20),
            commentary: "plop".to_string(),
            file_url: Some("https://test.storage.tld/1592770761.jpeg".to_string()),
            file_name: Some("1592770761.jpeg".to_string()),
            status: BillStatus::Refused,
            comment_admin: Some("en fait non".to_string()),
        },
        BillRecord {
            id: "UIUZtnPQvnbFnB0ozvJh".to_string(),
            email: "a@a".to_string(),
            bill_type: "Services en ligne".to_string(),
            name: "test3".to_string(),
            amount: Decimal::from(300),
            date: "2003-03-03".to_string(),
            vat: Decimal::from(60),
            pct: Decimal::from(20),
            commentary: String::new(),
            file_url: Some("https://test.storage.tld/facture-client-php-exportee.png".to_string()),
            file_name: Some("facture-client-php-exportee.png".to_string()),
            status: BillStatus::Accepted,
            comment_admin: Some("bon bah d'accord".to_string()),
        },
        BillRecord {
            id: "qcCK3SzECmaZAGRrHjaC".to_string(),
            email: "a@a".to_string(),
            bill_type: "Restaurants et bars".to_string(),
            name: "test2".to_string(),
            amount: Decimal::from(200),
            date: "2002-02-02".to_string(),
            vat: Decimal::from(40),
            pct: Decimal::from(20),
            commentary: "test2".to_string(),
            file_url: None,
            file_name: None,
            status: BillStatus::Refused,
            comment_admin: Some("pas la bonne facture".to_string()),
        },
    ]
}
