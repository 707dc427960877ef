use rust_decimal::Decimal;
use serde::Serialize;

/// A fixed in-memory entry representing an amount owed. Ids are unique,
/// assigned at construction and never change; only `selected` mutates, and
/// only from false to true.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentRecord {
    pub id: i64,
    pub description: String,
    pub amount: Decimal,
    pub selected: bool,
}

impl PaymentRecord {
    pub fn new(id: i64, description: impl Into<String>, amount: Decimal) -> Self {
        Self {
            id,
            description: description.into(),
            amount,
            selected: false,
        }
    }
}

/// The collection the service starts with. Created once at process start,
/// lives for the process lifetime.
pub fn seed_records() -> Vec<PaymentRecord> {
    vec![
        PaymentRecord::new(1, "Rent for July", Decimal::new(2_500_00, 2)),
        PaymentRecord::new(2, "Rent for August", Decimal::new(2_500_00, 2)),
        PaymentRecord::new(3, "Rent for September", Decimal::new(2_500_00, 2)),
    ]
}
