use rust_decimal::Decimal;
use tokio::sync::RwLock;

use crate::modules::payments::core::record::{PaymentRecord, seed_records};

/// Owns the payment record collection behind a read-write lock. Listing takes
/// the read guard, processing takes the write guard for the full
/// scan-and-update pass, so a snapshot never observes a record mid-mutation.
pub struct PaymentStore {
    records: RwLock<Vec<PaymentRecord>>,
}

impl PaymentStore {
    pub fn new(records: Vec<PaymentRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    pub fn with_seed_data() -> Self {
        Self::new(seed_records())
    }

    /// Snapshot of all records in insertion order.
    pub async fn list(&self) -> Vec<PaymentRecord> {
        self.records.read().await.clone()
    }

    /// Marks every record matching an id in `payment_ids` as selected and
    /// returns the summed amount of the matches. Ids are matched per
    /// occurrence: a duplicate id adds the record's amount once per
    /// occurrence. Unknown ids are skipped without error.
    pub async fn select_and_total(&self, payment_ids: &[i64]) -> Decimal {
        let mut records = self.records.write().await;
        let mut total = Decimal::ZERO;
        for id in payment_ids {
            for record in records.iter_mut() {
                if record.id == *id {
                    record.selected = true;
                    total += record.amount;
                }
            }
        }
        total
    }
}
