use std::sync::Arc;

use rust_decimal::Decimal;

use crate::modules::payments::core::store::PaymentStore;
use crate::modules::payments::use_cases::process_payment::command::ProcessPayment;
use crate::modules::payments::use_cases::process_payment::decide::{ValidationError, validate};

/// Outcome of a processed batch: the summed amount plus the echoed request
/// fields. Nothing is persisted beyond the selected flags on the store.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentReceipt {
    pub total_amount: Decimal,
    pub payment_method: String,
    pub reference_note: String,
}

pub struct ProcessPaymentHandler {
    store: Arc<PaymentStore>,
}

impl ProcessPaymentHandler {
    pub fn new(store: Arc<PaymentStore>) -> Self {
        Self { store }
    }

    /// Validates the command and, only when every check passes, applies the
    /// selection under the store's write lock. Once validation succeeds the
    /// mutation is unconditional: matching is best-effort and never fails.
    pub async fn handle(&self, command: ProcessPayment) -> Result<PaymentReceipt, ValidationError> {
        validate(&command)?;
        let total_amount = self.store.select_and_total(&command.payment_ids).await;
        Ok(PaymentReceipt {
            total_amount,
            payment_method: command.payment_method,
            reference_note: command.reference_note,
        })
    }
}
