/// Transient request to mark a batch of payment records as selected. Built
/// per incoming call, validated, consumed and discarded.
#[derive(Debug, Clone)]
pub struct ProcessPayment {
    pub payment_ids: Vec<i64>,
    pub payment_method: String,
    pub reference_note: String,
}
