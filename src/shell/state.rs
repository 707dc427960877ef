use std::sync::Arc;

use crate::modules::payments::core::store::PaymentStore;
use crate::modules::payments::use_cases::process_payment::handler::ProcessPaymentHandler;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<PaymentStore>,
    pub process_handler: Arc<ProcessPaymentHandler>,
}

impl AppState {
    pub fn new(store: Arc<PaymentStore>) -> Self {
        let process_handler = Arc::new(ProcessPaymentHandler::new(store.clone()));
        Self {
            store,
            process_handler,
        }
    }
}
