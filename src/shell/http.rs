use axum::{
    Router,
    routing::{get, post},
};

use crate::modules::payments::use_cases::list_payments::inbound::http as list_http;
use crate::modules::payments::use_cases::process_payment::inbound::http as process_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/payments", get(list_http::handle))
        .route("/process-payment", post(process_http::handle))
        .with_state(state)
}
