use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::modules::payments::use_cases::process_payment::command::ProcessPayment;
use crate::shell::state::AppState;

pub const SUCCESS_MESSAGE: &str = "Payment processed successfully";
pub const MALFORMED_REQUEST_MESSAGE: &str = "Invalid request payload";

// Absent keys decode to their zero values, like the original service: a body
// without `payment_ids` reaches the required-fields check instead of being
// rejected as malformed.
#[derive(Default, Deserialize)]
#[serde(default)]
pub struct ProcessPaymentBody {
    pub payment_ids: Vec<i64>,
    pub payment_method: String,
    pub reference_note: String,
}

#[derive(Serialize)]
pub struct ProcessPaymentResponse {
    pub message: &'static str,
    pub total_amount: Decimal,
    pub payment_method: String,
    pub reference_note: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<ProcessPaymentBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => {
            return (StatusCode::BAD_REQUEST, MALFORMED_REQUEST_MESSAGE).into_response();
        }
    };

    let command = ProcessPayment {
        payment_ids: body.payment_ids,
        payment_method: body.payment_method,
        reference_note: body.reference_note,
    };

    match state.process_handler.handle(command).await {
        Ok(receipt) => Json(ProcessPaymentResponse {
            message: SUCCESS_MESSAGE,
            total_amount: receipt.total_amount,
            payment_method: receipt.payment_method,
            reference_note: receipt.reference_note,
        })
        .into_response(),
        Err(err) => (StatusCode::BAD_REQUEST, err.to_string()).into_response(),
    }
}
