//! Chaos-enabled payment gateway endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use common::OrderId;
use saga::{InventoryService, PaymentService};

use crate::error::ApiError;
use crate::routes::orders::AppState;

/// POST /payment — charge the order named in the request body.
///
/// Latency and failure are injected per the configured fault profile; an
/// injected failure answers 500 with the simulated-gateway-timeout
/// marker, recognizably distinct from real transport failure.
#[tracing::instrument(skip(state, order_id))]
pub async fn charge<I, P>(
    State(state): State<Arc<AppState<I, P>>>,
    order_id: String,
) -> Response
where
    I: InventoryService + 'static,
    P: PaymentService + 'static,
{
    let order_id = match OrderId::new(order_id) {
        Ok(id) => id,
        Err(e) => return ApiError::BadRequest(e.to_string()).into_response(),
    };

    match state.chaos_payment.charge(&order_id).await {
        Ok(outcome) => Json(outcome).into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
    }
}
