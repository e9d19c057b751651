//! Order creation and lookup endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use common::{Order, OrderId};
use remote::RemoteClient;
use saga::{ChaosPaymentService, InventoryService, OrderSaga, PaymentService, SagaResult};

use crate::error::ApiError;

/// Shared application state accessible from all handlers.
pub struct AppState<I: InventoryService, P: PaymentService> {
    pub saga: OrderSaga<I, P>,
    pub chaos_payment: ChaosPaymentService,
    pub legacy_client: RemoteClient,
    pub legacy_url: String,
}

/// POST /orders — run the fulfillment saga for the submitted order.
///
/// Outcome mapping: saga success is 201 with the persisted order, an
/// out-of-stock rejection is 409, and any downstream failure is 502.
#[tracing::instrument(skip(state, order), fields(order_id = %order.id()))]
pub async fn create<I, P>(
    State(state): State<Arc<AppState<I, P>>>,
    Json(order): Json<Order>,
) -> Response
where
    I: InventoryService + 'static,
    P: PaymentService + 'static,
{
    match state.saga.create(order).await {
        SagaResult::Success(order) => (StatusCode::CREATED, Json(order)).into_response(),
        SagaResult::Rejected(reason) => (
            StatusCode::CONFLICT,
            Json(serde_json::json!({ "error": reason.as_str() })),
        )
            .into_response(),
        SagaResult::Failed(failure) => (
            StatusCode::BAD_GATEWAY,
            Json(serde_json::json!({ "error": failure.to_string() })),
        )
            .into_response(),
    }
}

/// GET /orders/{id} — load a persisted order from the store.
#[tracing::instrument(skip(state))]
pub async fn get<I, P>(
    State(state): State<Arc<AppState<I, P>>>,
    Path(id): Path<String>,
) -> Result<Json<Order>, ApiError>
where
    I: InventoryService + 'static,
    P: PaymentService + 'static,
{
    let id = OrderId::new(id).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    state
        .saga
        .store()
        .get(&id)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Order {id} not found")))
}
