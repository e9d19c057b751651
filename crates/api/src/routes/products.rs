//! Product listing endpoint: the encode side of the trace relay.

use std::sync::Arc;

use axum::extract::State;
use saga::{InventoryService, PaymentService};
use trace_relay::TraceContext;

use crate::routes::orders::AppState;

/// GET /products — list products, consulting the legacy warehouse.
///
/// The warehouse sits behind a proxy that strips propagation headers, so
/// the current trace identifiers ride along as the `app_trace_ref` query
/// parameter instead. A warehouse failure degrades the payload rather
/// than failing the request.
#[tracing::instrument(skip(state))]
pub async fn list<I, P>(State(state): State<Arc<AppState<I, P>>>) -> String
where
    I: InventoryService + 'static,
    P: PaymentService + 'static,
{
    let ctx = TraceContext::generate(&mut rand::thread_rng());
    let token = trace_relay::encode(&ctx);
    let url = format!(
        "{}/products?{}={}",
        state.legacy_url,
        trace_relay::RELAY_PARAM,
        token
    );

    match state.legacy_client.get(&url).await {
        Ok(body) => format!("Product List | {body}"),
        Err(e) => {
            tracing::warn!(error = %e, "legacy warehouse call degraded");
            format!("Product List | Legacy Error: {e}")
        }
    }
}
