//! HTTP surface for the microcommerce playground.
//!
//! One process serves both sides of the playground: the order endpoint
//! that drives the fulfillment saga, and the pass-through / chaos /
//! trace-relay endpoints the saga and the product flow call back into.
//! Structured logging via tracing, Prometheus metrics via the recorder
//! installed in `main`.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::routing::{get, post};
use metrics_exporter_prometheus::PrometheusHandle;
use remote::RemoteClient;
use saga::{
    ChaosPaymentService, HttpInventoryService, HttpPaymentService, InventoryService, OrderSaga,
    OrderStore, PaymentService,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use config::Config;
use routes::orders::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<I, P>(state: Arc<AppState<I, P>>, metrics_handle: PrometheusHandle) -> Router
where
    I: InventoryService + 'static,
    P: PaymentService + 'static,
{
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check))
        .route("/orders", post(routes::orders::create::<I, P>))
        .route("/orders/{id}", get(routes::orders::get::<I, P>))
        .route("/check", post(routes::inventory::check))
        .route("/payment", post(routes::payment::charge::<I, P>))
        .route("/products", get(routes::products::list::<I, P>))
        .route("/ship", post(routes::shipping::ship))
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates the default application state: saga steps target the
/// configured HTTP services (by default, this same process), payment
/// chaos follows the configured fault profile.
pub fn create_default_state(
    config: &Config,
) -> Arc<AppState<HttpInventoryService, HttpPaymentService>> {
    let client = RemoteClient::new(Duration::from_millis(config.remote_timeout_ms));

    let inventory = HttpInventoryService::new(client.clone(), config.inventory_url.clone());
    let payment = HttpPaymentService::new(client.clone(), config.payment_url.clone());
    let saga = OrderSaga::new(inventory, payment, OrderStore::new());

    Arc::new(AppState {
        saga,
        chaos_payment: ChaosPaymentService::new(config.chaos),
        legacy_client: client,
        legacy_url: config.legacy_url.clone(),
    })
}
