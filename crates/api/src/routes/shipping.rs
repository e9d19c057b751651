//! Shipping endpoint: the decode side of the trace relay.

use axum::extract::Query;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ShipParams {
    pub app_trace_ref: Option<String>,
}

/// POST /ship — ship an order, recovering relayed trace provenance.
///
/// The proxy in front of this service discards propagation headers but
/// echoes the query string, so a valid `app_trace_ref` token lets the
/// broken trace segment be stitched back together downstream. A missing
/// or malformed token ships untraced; it is never an error.
#[tracing::instrument(skip(params), fields(restored_trace_parent = tracing::field::Empty))]
pub async fn ship(Query(params): Query<ShipParams>) -> String {
    let restored = trace_relay::restore(params.app_trace_ref.as_deref(), "legacy-warehouse");
    format!("Shipped (Trace Recovery: {})", restored.is_some())
}
