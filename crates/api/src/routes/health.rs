//! Liveness probe.

/// GET /health — fixed liveness payload.
pub async fn check() -> &'static str {
    "OK"
}
