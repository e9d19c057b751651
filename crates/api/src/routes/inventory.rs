//! Inventory pass-through endpoint.

/// POST /check — availability signal for the saga's inventory step.
///
/// A pure pass-through with no invariants of its own; the posted order
/// body is accepted and ignored.
pub async fn check() -> &'static str {
    "OK"
}
