//! Caller-visible saga outcomes.

use common::Order;
use serde::Serialize;

/// Why the saga rejected an order without attempting payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Rejection {
    /// Inventory reported the order cannot be fulfilled.
    OutOfStock,
}

impl Rejection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rejection::OutOfStock => "Out of Stock",
        }
    }
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Why the saga failed partway through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Failure {
    /// A downstream step failed. Transport or chaos, the caller does
    /// not get to distinguish.
    Downstream(String),
}

impl std::fmt::Display for Failure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Failure::Downstream(detail) => write!(f, "downstream error: {detail}"),
        }
    }
}

/// Tagged outcome of one saga run.
///
/// A rejection is a first-class business outcome, not an error path;
/// only `Failed` indicates something went wrong beneath the saga.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SagaResult {
    /// All steps completed; the order was persisted.
    Success(Order),
    /// Inventory declined; payment was never invoked.
    Rejected(Rejection),
    /// A step failed; nothing was persisted.
    Failed(Failure),
}

impl SagaResult {
    pub fn is_success(&self) -> bool {
        matches!(self, SagaResult::Success(_))
    }
}
