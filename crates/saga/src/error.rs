//! Saga step error types.

use remote::RemoteError;
use thiserror::Error;

/// Failure of a single saga step, before the orchestrator folds it into
/// a caller-visible [`crate::SagaResult`].
///
/// Chaos-injected failures keep their own variant so logs and traces can
/// tell them from genuine transport faults; the saga's caller never sees
/// the distinction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StepError {
    /// The remote call itself failed (timeout, refused, bad status).
    #[error("transport failure: {0}")]
    Transport(#[from] RemoteError),

    /// The fault injector forced this failure. The message is the
    /// recognizable marker the simulated payment gateway emits.
    #[error("Payment Gateway Timeout (Simulated)")]
    SimulatedGatewayTimeout,

    /// The peer answered, but with a payload this side cannot use.
    #[error("invalid response from {service}: {detail}")]
    InvalidResponse { service: &'static str, detail: String },
}

impl StepError {
    /// Returns true if this failure was manufactured by the fault
    /// injector rather than observed on the wire.
    pub fn is_simulated(&self) -> bool {
        matches!(self, StepError::SimulatedGatewayTimeout)
    }
}
