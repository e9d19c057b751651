//! Payment service trait and implementations.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chaos::FaultProfile;
use common::OrderId;
use remote::RemoteClient;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::StepError;

/// Structured record of a settled charge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentOutcome {
    /// Always `"PAID"` on the success path.
    pub status: String,
    /// Identifier assigned by the gateway.
    #[serde(rename = "transactionId")]
    pub transaction_id: String,
}

impl PaymentOutcome {
    /// A settled outcome with the given transaction identifier.
    pub fn paid(transaction_id: impl Into<String>) -> Self {
        Self {
            status: "PAID".to_string(),
            transaction_id: transaction_id.into(),
        }
    }
}

/// Trait for the payment step. A charge is attempted at most once per
/// saga run; retries are nobody's responsibility in this baseline.
#[async_trait]
pub trait PaymentService: Send + Sync {
    /// Charges the order. The identifier is all the gateway needs.
    async fn charge(&self, order_id: &OrderId) -> Result<PaymentOutcome, StepError>;
}

/// Payment over HTTP: posts the order identifier to `{base_url}/payment`
/// and expects a JSON [`PaymentOutcome`] back.
#[derive(Debug, Clone)]
pub struct HttpPaymentService {
    client: RemoteClient,
    base_url: String,
}

impl HttpPaymentService {
    pub fn new(client: RemoteClient, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl PaymentService for HttpPaymentService {
    async fn charge(&self, order_id: &OrderId) -> Result<PaymentOutcome, StepError> {
        let url = format!("{}/payment", self.base_url);
        let body = self
            .client
            .post(&url, Some(order_id.as_str().to_string()))
            .await?;

        serde_json::from_str(&body).map_err(|e| StepError::InvalidResponse {
            service: "payment",
            detail: e.to_string(),
        })
    }
}

/// Payment gateway with the fault injector embedded, mirroring the
/// playground's chaos-enabled controller: uniform latency on every
/// charge, and a configured fraction of charges failing with the
/// simulated gateway timeout.
#[derive(Debug, Clone)]
pub struct ChaosPaymentService {
    profile: FaultProfile,
}

impl ChaosPaymentService {
    pub fn new(profile: FaultProfile) -> Self {
        Self { profile }
    }
}

#[async_trait]
impl PaymentService for ChaosPaymentService {
    async fn charge(&self, order_id: &OrderId) -> Result<PaymentOutcome, StepError> {
        let latency = self.profile.inject_delay().await;
        tracing::debug!(%order_id, ?latency, "processing payment");

        if self.profile.roll_failure() {
            tracing::warn!(%order_id, chaos = true, "payment failed");
            return Err(StepError::SimulatedGatewayTimeout);
        }

        let outcome = PaymentOutcome::paid(Uuid::new_v4().to_string());
        tracing::info!(%order_id, transaction_id = %outcome.transaction_id, "payment success");
        Ok(outcome)
    }
}

/// How the in-memory payment double should fail, if at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum FailMode {
    #[default]
    None,
    Transport,
    Simulated,
}

#[derive(Debug, Default)]
struct InMemoryPaymentState {
    charge_count: usize,
    next_id: u32,
    fail_mode: FailMode,
}

/// In-memory payment service for testing.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPaymentService {
    state: Arc<RwLock<InMemoryPaymentState>>,
}

impl InMemoryPaymentService {
    /// Creates a service where every charge succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures subsequent charges to fail at the transport level.
    pub fn set_fail_on_charge(&self, fail: bool) {
        self.state.write().unwrap().fail_mode =
            if fail { FailMode::Transport } else { FailMode::None };
    }

    /// Configures subsequent charges to fail with the simulated gateway
    /// timeout, as the chaos injector would.
    pub fn set_simulate_timeout(&self, simulate: bool) {
        self.state.write().unwrap().fail_mode =
            if simulate { FailMode::Simulated } else { FailMode::None };
    }

    /// Returns how many times `charge` was invoked.
    pub fn charge_count(&self) -> usize {
        self.state.read().unwrap().charge_count
    }
}

#[async_trait]
impl PaymentService for InMemoryPaymentService {
    async fn charge(&self, _order_id: &OrderId) -> Result<PaymentOutcome, StepError> {
        let mut state = self.state.write().unwrap();
        state.charge_count += 1;

        match state.fail_mode {
            FailMode::Transport => Err(StepError::Transport(
                remote::RemoteError::UnexpectedStatus(500),
            )),
            FailMode::Simulated => Err(StepError::SimulatedGatewayTimeout),
            FailMode::None => {
                state.next_id += 1;
                Ok(PaymentOutcome::paid(format!("{}", state.next_id)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order_id(id: &str) -> OrderId {
        OrderId::new(id).unwrap()
    }

    #[tokio::test]
    async fn charge_succeeds_with_sequential_transaction_ids() {
        let service = InMemoryPaymentService::new();

        let first = service.charge(&order_id("abc123")).await.unwrap();
        let second = service.charge(&order_id("abc123")).await.unwrap();

        assert_eq!(first.status, "PAID");
        assert_eq!(first.transaction_id, "1");
        assert_eq!(second.transaction_id, "2");
        assert_eq!(service.charge_count(), 2);
    }

    #[tokio::test]
    async fn transport_failure_when_configured() {
        let service = InMemoryPaymentService::new();
        service.set_fail_on_charge(true);

        let result = service.charge(&order_id("abc123")).await;
        assert!(matches!(result, Err(StepError::Transport(_))));
        assert_eq!(service.charge_count(), 1);
    }

    #[tokio::test]
    async fn simulated_timeout_when_configured() {
        let service = InMemoryPaymentService::new();
        service.set_simulate_timeout(true);

        let result = service.charge(&order_id("abc123")).await;
        assert_eq!(result, Err(StepError::SimulatedGatewayTimeout));
    }

    #[tokio::test]
    async fn chaos_service_at_zero_rate_always_settles() {
        let service = ChaosPaymentService::new(FaultProfile::disabled());

        let outcome = service.charge(&order_id("abc123")).await.unwrap();
        assert_eq!(outcome.status, "PAID");
        assert!(!outcome.transaction_id.is_empty());
    }

    #[tokio::test]
    async fn chaos_service_at_full_rate_always_times_out() {
        let service = ChaosPaymentService::new(FaultProfile {
            failure_percent: 100,
            min_delay_ms: 0,
            max_delay_ms: 0,
        });

        let result = service.charge(&order_id("abc123")).await;
        assert_eq!(result, Err(StepError::SimulatedGatewayTimeout));
    }

    #[test]
    fn outcome_serializes_with_the_wire_field_name() {
        let outcome = PaymentOutcome::paid("42");
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "PAID");
        assert_eq!(json["transactionId"], "42");
    }
}
