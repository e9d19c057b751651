//! Inventory service trait and implementations.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use common::Order;
use remote::RemoteClient;

use crate::error::StepError;

/// Binary availability signal from the inventory collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InventoryDecision {
    Available,
    Unavailable,
}

/// Trait for the inventory-check step.
#[async_trait]
pub trait InventoryService: Send + Sync {
    /// Asks whether the order can be fulfilled from stock.
    async fn check(&self, order: &Order) -> Result<InventoryDecision, StepError>;
}

/// Inventory check over HTTP.
///
/// Posts the order JSON to `{base_url}/check`; the playground inventory
/// endpoint answers a bare `"OK"` when stock is available.
#[derive(Debug, Clone)]
pub struct HttpInventoryService {
    client: RemoteClient,
    base_url: String,
}

impl HttpInventoryService {
    pub fn new(client: RemoteClient, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl InventoryService for HttpInventoryService {
    async fn check(&self, order: &Order) -> Result<InventoryDecision, StepError> {
        let url = format!("{}/check", self.base_url);
        let body = self.client.post_json(&url, order).await?;

        if body == "OK" {
            Ok(InventoryDecision::Available)
        } else {
            Ok(InventoryDecision::Unavailable)
        }
    }
}

#[derive(Debug, Default)]
struct InMemoryInventoryState {
    available: bool,
    fail_on_check: bool,
    check_count: usize,
}

/// In-memory inventory service for testing.
#[derive(Debug, Clone)]
pub struct InMemoryInventoryService {
    state: Arc<RwLock<InMemoryInventoryState>>,
}

impl Default for InMemoryInventoryService {
    fn default() -> Self {
        Self {
            state: Arc::new(RwLock::new(InMemoryInventoryState {
                available: true,
                ..InMemoryInventoryState::default()
            })),
        }
    }
}

impl InMemoryInventoryService {
    /// Creates a service that reports everything as available.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the availability decision for subsequent checks.
    pub fn set_available(&self, available: bool) {
        self.state.write().unwrap().available = available;
    }

    /// Configures the service to fail at the transport level.
    pub fn set_fail_on_check(&self, fail: bool) {
        self.state.write().unwrap().fail_on_check = fail;
    }

    /// Returns how many times `check` was invoked.
    pub fn check_count(&self) -> usize {
        self.state.read().unwrap().check_count
    }
}

#[async_trait]
impl InventoryService for InMemoryInventoryService {
    async fn check(&self, _order: &Order) -> Result<InventoryDecision, StepError> {
        let mut state = self.state.write().unwrap();
        state.check_count += 1;

        if state.fail_on_check {
            return Err(StepError::Transport(remote::RemoteError::ConnectionRefused));
        }

        if state.available {
            Ok(InventoryDecision::Available)
        } else {
            Ok(InventoryDecision::Unavailable)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::OrderId;

    fn order(id: &str) -> Order {
        Order::new(OrderId::new(id).unwrap())
    }

    #[tokio::test]
    async fn available_by_default_and_counts_calls() {
        let service = InMemoryInventoryService::new();

        let decision = service.check(&order("abc123")).await.unwrap();
        assert_eq!(decision, InventoryDecision::Available);
        assert_eq!(service.check_count(), 1);

        service.check(&order("abc123")).await.unwrap();
        assert_eq!(service.check_count(), 2);
    }

    #[tokio::test]
    async fn unavailable_when_configured() {
        let service = InMemoryInventoryService::new();
        service.set_available(false);

        let decision = service.check(&order("zzz")).await.unwrap();
        assert_eq!(decision, InventoryDecision::Unavailable);
    }

    #[tokio::test]
    async fn transport_failure_when_configured() {
        let service = InMemoryInventoryService::new();
        service.set_fail_on_check(true);

        let result = service.check(&order("abc123")).await;
        assert!(matches!(result, Err(StepError::Transport(_))));
        assert_eq!(service.check_count(), 1);
    }
}
