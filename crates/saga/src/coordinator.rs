//! Orchestrator for the order fulfillment saga.

use common::Order;

use crate::result::{Failure, Rejection, SagaResult};
use crate::services::inventory::{InventoryDecision, InventoryService};
use crate::services::payment::PaymentService;
use crate::store::OrderStore;

/// Drives the 3-step fulfillment saga: inventory check, payment,
/// persistence.
///
/// Fail-fast and intentionally without compensation: the first failing
/// step terminates the run and surfaces a single classified result.
/// A payment charged before a later failure is not undone.
pub struct OrderSaga<I, P>
where
    I: InventoryService,
    P: PaymentService,
{
    inventory: I,
    payment: P,
    store: OrderStore,
}

impl<I, P> OrderSaga<I, P>
where
    I: InventoryService,
    P: PaymentService,
{
    /// Creates a saga over the given collaborators and store.
    pub fn new(inventory: I, payment: P, store: OrderStore) -> Self {
        Self {
            inventory,
            payment,
            store,
        }
    }

    /// Runs the saga for one order, strictly sequential.
    ///
    /// The outcome is always a [`SagaResult`]; step failures are folded
    /// into it rather than propagated as errors. Persistence happens
    /// only after payment succeeds and cannot itself fail.
    #[tracing::instrument(skip(self, order), fields(order_id = %order.id()))]
    pub async fn create(&self, order: Order) -> SagaResult {
        metrics::counter!("saga_executions_total").increment(1);
        let saga_start = std::time::Instant::now();

        // Step 1: inventory check
        tracing::info!(step = "check_inventory", "saga step started");
        let decision = match self.inventory.check(&order).await {
            Ok(decision) => decision,
            Err(e) => {
                tracing::warn!(step = "check_inventory", error = %e, "saga step failed");
                metrics::counter!("saga_failed").increment(1);
                return SagaResult::Failed(Failure::Downstream(e.to_string()));
            }
        };

        if decision == InventoryDecision::Unavailable {
            tracing::info!(reason = %Rejection::OutOfStock, "saga rejected");
            metrics::counter!("saga_rejected").increment(1);
            return SagaResult::Rejected(Rejection::OutOfStock);
        }

        // Step 2: payment
        tracing::info!(step = "charge_payment", "saga step started");
        match self.payment.charge(order.id()).await {
            Ok(outcome) => {
                tracing::info!(
                    step = "charge_payment",
                    transaction_id = %outcome.transaction_id,
                    "saga step completed"
                );
            }
            Err(e) => {
                // Chaos-injected failures stay distinguishable here even
                // though the caller only sees a downstream error.
                tracing::warn!(
                    step = "charge_payment",
                    chaos = e.is_simulated(),
                    error = %e,
                    "saga step failed"
                );
                metrics::counter!("saga_failed").increment(1);
                return SagaResult::Failed(Failure::Downstream(e.to_string()));
            }
        }

        // Step 3: persist
        let saved = self.store.save(order);

        let duration = saga_start.elapsed().as_secs_f64();
        metrics::histogram!("saga_duration_seconds").record(duration);
        metrics::counter!("saga_completed").increment(1);
        tracing::info!(duration, "saga completed successfully");

        SagaResult::Success(saved)
    }

    /// The store this saga persists into.
    pub fn store(&self) -> &OrderStore {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::inventory::InMemoryInventoryService;
    use crate::services::payment::InMemoryPaymentService;
    use common::OrderId;

    fn setup() -> (
        OrderSaga<InMemoryInventoryService, InMemoryPaymentService>,
        InMemoryInventoryService,
        InMemoryPaymentService,
        OrderStore,
    ) {
        let inventory = InMemoryInventoryService::new();
        let payment = InMemoryPaymentService::new();
        let store = OrderStore::new();
        let saga = OrderSaga::new(inventory.clone(), payment.clone(), store.clone());
        (saga, inventory, payment, store)
    }

    fn order(id: &str) -> Order {
        Order::new(OrderId::new(id).unwrap())
    }

    #[tokio::test]
    async fn happy_path_persists_the_order() {
        let (saga, inventory, payment, store) = setup();
        let submitted = order("abc123");

        let result = saga.create(submitted.clone()).await;

        assert_eq!(result, SagaResult::Success(submitted.clone()));
        assert_eq!(store.get(submitted.id()), Some(submitted));
        assert_eq!(inventory.check_count(), 1);
        assert_eq!(payment.charge_count(), 1);
    }

    #[tokio::test]
    async fn out_of_stock_rejects_without_invoking_payment() {
        let (saga, inventory, payment, store) = setup();
        inventory.set_available(false);

        let result = saga.create(order("zzz")).await;

        assert_eq!(result, SagaResult::Rejected(Rejection::OutOfStock));
        assert_eq!(payment.charge_count(), 0);
        assert_eq!(store.get(&OrderId::new("zzz").unwrap()), None);
    }

    #[tokio::test]
    async fn inventory_transport_failure_fails_fast() {
        let (saga, inventory, payment, store) = setup();
        inventory.set_fail_on_check(true);

        let result = saga.create(order("abc123")).await;

        assert!(matches!(result, SagaResult::Failed(Failure::Downstream(_))));
        assert_eq!(payment.charge_count(), 0);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn payment_transport_failure_leaves_nothing_persisted() {
        let (saga, _, payment, store) = setup();
        payment.set_fail_on_charge(true);

        let result = saga.create(order("abc123")).await;

        assert!(matches!(result, SagaResult::Failed(Failure::Downstream(_))));
        assert_eq!(payment.charge_count(), 1);
        assert_eq!(store.get(&OrderId::new("abc123").unwrap()), None);
    }

    #[tokio::test]
    async fn chaos_failure_is_a_downstream_error_to_the_caller() {
        let (saga, _, payment, store) = setup();
        payment.set_simulate_timeout(true);

        let result = saga.create(order("abc123")).await;

        // The caller cannot tell chaos from genuine transport failure,
        // but the detail still carries the gateway marker.
        match result {
            SagaResult::Failed(Failure::Downstream(detail)) => {
                assert_eq!(detail, "Payment Gateway Timeout (Simulated)");
            }
            other => panic!("expected Failed, got {other:?}"),
        }
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn repeated_success_for_the_same_id_stays_idempotent() {
        let (saga, _, payment, store) = setup();

        saga.create(order("abc123")).await;
        saga.create(order("abc123")).await;

        assert_eq!(store.len(), 1);
        assert_eq!(payment.charge_count(), 2);
    }
}
