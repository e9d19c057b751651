//! Fail-fast order fulfillment saga.
//!
//! The saga chains three dependent steps, strictly sequential:
//! 1. Check inventory
//! 2. Charge payment
//! 3. Persist the order
//!
//! There is deliberately no compensation: a failure after payment has
//! been charged leaves the charge in place. This is a recognized gap
//! carried over from the modeled system, not a guarantee. Production
//! hardening would add compensating actions or idempotency keys here.

pub mod coordinator;
pub mod error;
pub mod result;
pub mod services;
pub mod store;

pub use coordinator::OrderSaga;
pub use error::StepError;
pub use result::{Failure, Rejection, SagaResult};
pub use services::{
    ChaosPaymentService, HttpInventoryService, HttpPaymentService, InMemoryInventoryService,
    InMemoryPaymentService, InventoryDecision, InventoryService, PaymentOutcome, PaymentService,
};
pub use store::OrderStore;
