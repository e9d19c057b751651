//! Collaborator seams for saga steps.
//!
//! Each step talks to its collaborator through a trait: HTTP
//! implementations for the distributed playground, a chaos-enabled
//! payment implementation, and in-memory doubles with call counters for
//! tests.

pub mod inventory;
pub mod payment;

pub use inventory::{
    HttpInventoryService, InMemoryInventoryService, InventoryDecision, InventoryService,
};
pub use payment::{
    ChaosPaymentService, HttpPaymentService, InMemoryPaymentService, PaymentOutcome, PaymentService,
};
