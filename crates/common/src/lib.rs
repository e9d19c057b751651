//! Shared types for the microcommerce playground.

mod types;

pub use types::{InvalidOrderId, Order, OrderId};
