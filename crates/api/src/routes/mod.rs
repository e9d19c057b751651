//! Route handlers.

pub mod health;
pub mod inventory;
pub mod metrics;
pub mod orders;
pub mod payment;
pub mod products;
pub mod shipping;
