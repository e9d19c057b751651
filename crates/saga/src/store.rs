//! In-memory order persistence.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use common::{Order, OrderId};

/// Idempotent-by-identifier store for completed orders.
///
/// The only shared mutable resource in the system. Updates are atomic
/// per key with last-write-wins semantics; concurrent saves to different
/// identifiers never interfere.
#[derive(Debug, Clone, Default)]
pub struct OrderStore {
    state: Arc<RwLock<HashMap<OrderId, Order>>>,
}

impl OrderStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Upserts the order under its identifier and returns it.
    pub fn save(&self, order: Order) -> Order {
        let mut state = self.state.write().unwrap();
        state.insert(order.id().clone(), order.clone());
        order
    }

    /// Looks up an order by identifier.
    pub fn get(&self, id: &OrderId) -> Option<Order> {
        self.state.read().unwrap().get(id).cloned()
    }

    /// Number of stored orders.
    pub fn len(&self) -> usize {
        self.state.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
