use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when an order identifier fails validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("order id must be a non-empty string")]
pub struct InvalidOrderId;

/// Caller-supplied identifier for an order.
///
/// Wraps a string to provide type safety and to enforce the one
/// structural rule the system has: identifiers are never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OrderId(String);

impl OrderId {
    /// Creates an order ID, rejecting empty input.
    pub fn new(id: impl Into<String>) -> Result<Self, InvalidOrderId> {
        let id = id.into();
        if id.is_empty() {
            return Err(InvalidOrderId);
        }
        Ok(Self(id))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for OrderId {
    type Error = InvalidOrderId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<OrderId> for String {
    fn from(id: OrderId) -> Self {
        id.0
    }
}

impl AsRef<str> for OrderId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// An order as submitted by a client.
///
/// The saga only ever reads the identifier; everything else the client
/// sends is carried through opaquely and stored as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Caller-supplied identifier, unique per successful save.
    pub id: OrderId,
    /// Payload fields the saga does not interpret.
    #[serde(flatten)]
    pub details: serde_json::Map<String, serde_json::Value>,
}

impl Order {
    /// Creates an order with an empty opaque payload.
    pub fn new(id: OrderId) -> Self {
        Self {
            id,
            details: serde_json::Map::new(),
        }
    }

    /// Returns the order's identifier.
    pub fn id(&self) -> &OrderId {
        &self.id
    }
}
