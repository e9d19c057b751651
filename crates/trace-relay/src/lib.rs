//! Trace context relay across a header-stripping boundary.
//!
//! The legacy warehouse proxy discards every standard propagation header,
//! so trace identifiers are smuggled through it as an ordinary query
//! parameter and reconstructed on the far side. The codec is best-effort
//! by contract: a malformed or absent token means "no trace information
//! available", never an error.

mod context;
mod relay;

pub use context::TraceContext;
pub use relay::{CALLER_MARKER, RELAY_PARAM, decode, encode, restore};
