//! Bounded, failure-classified HTTP calls.
//!
//! Every saga step goes through [`RemoteClient`], which wraps one
//! request/response exchange with a per-call timeout and collapses
//! transport details into the small [`RemoteError`] taxonomy the
//! orchestrator depends on. The client never retries; retrying, if
//! desired, belongs to the caller.

mod client;
mod error;

pub use client::RemoteClient;
pub use error::RemoteError;
