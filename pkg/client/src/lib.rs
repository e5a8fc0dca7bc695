//! Request/response contract for the namespace provisioning API.
//!
//! One `Transport::send` per command, classified into an `Outcome` that the
//! caller renders or acts on.

pub mod api;
pub mod classify;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod transport;

pub use api::NamespaceApi;
pub use classify::{Outcome, OutcomeKind, classify};
pub use transport::{ApiRequest, HttpTransport, RawResponse, Transport};
