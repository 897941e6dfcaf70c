//! Port definitions (interfaces)
//!
//! Ports define the boundary between the orchestrator and the outside
//! world. Each port is a trait implemented by an adapter in the
//! infrastructure layer, which keeps the pipeline testable with
//! in-memory fakes.

mod http_client;
mod notifier;

pub use http_client::{HttpClient, HttpExchange, TransportError};
pub use notifier::CallbackNotifier;
