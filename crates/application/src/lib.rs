//! Argonaut Application - Run orchestration and ports
//!
//! This crate drives the dispatch-and-verification pipeline:
//! - Port traits for the HTTP client and the callback notifier
//! - The response verifier (XML and JSON bodies)
//! - The failure-oriented reporter
//! - The run orchestrator and its configuration

pub mod config;
pub mod ports;
pub mod report;
pub mod runner;
pub mod verifier;

pub use config::{RunConfig, RunMode};
pub use ports::{CallbackNotifier, HttpClient, HttpExchange, TransportError};
pub use report::Reporter;
pub use runner::{Runner, TestSource};
pub use verifier::verify;
