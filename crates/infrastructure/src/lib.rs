//! Argonaut Infrastructure - Adapters and implementations
//!
//! This crate provides the concrete implementations of the ports defined
//! in the application layer, plus test-file discovery and config loading.

pub mod adapters;
pub mod config;
pub mod discovery;

pub use adapters::{HttpCallbackNotifier, ReqwestHttpClient};
pub use config::{ConfigError, load_host_overrides};
pub use discovery::{DiscoveryError, discover, read_sources};
