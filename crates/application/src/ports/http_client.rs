//! HTTP client port.

use argonaut_domain::RequestDescriptor;
use async_trait::async_trait;
use thiserror::Error;

/// A fully buffered HTTP response: status plus UTF-8 body text.
///
/// The body is always read to completion before verification begins;
/// nothing in the pipeline streams.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpExchange {
    /// Response status code.
    pub status: u16,
    /// Full response body, decoded as UTF-8.
    pub body: String,
}

/// Transport-level failures.
///
/// These are reported per test case and never abort the batch; a case
/// that cannot be reached fails alone.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The request URL could not be turned into a dispatchable target.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The request exceeded the configured timeout.
    #[error("request timed out after {timeout_ms}ms")]
    Timeout {
        /// The timeout that was exceeded.
        timeout_ms: u64,
    },

    /// The hostname did not resolve.
    #[error("DNS resolution failed for {host}: {message}")]
    Dns {
        /// Host that failed to resolve.
        host: String,
        /// Resolver error detail.
        message: String,
    },

    /// The target actively refused the connection.
    #[error("connection refused by {host}:{port}")]
    ConnectionRefused {
        /// Connection target host.
        host: String,
        /// Connection target port.
        port: u16,
    },

    /// Any other connection-level failure (TLS handshake included).
    #[error("connection failed: {0}")]
    Connection(String),

    /// Anything else the transport reports.
    #[error("transport error: {0}")]
    Other(String),
}

/// Port for executing the HTTP call a request descriptor describes.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Performs the call and buffers the full response.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] for DNS, connection, TLS, or timeout
    /// failures. Callers convert the error into a report entry and move
    /// on to the next case.
    async fn dispatch(&self, request: &RequestDescriptor) -> Result<HttpExchange, TransportError>;
}
