//! HTTP client implementation using reqwest.
//!
//! Implements the `HttpClient` port. The URL is rebuilt from the request
//! descriptor, so a configured host override becomes the actual
//! connection target while scheme, port, and path stay as the test
//! definition derived them.

use std::time::Duration;

use argonaut_application::ports::{HttpClient, HttpExchange, TransportError};
use argonaut_domain::{HttpMethod, RequestDescriptor};
use async_trait::async_trait;
use reqwest::{Client, Method, Url};

/// Default per-request timeout. A bounded timeout keeps a hung endpoint
/// from blocking its own case forever.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// HTTP client adapter wrapping `reqwest::Client`.
pub struct ReqwestHttpClient {
    client: Client,
    timeout: Duration,
}

impl ReqwestHttpClient {
    /// Creates a client with the default timeout and up to 10 redirects.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying client cannot be constructed.
    pub fn new() -> Result<Self, TransportError> {
        Self::with_timeout(Duration::from_millis(DEFAULT_TIMEOUT_MS))
    }

    /// Creates a client with a custom per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying client cannot be constructed.
    pub fn with_timeout(timeout: Duration) -> Result<Self, TransportError> {
        let client = Client::builder()
            .user_agent(concat!("argonaut/", env!("CARGO_PKG_VERSION")))
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|e| TransportError::Other(e.to_string()))?;

        Ok(Self { client, timeout })
    }

    const fn to_reqwest_method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Patch => Method::PATCH,
            HttpMethod::Delete => Method::DELETE,
            HttpMethod::Head => Method::HEAD,
            HttpMethod::Options => Method::OPTIONS,
        }
    }

    /// Maps reqwest errors onto the port's transport taxonomy.
    fn map_error(error: &reqwest::Error, request: &RequestDescriptor, timeout_ms: u64) -> TransportError {
        if error.is_timeout() {
            return TransportError::Timeout { timeout_ms };
        }

        if error.is_connect() {
            let message = error.to_string();
            let lowered = message.to_lowercase();
            if lowered.contains("dns") || lowered.contains("resolve") {
                return TransportError::Dns {
                    host: request.host.clone(),
                    message,
                };
            }
            if lowered.contains("refused") {
                return TransportError::ConnectionRefused {
                    host: request.host.clone(),
                    port: request.port,
                };
            }
            return TransportError::Connection(message);
        }

        TransportError::Other(error.to_string())
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn dispatch(&self, request: &RequestDescriptor) -> Result<HttpExchange, TransportError> {
        let target = request.target_url();
        let url =
            Url::parse(&target).map_err(|e| TransportError::InvalidUrl(format!("{e}: {target}")))?;

        let response = self
            .client
            .request(Self::to_reqwest_method(request.method), url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| Self::map_error(&e, request, self.timeout.as_millis() as u64))?;

        let status = response.status().as_u16();

        // Buffer the whole body before verification; nothing streams.
        let bytes = response
            .bytes()
            .await
            .map_err(|e| TransportError::Other(format!("failed to read body: {e}")))?;
        let body = String::from_utf8_lossy(&bytes).into_owned();

        Ok(HttpExchange { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_mapping_is_exhaustive() {
        assert_eq!(
            ReqwestHttpClient::to_reqwest_method(HttpMethod::Get),
            Method::GET
        );
        assert_eq!(
            ReqwestHttpClient::to_reqwest_method(HttpMethod::Post),
            Method::POST
        );
        assert_eq!(
            ReqwestHttpClient::to_reqwest_method(HttpMethod::Head),
            Method::HEAD
        );
    }

    #[test]
    fn client_creation_succeeds() {
        assert!(ReqwestHttpClient::new().is_ok());
    }
}
