//! Fire-and-forget callback notifier over HTTP.

use std::time::Duration;

use argonaut_application::ports::{CallbackNotifier, TransportError};
use async_trait::async_trait;
use reqwest::{Client, Url};

const CALLBACK_TIMEOUT: Duration = Duration::from_secs(10);

/// `CallbackNotifier` implementation that GETs the configured endpoint
/// with `test` and `response` query parameters.
///
/// Deliveries are best effort by contract: any transport failure is
/// logged at `warn` and swallowed. The endpoint's response is ignored.
pub struct HttpCallbackNotifier {
    client: Client,
    endpoint: Url,
}

impl HttpCallbackNotifier {
    /// Creates a notifier targeting `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying client cannot be constructed.
    pub fn new(endpoint: Url) -> Result<Self, TransportError> {
        let client = Client::builder()
            .user_agent(concat!("argonaut/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TransportError::Other(e.to_string()))?;

        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl CallbackNotifier for HttpCallbackNotifier {
    async fn notify(&self, test: &str, message: &str) {
        let mut url = self.endpoint.clone();
        // The notification's parameters replace any query string the
        // configured URL carried.
        url.query_pairs_mut()
            .clear()
            .append_pair("test", test)
            .append_pair("response", message);

        match self.client.get(url).timeout(CALLBACK_TIMEOUT).send().await {
            Ok(_) => tracing::debug!(test, "callback delivered"),
            Err(error) => tracing::warn!(test, %error, "callback delivery failed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notifier_creation_succeeds() {
        let endpoint = Url::parse("http://localhost:9999/results").unwrap();
        assert!(HttpCallbackNotifier::new(endpoint).is_ok());
    }
}
