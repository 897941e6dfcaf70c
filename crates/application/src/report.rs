//! Failure-oriented reporting.
//!
//! A report goes to the console (sync mode, when enabled) and/or to the
//! configured callback endpoint. Passing outcomes produce neither by
//! default.

use std::path::Path;
use std::sync::Arc;

use argonaut_domain::VerificationOutcome;

use crate::ports::{CallbackNotifier, TransportError};

/// Formats and delivers per-case results.
pub struct Reporter {
    console: bool,
    notifier: Option<Arc<dyn CallbackNotifier>>,
}

impl Reporter {
    /// Creates a reporter.
    ///
    /// `console` should already account for the run mode (console output
    /// is only meaningful in sync mode); `notifier` is the callback
    /// endpoint, when one was configured.
    #[must_use]
    pub fn new(console: bool, notifier: Option<Arc<dyn CallbackNotifier>>) -> Self {
        Self { console, notifier }
    }

    /// Reports a verification outcome. A pass is logged and otherwise
    /// silent.
    pub async fn outcome(&self, test: &str, file: &Path, outcome: &VerificationOutcome) {
        match outcome.message() {
            Some(message) => self.deliver(test, file, &message).await,
            None => tracing::debug!(test, file = %file.display(), "passed"),
        }
    }

    /// Reports a transport failure. Distinct from a verification failure
    /// but delivered through the same channels.
    pub async fn transport_failure(&self, test: &str, file: &Path, error: &TransportError) {
        self.deliver(test, file, &error.to_string()).await;
    }

    async fn deliver(&self, test: &str, file: &Path, message: &str) {
        if self.console {
            println!("({test}) [{}]:\n{message}\n", file.display());
        }

        if let Some(notifier) = &self.notifier {
            notifier.notify(test, message).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Default)]
    struct RecordingNotifier {
        sent: Mutex<Vec<(String, String)>>,
    }

    #[async_trait]
    impl CallbackNotifier for RecordingNotifier {
        async fn notify(&self, test: &str, message: &str) {
            self.sent
                .lock()
                .unwrap()
                .push((test.to_string(), message.to_string()));
        }
    }

    #[tokio::test]
    async fn failures_reach_the_notifier() {
        let notifier = Arc::new(RecordingNotifier::default());
        let reporter = Reporter::new(false, Some(notifier.clone()));

        let outcome = VerificationOutcome::StatusMismatch {
            expected: 200,
            actual: 500,
        };
        reporter
            .outcome("my test", Path::new("tests/a.json"), &outcome)
            .await;

        let sent = notifier.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "my test");
        assert_eq!(
            sent[0].1,
            "Incorrect HTTP status code: expected 200 but got 500"
        );
    }

    #[tokio::test]
    async fn passes_produce_no_callback() {
        let notifier = Arc::new(RecordingNotifier::default());
        let reporter = Reporter::new(false, Some(notifier.clone()));

        reporter
            .outcome("ok test", Path::new("tests/a.json"), &VerificationOutcome::Pass)
            .await;

        assert!(notifier.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn transport_failures_are_delivered_too() {
        let notifier = Arc::new(RecordingNotifier::default());
        let reporter = Reporter::new(false, Some(notifier.clone()));

        reporter
            .transport_failure(
                "down test",
                Path::new("tests/a.json"),
                &TransportError::ConnectionRefused {
                    host: "example.com".to_string(),
                    port: 80,
                },
            )
            .await;

        let sent = notifier.sent.lock().unwrap();
        assert_eq!(sent[0].1, "connection refused by example.com:80");
    }
}
