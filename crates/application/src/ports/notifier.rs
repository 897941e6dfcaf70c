//! Callback notifier port.

use async_trait::async_trait;

/// Best-effort notification of a test failure to a remote listener.
///
/// Delivery is not guaranteed: implementations swallow their own
/// transport failures (logging at most) so that a broken callback
/// endpoint can never interrupt or fail a run. That is the contract,
/// not an accident.
#[async_trait]
pub trait CallbackNotifier: Send + Sync {
    /// Sends the test name and formatted failure message.
    async fn notify(&self, test: &str, message: &str);
}
