//! Notification port — the host environment's alerting capability.

use std::future::Future;

use washboard_domain::error::WashboardError;

/// Requests authorization and delivers user-visible alerts.
///
/// A host without the capability implements both methods as no-ops
/// (authorization denied, notifications dropped); neither is an error.
pub trait Notifier {
    /// Ask the host for permission to deliver notifications.
    ///
    /// Returns whether permission was granted. Callers cache the answer for
    /// the whole session and must not re-prompt.
    fn request_authorization(&self) -> impl Future<Output = Result<bool, WashboardError>> + Send;

    /// Deliver a user-visible alert.
    fn notify(
        &self,
        title: &str,
        body: &str,
    ) -> impl Future<Output = Result<(), WashboardError>> + Send;
}

impl<T: Notifier + Send + Sync> Notifier for std::sync::Arc<T> {
    fn request_authorization(&self) -> impl Future<Output = Result<bool, WashboardError>> + Send {
        (**self).request_authorization()
    }

    fn notify(
        &self,
        title: &str,
        body: &str,
    ) -> impl Future<Output = Result<(), WashboardError>> + Send {
        (**self).notify(title, body)
    }
}
