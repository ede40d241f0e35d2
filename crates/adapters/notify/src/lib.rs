//! # washboard-adapter-notify
//!
//! Notification adapter implementing the [`Notifier`] port.
//!
//! The default deployment has no desktop or push channel, so alerts are
//! emitted as structured log records that an operator (or a future real
//! channel) can pick up. Whether the authorization prompt succeeds is a
//! deployment decision, expressed as [`AuthorizationPolicy`]; a host without
//! any notification facility is modeled as [`AuthorizationPolicy::Deny`].
//!
//! ## Dependency rule
//!
//! Depends on `washboard-app` (port traits) and `washboard-domain` only.

use washboard_app::ports::Notifier;
use washboard_domain::error::{CapabilityError, WashboardError};

/// How the adapter answers the session authorization prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthorizationPolicy {
    /// Grant authorization; alerts will be delivered.
    #[default]
    Grant,
    /// Deny authorization; the caller skips alerts and any delivery that
    /// reaches the adapter anyway is refused.
    Deny,
}

/// Notifier that delivers alerts through the `tracing` ecosystem.
#[derive(Debug, Default)]
pub struct TracingNotifier {
    policy: AuthorizationPolicy,
}

impl TracingNotifier {
    /// Create a notifier with the given authorization policy.
    #[must_use]
    pub fn new(policy: AuthorizationPolicy) -> Self {
        Self { policy }
    }
}

impl Notifier for TracingNotifier {
    async fn request_authorization(&self) -> Result<bool, WashboardError> {
        let granted = self.policy == AuthorizationPolicy::Grant;
        tracing::info!(granted, "notification authorization requested");
        Ok(granted)
    }

    async fn notify(&self, title: &str, body: &str) -> Result<(), WashboardError> {
        if self.policy == AuthorizationPolicy::Deny {
            return Err(CapabilityError::Denied.into());
        }
        tracing::info!(title, body, "notification");
        Ok(())
    }
}
