//! Alert gate — session-scoped authorization cache and alert gating.
//!
//! Authorization is requested from the host at most once per session; the
//! answer (granted or denied) is cached process-wide and never re-prompted.
//! Availability alerts go out only for starred halls, and only when the
//! cached answer is a grant. Everything else is a silent skip.

use std::sync::Mutex;

use washboard_domain::hall::Hall;
use washboard_domain::transition::MachineAvailable;

use crate::ports::Notifier;

/// Gates availability alerts behind the session authorization state.
pub struct AlertGate<N> {
    notifier: N,
    // None until the first prompt of the session.
    granted: Mutex<Option<bool>>,
}

impl<N: Notifier> AlertGate<N> {
    /// Create a gate that has not yet prompted for authorization.
    pub fn new(notifier: N) -> Self {
        Self {
            notifier,
            granted: Mutex::new(None),
        }
    }

    /// The cached authorization answer, if a prompt has happened.
    pub fn authorization(&self) -> Option<bool> {
        *self.granted.lock().expect("authorization cache poisoned")
    }

    /// Request authorization once per session, returning the cached answer
    /// on every later call. A failing or unsupported host counts as denial.
    pub async fn ensure_authorization(&self) -> bool {
        if let Some(granted) = self.authorization() {
            return granted;
        }
        let granted = match self.notifier.request_authorization().await {
            Ok(granted) => granted,
            Err(err) => {
                tracing::debug!(error = %err, "notification authorization unavailable");
                false
            }
        };
        *self.granted.lock().expect("authorization cache poisoned") = Some(granted);
        granted
    }

    /// Deliver an availability alert for a machine that just freed up.
    ///
    /// Fires only when authorization was previously granted and the owning
    /// hall is starred; otherwise the alert is silently skipped. Delivery
    /// failures are logged, never propagated.
    pub async fn send_availability_alert(&self, transition: &MachineAvailable) {
        if !transition.hall_starred || self.authorization() != Some(true) {
            return;
        }
        let title = format!("{} machine available", transition.hall_name);
        let body = format!(
            "{} ({}) in {} is now free",
            transition.machine_name, transition.kind, transition.hall_name
        );
        if let Err(err) = self.notifier.notify(&title, &body).await {
            tracing::warn!(error = %err, hall = %transition.hall_id, "failed to deliver availability alert");
        }
    }

    /// Prompt on the unstarred→starred transition of a favorite toggle.
    pub async fn on_hall_starred(&self, hall: &Hall) {
        if hall.is_starred {
            let granted = self.ensure_authorization().await;
            tracing::debug!(hall = %hall.id, granted, "favorite added, authorization state");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::Future;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use washboard_domain::error::WashboardError;
    use washboard_domain::id::{HallId, MachineId};
    use washboard_domain::machine::MachineType;

    struct CountingNotifier {
        grant: bool,
        prompts: AtomicUsize,
        delivered: AtomicUsize,
    }

    impl CountingNotifier {
        fn new(grant: bool) -> Self {
            Self {
                grant,
                prompts: AtomicUsize::new(0),
                delivered: AtomicUsize::new(0),
            }
        }
    }

    impl Notifier for &CountingNotifier {
        fn request_authorization(
            &self,
        ) -> impl Future<Output = Result<bool, WashboardError>> + Send {
            self.prompts.fetch_add(1, Ordering::SeqCst);
            let grant = self.grant;
            async move { Ok(grant) }
        }

        fn notify(
            &self,
            _title: &str,
            _body: &str,
        ) -> impl Future<Output = Result<(), WashboardError>> + Send {
            self.delivered.fetch_add(1, Ordering::SeqCst);
            async { Ok(()) }
        }
    }

    fn transition(starred: bool) -> MachineAvailable {
        MachineAvailable {
            hall_id: HallId::new("b1"),
            hall_name: "Hall B1".to_string(),
            hall_starred: starred,
            machine_id: MachineId::new("b1-d"),
            machine_name: "Dryer".to_string(),
            kind: MachineType::Dryer,
        }
    }

    #[tokio::test]
    async fn should_prompt_only_once_per_session() {
        let notifier = CountingNotifier::new(true);
        let gate = AlertGate::new(&notifier);

        assert!(gate.ensure_authorization().await);
        assert!(gate.ensure_authorization().await);
        assert!(gate.ensure_authorization().await);

        assert_eq!(notifier.prompts.load(Ordering::SeqCst), 1);
        assert_eq!(gate.authorization(), Some(true));
    }

    #[tokio::test]
    async fn should_cache_denial_without_reprompting() {
        let notifier = CountingNotifier::new(false);
        let gate = AlertGate::new(&notifier);

        assert!(!gate.ensure_authorization().await);
        assert!(!gate.ensure_authorization().await);

        assert_eq!(notifier.prompts.load(Ordering::SeqCst), 1);
        assert_eq!(gate.authorization(), Some(false));
    }

    #[tokio::test]
    async fn should_deliver_alert_when_granted_and_starred() {
        let notifier = CountingNotifier::new(true);
        let gate = AlertGate::new(&notifier);
        gate.ensure_authorization().await;

        gate.send_availability_alert(&transition(true)).await;

        assert_eq!(notifier.delivered.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn should_skip_alert_for_unstarred_hall() {
        let notifier = CountingNotifier::new(true);
        let gate = AlertGate::new(&notifier);
        gate.ensure_authorization().await;

        gate.send_availability_alert(&transition(false)).await;

        assert_eq!(notifier.delivered.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn should_skip_alert_when_authorization_denied() {
        let notifier = CountingNotifier::new(false);
        let gate = AlertGate::new(&notifier);
        gate.ensure_authorization().await;

        gate.send_availability_alert(&transition(true)).await;

        assert_eq!(notifier.delivered.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn should_skip_alert_before_any_prompt() {
        let notifier = CountingNotifier::new(true);
        let gate = AlertGate::new(&notifier);

        gate.send_availability_alert(&transition(true)).await;

        assert_eq!(notifier.delivered.load(Ordering::SeqCst), 0);
        assert_eq!(gate.authorization(), None);
    }
}
