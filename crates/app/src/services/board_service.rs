//! Board service — the single owner of the hall snapshot.
//!
//! Every mutation (tick, star toggle, refresh, sort cycle, hall select)
//! locks the board, applies a pure domain function to a clone of the
//! snapshot, writes the replacement back, persists it, and publishes the
//! resulting events — to completion, one operation at a time. Nothing ever
//! observes a partially-updated board.

use rand::Rng;
use tokio::sync::Mutex;

use washboard_domain::error::{NotFoundError, WashboardError};
use washboard_domain::event::{Event, EventType};
use washboard_domain::hall::Hall;
use washboard_domain::id::{HallId, MachineId};
use washboard_domain::refresh::{IdleRoll, advance};
use washboard_domain::seed;
use washboard_domain::sort::{SortRegime, sort_halls};
use washboard_domain::transition::tick;
use washboard_domain::view::{BoardView, split_view};

use crate::ports::{BoardRepository, EventPublisher, Notifier};
use crate::services::alert_gate::AlertGate;

/// User-facing confirmation produced by a favorite toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StarConfirmation {
    pub hall_id: HallId,
    /// Hall name captured before the mutation.
    pub hall_name: String,
    /// `true` when the hall was just added to favorites.
    pub added: bool,
}

impl StarConfirmation {
    /// The toast-style message shown to the user.
    #[must_use]
    pub fn message(&self) -> String {
        if self.added {
            format!("Added {} to favorites", self.hall_name)
        } else {
            format!("Removed {} from favorites", self.hall_name)
        }
    }
}

/// Summary of what a refresh changed, if anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshSummary {
    pub hall_id: HallId,
    pub machine_id: MachineId,
    pub from: String,
    pub to: String,
}

struct BoardState {
    halls: Vec<Hall>,
    regime: SortRegime,
    expanded: Option<HallId>,
}

/// Application service owning the board snapshot.
pub struct BoardService<R, N, P> {
    repo: R,
    alerts: AlertGate<N>,
    publisher: P,
    board: Mutex<BoardState>,
}

impl<R, N, P> BoardService<R, N, P>
where
    R: BoardRepository,
    N: Notifier,
    P: EventPublisher,
{
    /// Create a service over an explicit hall collection.
    pub fn with_halls(
        repo: R,
        notifier: N,
        publisher: P,
        regime: SortRegime,
        halls: Vec<Hall>,
    ) -> Self {
        Self {
            repo,
            alerts: AlertGate::new(notifier),
            publisher,
            board: Mutex::new(BoardState {
                halls,
                regime,
                expanded: Some(seed::default_expanded_hall()),
            }),
        }
    }

    /// Load the stored snapshot, falling back to the seed configuration when
    /// nothing usable is stored. The fallback is persisted immediately so the
    /// next start finds a snapshot.
    pub async fn bootstrap(repo: R, notifier: N, publisher: P, regime: SortRegime) -> Self {
        let halls = match repo.load().await {
            Ok(Some(halls)) => halls,
            Ok(None) => {
                tracing::info!("no stored board snapshot, seeding defaults");
                let halls = seed::default_halls();
                if let Err(err) = repo.save(&halls).await {
                    tracing::warn!(error = %err, "failed to persist seed snapshot");
                }
                halls
            }
            Err(err) => {
                tracing::warn!(error = %err, "board snapshot unavailable, seeding defaults");
                seed::default_halls()
            }
        };
        Self::with_halls(repo, notifier, publisher, regime, halls)
    }

    /// A full copy of the current snapshot, unsorted.
    pub async fn snapshot(&self) -> Vec<Hall> {
        self.board.lock().await.halls.clone()
    }

    /// The current sort regime and mode.
    pub async fn sort_regime(&self) -> SortRegime {
        self.board.lock().await.regime
    }

    /// The derived read-only view: halls sorted under the current regime,
    /// split into the focused hall and the rest.
    pub async fn view(&self) -> (BoardView, SortRegime) {
        let board = self.board.lock().await;
        let mut halls = board.halls.clone();
        sort_halls(&mut halls, board.regime);
        (split_view(halls, board.expanded.as_ref()), board.regime)
    }

    /// Advance the whole board by one tick and deliver availability alerts
    /// for starred halls.
    pub async fn tick(&self) {
        let transitions = {
            let mut board = self.board.lock().await;
            let outcome = tick(&board.halls);
            board.halls = outcome.halls;
            self.persist(&board.halls).await;
            outcome.newly_available
        };

        for transition in &transitions {
            self.alerts.send_availability_alert(transition).await;
            let event = Event::new(
                EventType::MachineAvailable,
                Some(transition.hall_id.clone()),
                serde_json::json!({
                    "machine_id": transition.machine_id,
                    "machine_name": transition.machine_name,
                    "type": transition.kind,
                }),
            );
            if let Err(err) = self.publisher.publish(event).await {
                tracing::warn!(error = %err, "failed to publish availability event");
            }
        }
    }

    /// Flip the favorite flag on exactly the named hall.
    ///
    /// On the unstarred→starred transition, notification authorization is
    /// requested (once per session, cached thereafter).
    ///
    /// # Errors
    ///
    /// Returns [`WashboardError::NotFound`] when no hall has the given id;
    /// the board is left untouched and the condition is non-fatal.
    pub async fn toggle_star(&self, hall_id: &HallId) -> Result<StarConfirmation, WashboardError> {
        let (confirmation, starred_hall) = {
            let mut board = self.board.lock().await;
            let Some(hall) = board.halls.iter_mut().find(|hall| hall.id == *hall_id) else {
                tracing::warn!(hall = %hall_id, "favorite toggle for unknown hall");
                return Err(NotFoundError {
                    entity: "Hall",
                    id: hall_id.to_string(),
                }
                .into());
            };

            let name_before = hall.name.clone();
            hall.is_starred = !hall.is_starred;
            let confirmation = StarConfirmation {
                hall_id: hall.id.clone(),
                hall_name: name_before,
                added: hall.is_starred,
            };
            let starred_hall = hall.is_starred.then(|| hall.clone());
            self.persist(&board.halls).await;
            (confirmation, starred_hall)
        };

        if let Some(hall) = &starred_hall {
            self.alerts.on_hall_starred(hall).await;
        }

        let event = Event::new(
            EventType::StarToggled,
            Some(confirmation.hall_id.clone()),
            serde_json::json!({"added": confirmation.added}),
        );
        if let Err(err) = self.publisher.publish(event).await {
            tracing::warn!(error = %err, "failed to publish star event");
        }

        Ok(confirmation)
    }

    /// Advance one randomly-chosen machine per the refresh policy.
    ///
    /// One hall is drawn uniformly, then one machine within it uniformly;
    /// never more than one machine changes per call. Returns `None` when the
    /// draw landed on a no-op row of the policy table (or the board is
    /// empty).
    pub async fn refresh<G: Rng + Send>(&self, rng: &mut G) -> Option<RefreshSummary> {
        let summary = {
            let mut board = self.board.lock().await;
            let summary = apply_refresh(&mut board.halls, rng)?;
            self.persist(&board.halls).await;
            summary
        };

        let event = Event::new(
            EventType::BoardRefreshed,
            Some(summary.hall_id.clone()),
            serde_json::json!({
                "machine_id": summary.machine_id,
                "from": summary.from,
                "to": summary.to,
            }),
        );
        if let Err(err) = self.publisher.publish(event).await {
            tracing::warn!(error = %err, "failed to publish refresh event");
        }

        Some(summary)
    }

    /// Cycle to the next sort mode (wrapping) and return it.
    pub async fn cycle_sort_mode(&self) -> SortRegime {
        let regime = {
            let mut board = self.board.lock().await;
            board.regime = board.regime.cycle();
            board.regime
        };

        let event = Event::new(
            EventType::SortModeChanged,
            None,
            serde_json::json!({"mode": regime.to_string()}),
        );
        if let Err(err) = self.publisher.publish(event).await {
            tracing::warn!(error = %err, "failed to publish sort event");
        }

        regime
    }

    /// Remember the hall to render in the detailed view.
    ///
    /// # Errors
    ///
    /// Returns [`WashboardError::NotFound`] when no hall has the given id.
    pub async fn select_hall(&self, hall_id: &HallId) -> Result<(), WashboardError> {
        let mut board = self.board.lock().await;
        if !board.halls.iter().any(|hall| hall.id == *hall_id) {
            tracing::warn!(hall = %hall_id, "selection of unknown hall");
            return Err(NotFoundError {
                entity: "Hall",
                id: hall_id.to_string(),
            }
            .into());
        }
        board.expanded = Some(hall_id.clone());
        Ok(())
    }

    /// The session authorization state, for surfaces that display it.
    pub fn notification_authorization(&self) -> Option<bool> {
        self.alerts.authorization()
    }

    // Save failures are absorbed: the in-memory board stays authoritative
    // and the next successful save catches up.
    async fn persist(&self, halls: &[Hall]) {
        if let Err(err) = self.repo.save(halls).await {
            tracing::warn!(error = %err, "failed to persist board snapshot");
        }
    }
}

/// Pick one machine at random and apply the refresh policy to it.
fn apply_refresh<G: Rng>(halls: &mut [Hall], rng: &mut G) -> Option<RefreshSummary> {
    if halls.is_empty() {
        return None;
    }
    let hall = &mut halls[rng.gen_range(0..halls.len())];
    if hall.machines.is_empty() {
        return None;
    }
    let index = rng.gen_range(0..hall.machines.len());
    let idle_roll = if rng.gen_bool(0.8) {
        IdleRoll::Start
    } else {
        IdleRoll::Drop
    };

    let machine = &mut hall.machines[index];
    let next = advance(&machine.status, idle_roll);
    if next == machine.status {
        return None;
    }

    let summary = RefreshSummary {
        hall_id: hall.id.clone(),
        machine_id: machine.id.clone(),
        from: machine.status.to_string(),
        to: next.to_string(),
    };
    machine.status = next;
    Some(summary)
}
