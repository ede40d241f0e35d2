//! Shared application state for axum handlers.

use std::sync::Arc;

use washboard_app::event_bus::InProcessEventBus;
use washboard_app::ports::{BoardRepository, EventPublisher, Notifier, ReadingRepository};
use washboard_app::services::board_service::BoardService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository, notifier, and publisher types to avoid
/// dynamic dispatch. `Clone` is implemented manually so the underlying types
/// themselves do not need to be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<R, N, P, RR> {
    /// The board service owning the hall snapshot.
    pub board_service: Arc<BoardService<R, N, P>>,
    /// Sensor-feed reading repository.
    pub readings: Arc<RR>,
    /// Event bus handle for SSE subscriptions and reading events.
    pub event_bus: Arc<InProcessEventBus>,
}

impl<R, N, P, RR> Clone for AppState<R, N, P, RR> {
    fn clone(&self) -> Self {
        Self {
            board_service: Arc::clone(&self.board_service),
            readings: Arc::clone(&self.readings),
            event_bus: Arc::clone(&self.event_bus),
        }
    }
}

impl<R, N, P, RR> AppState<R, N, P, RR>
where
    R: BoardRepository + Send + Sync + 'static,
    N: Notifier + Send + Sync + 'static,
    P: EventPublisher + Send + Sync + 'static,
    RR: ReadingRepository + Send + Sync + 'static,
{
    /// Create a new application state from pre-wrapped `Arc` collaborators.
    ///
    /// The board service is shared with the background scheduler, so it
    /// always arrives already wrapped.
    pub fn new(
        board_service: Arc<BoardService<R, N, P>>,
        readings: Arc<RR>,
        event_bus: Arc<InProcessEventBus>,
    ) -> Self {
        Self {
            board_service,
            readings,
            event_bus,
        }
    }
}
