//! JSON API handler modules.

pub mod board;
pub mod halls;
pub mod readings;
pub mod sse;

use axum::Router;
use axum::routing::{get, post};

use washboard_app::ports::{BoardRepository, EventPublisher, Notifier, ReadingRepository};

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<R, N, P, RR>() -> Router<AppState<R, N, P, RR>>
where
    R: BoardRepository + Send + Sync + 'static,
    N: Notifier + Send + Sync + 'static,
    P: EventPublisher + Send + Sync + 'static,
    RR: ReadingRepository + Send + Sync + 'static,
{
    Router::new()
        // Board
        .route("/board", get(board::get::<R, N, P, RR>))
        .route("/board/sort", post(board::cycle_sort::<R, N, P, RR>))
        .route("/board/refresh", post(board::refresh::<R, N, P, RR>))
        // Halls
        .route("/halls/{id}/star", post(halls::toggle_star::<R, N, P, RR>))
        .route("/halls/{id}/select", post(halls::select::<R, N, P, RR>))
        // Readings
        .route(
            "/readings",
            get(readings::list::<R, N, P, RR>).post(readings::ingest::<R, N, P, RR>),
        )
        // Events
        .route("/events/stream", get(sse::stream::<R, N, P, RR>))
}
