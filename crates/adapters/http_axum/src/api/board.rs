//! JSON handlers for the board view, sort cycling, and the refresh trigger.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;

use washboard_app::ports::{BoardRepository, EventPublisher, Notifier, ReadingRepository};
use washboard_domain::hall::Hall;
use washboard_domain::id::{HallId, MachineId};
use washboard_domain::sort::SortRegime;

use crate::state::AppState;

/// Response body for `GET /api/board`.
#[derive(Serialize)]
pub struct BoardBody {
    /// The hall rendered expanded, when the board is non-empty.
    pub focused: Option<Hall>,
    /// The remaining halls in display order.
    pub rest: Vec<Hall>,
    /// The sort regime the order was derived under.
    pub sort: SortRegime,
}

/// Response body for `POST /api/board/sort`.
#[derive(Serialize)]
pub struct SortBody {
    pub sort: SortRegime,
    /// Display label for the active mode.
    pub label: String,
}

/// Response body for `POST /api/board/refresh`.
#[derive(Serialize)]
pub struct RefreshBody {
    pub changed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hall_id: Option<HallId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub machine_id: Option<MachineId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
}

/// Possible responses from the board endpoints.
pub enum BoardResponse {
    Ok(Json<BoardBody>),
}

impl IntoResponse for BoardResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/board` — the sorted, focus-split board view.
pub async fn get<R, N, P, RR>(State(state): State<AppState<R, N, P, RR>>) -> BoardResponse
where
    R: BoardRepository + Send + Sync + 'static,
    N: Notifier + Send + Sync + 'static,
    P: EventPublisher + Send + Sync + 'static,
    RR: ReadingRepository + Send + Sync + 'static,
{
    let (view, sort) = state.board_service.view().await;
    BoardResponse::Ok(Json(BoardBody {
        focused: view.focused,
        rest: view.rest,
        sort,
    }))
}

/// `POST /api/board/sort` — advance to the next sort mode (wrapping).
pub async fn cycle_sort<R, N, P, RR>(State(state): State<AppState<R, N, P, RR>>) -> Json<SortBody>
where
    R: BoardRepository + Send + Sync + 'static,
    N: Notifier + Send + Sync + 'static,
    P: EventPublisher + Send + Sync + 'static,
    RR: ReadingRepository + Send + Sync + 'static,
{
    let sort = state.board_service.cycle_sort_mode().await;
    Json(SortBody {
        sort,
        label: sort.to_string(),
    })
}

/// `POST /api/board/refresh` — advance one randomly-chosen machine.
pub async fn refresh<R, N, P, RR>(State(state): State<AppState<R, N, P, RR>>) -> Json<RefreshBody>
where
    R: BoardRepository + Send + Sync + 'static,
    N: Notifier + Send + Sync + 'static,
    P: EventPublisher + Send + Sync + 'static,
    RR: ReadingRepository + Send + Sync + 'static,
{
    let mut rng = StdRng::from_entropy();
    let summary = state.board_service.refresh(&mut rng).await;

    Json(match summary {
        Some(summary) => RefreshBody {
            changed: true,
            hall_id: Some(summary.hall_id),
            machine_id: Some(summary.machine_id),
            from: Some(summary.from),
            to: Some(summary.to),
        },
        None => RefreshBody {
            changed: false,
            hall_id: None,
            machine_id: None,
            from: None,
            to: None,
        },
    })
}
