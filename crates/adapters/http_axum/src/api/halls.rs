//! JSON handlers for per-hall actions.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use washboard_app::ports::{BoardRepository, EventPublisher, Notifier, ReadingRepository};
use washboard_domain::id::HallId;

use crate::error::ApiError;
use crate::state::AppState;

/// Response body for `POST /api/halls/{id}/star`.
#[derive(Serialize)]
pub struct StarBody {
    pub hall_id: HallId,
    pub added: bool,
    /// The confirmation line shown to the user.
    pub message: String,
}

/// Possible responses from the star endpoint.
pub enum StarResponse {
    Ok(Json<StarBody>),
}

impl IntoResponse for StarResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the select endpoint.
pub enum SelectResponse {
    NoContent,
}

impl IntoResponse for SelectResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// `POST /api/halls/{id}/star` — flip the favorite flag on one hall.
pub async fn toggle_star<R, N, P, RR>(
    State(state): State<AppState<R, N, P, RR>>,
    Path(id): Path<String>,
) -> Result<StarResponse, ApiError>
where
    R: BoardRepository + Send + Sync + 'static,
    N: Notifier + Send + Sync + 'static,
    P: EventPublisher + Send + Sync + 'static,
    RR: ReadingRepository + Send + Sync + 'static,
{
    let confirmation = state.board_service.toggle_star(&HallId::new(id)).await?;
    let message = confirmation.message();
    Ok(StarResponse::Ok(Json(StarBody {
        hall_id: confirmation.hall_id,
        added: confirmation.added,
        message,
    })))
}

/// `POST /api/halls/{id}/select` — focus one hall in the board view.
pub async fn select<R, N, P, RR>(
    State(state): State<AppState<R, N, P, RR>>,
    Path(id): Path<String>,
) -> Result<SelectResponse, ApiError>
where
    R: BoardRepository + Send + Sync + 'static,
    N: Notifier + Send + Sync + 'static,
    P: EventPublisher + Send + Sync + 'static,
    RR: ReadingRepository + Send + Sync + 'static,
{
    state.board_service.select_hall(&HallId::new(id)).await?;
    Ok(SelectResponse::NoContent)
}
