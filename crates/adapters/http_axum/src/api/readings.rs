//! JSON handlers for the sensor-feed reading endpoints.
//!
//! Readings are recorded and broadcast but never drive the board; a future
//! hardware feed replaces the ingest endpoint, not the contract.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use washboard_app::ports::{BoardRepository, EventPublisher, Notifier, ReadingRepository};
use washboard_domain::event::{Event, EventType};
use washboard_domain::reading::PlugReading;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for ingesting a reading.
#[derive(Deserialize)]
pub struct IngestReadingRequest {
    pub name: String,
    pub ip: String,
    pub current: f64,
    pub state: String,
}

/// Possible responses from the ingest endpoint.
pub enum IngestResponse {
    Created(Json<PlugReading>),
}

impl IntoResponse for IngestResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<PlugReading>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `POST /api/readings` — record one plug reading and broadcast it.
pub async fn ingest<R, N, P, RR>(
    State(state): State<AppState<R, N, P, RR>>,
    Json(request): Json<IngestReadingRequest>,
) -> Result<IngestResponse, ApiError>
where
    R: BoardRepository + Send + Sync + 'static,
    N: Notifier + Send + Sync + 'static,
    P: EventPublisher + Send + Sync + 'static,
    RR: ReadingRepository + Send + Sync + 'static,
{
    let reading = PlugReading::new(request.name, request.ip, request.current, request.state);
    let reading = state.readings.insert(reading).await?;

    let event = Event::new(
        EventType::ReadingIngested,
        None,
        serde_json::json!({
            "name": reading.name,
            "state": reading.state,
            "current": reading.current,
        }),
    );
    if let Err(err) = state.event_bus.publish(event).await {
        tracing::warn!(error = %err, "failed to publish reading event");
    }

    Ok(IngestResponse::Created(Json(reading)))
}

/// `GET /api/readings` — the latest reading for each plug.
pub async fn list<R, N, P, RR>(
    State(state): State<AppState<R, N, P, RR>>,
) -> Result<ListResponse, ApiError>
where
    R: BoardRepository + Send + Sync + 'static,
    N: Notifier + Send + Sync + 'static,
    P: EventPublisher + Send + Sync + 'static,
    RR: ReadingRepository + Send + Sync + 'static,
{
    let readings = state.readings.latest().await?;
    Ok(ListResponse::Ok(Json(readings)))
}
