//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use washboard_domain::error::WashboardError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`WashboardError`] to an HTTP response with appropriate status code.
pub struct ApiError(WashboardError);

impl From<WashboardError> for ApiError {
    fn from(err: WashboardError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            WashboardError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            WashboardError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            WashboardError::Capability(err) => (StatusCode::SERVICE_UNAVAILABLE, err.to_string()),
            WashboardError::Persistence(err) => {
                tracing::error!(error = %err, "persistence error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
