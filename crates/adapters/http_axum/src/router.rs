//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use washboard_app::ports::{BoardRepository, EventPublisher, Notifier, ReadingRepository};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Mounts API routes under `/api`. Includes a [`TraceLayer`] that logs each
/// HTTP request/response at the `DEBUG` level using the `tracing` ecosystem.
pub fn build<R, N, P, RR>(state: AppState<R, N, P, RR>) -> Router
where
    R: BoardRepository + Send + Sync + 'static,
    N: Notifier + Send + Sync + 'static,
    P: EventPublisher + Send + Sync + 'static,
    RR: ReadingRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use washboard_app::event_bus::InProcessEventBus;
    use washboard_app::services::board_service::BoardService;
    use washboard_domain::error::WashboardError;
    use washboard_domain::hall::Hall;
    use washboard_domain::reading::PlugReading;
    use washboard_domain::sort::{SortMode, SortRegime};

    struct StubBoardRepo;
    struct StubNotifier;
    struct StubReadingRepo;

    impl BoardRepository for StubBoardRepo {
        async fn load(&self) -> Result<Option<Vec<Hall>>, WashboardError> {
            Ok(None)
        }
        async fn save(&self, _halls: &[Hall]) -> Result<(), WashboardError> {
            Ok(())
        }
    }

    impl Notifier for StubNotifier {
        async fn request_authorization(&self) -> Result<bool, WashboardError> {
            Ok(true)
        }
        async fn notify(&self, _title: &str, _body: &str) -> Result<(), WashboardError> {
            Ok(())
        }
    }

    impl ReadingRepository for StubReadingRepo {
        async fn insert(&self, reading: PlugReading) -> Result<PlugReading, WashboardError> {
            Ok(reading)
        }
        async fn latest(&self) -> Result<Vec<PlugReading>, WashboardError> {
            Ok(vec![])
        }
    }

    async fn test_app() -> Router {
        let event_bus = Arc::new(InProcessEventBus::new(16));
        let board_service = Arc::new(
            BoardService::bootstrap(
                StubBoardRepo,
                StubNotifier,
                Arc::clone(&event_bus),
                SortRegime::Modern(SortMode::Name),
            )
            .await,
        );
        build(AppState::new(
            board_service,
            Arc::new(StubReadingRepo),
            event_bus,
        ))
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let app = test_app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_serve_focus_split_board() {
        let app = test_app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/board")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["focused"]["id"], "a1");
        assert_eq!(json["rest"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn should_confirm_star_toggle() {
        let app = test_app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/halls/b1/star")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["added"], true);
        assert_eq!(json["message"], "Added Hall B1 to favorites");
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_hall() {
        let app = test_app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/halls/z9/star")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_cycle_sort_mode_over_http() {
        let app = test_app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/board/sort")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["label"], "available-first");
    }

    #[tokio::test]
    async fn should_select_hall_with_no_content() {
        let app = test_app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/halls/d1/select")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn should_report_refresh_outcome() {
        let app = test_app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/board/refresh")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(json["changed"].is_boolean());
    }

    #[tokio::test]
    async fn should_ingest_reading_as_created() {
        let app = test_app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/readings")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        r#"{"name":"Washer 1","ip":"192.168.1.10","current":5.2,"state":"running"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["name"], "Washer 1");
    }

    #[tokio::test]
    async fn should_list_latest_readings() {
        let app = test_app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/readings")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(json.as_array().unwrap().is_empty());
    }
}
