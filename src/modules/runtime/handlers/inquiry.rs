//! Breed inquiry handler

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use breed_inquiry_core::{BreedInquiryError, SearchFilter};
use breed_inquiry_types::runtime::{BreedInquiryRequest, InquiryResponse};
use tracing::{error, info, warn};

use super::error_response;
use crate::state::AppState;

/// Handler for breed search requests
pub struct InquiryHandler;

impl InquiryHandler {
    /// Handle POST /api/breed-inquiry
    ///
    /// A body that does not parse is answered with 400 before the store is
    /// touched. A JSON `null` body is an empty filter.
    pub async fn search(
        State(state): State<AppState>,
        payload: Result<Json<Option<BreedInquiryRequest>>, JsonRejection>,
    ) -> impl IntoResponse {
        let request = match payload {
            Ok(Json(request)) => request.unwrap_or_default(),
            Err(rejection) => {
                let err = BreedInquiryError::InvalidRequest(rejection.body_text());
                warn!("Rejected breed inquiry: {}", err);
                return error_response(&err);
            }
        };

        let filter = SearchFilter::from(request);
        info!(
            predicates = filter.dimension_count(),
            "Executing breed inquiry"
        );

        match state.executor.search(&filter).await {
            Ok(breeds) => {
                info!("Breed inquiry matched {} rows", breeds.len());
                (StatusCode::OK, Json(InquiryResponse::success(breeds)))
            }
            Err(e) => {
                if e.is_error() {
                    error!("Breed inquiry failed: {}", e);
                } else {
                    info!("Breed inquiry: {}", e);
                }
                error_response(&e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header::CONTENT_TYPE, Method, Request, StatusCode};
    use axum::Router;
    use breed_inquiry_core::{BreedInquiryError, ServerConfig};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use std::time::Duration;
    use tower::ServiceExt;

    use crate::executor::SearchExecutor;
    use crate::server::router;
    use crate::state::AppState;
    use crate::testing::{sample_breeds, FakeStore};

    fn app(store: Arc<FakeStore>, query_timeout: Duration) -> Router {
        let executor = Arc::new(SearchExecutor::new(store, query_timeout));
        router(AppState::new(executor), &ServerConfig::default())
    }

    async fn post_inquiry(app: Router, body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/breed-inquiry")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_empty_filter_returns_all_rows() {
        let store = Arc::new(FakeStore::with_rows(sample_breeds()));
        let (status, body) = post_inquiry(app(store.clone(), Duration::from_secs(3)), "{}").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "success");
        assert_eq!(body["data"], serde_json::to_value(sample_breeds()).unwrap());
        assert_eq!(store.last_statement().unwrap().predicate_count(), 0);
    }

    #[tokio::test]
    async fn test_null_body_is_empty_filter() {
        let store = Arc::new(FakeStore::with_rows(sample_breeds()));
        let (status, body) =
            post_inquiry(app(store.clone(), Duration::from_secs(3)), "null").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"], serde_json::to_value(sample_breeds()).unwrap());
        assert_eq!(store.last_statement().unwrap().predicate_count(), 0);
    }

    #[tokio::test]
    async fn test_keyword_search_builds_name_predicate() {
        let store = Arc::new(FakeStore::with_rows(sample_breeds()[..1].to_vec()));
        let (status, body) = post_inquiry(
            app(store.clone(), Duration::from_secs(3)),
            r#"{"keyword": "Golden"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"][0]["id"], "B1");
        assert_eq!(body["data"][0]["remark"], Value::Null);

        let statement = store.last_statement().unwrap();
        assert!(statement
            .sql()
            .ends_with("AND (name_th LIKE ? OR name_en LIKE ?)"));
        assert_eq!(statement.args(), ["%Golden%", "%Golden%"]);
    }

    #[tokio::test]
    async fn test_all_fields_compose_three_predicates() {
        let store = Arc::new(FakeStore::with_rows(sample_breeds()));
        let (status, _) = post_inquiry(
            app(store.clone(), Duration::from_secs(3)),
            r#"{"ids": ["B1", "B2"], "keyword": "Ret", "shortnames": ["GR"]}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(store.last_statement().unwrap().predicate_count(), 3);
    }

    #[tokio::test]
    async fn test_wrong_shape_is_bad_request_without_storage_access() {
        let store = Arc::new(FakeStore::with_rows(sample_breeds()));
        let (status, body) = post_inquiry(
            app(store.clone(), Duration::from_secs(3)),
            r#"{"ids": "B1"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"status": "error", "message": "Invalid request body"}));
        assert_eq!(store.calls(), 0);
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let store = Arc::new(FakeStore::with_rows(sample_breeds()));
        let (status, body) =
            post_inquiry(app(store.clone(), Duration::from_secs(3)), "{\"ids\": [").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], "error");
        assert_eq!(store.calls(), 0);
    }

    #[tokio::test]
    async fn test_missing_content_type_is_bad_request() {
        let store = Arc::new(FakeStore::with_rows(sample_breeds()));
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/breed-inquiry")
            .body(Body::from("{}"))
            .unwrap();

        let response = app(store.clone(), Duration::from_secs(3))
            .oneshot(request)
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(store.calls(), 0);
    }

    #[tokio::test]
    async fn test_no_matches_is_not_found() {
        let store = Arc::new(FakeStore::with_rows(vec![]));
        let (status, body) = post_inquiry(
            app(store, Duration::from_secs(3)),
            r#"{"ids": ["missing"]}"#,
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"status": "error", "message": "Breed not found"}));
    }

    #[tokio::test]
    async fn test_slow_query_is_server_error() {
        let store = Arc::new(
            FakeStore::with_rows(sample_breeds()).with_delay(Duration::from_millis(500)),
        );
        let (status, body) = post_inquiry(app(store, Duration::from_millis(50)), "{}").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"status": "error", "message": "Database error"}));
    }

    #[tokio::test]
    async fn test_query_failure_hides_driver_text() {
        let store = Arc::new(FakeStore::failing(|| {
            BreedInquiryError::QueryExecution(
                "MySQL query failed: Table 'breeds.breed' doesn't exist".into(),
            )
        }));
        let (status, body) = post_inquiry(app(store, Duration::from_secs(3)), "{}").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Database error");
        assert!(!body.to_string().contains("doesn't exist"));
    }

    #[tokio::test]
    async fn test_row_mapping_failure_is_server_error() {
        let store = Arc::new(FakeStore::failing(|| {
            BreedInquiryError::RowMapping("expected 5 columns, got 4".into())
        }));
        let (status, body) = post_inquiry(app(store, Duration::from_secs(3)), "{}").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"status": "error", "message": "Error scanning data"}));
        assert!(body.get("data").is_none());
    }
}
