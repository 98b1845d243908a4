//! Axum router assembly.

use axum::Json;
use axum::Router;
use axum::routing::get;
use serde_json::{Value, json};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use bricklog_app::ports::LegoSetRepository;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Nests API routes under `/api` next to `/health` and the `/` greeting.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem, and the given CORS layer
/// (see [`crate::cors::layer`]).
pub fn build<R>(state: AppState<R>, cors: CorsLayer) -> Router
where
    R: LegoSetRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(greeting))
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn greeting() -> Json<Value> {
    Json(json!({ "Hello": "World" }))
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cors;
    use crate::state::AppState;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode, header};
    use bricklog_app::services::lego_set_service::LegoSetService;
    use bricklog_domain::error::CatalogError;
    use bricklog_domain::id::LegoSetId;
    use bricklog_domain::lego_set::LegoSet;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    struct StubLegoSetRepo;
    struct BrokenLegoSetRepo;

    impl bricklog_app::ports::LegoSetRepository for StubLegoSetRepo {
        async fn create(&self, set: LegoSet) -> Result<LegoSet, CatalogError> {
            Ok(set)
        }
        async fn get_by_id(&self, _id: LegoSetId) -> Result<Option<LegoSet>, CatalogError> {
            Ok(None)
        }
        async fn find_by_set_number(
            &self,
            _set_number: &str,
        ) -> Result<Option<LegoSet>, CatalogError> {
            Ok(None)
        }
        async fn get_all(&self) -> Result<Vec<LegoSet>, CatalogError> {
            Ok(vec![])
        }
        async fn max_id(&self) -> Result<Option<LegoSetId>, CatalogError> {
            Ok(None)
        }
        async fn update(&self, _set: LegoSet) -> Result<Option<LegoSet>, CatalogError> {
            Ok(None)
        }
        async fn delete(&self, _id: LegoSetId) -> Result<bool, CatalogError> {
            Ok(false)
        }
    }

    fn broken() -> CatalogError {
        CatalogError::Storage(Box::new(std::io::Error::other("store unavailable")))
    }

    impl bricklog_app::ports::LegoSetRepository for BrokenLegoSetRepo {
        async fn create(&self, _set: LegoSet) -> Result<LegoSet, CatalogError> {
            Err(broken())
        }
        async fn get_by_id(&self, _id: LegoSetId) -> Result<Option<LegoSet>, CatalogError> {
            Err(broken())
        }
        async fn find_by_set_number(
            &self,
            _set_number: &str,
        ) -> Result<Option<LegoSet>, CatalogError> {
            Err(broken())
        }
        async fn get_all(&self) -> Result<Vec<LegoSet>, CatalogError> {
            Err(broken())
        }
        async fn max_id(&self) -> Result<Option<LegoSetId>, CatalogError> {
            Err(broken())
        }
        async fn update(&self, _set: LegoSet) -> Result<Option<LegoSet>, CatalogError> {
            Err(broken())
        }
        async fn delete(&self, _id: LegoSetId) -> Result<bool, CatalogError> {
            Err(broken())
        }
    }

    fn app() -> Router {
        build(
            AppState::new(LegoSetService::new(StubLegoSetRepo)),
            cors::layer(&[]),
        )
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let response = app()
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
    async fn should_greet_on_root() {
        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["Hello"], "World");
    }

    #[tokio::test]
    async fn should_list_empty_catalog() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/lego-sets")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, serde_json::json!([]));
    }

    #[tokio::test]
    async fn should_return_not_found_for_non_numeric_id() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/lego-sets/abc")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_json(response).await["error"].is_string());
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_missing_set() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method(Method::DELETE)
                    .uri("/api/lego-sets/7")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_reject_malformed_body_with_json_error() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/api/lego-sets")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert!(
            body["error"]
                .as_str()
                .unwrap()
                .starts_with("malformed request body")
        );
    }

    #[tokio::test]
    async fn should_name_missing_field_on_create() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/api/lego-sets")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"setNumber":"99999","name":"Set"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await["error"],
            "missing required field: pieces"
        );
    }

    #[tokio::test]
    async fn should_report_storage_failure_as_internal_error() {
        let app = build(
            AppState::new(LegoSetService::new(BrokenLegoSetRepo)),
            cors::layer(&[]),
        );
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/lego-sets")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["error"], "internal server error");
    }

    #[tokio::test]
    async fn should_allow_any_origin_by_default() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/lego-sets")
                    .header(header::ORIGIN, "http://localhost:5173")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
    }

    #[tokio::test]
    async fn should_answer_preflight_request() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/api/lego-sets/1")
                    .header(header::ORIGIN, "http://localhost:5173")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "PUT")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let methods = response.headers()[header::ACCESS_CONTROL_ALLOW_METHODS]
            .to_str()
            .unwrap();
        assert!(methods.contains("PUT"));
        assert!(methods.contains("DELETE"));
    }

    #[tokio::test]
    async fn should_echo_only_configured_origin() {
        let app = build(
            AppState::new(LegoSetService::new(StubLegoSetRepo)),
            cors::layer(&["http://catalog.example".to_string()]),
        );
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .header(header::ORIGIN, "http://catalog.example")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "http://catalog.example"
        );
    }
}
