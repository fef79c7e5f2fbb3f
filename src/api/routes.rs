//! HTTP API route definitions.

use axum::middleware;
use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::metrics::track_http_metrics;
use crate::store::{Dog, NewDog};

use super::handlers::{
    self, create_dog, delete_dog, get_dog, health, list_dogs, render_metrics, status, AppState,
};

/// OpenAPI document for the dogs resource.
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::list_dogs,
        handlers::create_dog,
        handlers::get_dog,
        handlers::delete_dog,
    ),
    components(schemas(Dog, NewDog)),
    tags((name = "dogs", description = "Dog record CRUD"))
)]
pub struct ApiDoc;

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Dogs resource
        .route("/dogs", get(list_dogs).post(create_dog))
        .route("/dogs/:id", get(get_dog).delete(delete_dog))
        // Health and status endpoints
        .route("/health", get(health))
        .route("/api/v1/status", get(status))
        // Metrics endpoint
        .route("/metrics", get(render_metrics))
        .layer(middleware::from_fn(track_http_metrics))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::store::MemoryStore;

    fn app() -> Router {
        create_router(AppState::new(MemoryStore::new()))
    }

    #[tokio::test]
    async fn health_endpoint_returns_ok() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn empty_store_lists_no_dogs() {
        let response = app()
            .oneshot(Request::builder().uri("/dogs").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"[]");
    }

    #[tokio::test]
    async fn delete_on_empty_store_is_404_with_message() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/dogs/9999")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"Dog with id 9999 not found");
    }

    #[tokio::test]
    async fn non_numeric_id_is_rejected() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/dogs/rex")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn status_reports_record_count() {
        let store = MemoryStore::new();
        store.seed(&crate::store::seed::DEFAULT_SEED);
        let app = create_router(AppState::new(store));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/status")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "running");
        assert_eq!(json["dogs"], 4);
    }

    #[tokio::test]
    async fn openapi_document_is_served() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api-docs/openapi.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(json["paths"]["/dogs"].is_object());
    }
}
