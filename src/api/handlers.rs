//! HTTP API handlers.

use std::time::Instant;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use tracing::info;

use crate::error::ApiError;
use crate::metrics;
use crate::store::{Dog, MemoryStore, NewDog};

/// Application state shared with handlers.
#[derive(Clone)]
pub struct AppState {
    /// Record store handle.
    pub store: MemoryStore,
    /// When the service started.
    pub started_at: Instant,
    /// Prometheus handle, present when the recorder is installed.
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Create app state around a store handle.
    pub fn new(store: MemoryStore) -> Self {
        Self {
            store,
            started_at: Instant::now(),
            metrics: None,
        }
    }

    /// Attach a Prometheus handle for the /metrics endpoint.
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status: "ok".
    pub status: &'static str,
}

/// Status response.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    /// Service status.
    pub status: &'static str,
    /// Number of live dog records.
    pub dogs: usize,
    /// Seconds since the service started.
    pub uptime_seconds: u64,
}

/// Health check handler - always returns 200.
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse { status: "ok" })
}

/// Status handler - returns service status and record count.
pub async fn status(State(state): State<AppState>) -> impl IntoResponse {
    Json(StatusResponse {
        status: "running",
        dogs: state.store.len(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
    })
}

/// Prometheus metrics handler.
pub async fn render_metrics(State(state): State<AppState>) -> Response {
    match &state.metrics {
        Some(handle) => handle.render().into_response(),
        None => (StatusCode::NOT_FOUND, "metrics recorder not installed").into_response(),
    }
}

/// List all dogs in creation order.
#[utoipa::path(
    get,
    path = "/dogs",
    tag = "dogs",
    responses(
        (status = 200, description = "All dog records in creation order", body = [Dog])
    )
)]
pub async fn list_dogs(State(state): State<AppState>) -> Json<Vec<Dog>> {
    Json(state.store.list_all())
}

/// Create a dog record.
#[utoipa::path(
    post,
    path = "/dogs",
    tag = "dogs",
    request_body = NewDog,
    responses(
        (status = 200, description = "The created record including its assigned id", body = Dog),
        (status = 400, description = "A required field was empty", body = String)
    )
)]
pub async fn create_dog(
    State(state): State<AppState>,
    Json(payload): Json<NewDog>,
) -> Result<Json<Dog>, ApiError> {
    payload.validate()?;

    let dog = state.store.create(payload);
    metrics::inc_dogs_created();
    info!(id = dog.id, name = %dog.name, "Created dog record");

    Ok(Json(dog))
}

/// Fetch a single dog record by id.
#[utoipa::path(
    get,
    path = "/dogs/{id}",
    tag = "dogs",
    params(("id" = i64, Path, description = "Record id")),
    responses(
        (status = 200, description = "The record", body = Dog),
        (status = 404, description = "No record with this id", body = String)
    )
)]
pub async fn get_dog(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Dog>, ApiError> {
    state
        .store
        .find_by_id(id)
        .map(Json)
        .ok_or(ApiError::DogNotFound { id })
}

/// Delete a dog record by id.
#[utoipa::path(
    delete,
    path = "/dogs/{id}",
    tag = "dogs",
    params(("id" = i64, Path, description = "Record id")),
    responses(
        (status = 200, description = "Record deleted", body = String),
        (status = 404, description = "No record with this id", body = String)
    )
)]
pub async fn delete_dog(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<String, ApiError> {
    match state.store.delete_by_id(id) {
        Some(dog) => {
            metrics::inc_dogs_deleted();
            info!(id = dog.id, name = %dog.name, "Deleted dog record");
            Ok(format!("deleted dog with id {}", dog.id))
        }
        None => {
            metrics::inc_delete_not_found();
            Err(ApiError::DogNotFound { id })
        }
    }
}
