//! HTTP router setup.

use axum::error_handling::HandleErrorLayer;
use axum::extract::OriginalUri;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::time::Duration;
use tower::ServiceBuilder;
use tower::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::log_warn;
use crate::modules::planet;
use crate::shared::errors::{ApiError, AppError};
use crate::state::AppState;

/// Creates the service router with tracing and a per-request timeout.
pub fn app_router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .merge(planet::routes::routes())
        .route("/health", get(health))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_timeout_error))
                .layer(TimeoutLayer::new(request_timeout)),
        )
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn not_found(uri: OriginalUri) -> ApiError {
    let path = uri.0.path().to_string();
    ApiError::new(AppError::NotFound(format!("not found: {path}")), path)
}

async fn handle_timeout_error(uri: OriginalUri, err: tower::BoxError) -> ApiError {
    let path = uri.0.path().to_string();
    if err.is::<tower::timeout::error::Elapsed>() {
        log_warn!("{} timed out", path);
        ApiError::new(AppError::Timeout(err.to_string()), path)
    } else {
        ApiError::new(AppError::InternalError(err.to_string()), path)
    }
}
