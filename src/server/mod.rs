//! HTTP server module
//!
//! Thin gateway over the predictors and the recommendation engine: three
//! POST endpoints plus a health check. Failures map to a uniform
//! `{success: false, error}` body with a 400 status for caller mistakes and
//! 500 for everything else.

pub mod routes;
pub mod state;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::error::ServiceError;
use state::SharedState;

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = if self.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        let body = Json(json!({
            "success": false,
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}

/// Build the application router with all endpoints and middleware
pub fn build_router(state: SharedState) -> Router {
    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/predict_yield", post(routes::yield_prediction::predict_yield))
        .route("/detect_disease", post(routes::disease::detect_disease))
        .route(
            "/get_recommendations",
            post(routes::recommendations::get_recommendations),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
