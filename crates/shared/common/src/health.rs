//! Health check endpoint shared by every service.

use axum::{response::Json, routing::get, Router};
use serde::Serialize;

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

/// Create the `GET /health` route for a service.
///
/// The handler touches no state, so repeated calls have no side effects.
pub fn health_routes<S>(service: &'static str) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route(
        "/health",
        get(move || async move {
            Json(HealthResponse {
                status: "ok",
                service,
            })
        }),
    )
}
