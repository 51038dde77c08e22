//! Health check endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use common::Clock;
use serde::Serialize;

use super::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: String,
}

/// GET /health: returns service health status.
pub async fn check<C: Clock>(State(state): State<Arc<AppState<C>>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "UP",
        service: state.service_name.clone(),
    })
}
