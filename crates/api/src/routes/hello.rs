//! Greeting endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use common::{Clock, Timestamp};
use serde::Serialize;

use super::AppState;

pub const HELLO_MESSAGE: &str = "Hello from Rust Backend!";

#[derive(Serialize)]
pub struct HelloResponse {
    pub message: &'static str,
    pub timestamp: Timestamp,
}

/// GET /hello: returns a fixed greeting with the current time.
#[tracing::instrument(skip(state))]
pub async fn get<C: Clock>(State(state): State<Arc<AppState<C>>>) -> Json<HelloResponse> {
    Json(HelloResponse {
        message: HELLO_MESSAGE,
        timestamp: state.clock.now(),
    })
}
