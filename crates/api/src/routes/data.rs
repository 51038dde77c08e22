//! Catalog listing endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use common::{Clock, Item, Timestamp, catalog};
use serde::Serialize;

use super::AppState;

#[derive(Serialize)]
pub struct DataResponse {
    pub data: Vec<Item>,
    pub count: usize,
    pub timestamp: Timestamp,
}

/// GET /data: returns the item catalog, its size and the current time.
#[tracing::instrument(skip(state))]
pub async fn get<C: Clock>(State(state): State<Arc<AppState<C>>>) -> Json<DataResponse> {
    let data = catalog();
    Json(DataResponse {
        count: data.len(),
        data,
        timestamp: state.clock.now(),
    })
}
