//! HTTP API server for the backend.
//!
//! Serves a fixed greeting, a small item catalog, an echo-style greeting and
//! a health check, with structured logging (tracing) and Prometheus metrics.

pub mod config;
pub mod error;
pub mod routes;
pub mod telemetry;

use std::sync::Arc;

use axum::Router;
use axum::middleware;
use axum::routing::{get, post};
use common::{Clock, SystemClock};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use config::Config;
use routes::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<C: Clock>(state: Arc<AppState<C>>, metrics_handle: PrometheusHandle) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/hello", get(routes::hello::get::<C>))
        .route("/data", get(routes::data::get::<C>))
        .route("/greet", post(routes::greet::post::<C>))
        .route("/health", get(routes::health::check::<C>))
        .route_layer(middleware::from_fn(telemetry::track_metrics))
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates the application state backed by the system clock.
pub fn create_default_state(config: &Config) -> Arc<AppState<SystemClock>> {
    Arc::new(AppState::new(config.service_name.clone(), SystemClock))
}
