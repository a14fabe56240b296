//! API routes.

use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::limit::RequestBodyLimitLayer;

use crate::handlers::{
    generate_shotlist_handler, generate_storyboard_handler, health, parse_script_handler, ready,
};
use crate::middleware::{cors_layer, rate_limit, request_id, request_logging, security_headers};
use crate::state::AppState;
use crate::ws::ws_sketches;

/// Create the API router.
pub fn create_router(state: AppState, metrics_handle: Option<PrometheusHandle>) -> Router {
    let api_routes = Router::new()
        .route("/parse-script", post(parse_script_handler))
        .route("/generate-shotlist", post(generate_shotlist_handler))
        .route("/generate-storyboard", post(generate_storyboard_handler))
        .route_layer(middleware::from_fn_with_state(state.clone(), rate_limit));

    let ws_routes = Router::new().route("/ws/sketches", get(ws_sketches));

    let health_routes = Router::new()
        .route("/health", get(health))
        .route("/healthz", get(health))
        .route("/ready", get(ready));

    let mut router = Router::new()
        .nest("/api", api_routes)
        .merge(ws_routes)
        .merge(health_routes);

    if let Some(handle) = metrics_handle {
        router = router.route("/metrics", get(move || async move { handle.render() }));
    }

    router
        .layer(middleware::from_fn(security_headers))
        .layer(middleware::from_fn(request_id))
        .layer(middleware::from_fn(request_logging))
        .layer(RequestBodyLimitLayer::new(state.config.max_body_size))
        .layer(cors_layer(&state.config.cors_origins))
        .with_state(state)
}
