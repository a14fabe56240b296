#![allow(dead_code)]

//! Shared test harness for API integration tests.
//!
//! Builds the full application router with the same middleware stack as
//! `main.rs`, but with remote clients left unconfigured so every request
//! exercises the deterministic paths.

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use tower::ServiceExt;

use shotdeck_api::{create_router, ApiConfig, AppState};
use shotdeck_kimi::{KimiClient, KimiConfig};
use shotdeck_sketch::{SketchClient, SketchConfig};

/// Build a test `ApiConfig` with the rate limiter opened wide so tests
/// never trip it.
pub fn test_config() -> ApiConfig {
    ApiConfig {
        rate_limit_rps: 10_000,
        rate_limit_burst: 10_000,
        ..ApiConfig::default()
    }
}

/// Build the full application router with unconfigured remote clients.
pub fn build_test_app() -> Router {
    let config = test_config();
    let kimi = KimiClient::new(KimiConfig::default()).expect("kimi client");
    let sketch = SketchClient::new(SketchConfig::default()).expect("sketch client");
    let state = AppState::with_clients(config, kimi, sketch);
    create_router(state, None)
}

/// Issue a GET request against the app.
pub async fn get(app: Router, path: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::GET)
            .uri(path)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Issue a POST request with a JSON body against the app.
pub async fn post_json(app: Router, path: &str, body: serde_json::Value) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(path)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body as raw bytes.
pub async fn body_bytes(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert a response is a client error (4xx).
pub fn assert_client_error(status: StatusCode) {
    assert!(
        status.is_client_error(),
        "expected a 4xx status, got {status}"
    );
}
