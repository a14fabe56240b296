//! Axum HTTP/WS API server.
//!
//! This crate provides:
//! - Script parsing, shot-list generation, and storyboard deck routes
//! - A WebSocket endpoint streaming sketch-render progress
//! - Request middleware (security headers, request IDs, logging, CORS,
//!   per-IP rate limiting) and Prometheus metrics

pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod ws;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use state::AppState;
