//! Kimi client error types.

use thiserror::Error;

pub type KimiResult<T> = Result<T, KimiError>;

#[derive(Debug, Error)]
pub enum KimiError {
    #[error("Kimi gateway not configured: {0}")]
    NotConfigured(String),

    #[error("Agent call failed ({status}): {body}")]
    AgentFailed { status: u16, body: String },

    #[error("Gateway returned non-JSON: {0}")]
    NonJsonResponse(String),

    #[error("Unexpected agent response shape: {0}")]
    InvalidResponse(String),

    #[error("Timeout after {0} seconds")]
    Timeout(u64),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl KimiError {
    /// Whether retrying the same call may succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            KimiError::Network(_) | KimiError::Timeout(_) => true,
            KimiError::AgentFailed { status, .. } => *status >= 500,
            _ => false,
        }
    }
}
