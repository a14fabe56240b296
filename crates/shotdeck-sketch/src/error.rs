//! Sketch client error types.

use thiserror::Error;

pub type SketchResult<T> = Result<T, SketchError>;

#[derive(Debug, Error)]
pub enum SketchError {
    #[error("Image API not configured: {0}")]
    NotConfigured(String),

    #[error("Image request failed ({status}): {body}")]
    RequestFailed { status: u16, body: String },

    #[error("No image URL returned")]
    NoImageUrl,

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SketchError {
    /// Whether retrying the same call may succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            SketchError::Network(_) => true,
            SketchError::RequestFailed { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }
}
