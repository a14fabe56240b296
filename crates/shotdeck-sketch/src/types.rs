//! Image API request/response types.

use serde::{Deserialize, Serialize};

/// Request body for `POST /images/generations`.
#[derive(Debug, Clone, Serialize)]
pub struct ImageRequest {
    pub model: String,
    pub prompt: String,
    pub size: String,
    pub quality: String,
    pub response_format: String,
}

/// One generated image.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageData {
    pub url: Option<String>,
}

/// Response body for `POST /images/generations`.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageResponse {
    #[serde(default)]
    pub data: Vec<ImageData>,
}

impl ImageResponse {
    /// The first image URL, if the API returned one.
    pub fn first_url(&self) -> Option<&str> {
        self.data.first().and_then(|d| d.url.as_deref())
    }
}
