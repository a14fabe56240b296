//! Sketch rendering HTTP client.

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, warn};

use shotdeck_models::{Shot, ShotType};

use crate::error::{SketchError, SketchResult};
use crate::types::{ImageRequest, ImageResponse};

/// Default sketch style injected into every prompt.
pub const DEFAULT_STYLE: &str = "pencil sketch";

/// Configuration for the sketch client.
#[derive(Debug, Clone)]
pub struct SketchConfig {
    /// API base URL
    pub api_base: String,
    /// API key
    pub api_key: String,
    /// Image model
    pub model: String,
    /// Output size
    pub size: String,
    /// Request timeout
    pub timeout: Duration,
    /// Pause between batch renders
    pub pacing: Duration,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            api_base: "https://api.openai.com/v1".to_string(),
            api_key: String::new(),
            model: "dall-e-3".to_string(),
            size: "1024x1024".to_string(),
            timeout: Duration::from_secs(120),
            pacing: Duration::from_millis(500),
        }
    }
}

impl SketchConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            api_base: std::env::var("OPENAI_API_BASE")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            api_key: std::env::var("OPENAI_API_KEY").unwrap_or_default(),
            model: std::env::var("SKETCH_MODEL").unwrap_or_else(|_| "dall-e-3".to_string()),
            size: std::env::var("SKETCH_SIZE").unwrap_or_else(|_| "1024x1024".to_string()),
            timeout: Duration::from_secs(
                std::env::var("SKETCH_TIMEOUT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(120),
            ),
            pacing: Duration::from_millis(
                std::env::var("SKETCH_PACING_MS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(500),
            ),
        }
    }
}

/// Build the storyboard-frame prompt for one shot.
pub fn build_prompt(description: &str, shot_type: ShotType, style: &str) -> String {
    format!(
        "Professional film storyboard frame, {style}, {shot_type} shot composition: {description}. \n\n\
         Style details: Hand-drawn pencil sketch on white storyboard paper, cinematic lighting, \
         grayscale, film production quality, clear lines, professional storyboard artist style, \
         single frame composition, no text, no letters, no watermarks, clean illustration, \
         detailed shading, movie scene visualization."
    )
}

/// Client for the image-generation API.
pub struct SketchClient {
    http: Client,
    config: SketchConfig,
}

impl SketchClient {
    /// Create a new sketch client.
    pub fn new(config: SketchConfig) -> SketchResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(SketchError::Network)?;

        Ok(Self { http, config })
    }

    /// Create from environment variables.
    pub fn from_env() -> SketchResult<Self> {
        Self::new(SketchConfig::from_env())
    }

    /// Whether an API key is configured.
    pub fn enabled(&self) -> bool {
        !self.config.api_key.is_empty()
    }

    /// Render one storyboard sketch and return its URL.
    pub async fn generate_sketch(
        &self,
        description: &str,
        shot_type: ShotType,
        style: &str,
    ) -> SketchResult<String> {
        if self.config.api_key.is_empty() {
            return Err(SketchError::NotConfigured(
                "Set OPENAI_API_KEY".to_string(),
            ));
        }

        let url = format!(
            "{}/images/generations",
            self.config.api_base.trim_end_matches('/')
        );

        let request = ImageRequest {
            model: self.config.model.clone(),
            prompt: build_prompt(description, shot_type, style),
            size: self.config.size.clone(),
            quality: "standard".to_string(),
            response_format: "url".to_string(),
        };

        debug!("Generating sketch for: {}", snippet(description, 50));

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(SketchError::Network)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SketchError::RequestFailed {
                status: status.as_u16(),
                body: snippet(&body, 500),
            });
        }

        let parsed: ImageResponse = response.json().await?;
        let image_url = parsed.first_url().ok_or(SketchError::NoImageUrl)?;

        debug!("Sketch generated: {}", snippet(image_url, 60));
        Ok(image_url.to_string())
    }

    /// Render sketches for a whole shot list.
    ///
    /// A failed render annotates the shot with `sketch_error` and the
    /// batch continues. `on_progress` is called after every shot with
    /// the updated shot and `(completed, total)`.
    pub async fn generate_all<F>(&self, shots: Vec<Shot>, style: &str, mut on_progress: F) -> Vec<Shot>
    where
        F: FnMut(&Shot, u32, u32),
    {
        let total = shots.len() as u32;
        let mut updated = Vec::with_capacity(shots.len());

        for (i, mut shot) in shots.into_iter().enumerate() {
            let description = if shot.sketch_description.is_empty() {
                format!("{} shot: {}", shot.shot_type, shot.action)
            } else {
                shot.sketch_description.clone()
            };

            match self
                .generate_sketch(&description, shot.shot_type, style)
                .await
            {
                Ok(url) => {
                    shot.sketch_image_url = Some(url);
                    shot.sketch_error = None;
                }
                Err(e) => {
                    warn!("Failed to generate sketch for {}: {}", shot.shot_id, e);
                    shot.sketch_image_url = None;
                    shot.sketch_error = Some("Generation failed".to_string());
                }
            }

            on_progress(&shot, (i + 1) as u32, total);
            updated.push(shot);

            if (i + 1) < total as usize {
                tokio::time::sleep(self.config.pacing).await;
            }
        }

        updated
    }
}

fn snippet(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(base: String) -> SketchConfig {
        SketchConfig {
            api_base: base,
            api_key: "sk-test".to_string(),
            pacing: Duration::from_millis(0),
            ..SketchConfig::default()
        }
    }

    fn test_shot(id: &str, description: &str) -> Shot {
        use shotdeck_models::{Camera, ContinuityNotes, Lens};
        Shot {
            shot_id: id.to_string(),
            scene_id: "SC001".to_string(),
            beat_id: "B001_1".to_string(),
            shot_type: ShotType::Medium,
            action: "A quiet moment.".to_string(),
            intent: "Advance narrative".to_string(),
            camera: Camera {
                angle: "eye-level".to_string(),
                height: "chest".to_string(),
                movement: "static".to_string(),
                support: "tripod".to_string(),
            },
            lens: Lens {
                mm_range: "35mm".to_string(),
                rationale: "Natural perspective, subject focus".to_string(),
            },
            continuity_notes: ContinuityNotes {
                line_of_action: "Standard".to_string(),
                eyelines: "N/A".to_string(),
                match_action: "N/A".to_string(),
                props_wardrobe: "Check continuity".to_string(),
            },
            risk_flags: Vec::new(),
            sketch_description: description.to_string(),
            sketch_image_url: None,
            sketch_error: None,
        }
    }

    #[test]
    fn test_config_defaults() {
        let config = SketchConfig::default();
        assert_eq!(config.model, "dall-e-3");
        assert_eq!(config.size, "1024x1024");
        assert_eq!(config.pacing, Duration::from_millis(500));
    }

    #[test]
    fn test_prompt_includes_shot_type_and_style() {
        let prompt = build_prompt("A hand on the pack", ShotType::Insert, DEFAULT_STYLE);
        assert!(prompt.contains("INSERT shot composition"));
        assert!(prompt.contains("pencil sketch"));
        assert!(prompt.contains("A hand on the pack"));
        assert!(prompt.contains("no watermarks"));
    }

    #[tokio::test]
    async fn test_generate_sketch_returns_url() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/images/generations"))
            .and(body_partial_json(serde_json::json!({
                "model": "dall-e-3",
                "response_format": "url"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [{ "url": "https://img.example/sketch.png" }]
            })))
            .mount(&server)
            .await;

        let client = SketchClient::new(test_config(server.uri())).unwrap();
        let url = client
            .generate_sketch("Wide shot of Character", ShotType::Wide, DEFAULT_STYLE)
            .await
            .unwrap();

        assert_eq!(url, "https://img.example/sketch.png");
    }

    #[tokio::test]
    async fn test_generate_sketch_errors_without_url() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/images/generations"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "data": [] })),
            )
            .mount(&server)
            .await;

        let client = SketchClient::new(test_config(server.uri())).unwrap();
        let err = client
            .generate_sketch("desc", ShotType::Medium, DEFAULT_STYLE)
            .await
            .unwrap_err();

        assert!(matches!(err, SketchError::NoImageUrl));
    }

    #[tokio::test]
    async fn test_generate_all_continues_past_failures() {
        let server = MockServer::start().await;

        // Every call fails; both shots must still come back, annotated.
        Mock::given(method("POST"))
            .and(path("/images/generations"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let client = SketchClient::new(test_config(server.uri())).unwrap();

        let mut progress = Vec::new();
        let shots = client
            .generate_all(
                vec![test_shot("S001", "first"), test_shot("S002", "second")],
                DEFAULT_STYLE,
                |_, current, total| progress.push((current, total)),
            )
            .await;

        assert_eq!(shots.len(), 2);
        assert!(shots.iter().all(|s| s.sketch_image_url.is_none()));
        assert!(shots
            .iter()
            .all(|s| s.sketch_error.as_deref() == Some("Generation failed")));
        assert_eq!(progress, vec![(1, 2), (2, 2)]);
    }
}
