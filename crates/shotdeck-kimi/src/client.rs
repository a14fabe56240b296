//! Kimi gateway HTTP client.

use std::time::Duration;

use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use shotdeck_models::{Metadata, Shotlist, StructuredScript};

use crate::error::{KimiError, KimiResult};
use crate::types::{shotlist_from_response, ShotDirectorRequest};

/// Default agent id for shot-list generation.
const DEFAULT_SHOT_DIRECTOR_AGENT: &str = "shot_director";

/// Configuration for the Kimi client.
#[derive(Debug, Clone)]
pub struct KimiConfig {
    /// Master toggle; the gateway is only used when this is set and the
    /// base URL and key are present.
    pub enabled: bool,
    /// Gateway base URL
    pub base_url: String,
    /// Bearer token
    pub api_key: String,
    /// Agent id handling shot-list generation
    pub shot_director_agent: String,
    /// Request timeout
    pub timeout: Duration,
    /// Max retries for retryable failures
    pub max_retries: u32,
}

impl Default for KimiConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            base_url: String::new(),
            api_key: String::new(),
            shot_director_agent: DEFAULT_SHOT_DIRECTOR_AGENT.to_string(),
            timeout: Duration::from_secs(120),
            max_retries: 2,
        }
    }
}

impl KimiConfig {
    /// Create config from environment variables.
    ///
    /// `KIMI_ENABLED` accepts `true`/`1`/`yes`; the gateway also needs
    /// `KIMI_API_BASE` and `KIMI_API_KEY` to be considered enabled.
    pub fn from_env() -> Self {
        let toggled = std::env::var("KIMI_ENABLED")
            .map(|v| {
                let v = v.to_lowercase();
                v == "true" || v == "1" || v == "yes"
            })
            .unwrap_or(false);

        let base_url = std::env::var("KIMI_API_BASE").unwrap_or_default();
        let api_key = std::env::var("KIMI_API_KEY").unwrap_or_default();

        Self {
            enabled: toggled && !base_url.is_empty() && !api_key.is_empty(),
            base_url,
            api_key,
            shot_director_agent: std::env::var("KIMI_SHOT_DIRECTOR_AGENT_ID")
                .unwrap_or_else(|_| DEFAULT_SHOT_DIRECTOR_AGENT.to_string()),
            timeout: Duration::from_secs(
                std::env::var("KIMI_TIMEOUT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(120),
            ),
            max_retries: std::env::var("KIMI_RETRIES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(2),
        }
    }
}

/// Client for the Kimi agent gateway.
pub struct KimiClient {
    http: Client,
    config: KimiConfig,
}

impl KimiClient {
    /// Create a new Kimi client.
    pub fn new(config: KimiConfig) -> KimiResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(KimiError::Network)?;

        Ok(Self { http, config })
    }

    /// Create from environment variables.
    pub fn from_env() -> KimiResult<Self> {
        Self::new(KimiConfig::from_env())
    }

    /// Whether the gateway is configured and switched on.
    pub fn enabled(&self) -> bool {
        self.config.enabled
    }

    /// Call a named agent with an arbitrary JSON payload.
    ///
    /// Unwraps the common gateway envelopes (`data`, `result`) so
    /// callers see the agent's own response shape.
    pub async fn call_agent<P: Serialize>(&self, agent_id: &str, payload: &P) -> KimiResult<Value> {
        if self.config.base_url.is_empty() || self.config.api_key.is_empty() {
            return Err(KimiError::NotConfigured(
                "Set KIMI_API_BASE and KIMI_API_KEY".to_string(),
            ));
        }

        let url = format!(
            "{}/agents/{}",
            self.config.base_url.trim_end_matches('/'),
            agent_id
        );

        debug!("Calling Kimi agent at {}", url);

        let response = self
            .with_retry(|| async {
                self.http
                    .post(&url)
                    .bearer_auth(&self.config.api_key)
                    .json(payload)
                    .send()
                    .await
                    .map_err(KimiError::Network)
            })
            .await?;

        let status = response.status();
        let text = response.text().await.map_err(KimiError::Network)?;

        if !status.is_success() {
            return Err(KimiError::AgentFailed {
                status: status.as_u16(),
                body: truncate(&text, 500),
            });
        }

        let parsed: Value = serde_json::from_str(&text)
            .map_err(|_| KimiError::NonJsonResponse(truncate(&text, 500)))?;

        // Some gateways wrap the result
        if let Value::Object(mut map) = parsed {
            if let Some(data) = map.remove("data") {
                return Ok(data);
            }
            if let Some(result) = map.remove("result") {
                return Ok(result);
            }
            return Ok(Value::Object(map));
        }

        Ok(parsed)
    }

    /// Ask the shot-director agent for a shot list.
    pub async fn generate_shotlist(
        &self,
        structured_script: StructuredScript,
        metadata: Metadata,
        guideline_text: impl Into<String>,
    ) -> KimiResult<Shotlist> {
        let request = ShotDirectorRequest::new(structured_script, metadata, guideline_text);
        let agent_id = self.config.shot_director_agent.clone();

        let value = self.call_agent(&agent_id, &request).await?;

        shotlist_from_response(value)
            .map_err(|e| KimiError::InvalidResponse(e.to_string()))
    }

    /// Execute with retry and exponential backoff.
    async fn with_retry<F, Fut, T>(&self, operation: F) -> KimiResult<T>
    where
        F: Fn() -> Fut,
        Fut: std::future::Future<Output = KimiResult<T>>,
    {
        let mut last_error = None;

        for attempt in 0..=self.config.max_retries {
            match operation().await {
                Ok(result) => return Ok(result),
                Err(e) if e.is_retryable() && attempt < self.config.max_retries => {
                    let delay = Duration::from_millis(500 * 2u64.pow(attempt));
                    warn!(
                        "Kimi request failed (attempt {}), retrying in {:?}: {}",
                        attempt + 1,
                        delay,
                        e
                    );
                    tokio::time::sleep(delay).await;
                    last_error = Some(e);
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_error
            .unwrap_or_else(|| KimiError::InvalidResponse("retry loop exhausted".to_string())))
    }
}

fn truncate(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
