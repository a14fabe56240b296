//! Application state.

use std::sync::Arc;

use shotdeck_kimi::KimiClient;
use shotdeck_sketch::SketchClient;

use crate::config::ApiConfig;
use crate::middleware::RateLimiterCache;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub kimi: Arc<KimiClient>,
    pub sketch: Arc<SketchClient>,
    pub limiter: RateLimiterCache,
}

impl AppState {
    /// Create application state with clients built from the environment.
    pub fn new(config: ApiConfig) -> anyhow::Result<Self> {
        let kimi = KimiClient::from_env()?;
        let sketch = SketchClient::from_env()?;
        let limiter = RateLimiterCache::new(config.rate_limit_rps, config.rate_limit_burst);

        Ok(Self {
            config,
            kimi: Arc::new(kimi),
            sketch: Arc::new(sketch),
            limiter,
        })
    }

    /// Assemble state from pre-built parts (used by tests).
    pub fn with_clients(config: ApiConfig, kimi: KimiClient, sketch: SketchClient) -> Self {
        let limiter = RateLimiterCache::new(config.rate_limit_rps, config.rate_limit_burst);
        Self {
            config,
            kimi: Arc::new(kimi),
            sketch: Arc::new(sketch),
            limiter,
        }
    }
}
