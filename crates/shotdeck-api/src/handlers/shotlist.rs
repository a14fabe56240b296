//! Shot-list generation handlers.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use shotdeck_director::{generate_shotlist, normalize_script, GUIDELINE_TEXT};
use shotdeck_models::{Metadata, Shotlist, StructuredScript};

use crate::error::ApiResult;
use crate::metrics;
use crate::state::AppState;

/// How the shot list was produced.
pub mod mode {
    /// Shot-director agent
    pub const KIMI: &str = "kimi";
    /// Deterministic classifier
    pub const MOCK: &str = "mock";
    /// Deterministic fallback after an agent failure
    pub const MOCK_ENHANCED: &str = "mock-enhanced";
}

/// Generate-shotlist request body.
#[derive(Debug, Deserialize)]
pub struct GenerateShotlistRequest {
    pub structured_script: StructuredScript,

    #[serde(default)]
    pub metadata: Option<Metadata>,

    /// Overrides the built-in shot-breakdown guideline
    #[serde(default)]
    pub guideline_text: Option<String>,
}

/// Generate-shotlist response body.
#[derive(Debug, Serialize)]
pub struct GenerateShotlistResponse {
    pub shotlist: Shotlist,
    pub mode: String,
}

/// Generate a shot list, one shot per sentence-level beat.
pub async fn generate_shotlist_handler(
    State(state): State<AppState>,
    Json(request): Json<GenerateShotlistRequest>,
) -> ApiResult<Json<GenerateShotlistResponse>> {
    let metadata = request.metadata.unwrap_or_default();
    let guideline = request
        .guideline_text
        .unwrap_or_else(|| GUIDELINE_TEXT.to_string());

    // Enforce sentence-level beats here (critical for the 1:1 mapping).
    let structured_script = normalize_script(&request.structured_script);

    let total_beats = structured_script.beat_count();
    info!(
        beats = total_beats,
        scenes = structured_script.scenes.len(),
        "Generating shots (post-normalize)"
    );

    let (shotlist, mode) = if state.kimi.enabled() {
        match state
            .kimi
            .generate_shotlist(structured_script.clone(), metadata, guideline)
            .await
        {
            Ok(shotlist) => (shotlist, mode::KIMI),
            Err(e) => {
                error!("Kimi failed, using deterministic fallback: {}", e);
                (generate_shotlist(&structured_script), mode::MOCK_ENHANCED)
            }
        }
    } else {
        (generate_shotlist(&structured_script), mode::MOCK)
    };

    metrics::record_shotlist_generated(mode);

    Ok(Json(GenerateShotlistResponse {
        shotlist,
        mode: mode.to_string(),
    }))
}
