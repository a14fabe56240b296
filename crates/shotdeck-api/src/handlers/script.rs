//! Script parsing handlers.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;
use validator::Validate;

use shotdeck_director::parse_script;
use shotdeck_models::{Metadata, StructuredScript};

use crate::error::{ApiError, ApiResult};
use crate::metrics;
use crate::state::AppState;

/// Parse-script request body.
#[derive(Debug, Deserialize, Validate)]
pub struct ParseScriptRequest {
    /// Raw script text pasted by the user
    #[validate(length(min = 1, message = "raw_script_text is required"))]
    pub raw_script_text: String,

    /// Optional project metadata, echoed back
    #[serde(default)]
    pub metadata: Option<Metadata>,
}

/// Parse-script response body.
#[derive(Debug, Serialize)]
pub struct ParseScriptResponse {
    pub structured_script: StructuredScript,
    pub metadata_used: Metadata,
}

/// Parse raw script text into scenes and beats.
pub async fn parse_script_handler(
    State(_state): State<AppState>,
    Json(request): Json<ParseScriptRequest>,
) -> ApiResult<Json<ParseScriptResponse>> {
    request
        .validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    if request.raw_script_text.trim().is_empty() {
        return Err(ApiError::bad_request("raw_script_text is required"));
    }

    let metadata = request.metadata.unwrap_or_default();
    let structured_script = parse_script(&request.raw_script_text);

    info!(
        scenes = structured_script.scenes.len(),
        "Parsed script into scenes"
    );
    metrics::record_script_parsed();

    Ok(Json(ParseScriptResponse {
        structured_script,
        metadata_used: metadata,
    }))
}
