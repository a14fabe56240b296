//! Storyboard deck handlers.

use axum::extract::State;
use axum::http::{header, HeaderMap, HeaderValue};
use axum::Json;
use serde::Deserialize;
use tracing::info;

use shotdeck_deck::{build_storyboard_deck, safe_filename_base};
use shotdeck_models::{Metadata, Shotlist};

use crate::error::{ApiError, ApiResult};
use crate::metrics;
use crate::state::AppState;

const PPTX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.presentation";

/// Generate-storyboard request body.
#[derive(Debug, Deserialize)]
pub struct GenerateStoryboardRequest {
    pub shotlist: Shotlist,

    #[serde(default)]
    pub metadata: Option<Metadata>,
}

/// Build the storyboard deck and return it as a PPTX download.
pub async fn generate_storyboard_handler(
    State(_state): State<AppState>,
    Json(request): Json<GenerateStoryboardRequest>,
) -> ApiResult<(HeaderMap, Vec<u8>)> {
    let metadata = request.metadata.unwrap_or_default();

    let bytes = build_storyboard_deck(&request.shotlist, &metadata)?;

    let filename = format!(
        "{}_Storyboard.pptx",
        safe_filename_base(&metadata.project_title)
    );

    info!(
        shots = request.shotlist.shots.len(),
        filename = %filename,
        "Built storyboard deck"
    );
    metrics::record_deck_built();

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(PPTX_CONTENT_TYPE),
    );
    headers.insert(
        header::CONTENT_DISPOSITION,
        format!("attachment; filename=\"{filename}\"")
            .parse()
            .map_err(|_| ApiError::internal("Invalid deck filename"))?,
    );
    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));

    Ok((headers, bytes))
}
