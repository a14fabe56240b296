//! Kimi agent request/response types.

use serde::{Deserialize, Serialize};
use shotdeck_models::{Metadata, Shotlist, StructuredScript};

/// Payload for the shot-director agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShotDirectorRequest {
    /// Sentence-normalized script
    pub structured_script: StructuredScript,
    /// Project metadata
    pub metadata: Metadata,
    /// Shot-breakdown guideline the agent should follow
    pub guideline_text: String,
    /// Strict mapping instructions, including the exact beat count
    pub instructions: String,
}

impl ShotDirectorRequest {
    /// Build the request, deriving the strict 1:1 instruction from the
    /// script's beat count.
    pub fn new(
        structured_script: StructuredScript,
        metadata: Metadata,
        guideline_text: impl Into<String>,
    ) -> Self {
        let total_beats = structured_script.beat_count();
        let instructions = format!(
            "Generate EXACTLY {total_beats} shots \u{2014} STRICT 1:1 mapping: one shot per \
             beat/sentence. Do not merge beats. Return JSON {{ shots: [...] }}. \
             Include sketch_description for each shot."
        );
        Self {
            structured_script,
            metadata,
            guideline_text: guideline_text.into(),
            instructions,
        }
    }
}

/// Extract a shot list from an agent response, which may wrap it under
/// `shotlist` or return it bare.
pub fn shotlist_from_response(value: serde_json::Value) -> Result<Shotlist, serde_json::Error> {
    match value {
        serde_json::Value::Object(mut map) if map.contains_key("shotlist") => {
            serde_json::from_value(map.remove("shotlist").unwrap_or(serde_json::Value::Null))
        }
        other => serde_json::from_value(other),
    }
}
