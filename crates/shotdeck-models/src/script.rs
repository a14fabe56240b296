//! Structured script models (scenes and beats).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One unit of screenplay action/dialogue text.
///
/// Beats are immutable once produced. When a beat is split into
/// sentence-level sub-beats, each sub-beat records the original in
/// `parent_beat_id`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Beat {
    /// Stable identifier within the scene (e.g. `B001`, `B001_2`)
    pub beat_id: String,

    /// Identifier of the beat this one was split from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_beat_id: Option<String>,

    /// Action text for this beat
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,

    /// Alternate text field used by some upstream parsers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Short summary of the beat
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beat_summary: Option<String>,

    /// Dialogue line, if the beat carries one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dialogue: Option<String>,
}

impl Beat {
    /// Create a beat holding only action text.
    pub fn new(beat_id: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            beat_id: beat_id.into(),
            parent_beat_id: None,
            action: Some(action.into()),
            text: None,
            beat_summary: None,
            dialogue: None,
        }
    }

    /// The beat's text content: `action`, falling back to `text`,
    /// falling back to the empty string.
    pub fn content(&self) -> &str {
        self.action
            .as_deref()
            .or(self.text.as_deref())
            .unwrap_or("")
    }
}

/// A scene: a slugline plus its ordered beats.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Scene {
    /// Stable identifier (e.g. `SC001`)
    pub scene_id: String,

    /// Scene heading, usually the first line of the scene chunk
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slugline: Option<String>,

    /// Location, if the parser extracted one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Time of day, if the parser extracted one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,

    /// Characters appearing in the scene
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub characters: Vec<String>,

    /// Ordered beats
    #[serde(default)]
    pub beats: Vec<Beat>,
}

impl Scene {
    pub fn new(scene_id: impl Into<String>) -> Self {
        Self {
            scene_id: scene_id.into(),
            slugline: None,
            location: None,
            time: None,
            characters: Vec::new(),
            beats: Vec::new(),
        }
    }
}

/// A parsed script: ordered scenes, each with ordered beats.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct StructuredScript {
    #[serde(default)]
    pub scenes: Vec<Scene>,
}

impl StructuredScript {
    /// Total number of beats across all scenes.
    pub fn beat_count(&self) -> usize {
        self.scenes.iter().map(|s| s.beats.len()).sum()
    }
}
