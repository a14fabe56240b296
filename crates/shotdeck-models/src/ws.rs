//! WebSocket message types for sketch rendering progress.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// WebSocket message kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum WsMessageType {
    /// Log message
    Log,
    /// Progress update
    Progress,
    /// One sketch finished rendering
    SketchReady,
    /// Error message
    Error,
    /// Batch complete
    Done,
}

impl WsMessageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WsMessageType::Log => "log",
            WsMessageType::Progress => "progress",
            WsMessageType::SketchReady => "sketch_ready",
            WsMessageType::Error => "error",
            WsMessageType::Done => "done",
        }
    }
}

/// WebSocket message envelope.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WsMessage {
    /// Log message with timestamp
    Log {
        message: String,
        timestamp: DateTime<Utc>,
    },

    /// Progress update (0-100)
    Progress {
        value: u8,
    },

    /// A sketch finished rendering for one shot
    SketchReady {
        #[serde(rename = "shotId")]
        shot_id: String,
        #[serde(rename = "imageUrl", skip_serializing_if = "Option::is_none")]
        image_url: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        error: Option<String>,
        current: u32,
        total: u32,
    },

    /// Error message
    Error {
        message: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        details: Option<String>,
        timestamp: DateTime<Utc>,
    },

    /// Batch complete
    Done {
        total: u32,
    },
}

impl WsMessage {
    /// Create a log message.
    pub fn log(message: impl Into<String>) -> Self {
        WsMessage::Log {
            message: message.into(),
            timestamp: Utc::now(),
        }
    }

    /// Create a progress message.
    pub fn progress(value: u8) -> Self {
        WsMessage::Progress {
            value: value.min(100),
        }
    }

    /// Create a sketch-ready message for a successful render.
    pub fn sketch_ready(
        shot_id: impl Into<String>,
        image_url: impl Into<String>,
        current: u32,
        total: u32,
    ) -> Self {
        WsMessage::SketchReady {
            shot_id: shot_id.into(),
            image_url: Some(image_url.into()),
            error: None,
            current,
            total,
        }
    }

    /// Create a sketch-ready message for a failed render.
    pub fn sketch_failed(
        shot_id: impl Into<String>,
        error: impl Into<String>,
        current: u32,
        total: u32,
    ) -> Self {
        WsMessage::SketchReady {
            shot_id: shot_id.into(),
            image_url: None,
            error: Some(error.into()),
            current,
            total,
        }
    }

    /// Create an error message.
    pub fn error(message: impl Into<String>) -> Self {
        WsMessage::Error {
            message: message.into(),
            details: None,
            timestamp: Utc::now(),
        }
    }

    /// Create an error message with details.
    pub fn error_with_details(message: impl Into<String>, details: impl Into<String>) -> Self {
        WsMessage::Error {
            message: message.into(),
            details: Some(details.into()),
            timestamp: Utc::now(),
        }
    }

    /// Create a done message.
    pub fn done(total: u32) -> Self {
        WsMessage::Done { total }
    }

    /// Get the message type.
    pub fn message_type(&self) -> WsMessageType {
        match self {
            WsMessage::Log { .. } => WsMessageType::Log,
            WsMessage::Progress { .. } => WsMessageType::Progress,
            WsMessage::SketchReady { .. } => WsMessageType::SketchReady,
            WsMessage::Error { .. } => WsMessageType::Error,
            WsMessage::Done { .. } => WsMessageType::Done,
        }
    }
}
