//! Shared data models for the ShotDeck backend.
//!
//! This crate provides Serde-serializable types for:
//! - Project metadata and aspect ratios
//! - Structured scripts (scenes and beats)
//! - Shots and shot lists
//! - WebSocket message schemas

pub mod metadata;
pub mod script;
pub mod shot;
pub mod ws;

// Re-export common types
pub use metadata::{AspectRatio, Metadata};
pub use script::{Beat, Scene, StructuredScript};
pub use shot::{Camera, ContinuityNotes, Lens, Shot, ShotType, Shotlist};
pub use ws::{WsMessage, WsMessageType};
