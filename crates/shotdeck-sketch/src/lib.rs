//! Image-generation client for storyboard frame sketches.
//!
//! Wraps the images endpoint of an OpenAI-compatible API. Batch
//! rendering tolerates per-shot failures (the failed shot is annotated
//! and the batch continues), paces requests, and reports progress after
//! every shot.

pub mod client;
pub mod error;
pub mod types;

pub use client::{SketchClient, SketchConfig, DEFAULT_STYLE};
pub use error::{SketchError, SketchResult};
