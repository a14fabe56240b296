//! Client for the Kimi agent gateway.
//!
//! The gateway hosts named agents behind `POST /agents/{id}`. This crate
//! provides a generic call with retry and gateway-envelope unwrapping,
//! plus a typed helper for the shot-director agent. Whether the gateway
//! is used at all is an env-driven toggle; callers are expected to fall
//! back to the deterministic classifier when a call fails.

pub mod client;
pub mod error;
pub mod types;

pub use client::{KimiClient, KimiConfig};
pub use error::{KimiError, KimiResult};
pub use types::{shotlist_from_response, ShotDirectorRequest};
