//! Deterministic shot classification and script structuring.
//!
//! This crate turns screenplay text into a shot list without any remote
//! calls:
//! - `parse` splits raw script text into scenes and beats
//! - `sentence` and `normalize` enforce sentence-level beats
//! - `classify` maps each beat to a framing decision (shot type, camera,
//!   lens, continuity notes, risk flags, sketch caption)
//!
//! Classification is a total function of the beat text and its ordinal
//! position; identical inputs always produce identical shots, and
//! malformed or empty text degrades to the default medium shot instead
//! of failing.

pub mod classify;
pub mod guide;
pub mod normalize;
pub mod parse;
pub mod rules;
pub mod sentence;

pub use classify::{classify, generate_shotlist, shot_from_beat, Framing};
pub use guide::GUIDELINE_TEXT;
pub use normalize::normalize_script;
pub use parse::parse_script;
pub use sentence::split_into_sentences;
