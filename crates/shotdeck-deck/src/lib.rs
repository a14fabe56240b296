//! Storyboard PPTX deck writer.
//!
//! Builds the slide deck as a plain OOXML package: fixed skeleton parts
//! (content types, relationships, master/layout/theme) plus one
//! generated slide part per shot, zipped with [`zip`]. The deck carries
//! a title slide and, per shot, a frame placeholder panel with the
//! sketch caption and a camera/lens details panel.

pub mod builder;
pub mod error;
pub mod package;
pub mod xml;

pub use builder::{build_storyboard_deck, safe_filename_base};
pub use error::{DeckError, DeckResult};
