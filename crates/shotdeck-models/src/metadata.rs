//! Project metadata and aspect ratio definitions.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Delivery aspect ratio for the storyboard deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default)]
pub enum AspectRatio {
    /// Widescreen landscape (16:9)
    #[default]
    #[serde(rename = "16:9")]
    Landscape,
    /// Vertical video (9:16)
    #[serde(rename = "9:16")]
    Portrait,
    /// Square (1:1)
    #[serde(rename = "1:1")]
    Square,
    /// Feed portrait (4:5)
    #[serde(rename = "4:5")]
    FeedPortrait,
}

impl AspectRatio {
    /// All supported aspect ratios.
    pub const ALL: &'static [AspectRatio] = &[
        AspectRatio::Landscape,
        AspectRatio::Portrait,
        AspectRatio::Square,
        AspectRatio::FeedPortrait,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AspectRatio::Landscape => "16:9",
            AspectRatio::Portrait => "9:16",
            AspectRatio::Square => "1:1",
            AspectRatio::FeedPortrait => "4:5",
        }
    }

    /// Whether the deck page should be taller than it is wide.
    pub fn is_vertical(&self) -> bool {
        matches!(self, AspectRatio::Portrait | AspectRatio::FeedPortrait)
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AspectRatio {
    type Err = AspectRatioParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "16:9" => Ok(AspectRatio::Landscape),
            "9:16" => Ok(AspectRatio::Portrait),
            "1:1" => Ok(AspectRatio::Square),
            "4:5" => Ok(AspectRatio::FeedPortrait),
            _ => Err(AspectRatioParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Error)]
#[error("Unknown aspect ratio: {0}, expected one of 16:9, 9:16, 1:1, 4:5")]
pub struct AspectRatioParseError(String);

/// Project metadata attached to every request and carried into the deck.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Metadata {
    /// Project title shown on the deck's title slide
    #[serde(default = "default_project_title")]
    pub project_title: String,

    /// Brand the spot is for
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,

    /// Director credit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,

    /// Director of photography credit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dop: Option<String>,

    /// Delivery aspect ratio
    #[serde(default)]
    pub aspect_ratio: AspectRatio,

    /// Script language
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Free-form production notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

fn default_project_title() -> String {
    "Storyboard".to_string()
}

impl Default for Metadata {
    fn default() -> Self {
        Self {
            project_title: default_project_title(),
            brand: None,
            director: None,
            dop: None,
            aspect_ratio: AspectRatio::default(),
            language: None,
            notes: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aspect_ratio_parse() {
        assert_eq!("9:16".parse::<AspectRatio>().unwrap(), AspectRatio::Portrait);
        assert_eq!("1:1".parse::<AspectRatio>().unwrap(), AspectRatio::Square);
        assert!("21:9".parse::<AspectRatio>().is_err());
    }

    #[test]
    fn test_aspect_ratio_display() {
        assert_eq!(AspectRatio::FeedPortrait.to_string(), "4:5");
    }

    #[test]
    fn test_aspect_ratio_serde_rename() {
        let json = serde_json::to_string(&AspectRatio::Portrait).unwrap();
        assert_eq!(json, "\"9:16\"");
        let back: AspectRatio = serde_json::from_str("\"16:9\"").unwrap();
        assert_eq!(back, AspectRatio::Landscape);
    }

    #[test]
    fn test_metadata_defaults() {
        let meta: Metadata = serde_json::from_str("{}").unwrap();
        assert_eq!(meta.project_title, "Storyboard");
        assert_eq!(meta.aspect_ratio, AspectRatio::Landscape);
        assert!(meta.brand.is_none());
    }
}
