//! Shot and shot list models.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Cinematographic shot types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum ShotType {
    /// Wide/establishing shot
    #[serde(rename = "WS")]
    Wide,
    /// Medium shot
    #[serde(rename = "MS")]
    Medium,
    /// Medium close-up
    #[serde(rename = "MCU")]
    MediumCloseUp,
    /// Close-up
    #[serde(rename = "CU")]
    CloseUp,
    /// Extreme close-up
    #[serde(rename = "ECU")]
    ExtremeCloseUp,
    /// Insert/detail shot of an object
    #[serde(rename = "INSERT")]
    Insert,
    /// Over-the-shoulder
    #[serde(rename = "OTS")]
    OverShoulder,
}

impl ShotType {
    /// All shot types.
    pub const ALL: &'static [ShotType] = &[
        ShotType::Wide,
        ShotType::Medium,
        ShotType::MediumCloseUp,
        ShotType::CloseUp,
        ShotType::ExtremeCloseUp,
        ShotType::Insert,
        ShotType::OverShoulder,
    ];

    /// Abbreviation as used on slides and in the wire format.
    pub fn as_str(&self) -> &'static str {
        match self {
            ShotType::Wide => "WS",
            ShotType::Medium => "MS",
            ShotType::MediumCloseUp => "MCU",
            ShotType::CloseUp => "CU",
            ShotType::ExtremeCloseUp => "ECU",
            ShotType::Insert => "INSERT",
            ShotType::OverShoulder => "OTS",
        }
    }
}

impl fmt::Display for ShotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ShotType {
    type Err = ShotTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "WS" => Ok(ShotType::Wide),
            "MS" => Ok(ShotType::Medium),
            "MCU" => Ok(ShotType::MediumCloseUp),
            "CU" => Ok(ShotType::CloseUp),
            "ECU" => Ok(ShotType::ExtremeCloseUp),
            "INSERT" => Ok(ShotType::Insert),
            "OTS" => Ok(ShotType::OverShoulder),
            _ => Err(ShotTypeParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Error)]
#[error("Unknown shot type: {0}")]
pub struct ShotTypeParseError(String);

/// Camera placement and movement for one shot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Camera {
    /// Vertical angle (e.g. `eye-level`, `low`, `flat`, `45°`)
    pub angle: String,
    /// Camera height reference (e.g. `chest`, `table`)
    pub height: String,
    /// Movement (e.g. `static`, `track`, `micro-slide`)
    pub movement: String,
    /// Support rig (e.g. `tripod`, `dolly/gimbal`, `slider/tripod`)
    pub support: String,
}

/// Lens choice for one shot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Lens {
    /// Focal length or range (e.g. `35mm`)
    pub mm_range: String,
    /// Why this lens suits the shot
    pub rationale: String,
}

/// Continuity reminders for one shot. Fields that don't apply carry a
/// neutral value rather than being omitted, so decks always render four
/// lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ContinuityNotes {
    /// 180-degree line note
    pub line_of_action: String,
    /// Eyeline matching note
    pub eyelines: String,
    /// Match-on-action note
    pub match_action: String,
    /// Prop/wardrobe continuity note
    pub props_wardrobe: String,
}

/// The framing decision derived for one beat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Shot {
    /// Stable identifier (`S001`, `S002`, ...)
    pub shot_id: String,
    /// Scene this shot belongs to
    pub scene_id: String,
    /// Beat this shot covers (1:1)
    pub beat_id: String,

    pub shot_type: ShotType,
    /// Full beat text
    pub action: String,
    /// What the shot is for
    pub intent: String,

    pub camera: Camera,
    pub lens: Lens,
    pub continuity_notes: ContinuityNotes,

    /// Heuristic warnings that the framing may not suit the content
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub risk_flags: Vec<String>,

    /// Caption used for the storyboard frame placeholder
    #[serde(default)]
    pub sketch_description: String,

    /// URL of a generated sketch, once rendered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sketch_image_url: Option<String>,

    /// Set when sketch generation failed for this shot
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sketch_error: Option<String>,
}

/// An ordered shot list, one shot per beat.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct Shotlist {
    pub shots: Vec<Shot>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shot_type_parse() {
        assert_eq!("INSERT".parse::<ShotType>().unwrap(), ShotType::Insert);
        assert_eq!("mcu".parse::<ShotType>().unwrap(), ShotType::MediumCloseUp);
        assert!("XCU".parse::<ShotType>().is_err());
    }

    #[test]
    fn test_shot_type_display() {
        assert_eq!(ShotType::OverShoulder.to_string(), "OTS");
    }

    #[test]
    fn test_shot_type_serde_rename() {
        let json = serde_json::to_string(&ShotType::MediumCloseUp).unwrap();
        assert_eq!(json, "\"MCU\"");
        let back: ShotType = serde_json::from_str("\"WS\"").unwrap();
        assert_eq!(back, ShotType::Wide);
    }

    #[test]
    fn test_shotlist_round_trip_keeps_flags() {
        let shot = Shot {
            shot_id: "S001".to_string(),
            scene_id: "SC001".to_string(),
            beat_id: "B001_1".to_string(),
            shot_type: ShotType::Wide,
            action: "Opening.".to_string(),
            intent: "Advance narrative".to_string(),
            camera: Camera {
                angle: "eye-level".to_string(),
                height: "chest".to_string(),
                movement: "static".to_string(),
                support: "tripod".to_string(),
            },
            lens: Lens {
                mm_range: "24mm".to_string(),
                rationale: "Spatial context, geography".to_string(),
            },
            continuity_notes: ContinuityNotes {
                line_of_action: "Standard".to_string(),
                eyelines: "N/A".to_string(),
                match_action: "N/A".to_string(),
                props_wardrobe: "Check continuity".to_string(),
            },
            risk_flags: vec!["Dialogue in WS may reduce clarity".to_string()],
            sketch_description: "Wide shot of Character in environment".to_string(),
            sketch_image_url: None,
            sketch_error: None,
        };
        let list = Shotlist { shots: vec![shot] };
        let json = serde_json::to_string(&list).unwrap();
        let back: Shotlist = serde_json::from_str(&json).unwrap();
        assert_eq!(back.shots.len(), 1);
        assert_eq!(back.shots[0].risk_flags.len(), 1);
        assert_eq!(back.shots[0].shot_type, ShotType::Wide);
    }
}
