//! Shot classification.
//!
//! A total, stateless mapping from beat text plus ordinal position to a
//! framing decision. Rules apply in strict precedence order, first match
//! wins; anything unmatched degrades to a standard medium shot.

use shotdeck_models::{
    Beat, Camera, ContinuityNotes, Lens, Shot, ShotType, Shotlist, StructuredScript,
};

use crate::rules::{
    lens_rationale, Patterns, ACTION, CHARACTER, DIALOGUE_PREFIX, DIALOGUE_QUOTES,
    PRESENTATION, PRODUCT, PRODUCT_NOUN, REACTION,
};

/// The framing resolved for one beat: shot type, lens, vertical angle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framing {
    pub shot_type: ShotType,
    pub lens: &'static str,
    pub angle: &'static str,
}

/// Classify one beat of action text.
///
/// Precedence, first match wins:
/// 1. the first shot is always a wide establishing shot,
/// 2. product + close-up/insert cues together make an insert at a flat
///    angle (checked before the plain insert and close-up rules),
/// 3. insert cues alone,
/// 4. close-up cues alone,
/// 5. dialogue without action cues,
/// 6. action cues,
/// 7. product cues alone,
/// 8. default medium shot.
pub fn classify(action: &str, ordinal: u32) -> Framing {
    if ordinal == 1 {
        return Framing {
            shot_type: ShotType::Wide,
            lens: "24mm",
            angle: "eye-level",
        };
    }

    let p = Patterns::scan(action);

    if p.product && (p.close_up || p.insert) {
        return Framing {
            shot_type: ShotType::Insert,
            lens: "100mm",
            angle: "flat",
        };
    }
    if p.insert {
        return Framing {
            shot_type: ShotType::Insert,
            lens: "100mm",
            angle: "45\u{B0}",
        };
    }
    if p.close_up {
        return Framing {
            shot_type: ShotType::CloseUp,
            lens: "85mm",
            angle: "eye-level",
        };
    }
    if p.dialogue && !p.action {
        return Framing {
            shot_type: ShotType::MediumCloseUp,
            lens: "50mm",
            angle: "eye-level",
        };
    }
    if p.action {
        return Framing {
            shot_type: ShotType::Wide,
            lens: "24mm",
            angle: "low",
        };
    }
    if p.product {
        return Framing {
            shot_type: ShotType::MediumCloseUp,
            lens: "50mm",
            angle: "eye-level",
        };
    }

    Framing {
        shot_type: ShotType::Medium,
        lens: "35mm",
        angle: "eye-level",
    }
}

/// What the shot is for, from the beat text alone.
fn intent(action: &str) -> &'static str {
    if DIALOGUE_QUOTES.is_match(action) || DIALOGUE_PREFIX.is_match(action) {
        return "Deliver dialogue / emotional beat";
    }
    if REACTION.is_match(action) {
        return "Show character reaction";
    }
    if PRESENTATION.is_match(action) && PRODUCT.is_match(action) {
        return "Product showcase";
    }
    if ACTION.is_match(action) {
        return "Action coverage";
    }
    "Advance narrative"
}

/// Camera placement for the resolved framing.
fn camera(p: Patterns, framing: &Framing) -> Camera {
    let is_insert = framing.shot_type == ShotType::Insert;

    let (movement, support) = if p.action {
        ("track", "dolly/gimbal")
    } else if is_insert {
        ("micro-slide", "slider/tripod")
    } else {
        ("static", "tripod")
    };

    Camera {
        angle: framing.angle.to_string(),
        height: if is_insert { "table" } else { "chest" }.to_string(),
        movement: movement.to_string(),
        support: support.to_string(),
    }
}

/// Continuity notes: triggered fields get a concrete reminder, the rest
/// a neutral value.
fn continuity(p: Patterns) -> ContinuityNotes {
    ContinuityNotes {
        line_of_action: if p.action {
            "Action axis maintained"
        } else {
            "Standard"
        }
        .to_string(),
        eyelines: if p.dialogue { "Match eyelines" } else { "N/A" }.to_string(),
        match_action: if p.action { "Cut on action" } else { "N/A" }.to_string(),
        props_wardrobe: if p.product {
            "Hero product visible"
        } else {
            "Check continuity"
        }
        .to_string(),
    }
}

/// Heuristic warnings. Not mutually exclusive.
fn risk_flags(p: Patterns, shot_type: ShotType) -> Vec<String> {
    let mut flags = Vec::new();

    if p.product && shot_type != ShotType::Insert && shot_type != ShotType::MediumCloseUp {
        flags.push("Product beat not framed as INSERT/MCU".to_string());
    }
    if p.dialogue && shot_type == ShotType::Wide {
        flags.push("Dialogue in WS may reduce clarity".to_string());
    }
    if p.insert && shot_type != ShotType::Insert {
        flags.push("Insert beat not framed as INSERT".to_string());
    }

    flags
}

/// Truncate to at most `max` characters without splitting a char.
fn truncate_chars(s: &str, max: usize) -> (String, bool) {
    let truncated: String = s.chars().take(max).collect();
    let was_cut = s.chars().count() > max;
    (truncated, was_cut)
}

/// Caption for the storyboard frame placeholder.
fn sketch_description(action: &str, shot_type: ShotType) -> String {
    let subject = CHARACTER
        .find(action)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| "Character".to_string());

    match shot_type {
        ShotType::Insert => {
            let product = PRODUCT_NOUN
                .find(action)
                .map(|m| m.as_str().to_string())
                .unwrap_or_else(|| "product".to_string());
            format!(
                "Insert/macro of {product} \u{2014} clean background, soft studio lighting, crisp texture detail"
            )
        }
        ShotType::CloseUp | ShotType::ExtremeCloseUp => {
            format!("Close-up on {subject}'s face \u{2014} clear emotional reaction, shallow depth of field")
        }
        ShotType::Wide => {
            format!("Wide shot of {subject} in environment \u{2014} show geography, studio/ground context")
        }
        _ if DIALOGUE_QUOTES.is_match(action) || DIALOGUE_PREFIX.is_match(action) => {
            format!("Medium shot of {subject} speaking \u{2014} clean eyeline, readable expression")
        }
        _ => {
            let (snippet, was_cut) = truncate_chars(action, 60);
            let ellipsis = if was_cut { "\u{2026}" } else { "" };
            format!("Medium shot of {subject} \u{2014} {snippet}{ellipsis}")
        }
    }
}

/// Derive the full shot for one beat.
///
/// `ordinal` is the 1-based shot number across the whole script; it only
/// affects the establishing-shot rule.
pub fn shot_from_beat(beat: &Beat, ordinal: u32, scene_id: &str) -> Shot {
    let action = beat.content().trim().to_string();
    let framing = classify(&action, ordinal);
    let p = Patterns::scan(&action);

    Shot {
        shot_id: format!("S{:03}", ordinal),
        scene_id: scene_id.to_string(),
        beat_id: beat.beat_id.clone(),
        shot_type: framing.shot_type,
        intent: intent(&action).to_string(),
        camera: camera(p, &framing),
        lens: Lens {
            mm_range: framing.lens.to_string(),
            rationale: lens_rationale(framing.shot_type).to_string(),
        },
        continuity_notes: continuity(p),
        risk_flags: risk_flags(p, framing.shot_type),
        sketch_description: sketch_description(&action, framing.shot_type),
        sketch_image_url: None,
        sketch_error: None,
        action,
    }
}

/// Generate a full shot list from a (sentence-normalized) script.
///
/// Shots are numbered consecutively across all scenes, one per beat.
pub fn generate_shotlist(script: &StructuredScript) -> Shotlist {
    let mut shots = Vec::with_capacity(script.beat_count());
    let mut ordinal: u32 = 0;

    for scene in &script.scenes {
        for beat in &scene.beats {
            ordinal += 1;
            shots.push(shot_from_beat(beat, ordinal, &scene.scene_id));
        }
    }

    Shotlist { shots }
}
