//! Immutable rule tables for shot classification.
//!
//! Keyword patterns are Hinglish-friendly and dialogue-friendly; they
//! are compiled once at first use and never mutated.

use std::sync::LazyLock;

use regex::Regex;
use shotdeck_models::ShotType;

/// Close-up cues: faces, expressions, named reactions.
pub static CLOSE_UP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(close-?up|cu|face|expression|eyes|reaction|stare(s|d)?|smile(s|d)?|frown(s|ed)?|annoyed|intense|confused)\b")
        .expect("valid regex")
});

/// Product cues: packaging and hero objects.
pub static PRODUCT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(product|pack|box|bottle|shoe(s)?|toothpaste|muesli|bowl)\b")
        .expect("valid regex")
});

/// Insert cues: texture, detail, hands, pours.
pub static INSERT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(milk|pour|spoon|crunch|texture|detail|macro|hand|tap(s|ped)?)\b")
        .expect("valid regex")
});

/// Action cues: movement through space.
pub static ACTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(bowl(ing)?|run-?up|running|walk(ing)?|rush(es|ed)?|move(s|d)?|workout|vlog(ging)?)\b")
        .expect("valid regex")
});

/// Straight or curly double quotes mark spoken lines.
pub static DIALOGUE_QUOTES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[\"\u{201C}\u{201D}]").expect("valid regex"));

/// `Name:` prefix marks a dialogue beat.
pub static DIALOGUE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[A-Za-z][A-Za-z\s]*:\s+").expect("valid regex"));

/// Reaction verbs used for intent derivation.
pub static REACTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(stares|looks|expression|reaction|confused|annoyed|smiles)\b")
        .expect("valid regex")
});

/// Presentation verbs that, with a product cue, mean a showcase beat.
pub static PRESENTATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(hold(s|ing)?|opens|present(s|ing)?|shows)\b").expect("valid regex")
});

/// Recognized character names for sketch captions.
pub static CHARACTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(Arshdeep|Manager|Director|Brand Manager)\b").expect("valid regex")
});

/// Recognized product nouns for insert sketch captions.
pub static PRODUCT_NOUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(toothpaste|shoe|bottle|muesli|bowl|spoon|pack)\b").expect("valid regex")
});

/// Which keyword families a piece of beat text matches.
///
/// Scanned once per beat so every derived field (framing, intent,
/// continuity, flags) reads the same answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Patterns {
    pub close_up: bool,
    pub product: bool,
    pub insert: bool,
    pub action: bool,
    pub dialogue: bool,
}

impl Patterns {
    pub fn scan(text: &str) -> Self {
        Self {
            close_up: CLOSE_UP.is_match(text),
            product: PRODUCT.is_match(text),
            insert: INSERT.is_match(text),
            action: ACTION.is_match(text),
            dialogue: DIALOGUE_QUOTES.is_match(text) || DIALOGUE_PREFIX.is_match(text),
        }
    }
}

/// Why a lens suits a shot type.
pub fn lens_rationale(shot_type: ShotType) -> &'static str {
    match shot_type {
        ShotType::Wide => "Spatial context, geography",
        ShotType::Medium => "Natural perspective, subject focus",
        ShotType::MediumCloseUp => "Intimacy while retaining context",
        ShotType::CloseUp => "Emotional emphasis, isolation",
        ShotType::ExtremeCloseUp => "Maximum intimacy, detail",
        ShotType::Insert => "Product detail, texture",
        ShotType::OverShoulder => "Spatial relationship, dialogue",
    }
}
