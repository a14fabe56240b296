//! Beat normalization: enforce sentence-level beats.

use shotdeck_models::{Beat, Scene, StructuredScript};

use crate::sentence::split_into_sentences;

/// Expand every beat into sentence-level sub-beats.
///
/// Shot generation maps beats to shots 1:1, so upstream parsers that
/// emit paragraph beats would otherwise collapse several sentences into
/// one shot. Each sub-beat gets `beat_id` `{parent}_{n}` and records the
/// original in `parent_beat_id`. A beat with no sentences keeps a single
/// empty placeholder sub-beat to preserve alignment.
pub fn normalize_script(script: &StructuredScript) -> StructuredScript {
    let scenes = script
        .scenes
        .iter()
        .map(|scene| {
            let mut expanded: Vec<Beat> = Vec::new();

            for (idx, beat) in scene.beats.iter().enumerate() {
                let base_id = if beat.beat_id.is_empty() {
                    format!("B{}", idx)
                } else {
                    beat.beat_id.clone()
                };

                let sentences = split_into_sentences(beat.content());

                if sentences.is_empty() {
                    expanded.push(Beat {
                        beat_id: format!("{}_1", base_id),
                        parent_beat_id: Some(base_id),
                        action: Some(String::new()),
                        text: beat.text.clone(),
                        beat_summary: beat.beat_summary.clone(),
                        dialogue: beat.dialogue.clone(),
                    });
                    continue;
                }

                for (j, sentence) in sentences.into_iter().enumerate() {
                    expanded.push(Beat {
                        beat_id: format!("{}_{}", base_id, j + 1),
                        parent_beat_id: Some(base_id.clone()),
                        action: Some(sentence),
                        text: beat.text.clone(),
                        beat_summary: beat.beat_summary.clone(),
                        dialogue: beat.dialogue.clone(),
                    });
                }
            }

            Scene {
                scene_id: scene.scene_id.clone(),
                slugline: scene.slugline.clone(),
                location: scene.location.clone(),
                time: scene.time.clone(),
                characters: scene.characters.clone(),
                beats: expanded,
            }
        })
        .collect();

    StructuredScript { scenes }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene_with(action: &str) -> StructuredScript {
        StructuredScript {
            scenes: vec![Scene {
                scene_id: "SC001".to_string(),
                slugline: None,
                location: None,
                time: None,
                characters: Vec::new(),
                beats: vec![Beat::new("B001", action)],
            }],
        }
    }

    #[test]
    fn test_normalize_expands_sentences() {
        let script = scene_with("He walks in. He opens the pack. He smiles.");
        let normalized = normalize_script(&script);
        let beats = &normalized.scenes[0].beats;
        assert_eq!(beats.len(), 3);
        assert_eq!(beats[0].beat_id, "B001_1");
        assert_eq!(beats[2].beat_id, "B001_3");
        assert_eq!(beats[1].parent_beat_id.as_deref(), Some("B001"));
        assert_eq!(beats[1].content(), "He opens the pack.");
    }

    #[test]
    fn test_normalize_keeps_placeholder_for_empty_beat() {
        let script = scene_with("   ");
        let normalized = normalize_script(&script);
        let beats = &normalized.scenes[0].beats;
        assert_eq!(beats.len(), 1);
        assert_eq!(beats[0].beat_id, "B001_1");
        assert_eq!(beats[0].content(), "");
        assert_eq!(beats[0].parent_beat_id.as_deref(), Some("B001"));
    }

    #[test]
    fn test_normalize_single_sentence_still_renumbers() {
        let script = scene_with("Just one beat");
        let normalized = normalize_script(&script);
        let beats = &normalized.scenes[0].beats;
        assert_eq!(beats.len(), 1);
        assert_eq!(beats[0].beat_id, "B001_1");
    }

    #[test]
    fn test_normalize_is_deterministic() {
        let script = scene_with("First. Second? Third!");
        let a = normalize_script(&script);
        let b = normalize_script(&script);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }
}
