//! Raw script parsing.

use shotdeck_models::{Beat, Scene, StructuredScript};

/// Truncate to at most `max` characters without splitting a char.
fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

/// Parse raw script text into a structured script.
///
/// Scenes are blank-line-separated chunks. Each chunk becomes one scene
/// (`SC001`, `SC002`, ...) whose slugline is its first line, holding a
/// single beat (`B001`) with the full chunk as action text. Sentence
/// expansion happens later, in [`crate::normalize::normalize_script`].
pub fn parse_script(raw: &str) -> StructuredScript {
    let raw = raw.replace("\r\n", "\n");
    let scenes = raw
        .split("\n\n")
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .enumerate()
        .map(|(i, chunk)| {
            let slugline = chunk
                .lines()
                .next()
                .map(|line| truncate_chars(line, 80))
                .filter(|line| !line.is_empty())
                .unwrap_or_else(|| format!("Scene {}", i + 1));

            let beat = Beat {
                beat_id: "B001".to_string(),
                parent_beat_id: None,
                action: Some(chunk.to_string()),
                text: None,
                beat_summary: Some(truncate_chars(chunk, 140)),
                dialogue: None,
            };

            Scene {
                scene_id: format!("SC{:03}", i + 1),
                slugline: Some(slugline),
                location: None,
                time: None,
                characters: Vec::new(),
                beats: vec![beat],
            }
        })
        .collect();

    StructuredScript { scenes }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_splits_on_blank_lines() {
        let raw = "INT. STUDIO - DAY\nArshdeep walks in.\n\nHe opens the pack.";
        let script = parse_script(raw);
        assert_eq!(script.scenes.len(), 2);
        assert_eq!(script.scenes[0].scene_id, "SC001");
        assert_eq!(script.scenes[1].scene_id, "SC002");
        assert_eq!(
            script.scenes[0].slugline.as_deref(),
            Some("INT. STUDIO - DAY")
        );
        assert_eq!(script.scenes[0].beats.len(), 1);
        assert_eq!(script.scenes[0].beats[0].beat_id, "B001");
    }

    #[test]
    fn test_parse_keeps_full_chunk_as_action() {
        let raw = "Line one.\nLine two.";
        let script = parse_script(raw);
        assert_eq!(
            script.scenes[0].beats[0].content(),
            "Line one.\nLine two."
        );
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse_script("").scenes.is_empty());
        assert!(parse_script("\n\n\n\n").scenes.is_empty());
    }

    #[test]
    fn test_parse_truncates_slugline() {
        let long_line = "X".repeat(200);
        let script = parse_script(&long_line);
        assert_eq!(script.scenes[0].slugline.as_ref().unwrap().len(), 80);
        assert_eq!(
            script.scenes[0].beats[0].beat_summary.as_ref().unwrap().len(),
            140
        );
    }
}
