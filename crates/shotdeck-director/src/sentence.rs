//! Sentence splitting for beat normalization.

/// Characters that end a sentence.
fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?' | '\u{2026}')
}

/// Straight or curly double quote.
fn is_quote(c: char) -> bool {
    matches!(c, '"' | '\u{201C}' | '\u{201D}')
}

/// Split text into sentences.
///
/// Whitespace is collapsed first. The split point is whitespace that
/// follows `.`, `!`, `?` or an ellipsis, except inside double quotes
/// (straight or curly), so quoted dialogue stays in one piece. Text
/// with no terminator comes back as a single sentence; empty text
/// yields no sentences.
pub fn split_into_sentences(text: &str) -> Vec<String> {
    let cleaned = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if cleaned.is_empty() {
        return Vec::new();
    }

    let mut parts: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut quotes_open = false;
    let mut after_terminator = false;

    for c in cleaned.chars() {
        if c == ' ' && after_terminator && !quotes_open {
            let part = current.trim();
            if !part.is_empty() {
                parts.push(part.to_string());
            }
            current.clear();
            after_terminator = false;
            continue;
        }

        if is_quote(c) {
            quotes_open = !quotes_open;
        }
        after_terminator = is_terminator(c);
        current.push(c);
    }

    let tail = current.trim();
    if !tail.is_empty() {
        parts.push(tail.to_string());
    }

    if parts.is_empty() {
        vec![cleaned]
    } else {
        parts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_has_no_sentences() {
        assert!(split_into_sentences("").is_empty());
        assert!(split_into_sentences("   \n\t ").is_empty());
    }

    #[test]
    fn test_basic_split() {
        let parts = split_into_sentences("He runs. She follows! They stop?");
        assert_eq!(parts, vec!["He runs.", "She follows!", "They stop?"]);
    }

    #[test]
    fn test_no_terminator_is_one_sentence() {
        let parts = split_into_sentences("a single clause with no ending");
        assert_eq!(parts, vec!["a single clause with no ending"]);
    }

    #[test]
    fn test_whitespace_collapsed() {
        let parts = split_into_sentences("First.   \n  Second.");
        assert_eq!(parts, vec!["First.", "Second."]);
    }

    #[test]
    fn test_quoted_dialogue_stays_together() {
        let parts = split_into_sentences("She said, \"I love this. Really.\" He nods.");
        assert_eq!(
            parts,
            vec!["She said, \"I love this. Really.\"", "He nods."]
        );
    }

    #[test]
    fn test_curly_quotes_stay_together() {
        let parts =
            split_into_sentences("He shouts, \u{201C}Ruko. Abhi.\u{201D} Everyone freezes.");
        assert_eq!(parts.len(), 2);
        assert!(parts[0].ends_with('\u{201D}'));
    }

    #[test]
    fn test_ellipsis_splits() {
        let parts = split_into_sentences("A long pause\u{2026} then a smile.");
        assert_eq!(parts, vec!["A long pause\u{2026}", "then a smile."]);
    }
}
