//! Transcript normalization: filler removal, whitespace collapsing, and
//! word-bounded segmentation.

/// Single-word hesitation markers dropped during cleaning. "you know" is the
/// one multi-word filler and is handled separately.
const FILLER_WORDS: &[&str] = &["uh", "um", "hmm"];

/// Minimum words a sentence needs to survive into the bullet notes.
const NOTES_SENTENCE_MIN_WORDS: usize = 6;

/// Lowercase the transcript, drop filler tokens as whole words, and collapse
/// whitespace runs to single spaces. Idempotent.
pub fn clean(text: &str) -> String {
    let lowered = text.to_lowercase();
    let words: Vec<&str> = lowered.split_whitespace().collect();
    let mut kept: Vec<&str> = Vec::with_capacity(words.len());

    let mut i = 0;
    while i < words.len() {
        if strip_punctuation(words[i]) == "you"
            && words
                .get(i + 1)
                .is_some_and(|w| strip_punctuation(w) == "know")
        {
            i += 2;
            continue;
        }
        if !FILLER_WORDS.contains(&strip_punctuation(words[i])) {
            kept.push(words[i]);
        }
        i += 1;
    }

    kept.join(" ")
}

fn strip_punctuation(word: &str) -> &str {
    word.trim_matches(|c: char| c.is_ascii_punctuation())
}

/// Split into contiguous chunks of at most `max_words` whitespace-delimited
/// words, preserving order. The last chunk may be shorter; no word is ever
/// dropped. `max_words` is clamped to at least 1.
pub fn segment(text: &str, max_words: usize) -> Vec<String> {
    let max_words = max_words.max(1);
    let words: Vec<&str> = text.split_whitespace().collect();
    words
        .chunks(max_words)
        .map(|chunk| chunk.join(" "))
        .collect()
}

/// Split text into sentences at `.`, `!`, or `?` followed by whitespace.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        current.push(c);
        if matches!(c, '.' | '!' | '?') && chars.peek().is_some_and(|n| n.is_whitespace()) {
            let sentence = current.trim();
            if !sentence.is_empty() {
                sentences.push(sentence.to_string());
            }
            current.clear();
        }
    }

    let tail = current.trim();
    if !tail.is_empty() {
        sentences.push(tail.to_string());
    }

    sentences
}

/// Render bullet-point notes from a cleaned transcript, keeping only
/// sentences long enough to carry content.
pub fn bullet_notes(text: &str) -> String {
    split_sentences(text)
        .into_iter()
        .filter(|s| s.split_whitespace().count() > NOTES_SENTENCE_MIN_WORDS)
        .map(|s| format!("• {}", s))
        .collect::<Vec<_>>()
        .join("\n")
}
