//! Deduplicating abstractive summarization and topic extraction.
//!
//! Overlapping transcript segments make abstractive summarizers restate
//! near-identical content; chunks whose first 60 characters match are
//! treated as duplicates and only the first is kept.

use std::collections::HashSet;

use crate::client::{ModelError, TextModel};
use crate::prompts;
use crate::text::segment;

/// Words per summarization segment.
pub const SUMMARY_CHUNK_WORDS: usize = 220;

/// Segments below this word count are too short to meaningfully compress.
pub const MIN_SUMMARIZABLE_WORDS: usize = 40;

/// Prefix length of the dedup key.
pub const DEDUP_PREFIX_CHARS: usize = 60;

/// At most this much of the cleaned transcript is sent for topic extraction.
const TOPIC_SOURCE_CHARS: usize = 2000;

/// Summarization over a shared model capability. The capability is
/// constructed once at process start and passed in by reference.
pub struct SummarizationEngine<'a> {
    model: &'a dyn TextModel,
}

impl<'a> SummarizationEngine<'a> {
    pub fn new(model: &'a dyn TextModel) -> Self {
        Self { model }
    }

    /// Summarize each sufficiently long segment and join the surviving
    /// chunks, in segment order, dropping prefix-duplicates.
    pub async fn summarize(&self, text: &str) -> Result<String, ModelError> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut chunks: Vec<String> = Vec::new();

        for seg in segment(text, SUMMARY_CHUNK_WORDS) {
            if seg.split_whitespace().count() < MIN_SUMMARIZABLE_WORDS {
                continue;
            }

            let summary = self.model.complete(&prompts::chunk_summary_prompt(&seg)).await?;
            let summary = summary.trim().to_string();
            if summary.is_empty() {
                continue;
            }

            let key: String = summary.chars().take(DEDUP_PREFIX_CHARS).collect();
            if seen.insert(key) {
                chunks.push(summary);
            }
        }

        Ok(chunks.join(" "))
    }

    /// Produce a short title-style topic from the head of the text, with no
    /// trailing punctuation.
    pub async fn extract_topic(&self, text: &str) -> Result<String, ModelError> {
        let head = text
            .char_indices()
            .nth(TOPIC_SOURCE_CHARS)
            .map(|(i, _)| &text[..i])
            .unwrap_or(text);

        let raw = self.model.complete(&prompts::topic_prompt(head)).await?;
        Ok(raw
            .trim()
            .trim_end_matches(['.', '!', '?', ':', ','])
            .trim()
            .to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::testing::ScriptedModel;

    fn words(n: usize, tag: &str) -> String {
        (0..n).map(|i| format!("{tag}{i}")).collect::<Vec<_>>().join(" ")
    }

    #[tokio::test]
    async fn summarize_skips_segments_below_word_threshold() {
        // 250 words: one 220-word segment plus a 30-word tail that must be
        // filtered out, so the model is called exactly once.
        let text = words(250, "w");
        let model = ScriptedModel::new(["the lecture covers vector spaces and linear maps"]);
        let engine = SummarizationEngine::new(&model);

        let summary = engine.summarize(&text).await.unwrap();
        assert_eq!(summary, "the lecture covers vector spaces and linear maps");
        assert_eq!(model.calls(), 1);
    }

    #[tokio::test]
    async fn summarize_drops_chunks_sharing_a_prefix() {
        let text = format!("{} {}", words(220, "a"), words(220, "b"));
        let shared_prefix = "x".repeat(DEDUP_PREFIX_CHARS);
        let model = ScriptedModel::new([
            format!("{shared_prefix} first tail"),
            format!("{shared_prefix} second tail"),
        ]);
        let engine = SummarizationEngine::new(&model);

        let summary = engine.summarize(&text).await.unwrap();
        assert_eq!(summary, format!("{shared_prefix} first tail"));
        assert_eq!(model.calls(), 2);
    }

    #[tokio::test]
    async fn summarize_keeps_distinct_chunks_in_segment_order() {
        let text = format!("{} {}", words(220, "a"), words(220, "b"));
        let model = ScriptedModel::new(["first chunk summary", "second chunk summary"]);
        let engine = SummarizationEngine::new(&model);

        let summary = engine.summarize(&text).await.unwrap();
        assert_eq!(summary, "first chunk summary second chunk summary");
    }

    #[tokio::test]
    async fn summarize_of_short_text_makes_no_model_calls() {
        let model = ScriptedModel::new(Vec::<String>::new());
        let engine = SummarizationEngine::new(&model);

        let summary = engine.summarize("only a handful of words here").await.unwrap();
        assert!(summary.is_empty());
        assert_eq!(model.calls(), 0);
    }

    #[tokio::test]
    async fn extract_topic_strips_trailing_punctuation() {
        let model = ScriptedModel::new(["  Fundamentals of Linear Algebra. \n"]);
        let engine = SummarizationEngine::new(&model);

        let topic = engine.extract_topic("some lecture text").await.unwrap();
        assert_eq!(topic, "Fundamentals of Linear Algebra");
    }
}
