//! Orchestrates normalization, summarization, and structured generation
//! into one study package, applying the fallback policies.

use crate::client::TextModel;
use crate::prompts;
use crate::summarize::SummarizationEngine;
use crate::text::bullet_notes;
use crate::types::{Flashcard, GenerationStatus, QuizResult, StudyNotes};
use crate::validate::{
    CountPolicy, MIN_NOTES_CHARS, QUIZ_QUESTION_COUNT, validate_flashcard_response,
    validate_quiz_response,
};

/// Question used when flashcard generation came back empty but a summary
/// exists.
const FALLBACK_CARD_QUESTION: &str = "What is the core idea of this lecture?";

/// Topic reported for an empty transcript.
const EMPTY_TOPIC: &str = "No content detected";

pub struct ArtifactAssembler<'a> {
    model: &'a dyn TextModel,
}

impl<'a> ArtifactAssembler<'a> {
    pub fn new(model: &'a dyn TextModel) -> Self {
        Self { model }
    }

    /// Topic, bullet notes, and deduplicated summary for a cleaned
    /// transcript. Empty input short-circuits without any model call.
    pub async fn study_notes(&self, cleaned: &str) -> crate::Result<StudyNotes> {
        let cleaned = cleaned.trim();
        if cleaned.is_empty() {
            return Ok(StudyNotes {
                topic: EMPTY_TOPIC.to_string(),
                text_notes: String::new(),
                smart_summary: String::new(),
            });
        }

        let engine = SummarizationEngine::new(self.model);
        let topic = engine.extract_topic(cleaned).await?;
        let text_notes = bullet_notes(cleaned);
        let smart_summary = engine.summarize(cleaned).await?;

        Ok(StudyNotes {
            topic,
            text_notes,
            smart_summary,
        })
    }

    /// Best-effort flashcard generation from notes text alone. Empty input
    /// yields an empty list without a model call; a failed call or
    /// unusable output yields an empty list, never an error.
    pub async fn flashcards_from_notes(&self, notes_text: &str) -> Vec<Flashcard> {
        if notes_text.trim().is_empty() {
            return Vec::new();
        }
        match self
            .model
            .complete(&prompts::flashcard_prompt(notes_text))
            .await
        {
            Ok(raw) => validate_flashcard_response(&raw),
            Err(_) => Vec::new(),
        }
    }

    /// Flashcards for a study package. If generation produced no cards and
    /// a summary exists, one fallback card carrying the summary guarantees
    /// at least one study artifact.
    pub async fn flashcards(&self, notes: &StudyNotes) -> Vec<Flashcard> {
        let cards = self.flashcards_from_notes(&notes.text_notes).await;
        if cards.is_empty() && !notes.smart_summary.trim().is_empty() {
            return vec![Flashcard {
                question: FALLBACK_CARD_QUESTION.to_string(),
                answer: notes.smart_summary.clone(),
                concept: String::new(),
            }];
        }
        cards
    }

    /// Strict quiz generation: the guard rejects thin notes before the
    /// model is called, and partial quizzes are never surfaced.
    pub async fn quiz(&self, notes: &StudyNotes) -> QuizResult {
        if notes.text_notes.trim().chars().count() < MIN_NOTES_CHARS {
            return QuizResult::failed(GenerationStatus::InsufficientNotes);
        }
        match self
            .model
            .complete(&prompts::quiz_prompt(&notes.text_notes))
            .await
        {
            Ok(raw) => validate_quiz_response(&raw, CountPolicy::Exactly(QUIZ_QUESTION_COUNT)),
            Err(_) => QuizResult::failed(GenerationStatus::GenerationError),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::testing::{FailingModel, ScriptedModel};
    use crate::types::QuestionKind;

    fn notes_with(text_notes: &str, smart_summary: &str) -> StudyNotes {
        StudyNotes {
            topic: "Topic".to_string(),
            text_notes: text_notes.to_string(),
            smart_summary: smart_summary.to_string(),
        }
    }

    fn long_notes() -> String {
        "• Photosynthesis converts light energy into chemical energy inside chloroplasts.\n\
         • The light reactions split water and produce ATP and NADPH for the Calvin cycle."
            .to_string()
    }

    #[tokio::test]
    async fn empty_transcript_short_circuits_study_notes() {
        let model = ScriptedModel::new(Vec::<String>::new());
        let assembler = ArtifactAssembler::new(&model);

        let notes = assembler.study_notes("   \n\t ").await.unwrap();
        assert_eq!(notes.topic, "No content detected");
        assert!(notes.text_notes.is_empty());
        assert!(notes.smart_summary.is_empty());
        assert_eq!(model.calls(), 0);
    }

    #[tokio::test]
    async fn short_notes_guard_fires_without_a_model_call() {
        let model = ScriptedModel::new(Vec::<String>::new());
        let assembler = ArtifactAssembler::new(&model);
        let notes = notes_with(
            "Photosynthesis is the process plants use to convert light.",
            "",
        );

        let result = assembler.quiz(&notes).await;
        assert_eq!(result.status, GenerationStatus::InsufficientNotes);
        assert!(result.questions.is_empty());
        assert_eq!(model.calls(), 0);
    }

    #[tokio::test]
    async fn quiz_happy_path_returns_five_short_questions() {
        let items: Vec<String> = (0..5)
            .map(|i| format!(r#"{{"question":"Q{i}","answer":"A{i}"}}"#))
            .collect();
        let raw = format!("Here you go:\n```json\n[{}]\n```", items.join(","));
        let model = ScriptedModel::new([raw]);
        let assembler = ArtifactAssembler::new(&model);

        let result = assembler.quiz(&notes_with(&long_notes(), "")).await;
        assert_eq!(result.status, GenerationStatus::Ok);
        assert_eq!(result.questions.len(), 5);
        assert!(
            result
                .questions
                .iter()
                .all(|q| q.kind == QuestionKind::Short)
        );
    }

    #[tokio::test]
    async fn failed_model_call_surfaces_as_generation_error() {
        let assembler = ArtifactAssembler::new(&FailingModel);

        let result = assembler.quiz(&notes_with(&long_notes(), "")).await;
        assert_eq!(result.status, GenerationStatus::GenerationError);
        assert!(result.questions.is_empty());
    }

    #[tokio::test]
    async fn empty_notes_yield_no_flashcards_and_no_model_call() {
        let model = ScriptedModel::new(Vec::<String>::new());
        let assembler = ArtifactAssembler::new(&model);

        let cards = assembler.flashcards_from_notes("  \n ").await;
        assert!(cards.is_empty());
        assert_eq!(model.calls(), 0);
    }

    #[tokio::test]
    async fn unusable_flashcard_output_falls_back_to_summary_card() {
        let model = ScriptedModel::new(["no json in this reply"]);
        let assembler = ArtifactAssembler::new(&model);
        let notes = notes_with(&long_notes(), "light becomes chemical energy");

        let cards = assembler.flashcards(&notes).await;
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].question, "What is the core idea of this lecture?");
        assert_eq!(cards[0].answer, "light becomes chemical energy");
    }

    #[tokio::test]
    async fn no_fallback_card_without_a_summary() {
        let model = ScriptedModel::new(["still no json"]);
        let assembler = ArtifactAssembler::new(&model);

        let cards = assembler.flashcards(&notes_with(&long_notes(), "")).await;
        assert!(cards.is_empty());
    }

    #[tokio::test]
    async fn valid_flashcard_output_skips_the_fallback() {
        let raw = r#"[{"question":"Q","answer":"A","concept":"C"}]"#;
        let model = ScriptedModel::new([raw]);
        let assembler = ArtifactAssembler::new(&model);
        let notes = notes_with(&long_notes(), "summary text");

        let cards = assembler.flashcards(&notes).await;
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].question, "Q");
    }
}
