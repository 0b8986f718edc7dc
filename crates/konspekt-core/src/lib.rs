//! Konspekt Core Library
//!
//! Core functionality for cleaning lecture transcripts, producing deduplicated
//! summaries, and turning generative-model output into validated flashcards
//! and quizzes.

pub mod assemble;
pub mod cache;
pub mod client;
pub mod error;
pub mod format;
pub mod prompts;
pub mod provider;
pub mod store;
pub mod summarize;
pub mod text;
pub mod types;
pub mod validate;

// Re-export commonly used items at crate root
pub use assemble::ArtifactAssembler;
pub use cache::{
    get_cache_dir, get_cleaned_path, get_flashcards_path, get_notes_path, get_quiz_path,
};
pub use client::{GenAiClient, ModelError, TextModel};
pub use error::{KonspektError, Result};
pub use format::{format_flashcards_readable, format_notes_readable, format_quiz_readable};
pub use provider::{Provider, ProviderConfig};
pub use store::{load_flashcards, load_notes, load_quiz, load_transcript, save_json, save_text};
pub use summarize::SummarizationEngine;
pub use text::{bullet_notes, clean, segment};
pub use types::{
    Flashcard, GenerationStatus, QuestionKind, QuizQuestion, QuizResult, StudyNotes,
};
pub use validate::{CountPolicy, validate_flashcard_response, validate_quiz_response};
