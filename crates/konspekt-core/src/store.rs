//! Persistence for pipeline artifacts.

use std::path::Path;

use serde::Serialize;
use tokio::fs;

use crate::error::{KonspektError, Result};
use crate::types::{Flashcard, QuizResult, StudyNotes};

/// Load a transcript text file, rejecting empty content
pub async fn load_transcript(path: &Path) -> Result<String> {
    let text = fs::read_to_string(path).await?;
    if text.trim().is_empty() {
        return Err(KonspektError::EmptyTranscript {
            path: path.to_path_buf(),
        });
    }
    Ok(text)
}

/// Save plain text to a file
pub async fn save_text(text: &str, path: &Path) -> Result<()> {
    fs::write(path, text).await?;
    Ok(())
}

/// Save any artifact as pretty-printed JSON
pub async fn save_json<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    let pretty_json = serde_json::to_string_pretty(value)?;
    fs::write(path, &pretty_json).await?;
    Ok(())
}

/// Load a cached notes package
pub async fn load_notes(path: &Path) -> Result<StudyNotes> {
    let json_content = fs::read_to_string(path).await?;
    let notes: StudyNotes = serde_json::from_str(&json_content)?;
    Ok(notes)
}

/// Load cached flashcards
pub async fn load_flashcards(path: &Path) -> Result<Vec<Flashcard>> {
    let json_content = fs::read_to_string(path).await?;
    let cards: Vec<Flashcard> = serde_json::from_str(&json_content)?;
    Ok(cards)
}

/// Load a cached quiz
pub async fn load_quiz(path: &Path) -> Result<QuizResult> {
    let json_content = fs::read_to_string(path).await?;
    let quiz: QuizResult = serde_json::from_str(&json_content)?;
    Ok(quiz)
}
