use std::fmt;

use serde::{Deserialize, Serialize};

/// One question/answer study card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub concept: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionKind {
    #[serde(rename = "MCQ")]
    Mcq,
    #[serde(rename = "SHORT")]
    Short,
}

/// One validated quiz item. For MCQ items `options` has at least three
/// entries and `answer` is always one of them, never a bare letter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    pub question: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    pub answer: String,
    #[serde(default)]
    pub concept: String,
}

/// Outcome of one structured-generation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GenerationStatus {
    Ok,
    InsufficientNotes,
    JsonNotFound,
    JsonInvalid,
    JsonNotList,
    InsufficientValidQuestions,
    GenerationError,
}

impl GenerationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationStatus::Ok => "OK",
            GenerationStatus::InsufficientNotes => "INSUFFICIENT_NOTES",
            GenerationStatus::JsonNotFound => "JSON_NOT_FOUND",
            GenerationStatus::JsonInvalid => "JSON_INVALID",
            GenerationStatus::JsonNotList => "JSON_NOT_LIST",
            GenerationStatus::InsufficientValidQuestions => "INSUFFICIENT_VALID_QUESTIONS",
            GenerationStatus::GenerationError => "GENERATION_ERROR",
        }
    }
}

impl fmt::Display for GenerationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status-tagged quiz payload. A non-`OK` status always carries an empty
/// question list; `OK` carries exactly the required count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResult {
    pub status: GenerationStatus,
    pub questions: Vec<QuizQuestion>,
}

impl QuizResult {
    pub fn ok(questions: Vec<QuizQuestion>) -> Self {
        Self {
            status: GenerationStatus::Ok,
            questions,
        }
    }

    pub fn failed(status: GenerationStatus) -> Self {
        Self {
            status,
            questions: Vec::new(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == GenerationStatus::Ok
    }
}

/// Aggregate notes artifact for one transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyNotes {
    pub topic: String,
    pub text_notes: String,
    pub smart_summary: String,
}
