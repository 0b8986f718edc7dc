//! Converts raw model text into validated flashcards or quiz items.
//!
//! Every input string maps to a result; nothing here panics or returns an
//! error. Malformed records are filtered per-record, and whole-batch
//! failures are reported through `GenerationStatus`.

use serde_json::{Map, Value};

use crate::types::{Flashcard, GenerationStatus, QuestionKind, QuizQuestion, QuizResult};

/// A validated quiz always has exactly this many questions.
pub const QUIZ_QUESTION_COUNT: usize = 5;

/// MCQ records with fewer options are dropped.
pub const MIN_MCQ_OPTIONS: usize = 3;

/// Notes shorter than this are rejected before any quiz model call.
pub const MIN_NOTES_CHARS: usize = 80;

/// How many valid records a generation attempt must yield.
///
/// Quizzes use `Exactly(QUIZ_QUESTION_COUNT)`: a partial quiz is worse than
/// no quiz. Flashcards are the `BestEffort` side of the same pipeline:
/// fewer cards degrade gracefully.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountPolicy {
    Exactly(usize),
    BestEffort,
}

/// Run the full gate sequence over a raw quiz response.
pub fn validate_quiz_response(raw: &str, policy: CountPolicy) -> QuizResult {
    let cleaned = strip_code_fences(raw);
    let Some(span) = extract_json_array(cleaned) else {
        return QuizResult::failed(GenerationStatus::JsonNotFound);
    };
    let value: Value = match serde_json::from_str(span) {
        Ok(value) => value,
        Err(_) => return QuizResult::failed(GenerationStatus::JsonInvalid),
    };
    let Some(items) = value.as_array() else {
        return QuizResult::failed(GenerationStatus::JsonNotList);
    };

    let mut questions: Vec<QuizQuestion> = items.iter().filter_map(normalize_record).collect();

    match policy {
        CountPolicy::Exactly(required) => {
            if questions.len() < required {
                QuizResult::failed(GenerationStatus::InsufficientValidQuestions)
            } else {
                questions.truncate(required);
                QuizResult::ok(questions)
            }
        }
        CountPolicy::BestEffort => QuizResult::ok(questions),
    }
}

/// Flashcard responses skip the MCQ rules and the count gate: whatever
/// validates is returned, possibly nothing.
pub fn validate_flashcard_response(raw: &str) -> Vec<Flashcard> {
    let cleaned = strip_code_fences(raw);
    let Some(span) = extract_json_array(cleaned) else {
        return Vec::new();
    };
    let Ok(value) = serde_json::from_str::<Value>(span) else {
        return Vec::new();
    };
    let Some(items) = value.as_array() else {
        return Vec::new();
    };

    items.iter().filter_map(parse_flashcard).collect()
}

/// Remove markdown code-fence markers (with or without a language tag) that
/// models sometimes wrap structured output in.
fn strip_code_fences(raw: &str) -> &str {
    let mut text = raw.trim();
    if let Some(rest) = text.strip_prefix("```") {
        // Drop the language tag line; a fence with no newline keeps its body.
        text = rest.split_once('\n').map(|(_, body)| body).unwrap_or(rest);
    }
    let trimmed = text.trim_end();
    if let Some(body) = trimmed.strip_suffix("```") {
        text = body;
    }
    text.trim()
}

/// Greedy first-`[` to last-`]` span, tolerating commentary the model put
/// before or after the JSON.
fn extract_json_array(text: &str) -> Option<&str> {
    let start = text.find('[')?;
    let end = text.rfind(']')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

fn field_string(record: &Map<String, Value>, key: &str) -> Option<String> {
    let s = record.get(key)?.as_str()?.trim();
    if s.is_empty() {
        return None;
    }
    Some(s.to_string())
}

fn normalize_record(value: &Value) -> Option<QuizQuestion> {
    let record = value.as_object()?;
    let question = field_string(record, "question")?;
    let answer = field_string(record, "answer")?;
    let concept = field_string(record, "concept").unwrap_or_default();

    let kind = match record.get("type").and_then(Value::as_str) {
        Some(t) if t.trim().eq_ignore_ascii_case("mcq") => QuestionKind::Mcq,
        _ => QuestionKind::Short,
    };

    match kind {
        QuestionKind::Short => Some(QuizQuestion {
            kind,
            question,
            options: Vec::new(),
            answer,
            concept,
        }),
        QuestionKind::Mcq => {
            let options: Vec<String> = record
                .get("options")?
                .as_array()?
                .iter()
                .map(|o| o.as_str().map(str::to_string))
                .collect::<Option<Vec<_>>>()?;
            if options.len() < MIN_MCQ_OPTIONS {
                return None;
            }
            let answer = resolve_answer_letter(answer, &options)?;
            Some(QuizQuestion {
                kind,
                question,
                options,
                answer,
                concept,
            })
        }
    }
}

/// A single-letter answer A–D is resolved to the option it names. A letter
/// pointing outside the options list drops the record; anything longer than
/// one letter is assumed to already be option text and passes through.
fn resolve_answer_letter(answer: String, options: &[String]) -> Option<String> {
    let trimmed = answer.trim();
    let mut chars = trimmed.chars();
    match (chars.next(), chars.next()) {
        (Some(letter @ 'A'..='D'), None) => {
            let index = (letter as usize) - ('A' as usize);
            options.get(index).cloned()
        }
        _ => Some(answer),
    }
}

fn parse_flashcard(value: &Value) -> Option<Flashcard> {
    let record = value.as_object()?;
    Some(Flashcard {
        question: field_string(record, "question")?,
        answer: field_string(record, "answer")?,
        concept: field_string(record, "concept").unwrap_or_default(),
    })
}
