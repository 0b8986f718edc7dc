use crate::types::{Flashcard, QuestionKind, QuizResult, StudyNotes};

/// Format a study package as human-readable markdown
pub fn format_notes_readable(notes: &StudyNotes) -> String {
    let mut output = String::new();

    output.push_str(&format!("# {}\n\n", notes.topic));

    output.push_str("## Study Notes\n\n");
    if notes.text_notes.is_empty() {
        output.push_str("_No notes available._\n");
    } else {
        output.push_str(&notes.text_notes);
        output.push('\n');
    }
    output.push('\n');

    output.push_str("## Smart Summary\n\n");
    if notes.smart_summary.is_empty() {
        output.push_str("_No summary available._\n");
    } else {
        output.push_str(&notes.smart_summary);
        output.push('\n');
    }

    output
}

/// Format flashcards as human-readable markdown
pub fn format_flashcards_readable(cards: &[Flashcard]) -> String {
    let mut output = String::new();

    output.push_str("## Flashcards\n\n");
    if cards.is_empty() {
        output.push_str("_Insufficient content to generate flashcards._\n");
        return output;
    }

    for (i, card) in cards.iter().enumerate() {
        if card.concept.is_empty() {
            output.push_str(&format!("### Card {}\n\n", i + 1));
        } else {
            output.push_str(&format!("### Card {} — {}\n\n", i + 1, card.concept));
        }
        output.push_str(&format!("**Q:** {}\n\n", card.question));
        output.push_str(&format!("**A:** {}\n\n", card.answer));
    }

    output
}

/// Format a quiz result as human-readable markdown. A non-OK status renders
/// as an explicit could-not-generate line, never as an empty success.
pub fn format_quiz_readable(quiz: &QuizResult) -> String {
    let mut output = String::new();

    output.push_str("## Quiz\n\n");
    if !quiz.is_ok() {
        output.push_str(&format!(
            "_Quiz could not be generated ({})._\n",
            quiz.status
        ));
        return output;
    }

    for (i, question) in quiz.questions.iter().enumerate() {
        output.push_str(&format!("{}. {}\n", i + 1, question.question));
        if question.kind == QuestionKind::Mcq {
            for (j, option) in question.options.iter().enumerate() {
                let letter = (b'A' + j as u8) as char;
                output.push_str(&format!("   {}. {}\n", letter, option));
            }
        }
        output.push_str(&format!("   Answer: {}\n", question.answer));
        if !question.concept.is_empty() {
            output.push_str(&format!("   Concept: {}\n", question.concept));
        }
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GenerationStatus, QuizQuestion};

    #[test]
    fn non_ok_quiz_renders_explicit_failure() {
        let quiz = QuizResult::failed(GenerationStatus::InsufficientNotes);
        let rendered = format_quiz_readable(&quiz);
        assert!(rendered.contains("could not be generated"));
        assert!(rendered.contains("INSUFFICIENT_NOTES"));
    }

    #[test]
    fn mcq_options_are_lettered() {
        let quiz = QuizResult::ok(vec![QuizQuestion {
            kind: QuestionKind::Mcq,
            question: "Pick one".to_string(),
            options: vec!["x".to_string(), "y".to_string(), "z".to_string()],
            answer: "y".to_string(),
            concept: String::new(),
        }]);
        let rendered = format_quiz_readable(&quiz);
        assert!(rendered.contains("A. x"));
        assert!(rendered.contains("C. z"));
        assert!(rendered.contains("Answer: y"));
    }
}
