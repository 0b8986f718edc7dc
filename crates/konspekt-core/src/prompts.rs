//! Prompt templates for the generative model, one per artifact type.

static FLASHCARD_PROMPT: &str = r#"You are an AI tutor helping students revise lectures.

Generate EXACTLY 5 high-quality semantic flashcards
based ONLY on the lecture notes below.

Rules:
- Questions must test understanding, not memorization
- Avoid vague or generic questions
- Each flashcard must have a clear concept

Return ONLY a valid JSON array in this format:

[
  {
    "question": "Clear conceptual question",
    "answer": "Concise but complete answer",
    "concept": "Core idea being tested"
  }
]

Lecture Notes:
{notes}"#;

static QUIZ_PROMPT: &str = r#"You are a university examiner.

Generate a quiz using ONLY the notes below.

Rules:
- Total 5 questions
- Mix MCQ and Short Answer ("type": "MCQ" or "SHORT")
- MCQ questions need an "options" array with at least 3 entries
- Questions must be directly related to the notes
- Avoid vague or repeated questions

Output strictly a JSON array:

[
  {
    "type": "MCQ",
    "question": "...",
    "options": ["first option", "second option", "third option", "fourth option"],
    "answer": "B",
    "concept": "..."
  }
]

Lecture Notes:
{notes}"#;

static TOPIC_PROMPT: &str = r#"You are an academic assistant.

Generate a SHORT, CLEAR lecture topic/title
based on the content below.

Rules:
- 5 to 8 words max
- NO sentences
- NO punctuation
- Capitalize Properly
- Abstract the main idea

CONTENT:
{content}"#;

static CHUNK_SUMMARY_PROMPT: &str = r#"Summarize the lecture excerpt below in 40 to 85 words.
Write plain prose, no headings, no bullet points, no preamble.

Excerpt:
{segment}"#;

pub fn flashcard_prompt(notes: &str) -> String {
    FLASHCARD_PROMPT.replace("{notes}", notes)
}

pub fn quiz_prompt(notes: &str) -> String {
    QUIZ_PROMPT.replace("{notes}", notes)
}

pub fn topic_prompt(content: &str) -> String {
    TOPIC_PROMPT.replace("{content}", content)
}

pub fn chunk_summary_prompt(segment: &str) -> String {
    CHUNK_SUMMARY_PROMPT.replace("{segment}", segment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn templates_embed_the_input_text() {
        let rendered = quiz_prompt("mitochondria are the powerhouse");
        assert!(rendered.contains("mitochondria are the powerhouse"));
        assert!(!rendered.contains("{notes}"));

        let rendered = topic_prompt("linear algebra basics");
        assert!(rendered.ends_with("linear algebra basics"));
    }
}
