//! Text parsing (text notation → questions)
//!
//! The notation is line based:
//!
//! ```text
//! What number is PI?          <- question line (first line, or after a blank)
//! *3.14                       <- answer line, `*` marks it correct
//! 9.82:tip:chosen:not chosen  <- up to four `:`-separated fields
//!                             <- blank line closes the question
//! What is 4 * 0?
//! ```
//!
//! The parser never fails. Lines it cannot make sense of degrade to answers
//! with empty text or absent fields.

use crate::markup::escape_text;
use crate::model::{Answer, Question};

/// Marks an answer as correct when it is the first character of the line.
pub const CORRECT_MARKER: char = '*';

/// Separates the fields of an answer line.
pub const FIELD_SEPARATOR: char = ':';

/// Escape sequence for a literal colon inside a field.
pub const ESCAPED_SEPARATOR: &str = "\\:";

/// Stand-in for escaped colons while a line is split. Private use area, so
/// it does not occur in authored text.
const COLON_PLACEHOLDER: char = '\u{E000}';

const MAX_ANSWER_FIELDS: usize = 4;

/// Parse text into questions.
pub fn parse_questions(text: &str) -> Vec<Question> {
    let lines: Vec<&str> = text.split('\n').map(trim_carriage_return).collect();
    let mut questions: Vec<Question> = Vec::new();

    for (index, line) in lines.iter().enumerate() {
        if is_blank_line(line) {
            continue;
        }

        if is_question_line(&lines, index) {
            tracing::trace!(line = index, "question line");
            questions.push(parse_question(line));
        } else if let Some(question) = questions.last_mut() {
            tracing::trace!(line = index, "answer line");
            question.answers.push(parse_answer(line));
        }
    }

    questions.into_iter().map(finalize_question).collect()
}

fn trim_carriage_return(line: &str) -> &str {
    line.strip_suffix('\r').unwrap_or(line)
}

fn is_blank_line(line: &str) -> bool {
    line.trim().is_empty()
}

/// A question starts on the first line, or right after a blank line.
fn is_question_line(lines: &[&str], index: usize) -> bool {
    index == 0 || is_blank_line(lines[index - 1])
}

fn parse_question(line: &str) -> Question {
    Question::multiple_choice(clean_text_line(line))
}

fn parse_answer(line: &str) -> Answer {
    let cleaned = clean_text_line(line);
    let trimmed = cleaned.trim();
    let (correct, rest) = match trimmed.strip_prefix(CORRECT_MARKER) {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };

    let mut fields = split_answer_fields(rest).into_iter();
    let text = fields.next().unwrap_or_default().trim().to_string();

    Answer {
        text,
        correct,
        tip: fields.next().and_then(non_empty),
        chosen_feedback: fields.next().and_then(non_empty),
        not_chosen_feedback: fields.next().and_then(non_empty),
    }
}

/// Split on unescaped colons, keeping at most four fields.
fn split_answer_fields(rest: &str) -> Vec<String> {
    rest.replace(ESCAPED_SEPARATOR, &COLON_PLACEHOLDER.to_string())
        .split(FIELD_SEPARATOR)
        .take(MAX_ANSWER_FIELDS)
        .map(|field| field.replace(COLON_PLACEHOLDER, ":"))
        .collect()
}

fn non_empty(field: String) -> Option<String> {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// The text area holds plain text; the structured side holds HTML.
fn clean_text_line(line: &str) -> String {
    escape_text(line)
}

fn finalize_question(mut question: Question) -> Question {
    question.single_answer_only = question.correct_count() <= 1;
    question
}
