//! Text serialization (questions → text notation)
//!
//! Each item becomes one self-contained block that ends with a line break:
//!
//! ```text
//! 1. Question text
//! *Correct answer:tip:chosen feedback:not chosen feedback
//! Wrong answer
//! ```
//!
//! Items of other kinds become a single placeholder line that the parser
//! will not turn back into a multiple-choice question.

use super::parser::{CORRECT_MARKER, ESCAPED_SEPARATOR, FIELD_SEPARATOR};
use super::rules::TextRules;
use crate::host::{FieldRef, ItemSource};
use crate::markup::strip_markup;
use crate::model::Question;

const LB: char = '\n';

pub struct TextSerializer {
    rules: TextRules,
}

impl TextSerializer {
    pub fn new(rules: TextRules) -> Self {
        Self { rules }
    }

    /// Serialize one question at `position` (0-based).
    pub fn serialize(&self, question: &Question, position: usize) -> String {
        self.serialize_item(question, position)
    }

    /// Serialize any host item, reading its fields through the host.
    pub fn serialize_item<I: ItemSource + ?Sized>(&self, item: &I, position: usize) -> String {
        let label = format!("{}. ", position + 1);

        if !item.kind().is_multiple_choice() {
            let mut block = label;
            block.push_str(&self.rules.placeholder);
            block.push(LB);
            return block;
        }

        // The label line is written even for an empty question, otherwise the
        // first answer would open the block and parse back as the question.
        let mut block = label;
        block.push_str(&read_field(item, FieldRef::Question));
        block.push(LB);

        for index in 0..item.answer_count() {
            let line = answer_line(item, index);
            if !line.is_empty() {
                block.push_str(&line);
                block.push(LB);
            }
        }

        block
    }

    /// Serialize a whole set, separating blocks with a blank line.
    pub fn serialize_all(&self, questions: &[Question]) -> String {
        let mut output = String::new();
        for (position, question) in questions.iter().enumerate() {
            if !output.is_empty() {
                output.push(LB);
            }
            output.push_str(&self.serialize(question, position));
        }
        output
    }
}

impl Default for TextSerializer {
    fn default() -> Self {
        Self::new(TextRules::default())
    }
}

/// Serialize one question with the default rules.
pub fn serialize_question(question: &Question, position: usize) -> String {
    TextSerializer::default().serialize(question, position)
}

/// Escape colons so the parser does not read them as field separators.
pub fn escape_colons(text: &str) -> String {
    text.replace(FIELD_SEPARATOR, ESCAPED_SEPARATOR)
}

fn read_field<I: ItemSource + ?Sized>(item: &I, field: FieldRef) -> String {
    item.field(field)
        .into_option()
        .map(|value| strip_markup(&value))
        .unwrap_or_default()
}

fn answer_line<I: ItemSource + ?Sized>(item: &I, index: usize) -> String {
    let mut line = String::new();
    if item.is_correct(index) {
        line.push(CORRECT_MARKER);
    }
    line.push_str(&escape_colons(&read_field(item, FieldRef::AnswerText(index))));

    let optional = [
        read_field(item, FieldRef::Tip(index)),
        read_field(item, FieldRef::ChosenFeedback(index)),
        read_field(item, FieldRef::NotChosenFeedback(index)),
    ];

    // Only the prefix up to the last present field is written.
    let used = optional
        .iter()
        .rposition(|field| !field.is_empty())
        .map_or(0, |last| last + 1);
    for field in &optional[..used] {
        line.push(FIELD_SEPARATOR);
        line.push_str(&escape_colons(field));
    }

    line
}
