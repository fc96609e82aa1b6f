//! Contracts with the authoring host.
//!
//! The editor never owns the question list. It reads and rewrites it through
//! [`QuestionList`], and it reads individual rich-text fields through
//! [`ItemSource`], where the host may report a field as unreadable.

use crate::model::{Question, QuestionKind};

/// The host-owned list of question items.
pub trait QuestionList {
    /// Current structured contents of the list.
    fn get_value(&self) -> Vec<Question>;

    fn remove_all_items(&mut self);

    fn add_item(&mut self, question: Question);
}

impl QuestionList for Vec<Question> {
    fn get_value(&self) -> Vec<Question> {
        self.clone()
    }

    fn remove_all_items(&mut self) {
        self.clear();
    }

    fn add_item(&mut self, question: Question) {
        self.push(question);
    }
}

/// Addresses one free-text field of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRef {
    Question,
    AnswerText(usize),
    Tip(usize),
    ChosenFeedback(usize),
    NotChosenFeedback(usize),
}

/// Result of reading a rich-text field from the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    /// The host could not validate the field. Treated as no content.
    Invalid,
}

impl FieldValue {
    pub fn into_option(self) -> Option<String> {
        match self {
            FieldValue::Text(text) => Some(text),
            FieldValue::Invalid => None,
        }
    }
}

impl From<Option<&String>> for FieldValue {
    fn from(value: Option<&String>) -> Self {
        match value {
            Some(text) => FieldValue::Text(text.clone()),
            None => FieldValue::Text(String::new()),
        }
    }
}

/// Read access to one host item for serialization.
pub trait ItemSource {
    fn kind(&self) -> QuestionKind;

    fn answer_count(&self) -> usize;

    fn is_correct(&self, answer: usize) -> bool;

    fn field(&self, field: FieldRef) -> FieldValue;
}

impl ItemSource for Question {
    fn kind(&self) -> QuestionKind {
        self.kind.clone()
    }

    fn answer_count(&self) -> usize {
        self.answers.len()
    }

    fn is_correct(&self, answer: usize) -> bool {
        self.answers.get(answer).is_some_and(|a| a.correct)
    }

    fn field(&self, field: FieldRef) -> FieldValue {
        match field {
            FieldRef::Question => FieldValue::Text(self.question_text.clone()),
            FieldRef::AnswerText(i) => self.answers.get(i).map(|a| &a.text).into(),
            FieldRef::Tip(i) => self.answers.get(i).and_then(|a| a.tip.as_ref()).into(),
            FieldRef::ChosenFeedback(i) => self
                .answers
                .get(i)
                .and_then(|a| a.chosen_feedback.as_ref())
                .into(),
            FieldRef::NotChosenFeedback(i) => self
                .answers
                .get(i)
                .and_then(|a| a.not_chosen_feedback.as_ref())
                .into(),
        }
    }
}
