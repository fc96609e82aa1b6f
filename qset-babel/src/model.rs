//! Core data structures for question sets.
//!
//! The structured side mirrors what an authoring host stores for a
//! multiple-choice item. Anything the text notation cannot express is kept in
//! [`Question::extra`] so it survives a trip through the text editor.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Stable tag of the only kind the text notation can edit.
pub const MULTIPLE_CHOICE_TAG: &str = "multiple-choice";

/// Closed set of question kinds.
///
/// Every tag other than [`MULTIPLE_CHOICE_TAG`] is an opaque, non-editable
/// item. The original tag is retained so it can be written back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum QuestionKind {
    #[default]
    MultipleChoice,
    Unsupported(String),
}

impl QuestionKind {
    pub fn tag(&self) -> &str {
        match self {
            QuestionKind::MultipleChoice => MULTIPLE_CHOICE_TAG,
            QuestionKind::Unsupported(tag) => tag,
        }
    }

    pub fn is_multiple_choice(&self) -> bool {
        matches!(self, QuestionKind::MultipleChoice)
    }
}

impl From<String> for QuestionKind {
    fn from(tag: String) -> Self {
        if tag == MULTIPLE_CHOICE_TAG {
            QuestionKind::MultipleChoice
        } else {
            QuestionKind::Unsupported(tag)
        }
    }
}

impl From<&str> for QuestionKind {
    fn from(tag: &str) -> Self {
        QuestionKind::from(tag.to_string())
    }
}

impl From<QuestionKind> for String {
    fn from(kind: QuestionKind) -> Self {
        match kind {
            QuestionKind::MultipleChoice => MULTIPLE_CHOICE_TAG.to_string(),
            QuestionKind::Unsupported(tag) => tag,
        }
    }
}

/// One item of a question set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[serde(default)]
    pub kind: QuestionKind,
    /// HTML-safe text of the question.
    #[serde(default)]
    pub question_text: String,
    #[serde(default)]
    pub answers: Vec<Answer>,
    #[serde(default = "default_single_answer")]
    pub single_answer_only: bool,
    /// Fields the text notation cannot represent.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_single_answer() -> bool {
    true
}

impl Question {
    /// An empty multiple-choice question with the given text.
    pub fn multiple_choice(question_text: impl Into<String>) -> Self {
        Self {
            kind: QuestionKind::MultipleChoice,
            question_text: question_text.into(),
            answers: Vec::new(),
            single_answer_only: true,
            extra: Map::new(),
        }
    }

    /// An opaque item of a kind the text notation cannot edit.
    pub fn unsupported(tag: impl Into<String>) -> Self {
        Self {
            kind: QuestionKind::Unsupported(tag.into()),
            question_text: String::new(),
            answers: Vec::new(),
            single_answer_only: true,
            extra: Map::new(),
        }
    }

    pub fn with_answer(mut self, answer: Answer) -> Self {
        self.answers.push(answer);
        self.single_answer_only = self.correct_count() <= 1;
        self
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    pub fn correct_count(&self) -> usize {
        self.answers.iter().filter(|answer| answer.correct).count()
    }
}

/// One alternative of a multiple-choice question.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub correct: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chosen_feedback: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not_chosen_feedback: Option<String>,
}

impl Answer {
    pub fn new(text: impl Into<String>, correct: bool) -> Self {
        Self {
            text: text.into(),
            correct,
            ..Default::default()
        }
    }

    pub fn correct(text: impl Into<String>) -> Self {
        Self::new(text, true)
    }

    pub fn wrong(text: impl Into<String>) -> Self {
        Self::new(text, false)
    }

    pub fn with_tip(mut self, tip: impl Into<String>) -> Self {
        self.tip = Some(tip.into());
        self
    }

    pub fn with_chosen_feedback(mut self, feedback: impl Into<String>) -> Self {
        self.chosen_feedback = Some(feedback.into());
        self
    }

    pub fn with_not_chosen_feedback(mut self, feedback: impl Into<String>) -> Self {
        self.not_chosen_feedback = Some(feedback.into());
        self
    }

    /// True once any tip or feedback field carries content.
    pub fn has_tips_or_feedback(&self) -> bool {
        self.tip.is_some() || self.chosen_feedback.is_some() || self.not_chosen_feedback.is_some()
    }
}
