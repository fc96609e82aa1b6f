//! Text notation format implementation
//!
//! The text notation is the editable surface of a question set: one block per question,
//! blocks separated by a blank line, answers one per line.
//!
//! # Grammar
//!
//! | Line kind   | Shape                                           | Notes                                     |
//! |-------------|-------------------------------------------------|-------------------------------------------|
//! | Question    | `[<N>. ]text`                                   | first line, or the line after a blank one |
//! | Answer      | `[*]text[:tip[:chosen[:not chosen]]]`           | `\:` writes a literal colon               |
//! | Placeholder | `<N>. <placeholder>`                            | non multiple-choice items, write only     |
//! | Blank       | empty or whitespace only                        | closes the current question               |
//!
//! A question without text is still written as its bare `<N>. ` line.
//!
//! # Lossy Conversions
//!
//! - Markup in question and answer texts is stripped on serialization
//! - Items of other kinds become placeholder lines; parsing brings them back only when a base
//!   set is given (see [`crate::reconcile`])
//! - Single-answer mode is always derived from the number of `*` markers
//! - There is no escape for a leading `*`: a wrong answer `*ptr` comes back as the correct
//!   answer `ptr`
//! - A field ending in `\` followed by a separator reads as `\:`, so `a\` with tip `t` comes
//!   back as the single field `a:t`
//!
//! Parsing with a base set runs every question through the [`Reconciler`], so fields the
//! notation cannot express survive when the question number is unchanged.

pub mod parser;
pub mod rules;
pub mod serializer;

use crate::error::FormatError;
use crate::format::Format;
use crate::model::Question;
use crate::reconcile::Reconciler;
use rules::TextRules;
use serializer::TextSerializer;
use std::collections::HashMap;

/// Format implementation for the text notation
#[derive(Default)]
pub struct TextFormat {
    rules: TextRules,
    base: Vec<Question>,
}

impl TextFormat {
    pub fn new(rules: TextRules) -> Self {
        Self {
            rules,
            base: Vec::new(),
        }
    }

    /// Reconcile parsed questions against a previously stored set.
    pub fn with_base(mut self, base: Vec<Question>) -> Self {
        self.base = base;
        self
    }

    pub fn rules(&self) -> &TextRules {
        &self.rules
    }
}

impl Format for TextFormat {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Plain-text question set notation"
    }

    fn file_extensions(&self) -> &[&str] {
        &["txt", "qset"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Vec<Question>, FormatError> {
        let fresh = parser::parse_questions(source);
        Ok(Reconciler::new(&self.base, &self.rules).reconcile_all(fresh))
    }

    fn serialize(&self, questions: &[Question]) -> Result<String, FormatError> {
        Ok(TextSerializer::new(self.rules.clone()).serialize_all(questions))
    }

    fn serialize_with_options(
        &self,
        questions: &[Question],
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let mut rules = self.rules.clone();
        for (key, value) in options {
            match key.as_str() {
                "placeholder" => rules.placeholder = value.clone(),
                other => {
                    return Err(FormatError::NotSupported(format!(
                        "Format 'text' does not support parameter '{other}'"
                    )))
                }
            }
        }
        Ok(TextSerializer::new(rules).serialize_all(questions))
    }
}
