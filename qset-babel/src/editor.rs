//! Textual editing session over a host question list.
//!
//! A [`TextualEditor`] is created when the user switches a question set to
//! the text view. The host feeds it every item ([`TextualEditor::load`] or
//! [`TextualEditor::add_item`]), the user edits [`TextualEditor::text`], and
//! on every change the host calls [`TextualEditor::recreate_list`] to write
//! the edited questions back.
//!
//! Switching to text drops whatever the notation cannot express for
//! questions that change number, so the session carries a one-time warning.

use crate::formats::text::parser::parse_questions;
use crate::formats::text::rules::TextRules;
use crate::formats::text::serializer::TextSerializer;
use crate::host::{ItemSource, QuestionList};
use crate::reconcile::Reconciler;

/// Warning shown the first time a session holds items.
pub const DEFAULT_WARNING: &str = "Formatting, media and other settings that cannot be written as text are kept only while a question keeps its number.";

pub const HELP_TEXT: &str = "Use an empty line to separate questions.";

pub const EXAMPLE: &str = "What number is PI?\n*3.14\n9.82\n\nWhat is 4 * 0?\n1\n4\n*0";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorOptions {
    pub rules: TextRules,
    pub warning: String,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            rules: TextRules::default(),
            warning: DEFAULT_WARNING.to_string(),
        }
    }
}

pub struct TextualEditor {
    serializer: TextSerializer,
    rules: TextRules,
    warning: String,
    text: String,
    should_warn: bool,
    warned: bool,
}

impl TextualEditor {
    pub fn new(options: EditorOptions) -> Self {
        Self {
            serializer: TextSerializer::new(options.rules.clone()),
            rules: options.rules,
            warning: options.warning,
            text: String::new(),
            should_warn: false,
            warned: false,
        }
    }

    /// Append the text block of `item` at `position` (0-based).
    ///
    /// Items without a kind tag have not been set up by the host yet and are
    /// ignored.
    pub fn add_item<I: ItemSource + ?Sized>(&mut self, item: &I, position: usize) {
        let kind = item.kind();
        if kind.tag().is_empty() {
            return;
        }

        if !self.should_warn && !self.warned {
            tracing::warn!(kind = kind.tag(), "text editing may drop fields of this set");
            self.should_warn = true;
        }

        let block = self.serializer.serialize_item(item, position);
        if !self.text.is_empty() {
            self.text.push('\n');
        }
        self.text.push_str(&block);
    }

    /// Fill the text area from every item of `list`.
    pub fn load<L: QuestionList + ?Sized>(&mut self, list: &L) {
        for (position, question) in list.get_value().iter().enumerate() {
            self.add_item(question, position);
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Replace the contents of `list` with the questions of the text area.
    ///
    /// Returns the number of items written.
    pub fn recreate_list<L: QuestionList + ?Sized>(&self, list: &mut L) -> usize {
        let old = list.get_value();
        list.remove_all_items();

        let reconciler = Reconciler::new(&old, &self.rules);
        let mut count = 0;
        for fresh in parse_questions(&self.text) {
            list.add_item(reconciler.reconcile(fresh));
            count += 1;
        }
        tracing::debug!(count, previous = old.len(), "recreated question list");
        count
    }

    /// The data-loss warning, once per session and only after an item was added.
    pub fn take_warning(&mut self) -> Option<&str> {
        if self.should_warn && !self.warned {
            self.warned = true;
            Some(&self.warning)
        } else {
            None
        }
    }

    /// Usage instructions followed by an example set.
    pub fn help_text(&self) -> String {
        format!("{HELP_TEXT}\n\n{EXAMPLE}")
    }
}

impl Default for TextualEditor {
    fn default() -> Self {
        Self::new(EditorOptions::default())
    }
}
