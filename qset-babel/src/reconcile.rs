//! Recycling freshly parsed questions into previously stored ones.
//!
//! The text notation is lossy: rich formatting, media and any host-specific
//! field have no textual form. When the user edits the text, every question is
//! parsed anew, so those fields would be lost. Recycling avoids that by
//! matching a parsed question to the stored one with the same number and only
//! overwriting what the notation can express.
//!
//! [`recycle`] is the bare merge. [`Reconciler`] wraps it with the two
//! policies the editor applies on top:
//!
//! - placeholder pass-through: `"<N>. <placeholder>"` with no answers brings
//!   back the stored non-editable item at `N`
//! - numbering cleanup: a question that could not be recycled loses its stale
//!   `"<N>. "` prefix

use crate::formats::text::rules::TextRules;
use crate::markup::escape_text;
use crate::model::Question;
use once_cell::sync::Lazy;
use regex::Regex;

static NUMBERING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]+)\.\s?(.*)$").expect("numbering pattern is valid"));

/// Split `"<N>. text"` into `(N, text)`, with `text` trimmed.
///
/// A bare `"<N>."` is a numbered question with no text yet. Returns `None`
/// when the prefix is missing or the number does not fit.
pub fn split_numbering(question_text: &str) -> Option<(usize, &str)> {
    let captures = NUMBERING.captures(question_text)?;
    let number = captures.get(1)?.as_str().parse::<usize>().ok()?;
    let text = captures.get(2).map_or("", |text| text.as_str().trim());
    Some((number, text))
}

/// Merge `fresh` into the stored question its number points at.
///
/// The stored question keeps every field the text notation cannot express;
/// its text, answers and single-answer mode are replaced. When the number is
/// missing, does not resolve, or points at an item of another kind, `fresh`
/// is returned unchanged.
pub fn recycle(old: &[Question], fresh: Question) -> Question {
    let Some((number, text)) = split_numbering(&fresh.question_text) else {
        return fresh;
    };

    let Some(stored) = number.checked_sub(1).and_then(|index| old.get(index)) else {
        tracing::debug!(number, "no stored question to recycle");
        return fresh;
    };

    if !stored.kind.is_multiple_choice() {
        tracing::debug!(number, kind = stored.kind.tag(), "stored question has another kind");
        return fresh;
    }

    let mut merged = stored.clone();
    merged.question_text = text.to_string();
    merged.single_answer_only = fresh.single_answer_only;
    merged.answers = fresh.answers;
    tracing::debug!(number, "recycled stored question");
    merged
}

/// Recycling with the editor's policies applied.
pub struct Reconciler<'a> {
    old: &'a [Question],
    placeholder: String,
    recycle_placeholders: bool,
    strip_numbering: bool,
}

impl<'a> Reconciler<'a> {
    pub fn new(old: &'a [Question], rules: &TextRules) -> Self {
        Self {
            old,
            placeholder: escape_text(&rules.placeholder),
            recycle_placeholders: rules.recycle_placeholders,
            strip_numbering: rules.strip_numbering,
        }
    }

    pub fn reconcile(&self, fresh: Question) -> Question {
        if self.recycle_placeholders {
            if let Some(stored) = self.stored_placeholder(&fresh) {
                tracing::debug!(kind = stored.kind.tag(), "kept non-editable item");
                return stored.clone();
            }
        }

        let fresh_text = fresh.question_text.clone();
        let mut result = recycle(self.old, fresh);

        if self.strip_numbering && result.question_text == fresh_text {
            if let Some((_, text)) = split_numbering(&fresh_text) {
                result.question_text = text.to_string();
            }
        }

        result
    }

    pub fn reconcile_all(&self, fresh: Vec<Question>) -> Vec<Question> {
        fresh
            .into_iter()
            .map(|question| self.reconcile(question))
            .collect()
    }

    fn stored_placeholder(&self, fresh: &Question) -> Option<&'a Question> {
        if !fresh.answers.is_empty() {
            return None;
        }
        let (number, text) = split_numbering(&fresh.question_text)?;
        if text.trim() != self.placeholder {
            return None;
        }
        let stored = self.old.get(number.checked_sub(1)?)?;
        (!stored.kind.is_multiple_choice()).then_some(stored)
    }
}
