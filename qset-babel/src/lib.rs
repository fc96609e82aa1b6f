//! Textual editing for multiple-choice question sets
//!
//!     This crate converts a question set between its structured form (what an authoring host
//!     stores) and a compact plain-text notation that can be edited in a single text area.
//!
//!     TLDR: For readers:
//!         - The text notation is lossy, the structured side is the source of truth
//!         - Editing never loses a field the notation cannot express, as long as the question
//!           keeps its number (see reconcile.rs)
//!         - Non multiple-choice items are written as placeholder lines and come back unchanged
//!         - This is a pure lib: no code here supposes a shell, be it std print, env vars etc.
//!
//! Architecture
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── model.rs                # Question, Answer, QuestionKind
//!     ├── markup.rs               # Escaping and stripping of rich text
//!     ├── host.rs                 # Contracts with the authoring host
//!     ├── reconcile.rs            # Recycling parsed questions into stored ones
//!     ├── editor.rs               # Editing session (text area + one-time warning)
//!     ├── formats
//!     │   ├── text
//!     │   │   ├── parser.rs       # text → questions
//!     │   │   ├── serializer.rs   # questions → text
//!     │   │   ├── rules.rs        # placeholder and reconciliation policies
//!     │   │   └── mod.rs
//!     │   └── json
//!     └── lib.rs
//!
//! Testing
//!     tests
//!     ├── lib.rs
//!     └── text
//!         └── <testname>.rs
//!
//!     Rust does not discover tests in subdirectories, so they are included from tests/lib.rs.
//!
//! Core Algorithms
//!
//!     Parsing is a single pass over lines: a line that follows a blank line (or is the first
//!     one) opens a question, every other non-blank line is an answer of the open question.
//!     Serialization is the inverse, numbering questions from their position.
//!
//!     The text carries no identity, so parsed questions are matched to stored ones by the
//!     `"<N>. "` prefix written on serialization. A match keeps every stored field and replaces
//!     the text, answers and single-answer mode.
//!
pub mod editor;
pub mod error;
pub mod format;
pub mod formats;
pub mod host;
pub mod markup;
pub mod model;
pub mod reconcile;
pub mod registry;

pub use editor::{EditorOptions, TextualEditor};
pub use error::FormatError;
pub use format::Format;
pub use formats::{JsonFormat, TextFormat, TextRules};
pub use host::{FieldRef, FieldValue, ItemSource, QuestionList};
pub use model::{Answer, Question, QuestionKind};
pub use reconcile::{recycle, Reconciler};
pub use registry::FormatRegistry;

/// Parse text notation into questions.
///
/// Numbering prefixes are kept in the question texts; use [`recycle`] or a
/// [`Reconciler`] to match them against stored questions.
pub fn parse(text: &str) -> Vec<Question> {
    formats::text::parser::parse_questions(text)
}

/// Serialize one question at `position` (0-based) with the default placeholder.
pub fn serialize(question: &Question, position: usize) -> String {
    formats::text::serializer::serialize_question(question, position)
}
