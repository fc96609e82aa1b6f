//! Format implementations
//!
//! Each format converts between a list of questions and one text representation.

pub mod json;
pub mod text;

pub use json::JsonFormat;
pub use text::rules::TextRules;
pub use text::TextFormat;
