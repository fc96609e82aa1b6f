use serde::{Deserialize, Serialize};

/// Default text written in place of items the notation cannot edit.
pub const DEFAULT_PLACEHOLDER: &str = "Non-editable question type";

/// Configuration for reading and writing the text notation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRules {
    /// Text of the placeholder line for non-multiple-choice items
    pub placeholder: String,

    /// Whether a placeholder line brings back the stored non-editable item
    pub recycle_placeholders: bool,

    /// Whether questions that are not recycled lose their `"<N>. "` prefix
    pub strip_numbering: bool,
}

impl Default for TextRules {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            recycle_placeholders: true,
            strip_numbering: true,
        }
    }
}
