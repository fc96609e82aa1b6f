//! JSON format implementation
//!
//! The structured side of a question set, as stored by authoring hosts. Every field the text
//! notation cannot express is kept verbatim (see [`crate::model::Question::extra`]).

use crate::error::FormatError;
use crate::format::Format;
use crate::model::Question;
use std::collections::HashMap;

/// Format implementation for JSON question sets
pub struct JsonFormat {
    pretty: bool,
}

impl JsonFormat {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl Default for JsonFormat {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Structured question set as a JSON array"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Vec<Question>, FormatError> {
        serde_json::from_str(source).map_err(|e| FormatError::ParseError(e.to_string()))
    }

    fn serialize(&self, questions: &[Question]) -> Result<String, FormatError> {
        to_json(questions, self.pretty)
    }

    fn serialize_with_options(
        &self,
        questions: &[Question],
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let mut pretty = self.pretty;
        for (key, value) in options {
            match key.as_str() {
                "pretty" => pretty = parse_flag(key, value)?,
                other => {
                    return Err(FormatError::NotSupported(format!(
                        "Format 'json' does not support parameter '{other}'"
                    )))
                }
            }
        }
        to_json(questions, pretty)
    }
}

fn to_json(questions: &[Question], pretty: bool) -> Result<String, FormatError> {
    let mut output = if pretty {
        serde_json::to_string_pretty(questions)
    } else {
        serde_json::to_string(questions)
    }
    .map_err(|e| FormatError::SerializationError(e.to_string()))?;
    output.push('\n');
    Ok(output)
}

fn parse_flag(key: &str, value: &str) -> Result<bool, FormatError> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => Err(FormatError::SerializationError(format!(
            "Invalid boolean value '{other}' for '{key}'"
        ))),
    }
}
