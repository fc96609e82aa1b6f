//! Conversions between the HTML-safe structured side and plain text.
//!
//! Question and answer texts are stored as HTML fragments by authoring hosts.
//! The text notation is plain text, so every value crossing the boundary goes
//! through one of two pure functions:
//!
//! - [`escape_text`]: plain text → HTML-safe text (used by the parser)
//! - [`strip_markup`]: HTML fragment → single line of plain text (used by the
//!   serializer)
//!
//! Text extraction is done with `html5ever`, the same browser-grade parser used
//! for HTML elsewhere, so entity decoding and tag handling follow the HTML5
//! rules instead of ad hoc regexes.

use html5ever::tendril::TendrilSink;
use html5ever::{parse_document, ParseOpts};
use markup5ever_rcdom::{Handle, NodeData, RcDom};

/// Elements whose text content is never shown to a reader.
const HIDDEN_ELEMENTS: &[&str] = &["script", "style", "template", "noscript"];

/// Escape plain text so it can be stored as an HTML text node.
///
/// Follows the HTML serialization rules for text nodes: `&`, `<` and `>` are
/// escaped, quotes are left alone.
pub fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Extract the text content of an HTML fragment.
///
/// Tags are dropped, entities are decoded, whitespace is kept as is.
pub fn text_content(fragment: &str) -> String {
    if !fragment.contains(['<', '&']) {
        return fragment.to_string();
    }

    let dom = parse_document(RcDom::default(), ParseOpts::default()).one(fragment);
    let mut output = String::new();
    collect_text(&dom.document, &mut output);
    output
}

/// Reduce an HTML fragment to one trimmed line of plain text.
///
/// This is what the serializer writes for every free-text field: markup is
/// removed, line breaks are dropped and the result is trimmed.
pub fn strip_markup(fragment: &str) -> String {
    let text = text_content(fragment);
    text.chars()
        .filter(|ch| *ch != '\n' && *ch != '\r')
        .collect::<String>()
        .trim()
        .to_string()
}

fn collect_text(handle: &Handle, output: &mut String) {
    match &handle.data {
        NodeData::Text { contents } => {
            output.push_str(&contents.borrow());
            return;
        }
        NodeData::Element { name, .. } if HIDDEN_ELEMENTS.contains(&&*name.local) => {
            return;
        }
        NodeData::Comment { .. } | NodeData::ProcessingInstruction { .. } => return,
        _ => {}
    }

    for child in handle.children.borrow().iter() {
        collect_text(child, output);
    }
}
