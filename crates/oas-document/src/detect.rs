//! Notation detection.

use serde::{Deserialize, Serialize};

/// One of the two textual encodings of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notation {
    /// Brace-delimited JSON notation.
    Json,

    /// Block-structured indentation notation.
    Block,
}

impl Notation {
    /// The notation a format conversion would switch to.
    pub fn other(self) -> Notation {
        match self {
            Notation::Json => Notation::Block,
            Notation::Block => Notation::Json,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Notation::Json => "JSON",
            Notation::Block => "YAML",
        }
    }
}

/// Classify `text` as JSON notation or block notation.
///
/// Text is JSON notation iff it parses as a JSON value that is an object or
/// array. Bare scalars count as block notation so that short block-notation
/// snippets which happen to be valid JSON numbers or strings are not
/// misclassified. Never fails: unparseable text defaults to block notation,
/// the more forgiving target.
pub fn detect(text: &str) -> Notation {
    match serde_json::from_str::<serde_json::Value>(text.trim_start()) {
        Ok(value) if value.is_object() || value.is_array() => Notation::Json,
        _ => Notation::Block,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_json_object() {
        assert_eq!(detect(r#"{"openapi": "3.0.0"}"#), Notation::Json);
        assert_eq!(detect("  \n {\"a\": 1}"), Notation::Json);
    }

    #[test]
    fn test_detect_json_array() {
        assert_eq!(detect("[1, 2, 3]"), Notation::Json);
    }

    #[test]
    fn test_bare_scalars_are_block() {
        // Valid JSON, but scalars read as block-notation snippets.
        assert_eq!(detect("42"), Notation::Block);
        assert_eq!(detect("\"title\""), Notation::Block);
        assert_eq!(detect("true"), Notation::Block);
    }

    #[test]
    fn test_block_text() {
        assert_eq!(detect("openapi: 3.0.0\ninfo:\n  title: X"), Notation::Block);
    }

    #[test]
    fn test_garbage_defaults_to_block() {
        assert_eq!(detect("{not json"), Notation::Block);
        assert_eq!(detect(""), Notation::Block);
    }
}
