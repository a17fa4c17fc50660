//! The validation pipeline: text in, anchored errors out.

use oas_document::{detect, parse};
use oas_validation::{InstancePath, openapi_registry, openapi_schema, resolve_line, validate};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One problem with the current document text, ready for display.
///
/// A parse failure produces exactly one of these and suppresses schema
/// validation; schema violations produce one each. A missing `line` means
/// the message applies to the document as a whole or to a value the
/// original text never spelled out; the caller decides how to render
/// that, the engine does not invent a location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecError {
    pub message: String,
    pub line: Option<usize>,

    /// Violation path for schema errors; `None` for parse failures.
    pub path: Option<InstancePath>,
}

/// Validate document text end to end.
///
/// Detects the notation, parses, runs the OpenAPI structural ruleset, and
/// resolves each violation path to a source line. Empty or whitespace-only
/// text returns no errors: such a document is "not started", not invalid.
/// Pure and deterministic per input, so the caller can debounce and rerun
/// it on every edit without accumulating state.
pub fn run_validation(text: &str) -> Vec<SpecError> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let notation = detect(text);
    let doc = match parse(text, notation) {
        Ok(doc) => doc,
        Err(err) => {
            debug!("document unparsable, skipping schema validation");
            return vec![SpecError {
                message: err.to_string(),
                line: err.line,
                path: None,
            }];
        }
    };

    validate(&doc.root.value, openapi_schema(), openapi_registry())
        .into_iter()
        .map(|err| SpecError {
            message: err.message(),
            line: resolve_line(&err.path, &doc.root, text),
            path: Some(err.path),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_whitespace_are_not_started() {
        assert!(run_validation("").is_empty());
        assert!(run_validation("   ").is_empty());
        assert!(run_validation(" \n\t\n ").is_empty());
    }

    #[test]
    fn test_valid_document_has_no_errors() {
        let text = "openapi: 3.0.0\ninfo:\n  title: X\n  version: 1.0.0\npaths: {}";
        assert!(run_validation(text).is_empty());
    }

    #[test]
    fn test_parse_failure_yields_single_error() {
        // The malformed key sits on line 5.
        let text = "openapi: 3.0.0\ninfo:\n  title: X\n  version: 1.0.0\n  bad: key: here\npaths: {}";
        let errors = run_validation(text);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].line, Some(5));
        assert!(errors[0].path.is_none());
        assert!(errors[0].message.contains("line 5"));
    }

    #[test]
    fn test_schema_errors_carry_paths_and_lines() {
        let text = "openapi: 3.0.0\npaths: {}";
        let errors = run_validation(text);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "Missing required property 'info'");
        assert_eq!(errors[0].line, Some(1));
        assert_eq!(errors[0].path.as_ref().unwrap().to_string(), "(root)");
    }

    #[test]
    fn test_repeated_invocation_is_deterministic() {
        let text = "openapi: 9.9\ninfo: {}\npaths: []";
        assert_eq!(run_validation(text), run_validation(text));
    }
}
