//! Unified parser producing position-annotated document trees.
//!
//! Both notations go through the same marked-event scanner: the JSON
//! notation is a syntactic subset of the block notation, so one event
//! stream covers both while exposing the node offsets the position
//! resolver depends on.

use crate::{DocumentNode, MappingEntry, Notation, ParseError, Result, Span};
use yaml_rust2::Yaml;
use yaml_rust2::parser::{Event, MarkedEventReceiver, Parser};
use yaml_rust2::scanner::{Marker, TScalarStyle};

/// A successfully parsed document: the annotated tree plus the notation it
/// was parsed in, so callers can serialize edits back in the same notation.
#[derive(Debug, Clone)]
pub struct ParsedDocument {
    pub notation: Notation,
    pub root: DocumentNode,
}

/// Parse `text` into a position-annotated document tree.
///
/// Parses a single document; if the input is a multi-document stream, only
/// the first document is read. On any syntax error, returns the scanner's
/// first reported error with its 1-based position when available. There is
/// no partial recovery: callers skip validation while the document is
/// unparsable.
///
/// # Example
///
/// ```rust
/// use oas_document::{Notation, parse};
///
/// let doc = parse("title: Sample", Notation::Block).unwrap();
/// assert!(doc.root.is_mapping());
/// ```
pub fn parse(text: &str, notation: Notation) -> Result<ParsedDocument> {
    let mut parser = Parser::new_from_str(text);
    let mut builder = DocumentBuilder::new();

    parser
        .load(&mut builder, false) // false = first document only
        .map_err(ParseError::from)?;

    Ok(ParsedDocument {
        notation,
        root: builder.finish()?,
    })
}

/// Event receiver that assembles the annotated tree bottom-up.
struct DocumentBuilder {
    /// Stack of composite nodes under construction.
    stack: Vec<BuildNode>,

    /// The completed root node.
    root: Option<DocumentNode>,
}

enum BuildNode {
    Sequence {
        start: Marker,
        items: Vec<DocumentNode>,
    },
    Mapping {
        start: Marker,
        entries: Vec<(DocumentNode, Option<DocumentNode>)>,
    },
}

impl DocumentBuilder {
    fn new() -> Self {
        Self {
            stack: Vec::new(),
            root: None,
        }
    }

    fn finish(self) -> Result<DocumentNode> {
        self.root
            .ok_or_else(|| ParseError::new("no document found in input"))
    }

    fn push_complete(&mut self, node: DocumentNode) {
        let Some(parent) = self.stack.last_mut() else {
            self.root = Some(node);
            return;
        };

        match parent {
            BuildNode::Sequence { items, .. } => items.push(node),
            BuildNode::Mapping { entries, .. } => {
                if matches!(entries.last(), Some((_, None))) {
                    // A pending key is waiting for its value.
                    if let Some(entry) = entries.last_mut() {
                        entry.1 = Some(node);
                    }
                } else {
                    // This node opens a new entry as its key.
                    entries.push((node, None));
                }
            }
        }
    }
}

impl MarkedEventReceiver for DocumentBuilder {
    fn on_event(&mut self, ev: Event, marker: Marker) {
        match ev {
            Event::Nothing
            | Event::StreamStart
            | Event::StreamEnd
            | Event::DocumentStart
            | Event::DocumentEnd => {}

            Event::Scalar(value, style, _anchor_id, _tag) => {
                // Marker offsets are char indices, so the span length must
                // be counted in chars as well.
                let span = Span::from_marker(&marker, value.chars().count());
                let yaml = scalar_value(value, style);
                self.push_complete(DocumentNode::new_scalar(yaml, span));
            }

            Event::SequenceStart(_anchor_id, _tag) => {
                self.stack.push(BuildNode::Sequence {
                    start: marker,
                    items: Vec::new(),
                });
            }

            Event::SequenceEnd => {
                let Some(BuildNode::Sequence { start, items }) = self.stack.pop() else {
                    unreachable!("SequenceEnd without matching SequenceStart");
                };
                let span = Span::between(&start, &marker);
                let plain = Yaml::Array(items.iter().map(|n| n.value.clone()).collect());
                self.push_complete(DocumentNode::new_sequence(plain, span, items));
            }

            Event::MappingStart(_anchor_id, _tag) => {
                self.stack.push(BuildNode::Mapping {
                    start: marker,
                    entries: Vec::new(),
                });
            }

            Event::MappingEnd => {
                let Some(BuildNode::Mapping { start, entries }) = self.stack.pop() else {
                    unreachable!("MappingEnd without matching MappingStart");
                };
                let span = Span::between(&start, &marker);

                let mut plain = yaml_rust2::yaml::Hash::new();
                let mut annotated = Vec::with_capacity(entries.len());
                for (key, value) in entries {
                    // A key with no value (trailing `key:`) reads as null.
                    let value = value.unwrap_or_else(|| {
                        DocumentNode::new_scalar(Yaml::Null, Span::new(key.span.end, key.span.end))
                    });
                    plain.insert(key.value.clone(), value.value.clone());
                    annotated.push(MappingEntry { key, value });
                }

                self.push_complete(DocumentNode::new_mapping(Yaml::Hash(plain), span, annotated));
            }

            Event::Alias(_anchor_id) => {
                // Anchors and aliases are not part of either notation's
                // supported surface; an alias degrades to null.
                let span = Span::from_marker(&marker, 0);
                self.push_complete(DocumentNode::new_scalar(Yaml::Null, span));
            }
        }
    }
}

/// Turn a scalar token into a typed plain value.
///
/// Type inference applies only to plain-style scalars: a quoted `"true"` or
/// `"200"` stays a string in both notations.
fn scalar_value(value: String, style: TScalarStyle) -> Yaml {
    if style != TScalarStyle::Plain {
        return Yaml::String(value);
    }

    if let Ok(i) = value.parse::<i64>() {
        return Yaml::Integer(i);
    }
    if value.parse::<f64>().is_ok() {
        return Yaml::Real(value);
    }

    match value.as_str() {
        "true" | "True" | "TRUE" => Yaml::Boolean(true),
        "false" | "False" | "FALSE" => Yaml::Boolean(false),
        "null" | "Null" | "NULL" | "~" | "" => Yaml::Null,
        _ => Yaml::String(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(text: &str) -> ParsedDocument {
        parse(text, Notation::Block).unwrap()
    }

    #[test]
    fn test_parse_scalar_types() {
        assert_eq!(block("42").root.value.as_i64(), Some(42));
        assert_eq!(block("hello").root.value.as_str(), Some("hello"));
        assert_eq!(block("true").root.value.as_bool(), Some(true));
        assert!(block("~").root.value.is_null());
    }

    #[test]
    fn test_quoted_scalars_stay_strings() {
        assert_eq!(block("'200'").root.value.as_str(), Some("200"));
        assert_eq!(block("\"true\"").root.value.as_str(), Some("true"));
        let doc = parse(r#"{"version": "1.0"}"#, Notation::Json).unwrap();
        assert_eq!(
            doc.root.get("version").unwrap().value.as_str(),
            Some("1.0")
        );
    }

    #[test]
    fn test_parse_mapping_with_spans() {
        let text = "openapi: 3.0.0\ninfo:\n  title: Sample";
        let doc = block(text);
        assert!(doc.root.is_mapping());

        let info = doc.root.get("info").unwrap();
        assert!(doc.root.span.contains(&info.span));
        // `info`'s value starts at the `title` key on line 3.
        assert_eq!(crate::line_at_offset(text, info.span.start), 3);
    }

    #[test]
    fn test_multibyte_scalar_span_stays_contained() {
        let text = "t: café\nu: done";
        let doc = block(text);
        let value = doc.root.get("t").unwrap();
        assert!(doc.root.span.contains(&value.span));
        // `café` is four chars at offsets 3..7.
        assert_eq!(value.span, crate::Span::new(3, 7));
        assert_eq!(crate::line_at_offset(text, doc.root.get("u").unwrap().span.start), 2);
    }

    #[test]
    fn test_parse_sequence() {
        let doc = block("- a\n- b\n- c");
        assert!(doc.root.is_sequence());
        assert_eq!(doc.root.len(), 3);
        assert_eq!(doc.root.get_index(2).unwrap().value.as_str(), Some("c"));
    }

    #[test]
    fn test_json_notation_gets_spans() {
        let text = "{\n  \"openapi\": \"3.0.0\",\n  \"paths\": {}\n}";
        let doc = parse(text, Notation::Json).unwrap();
        let paths = doc.root.get("paths").unwrap();
        assert_eq!(crate::line_at_offset(text, paths.span.start), 3);
    }

    #[test]
    fn test_syntax_error_carries_position() {
        // The stray colon on line 2 is invalid in a block mapping value.
        let err = parse("a: 1\nb: c: d\n", Notation::Block).unwrap_err();
        assert_eq!(err.line, Some(2));
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_empty_input_is_a_parse_error() {
        let err = parse("", Notation::Block).unwrap_err();
        assert!(err.line.is_none());
        assert!(err.message.contains("no document"));
    }

    #[test]
    fn test_missing_value_reads_as_null() {
        let doc = block("paths:\nopenapi: 3.0.0");
        assert!(doc.root.get("paths").unwrap().value.is_null());
    }

    #[test]
    fn test_first_document_wins() {
        let doc = block("a: 1\n---\nb: 2");
        assert!(doc.root.get("a").is_some());
        assert!(doc.root.get("b").is_none());
    }
}
