//! Position-annotated document tree.

use crate::Span;
use crate::plain::key_string;
use yaml_rust2::Yaml;

/// A node of the parsed document with source position tracking.
///
/// Wraps an owned [`Yaml`] value (the position-stripped plain value, with
/// mapping key order preserved) together with a [`Span`] into the source
/// text and a parallel children structure carrying spans for every
/// descendant. The plain value is a complete, independent tree: callers
/// that do not need positions work with `node.value` directly.
#[derive(Debug, Clone)]
pub struct DocumentNode {
    /// The plain value for this subtree.
    pub value: Yaml,

    /// Where this node came from in the source text.
    pub span: Span,

    /// Position-annotated children mirroring the structure of `value`.
    children: Children,
}

/// Position-annotated children of a document node.
#[derive(Debug, Clone)]
enum Children {
    /// Scalars and nulls have no children.
    None,

    /// Sequence elements, in document order.
    Sequence(Vec<DocumentNode>),

    /// Mapping entries, in document order.
    Mapping(Vec<MappingEntry>),
}

/// A key-value pair in a mapping, both sides position-annotated.
#[derive(Debug, Clone)]
pub struct MappingEntry {
    pub key: DocumentNode,
    pub value: DocumentNode,
}

impl DocumentNode {
    /// Create a leaf node.
    pub fn new_scalar(value: Yaml, span: Span) -> Self {
        Self {
            value,
            span,
            children: Children::None,
        }
    }

    /// Create a sequence node.
    pub fn new_sequence(value: Yaml, span: Span, items: Vec<DocumentNode>) -> Self {
        Self {
            value,
            span,
            children: Children::Sequence(items),
        }
    }

    /// Create a mapping node.
    pub fn new_mapping(value: Yaml, span: Span, entries: Vec<MappingEntry>) -> Self {
        Self {
            value,
            span,
            children: Children::Mapping(entries),
        }
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self.children, Children::None)
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self.children, Children::Sequence(_))
    }

    pub fn is_mapping(&self) -> bool {
        matches!(self.children, Children::Mapping(_))
    }

    /// Sequence elements, if this is a sequence.
    pub fn as_sequence(&self) -> Option<&[DocumentNode]> {
        match &self.children {
            Children::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Mapping entries, if this is a mapping.
    pub fn as_mapping(&self) -> Option<&[MappingEntry]> {
        match &self.children {
            Children::Mapping(entries) => Some(entries),
            _ => None,
        }
    }

    /// Look up a mapping value by key.
    ///
    /// Keys are compared by their string rendering, so `'200'` and an
    /// unquoted `200` status code both match the key `"200"`. Returns the
    /// last entry when the source contains duplicates, matching the plain
    /// value's replace-on-duplicate semantics.
    pub fn get(&self, key: &str) -> Option<&DocumentNode> {
        match &self.children {
            Children::Mapping(entries) => entries.iter().rev().find_map(|entry| {
                if key_string(&entry.key.value).as_deref() == Some(key) {
                    Some(&entry.value)
                } else {
                    None
                }
            }),
            _ => None,
        }
    }

    /// Look up a sequence element by index.
    pub fn get_index(&self, index: usize) -> Option<&DocumentNode> {
        match &self.children {
            Children::Sequence(items) => items.get(index),
            _ => None,
        }
    }

    /// Number of children (sequence length or mapping entry count).
    pub fn len(&self) -> usize {
        match &self.children {
            Children::None => 0,
            Children::Sequence(items) => items.len(),
            Children::Mapping(entries) => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scalar(value: Yaml) -> DocumentNode {
        DocumentNode::new_scalar(value, Span::default())
    }

    #[test]
    fn test_scalar_node() {
        let node = scalar(Yaml::String("x".into()));
        assert!(node.is_scalar());
        assert!(!node.is_mapping());
        assert_eq!(node.len(), 0);
        assert!(node.get("x").is_none());
    }

    #[test]
    fn test_mapping_lookup() {
        let entry = MappingEntry {
            key: scalar(Yaml::String("title".into())),
            value: scalar(Yaml::String("Sample".into())),
        };
        let node = DocumentNode::new_mapping(Yaml::Null, Span::default(), vec![entry]);
        assert!(node.is_mapping());
        assert_eq!(node.get("title").unwrap().value.as_str(), Some("Sample"));
        assert!(node.get("missing").is_none());
    }

    #[test]
    fn test_numeric_key_lookup() {
        let entry = MappingEntry {
            key: scalar(Yaml::Integer(200)),
            value: scalar(Yaml::String("ok".into())),
        };
        let node = DocumentNode::new_mapping(Yaml::Null, Span::default(), vec![entry]);
        assert_eq!(node.get("200").unwrap().value.as_str(), Some("ok"));
    }

    #[test]
    fn test_sequence_indexing() {
        let items = vec![scalar(Yaml::Integer(1)), scalar(Yaml::Integer(2))];
        let node = DocumentNode::new_sequence(Yaml::Null, Span::default(), items);
        assert!(node.is_sequence());
        assert_eq!(node.get_index(1).unwrap().value.as_i64(), Some(2));
        assert!(node.get_index(2).is_none());
    }
}
