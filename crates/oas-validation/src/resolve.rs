//! Mapping violation paths back to source lines.

use crate::error::{InstancePath, PathSegment};
use oas_document::{DocumentNode, line_at_offset};

/// Resolve a violation path to a 1-based line in the source text.
///
/// Walks the position-annotated tree segment by segment. A segment that
/// cannot be matched (key absent, index out of range, scalar in the way)
/// yields `None` rather than an error: the validator may have inspected a
/// normalized copy of the document containing values the original text
/// never spelled out, and a missing line just means the caller renders the
/// message without a location.
pub fn resolve_line(path: &InstancePath, root: &DocumentNode, source: &str) -> Option<usize> {
    let node = navigate(root, path.segments())?;
    Some(line_at_offset(source, node.span.start))
}

/// Follow `segments` down the annotated tree.
fn navigate<'a>(root: &'a DocumentNode, segments: &[PathSegment]) -> Option<&'a DocumentNode> {
    let mut node = root;
    for segment in segments {
        node = match segment {
            PathSegment::Key(key) => node.get(key)?,
            PathSegment::Index(index) => node.get_index(*index)?,
        };
    }
    Some(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use oas_document::{Notation, parse};

    const TEXT: &str = "openapi: 3.0.0\ninfo:\n  title: Sample\n  version: 1.0.0\npaths:\n  /users:\n    get:\n      responses: {}\n";

    fn path(segments: &[&str]) -> InstancePath {
        InstancePath::from_segments(
            segments
                .iter()
                .map(|s| PathSegment::Key(s.to_string())),
        )
    }

    #[test]
    fn test_resolve_root() {
        let doc = parse(TEXT, Notation::Block).unwrap();
        assert_eq!(
            resolve_line(&InstancePath::new(), &doc.root, TEXT),
            Some(1)
        );
    }

    #[test]
    fn test_resolve_nested_key() {
        let doc = parse(TEXT, Notation::Block).unwrap();
        // `info.version` sits on line 4.
        assert_eq!(
            resolve_line(&path(&["info", "version"]), &doc.root, TEXT),
            Some(4)
        );
        // The operation's `responses` mapping sits on line 8.
        assert_eq!(
            resolve_line(
                &path(&["paths", "/users", "get", "responses"]),
                &doc.root,
                TEXT
            ),
            Some(8)
        );
    }

    #[test]
    fn test_resolution_miss_is_none() {
        let doc = parse(TEXT, Notation::Block).unwrap();
        assert_eq!(resolve_line(&path(&["servers"]), &doc.root, TEXT), None);
        assert_eq!(
            resolve_line(&path(&["info", "title", "deep"]), &doc.root, TEXT),
            None
        );
    }

    #[test]
    fn test_index_out_of_range_is_none() {
        let text = "tags:\n  - a\n";
        let doc = parse(text, Notation::Block).unwrap();
        let mut p = InstancePath::new();
        p.push_key("tags");
        p.push_index(5);
        assert_eq!(resolve_line(&p, &doc.root, text), None);
    }

    #[test]
    fn test_resolve_sequence_index() {
        let text = "tags:\n  - a\n  - b\n";
        let doc = parse(text, Notation::Block).unwrap();
        let mut p = InstancePath::new();
        p.push_key("tags");
        p.push_index(1);
        assert_eq!(resolve_line(&p, &doc.root, text), Some(3));
    }
}
