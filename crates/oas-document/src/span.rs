//! Source spans for parsed document nodes.

use serde::{Deserialize, Serialize};
use yaml_rust2::scanner::Marker;

/// Half-open range of scanner offsets covering one node in the source text.
///
/// Offsets are character indices as reported by the scanner. The invariant
/// maintained by the parser is containment: a child node's span always lies
/// within its parent's span.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    /// Offset of the first character of the node.
    pub start: usize,

    /// Offset one past the last character of the node.
    pub end: usize,
}

impl Span {
    /// Create a span from explicit offsets.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Create a span starting at a scanner marker with a known length.
    pub fn from_marker(marker: &Marker, len: usize) -> Self {
        Self {
            start: marker.index(),
            end: marker.index() + len,
        }
    }

    /// Create a span covering everything between two scanner markers.
    pub fn between(start: &Marker, end: &Marker) -> Self {
        Self {
            start: start.index(),
            end: end.index().max(start.index()),
        }
    }

    /// Whether `other` lies entirely within this span.
    pub fn contains(&self, other: &Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Convert a scanner offset into a 1-based line number.
///
/// Counts newline characters in `source` before `offset`. Offsets past the
/// end of the text resolve to the last line rather than failing.
pub fn line_at_offset(source: &str, offset: usize) -> usize {
    source
        .chars()
        .take(offset)
        .filter(|&c| c == '\n')
        .count()
        + 1
}
