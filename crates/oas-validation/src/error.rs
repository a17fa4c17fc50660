//! Validation error types and violation paths.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Structured validation error kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ValidationErrorKind {
    /// Value has the wrong structural type.
    TypeMismatch { expected: String, got: String },

    /// A required property is absent.
    MissingRequiredProperty { property: String },

    /// A property not allowed by a closed object.
    UnknownProperty { property: String },

    /// Value not in the allowed set.
    InvalidEnumValue { value: String, allowed: Vec<String> },

    /// String does not match the schema pattern.
    PatternMismatch { value: String, pattern: String },

    /// A schema reference could not be resolved. This is a defect in the
    /// active ruleset, not in the document being validated.
    UnresolvedReference { reference: String },

    /// Last-resort variant for errors that fit no structured kind.
    Other { message: String },
}

impl ValidationErrorKind {
    /// Format a human-readable message for this error kind.
    pub fn message(&self) -> String {
        match self {
            ValidationErrorKind::TypeMismatch { expected, got } => {
                format!("Expected {}, got {}", expected, got)
            }
            ValidationErrorKind::MissingRequiredProperty { property } => {
                format!("Missing required property '{}'", property)
            }
            ValidationErrorKind::UnknownProperty { property } => {
                format!("Unknown property '{}'", property)
            }
            ValidationErrorKind::InvalidEnumValue { value, allowed } => {
                format!(
                    "Value must be one of: {}, got '{}'",
                    allowed.join(", "),
                    value
                )
            }
            ValidationErrorKind::PatternMismatch { value, pattern } => {
                format!("String '{}' does not match pattern '{}'", value, pattern)
            }
            ValidationErrorKind::UnresolvedReference { reference } => {
                format!("Unresolved schema reference: {}", reference)
            }
            ValidationErrorKind::Other { message } => message.clone(),
        }
    }
}

/// A single schema violation.
///
/// Produced by the validator without a line number; enriched with one by
/// [`crate::resolve_line`] when the path can be matched against the
/// position-annotated tree. Multiple errors are independent and reported
/// together.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub struct ValidationError {
    /// The structured error kind.
    pub kind: ValidationErrorKind,

    /// Path from the document root to the offending value.
    pub path: InstancePath,

    /// 1-based source line, once resolved. `None` is not an error: the
    /// path may point at a value the original text never spelled out.
    pub line: Option<usize>,
}

impl ValidationError {
    pub fn new(kind: ValidationErrorKind, path: InstancePath) -> Self {
        Self {
            kind,
            path,
            line: None,
        }
    }

    /// Human-readable message for this error.
    pub fn message(&self) -> String {
        self.kind.message()
    }

    /// Attach a resolved source line.
    pub fn with_line(mut self, line: Option<usize>) -> Self {
        self.line = line;
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "line {}: {} ({})", line, self.message(), self.path),
            None => write!(f, "{} ({})", self.message(), self.path),
        }
    }
}

/// Path of keys and indices from the document root (e.g.
/// `paths./users.get.responses`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstancePath {
    segments: Vec<PathSegment>,
}

impl InstancePath {
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Build a path from an iterator of segments.
    pub fn from_segments(segments: impl IntoIterator<Item = PathSegment>) -> Self {
        Self {
            segments: segments.into_iter().collect(),
        }
    }

    pub fn push_key(&mut self, key: impl Into<String>) {
        self.segments.push(PathSegment::Key(key.into()));
    }

    pub fn push_index(&mut self, index: usize) {
        self.segments.push(PathSegment::Index(index));
    }

    pub fn pop(&mut self) -> Option<PathSegment> {
        self.segments.pop()
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }
}

impl fmt::Display for InstancePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            write!(f, "(root)")
        } else {
            for (i, segment) in self.segments.iter().enumerate() {
                if i > 0 {
                    write!(f, ".")?;
                }
                write!(f, "{}", segment)?;
            }
            Ok(())
        }
    }
}

/// A segment in an instance path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PathSegment {
    /// Mapping key.
    Key(String),

    /// Sequence index.
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(key) => write!(f, "{}", key),
            PathSegment::Index(index) => write!(f, "[{}]", index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_path_display() {
        let mut path = InstancePath::new();
        assert_eq!(path.to_string(), "(root)");

        path.push_key("paths");
        path.push_key("/users");
        path.push_key("get");
        assert_eq!(path.to_string(), "paths./users.get");

        path.push_index(0);
        assert_eq!(path.to_string(), "paths./users.get.[0]");
    }

    #[test]
    fn test_error_display() {
        let mut path = InstancePath::new();
        path.push_key("info");
        let err = ValidationError::new(
            ValidationErrorKind::MissingRequiredProperty {
                property: "title".into(),
            },
            path,
        );
        assert_eq!(err.to_string(), "Missing required property 'title' (info)");
        let err = err.with_line(Some(2));
        assert_eq!(
            err.to_string(),
            "line 2: Missing required property 'title' (info)"
        );
    }
}
