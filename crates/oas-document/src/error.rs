//! Parse errors with optional source positions.

use std::fmt;
use thiserror::Error;
use yaml_rust2::ScanError;

/// Result type alias for oas-document operations.
pub type Result<T> = std::result::Result<T, ParseError>;

/// A syntax error reported by the unified parser.
///
/// The position is 1-based and present only when the underlying scanner
/// could determine it; callers must treat a missing position as "the error
/// applies to the whole document".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct ParseError {
    /// Human-readable description of the failure.
    pub message: String,

    /// 1-based line of the failure, when known.
    pub line: Option<usize>,

    /// 1-based column of the failure, when known.
    pub column: Option<usize>,
}

impl ParseError {
    /// Create a parse error with no position information.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            line: None,
            column: None,
        }
    }

    /// Attach a 1-based line and column.
    pub fn with_position(mut self, line: usize, column: usize) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(line) = self.line {
            write!(f, " at line {}", line)?;
            if let Some(column) = self.column {
                write!(f, ", column {}", column)?;
            }
        }
        Ok(())
    }
}

impl From<ScanError> for ParseError {
    fn from(err: ScanError) -> Self {
        let marker = *err.marker();
        // The scanner reports 1-based lines and 0-based columns.
        ParseError::new(err.info()).with_position(marker.line(), marker.col() + 1)
    }
}
