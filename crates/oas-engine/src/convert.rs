//! Whole-document notation conversion.

use oas_document::{EmitError, Notation, ParseError, detect, parse, to_text};
use thiserror::Error;

/// Errors from a notation conversion.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Emit(#[from] EmitError),
}

/// The notation a conversion of `text` would produce.
pub fn next_notation(text: &str) -> Notation {
    detect(text).other()
}

/// Re-render the document in the other notation.
///
/// Parses in the detected notation and serializes the plain value in the
/// opposite one. Comments and incidental formatting are not carried over;
/// data and mapping key order are.
pub fn convert_notation(text: &str) -> Result<String, ConvertError> {
    let notation = detect(text);
    let doc = parse(text, notation)?;
    Ok(to_text(&doc.root.value, notation.other())?)
}
