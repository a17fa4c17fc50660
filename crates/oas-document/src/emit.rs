//! Notation-preserving serialization of plain values.

use crate::{Notation, plain::yaml_to_json};
use thiserror::Error;
use yaml_rust2::{Yaml, YamlEmitter};

/// Errors produced while rendering a plain value back to text.
#[derive(Debug, Error)]
pub enum EmitError {
    #[error("failed to render block notation: {0}")]
    Block(String),

    #[error("failed to render JSON notation: {0}")]
    Json(#[from] serde_json::Error),
}

/// Serialize a plain value in the given notation.
///
/// Block notation goes through the emitter with the leading document
/// marker stripped; JSON notation is pretty-printed with mapping key order
/// preserved. Structural serialization is lossy with respect to comments
/// and incidental formatting, but never with respect to data.
pub fn to_text(value: &Yaml, notation: Notation) -> Result<String, EmitError> {
    match notation {
        Notation::Block => {
            let mut out = String::new();
            let mut emitter = YamlEmitter::new(&mut out);
            emitter
                .dump(value)
                .map_err(|e| EmitError::Block(e.to_string()))?;
            // The emitter prefixes every document with a `---` marker,
            // which the editor surface never shows.
            if let Some(rest) = out.strip_prefix("---") {
                return Ok(rest.trim_start_matches(['\n', ' ']).to_string());
            }
            Ok(out)
        }
        Notation::Json => Ok(serde_json::to_string_pretty(&yaml_to_json(value))?),
    }
}
