//! # oas-document
//!
//! Notation-agnostic parsing of OpenAPI description documents with source
//! position tracking.
//!
//! Documents arrive in one of two interchangeable textual notations: a
//! block-structured indentation notation and a brace-delimited JSON
//! notation. Because the JSON notation is a subset of the block notation's
//! grammar, both are parsed through the same marked-event scanner, which
//! attaches a [`Span`] to every node of the resulting [`DocumentNode`]
//! tree. This is what lets downstream validation map an abstract violation
//! path back to an exact line in the original text, regardless of notation.
//!
//! ## Example
//!
//! ```rust
//! use oas_document::{detect, parse};
//!
//! let text = "openapi: 3.0.0\ninfo:\n  title: Sample\n  version: 1.0.0";
//! let notation = detect(text);
//! let doc = parse(text, notation).unwrap();
//! let info = doc.root.get("info").unwrap();
//! println!("info starts at offset {}", info.span.start);
//! ```

mod detect;
mod emit;
mod error;
mod node;
mod parser;
mod plain;
mod span;

pub use detect::{Notation, detect};
pub use emit::{EmitError, to_text};
pub use error::{ParseError, Result};
pub use node::{DocumentNode, MappingEntry};
pub use parser::{ParsedDocument, parse};
pub use plain::{key_string, yaml_to_json};
pub use span::{Span, line_at_offset};

// The plain value type embedded in every DocumentNode.
pub use yaml_rust2::Yaml;
