//! # oas-engine
//!
//! The spec document engine behind the OpenAPI editor: a format-agnostic
//! parse/validate/mutate pipeline.
//!
//! Every entry point is a synchronous pure function over its inputs. The
//! engine never retains text across calls, performs no I/O, and holds no
//! process-wide state, so the calling surface can debounce and
//! cancel-and-restart freely: a superseded invocation is simply discarded.
//!
//! - [`run_validation`] turns raw text into a list of [`SpecError`]s, each
//!   anchored to a source line where one can be resolved.
//! - [`upsert_section`] inserts or replaces a named top-level section
//!   without corrupting unrelated text, structurally when the document
//!   parses and line-based when it does not.
//! - [`convert_notation`] rewrites a document in the other notation.

mod convert;
mod pipeline;
mod section;
mod templates;

pub use convert::{ConvertError, convert_notation, next_notation};
pub use pipeline::{SpecError, run_validation};
pub use section::{upsert_section, upsert_section_with};
pub use templates::{DEFAULT_SPEC, Section};

pub use oas_document::{Notation, ParseError, detect};
pub use oas_validation::InstancePath;
