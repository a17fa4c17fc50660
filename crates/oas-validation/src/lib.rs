//! # oas-validation
//!
//! Structural schema validation for OpenAPI documents, with violation
//! paths that resolve back to source lines.
//!
//! The validator walks a plain (position-stripped) value against a
//! swappable schema ruleset and collects every violation, each identified
//! by the path of keys and indices from the document root. A separate
//! resolution step walks the same path through the position-annotated
//! tree to recover a 1-based line number, so what is wrong and where it
//! is stay independent concerns.

mod error;
mod openapi;
mod resolve;
mod schema;
mod validator;

pub use error::{InstancePath, PathSegment, ValidationError, ValidationErrorKind};
pub use openapi::{openapi_registry, openapi_schema};
pub use resolve::resolve_line;
pub use schema::{
    ArraySchema, EnumSchema, ObjectSchema, Schema, SchemaRegistry, StringSchema,
};
pub use validator::validate;
