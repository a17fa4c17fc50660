//! Schema model for structural validation.
//!
//! A deliberately small JSON-Schema-like subset: enough to express the
//! OpenAPI structural rules while staying an opaque, swappable ruleset.
//! The validator transports violation paths; it does not define schema
//! semantics beyond what these types encode.

use std::collections::HashMap;

/// A validation schema.
#[derive(Debug, Clone, PartialEq)]
pub enum Schema {
    /// Accepts anything.
    Any,

    /// String with an optional pattern constraint.
    Str(StringSchema),

    /// Mapping with named properties.
    Object(ObjectSchema),

    /// Sequence with an optional item schema.
    Array(ArraySchema),

    /// One of a fixed set of scalar values.
    Enum(EnumSchema),

    /// Reference to a named schema in the registry.
    Ref(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StringSchema {
    pub pattern: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectSchema {
    pub properties: HashMap<String, Schema>,
    pub required: Vec<String>,

    /// Schema applied to properties not named in `properties`.
    pub additional_properties: Option<Box<Schema>>,

    /// If true, properties not named in `properties` are violations.
    pub closed: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArraySchema {
    pub items: Option<Box<Schema>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnumSchema {
    pub values: Vec<serde_json::Value>,
}

impl Schema {
    /// A string with no constraints.
    pub fn string() -> Self {
        Schema::Str(StringSchema::default())
    }

    /// A string constrained by a regex pattern.
    pub fn pattern(pattern: impl Into<String>) -> Self {
        Schema::Str(StringSchema {
            pattern: Some(pattern.into()),
        })
    }

    /// An open object with named properties and required keys.
    pub fn object<const N: usize, const M: usize>(
        properties: [(&str, Schema); N],
        required: [&str; M],
    ) -> Self {
        Schema::Object(ObjectSchema {
            properties: properties
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
            required: required.into_iter().map(|s| s.to_string()).collect(),
            additional_properties: None,
            closed: false,
        })
    }

    /// An object whose every property validates against `values`.
    pub fn map_of(values: Schema) -> Self {
        Schema::Object(ObjectSchema {
            additional_properties: Some(Box::new(values)),
            ..ObjectSchema::default()
        })
    }

    /// A sequence whose items validate against `items`.
    pub fn array_of(items: Schema) -> Self {
        Schema::Array(ArraySchema {
            items: Some(Box::new(items)),
        })
    }

    /// A fixed set of allowed string values.
    pub fn one_of<const N: usize>(values: [&str; N]) -> Self {
        Schema::Enum(EnumSchema {
            values: values
                .into_iter()
                .map(|s| serde_json::Value::String(s.to_string()))
                .collect(),
        })
    }

    /// A reference to a registry entry.
    pub fn reference(name: impl Into<String>) -> Self {
        Schema::Ref(name.into())
    }
}

/// Named schemas available for `Ref` resolution.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    schemas: HashMap<String, Schema>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a schema under a name, replacing any previous entry.
    pub fn register(&mut self, name: impl Into<String>, schema: Schema) {
        self.schemas.insert(name.into(), schema);
    }

    /// Resolve a reference by name.
    pub fn resolve(&self, name: &str) -> Option<&Schema> {
        self.schemas.get(name)
    }
}
