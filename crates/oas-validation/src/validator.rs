//! Schema validation over plain values.

use crate::error::{InstancePath, PathSegment, ValidationError, ValidationErrorKind};
use crate::schema::{ArraySchema, EnumSchema, ObjectSchema, Schema, SchemaRegistry, StringSchema};
use oas_document::{Yaml, key_string, yaml_to_json};
use regex::Regex;
use std::collections::HashSet;

/// Validate a plain value against a schema.
///
/// Collects every violation instead of stopping at the first one; an empty
/// result means the value is structurally valid. Emission order is
/// deterministic for a given input: required-property checks follow schema
/// order, everything else follows document order. Errors come back without
/// line numbers; see [`crate::resolve_line`].
pub fn validate(value: &Yaml, schema: &Schema, registry: &SchemaRegistry) -> Vec<ValidationError> {
    let mut context = ValidationContext::new(registry);
    validate_value(value, schema, &mut context);
    context.errors
}

/// Tracks the current path and collected errors during a walk.
struct ValidationContext<'a> {
    registry: &'a SchemaRegistry,
    path: InstancePath,
    errors: Vec<ValidationError>,
}

impl<'a> ValidationContext<'a> {
    fn new(registry: &'a SchemaRegistry) -> Self {
        Self {
            registry,
            path: InstancePath::new(),
            errors: Vec::new(),
        }
    }

    fn add_error(&mut self, kind: ValidationErrorKind) {
        self.errors
            .push(ValidationError::new(kind, self.path.clone()));
    }

    fn with_segment<F>(&mut self, segment: PathSegment, f: F)
    where
        F: FnOnce(&mut Self),
    {
        match segment {
            PathSegment::Key(key) => self.path.push_key(key),
            PathSegment::Index(index) => self.path.push_index(index),
        }
        f(self);
        self.path.pop();
    }
}

fn validate_value(value: &Yaml, schema: &Schema, context: &mut ValidationContext) {
    match schema {
        Schema::Any => {}
        Schema::Str(s) => validate_string(value, s, context),
        Schema::Object(s) => validate_object(value, s, context),
        Schema::Array(s) => validate_array(value, s, context),
        Schema::Enum(s) => validate_enum(value, s, context),
        Schema::Ref(name) => {
            if let Some(resolved) = context.registry.resolve(name) {
                validate_value(value, resolved, context);
            } else {
                context.add_error(ValidationErrorKind::UnresolvedReference {
                    reference: name.clone(),
                });
            }
        }
    }
}

fn validate_string(value: &Yaml, schema: &StringSchema, context: &mut ValidationContext) {
    let Yaml::String(s) = value else {
        context.add_error(ValidationErrorKind::TypeMismatch {
            expected: "string".to_string(),
            got: type_name(value).to_string(),
        });
        return;
    };

    if let Some(pattern) = &schema.pattern {
        let Ok(re) = Regex::new(pattern) else {
            // An invalid regex is a defect in the ruleset itself, not in
            // the document being validated.
            context.add_error(ValidationErrorKind::Other {
                message: format!("Invalid schema pattern '{}'", pattern),
            });
            return;
        };
        if !re.is_match(s) {
            context.add_error(ValidationErrorKind::PatternMismatch {
                value: s.clone(),
                pattern: pattern.clone(),
            });
        }
    }
}

fn validate_enum(value: &Yaml, schema: &EnumSchema, context: &mut ValidationContext) {
    let json_value = yaml_to_json(value);
    if schema.values.contains(&json_value) {
        return;
    }

    context.add_error(ValidationErrorKind::InvalidEnumValue {
        value: format!("{}", json_value),
        allowed: schema.values.iter().map(|v| format!("{}", v)).collect(),
    });
}

fn validate_array(value: &Yaml, schema: &ArraySchema, context: &mut ValidationContext) {
    let Yaml::Array(items) = value else {
        context.add_error(ValidationErrorKind::TypeMismatch {
            expected: "array".to_string(),
            got: type_name(value).to_string(),
        });
        return;
    };

    if let Some(item_schema) = &schema.items {
        for (i, item) in items.iter().enumerate() {
            context.with_segment(PathSegment::Index(i), |ctx| {
                validate_value(item, item_schema, ctx);
            });
        }
    }
}

fn validate_object(value: &Yaml, schema: &ObjectSchema, context: &mut ValidationContext) {
    let Yaml::Hash(entries) = value else {
        context.add_error(ValidationErrorKind::TypeMismatch {
            expected: "object".to_string(),
            got: type_name(value).to_string(),
        });
        return;
    };

    let keys: HashSet<String> = entries.keys().filter_map(key_string).collect();

    // Required checks first, in schema order.
    for required in &schema.required {
        if !keys.contains(required) {
            context.add_error(ValidationErrorKind::MissingRequiredProperty {
                property: required.clone(),
            });
        }
    }

    // Then every present property, in document order.
    for (key, entry_value) in entries {
        let Some(key) = key_string(key) else {
            continue;
        };

        if let Some(prop_schema) = schema.properties.get(&key) {
            context.with_segment(PathSegment::Key(key), |ctx| {
                validate_value(entry_value, prop_schema, ctx);
            });
        } else if let Some(additional) = &schema.additional_properties {
            context.with_segment(PathSegment::Key(key), |ctx| {
                validate_value(entry_value, additional, ctx);
            });
        } else if schema.closed {
            context.add_error(ValidationErrorKind::UnknownProperty { property: key });
        }
    }
}

/// Human-readable type name for a plain value.
fn type_name(value: &Yaml) -> &'static str {
    match value {
        Yaml::Null | Yaml::BadValue => "null",
        Yaml::Boolean(_) => "boolean",
        Yaml::Integer(_) => "integer",
        Yaml::Real(_) => "number",
        Yaml::String(_) => "string",
        Yaml::Array(_) => "array",
        Yaml::Hash(_) => "object",
        Yaml::Alias(_) => "alias",
    }
}
