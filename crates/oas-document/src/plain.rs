//! Helpers for working with plain (position-stripped) values.

use yaml_rust2::Yaml;

/// Render a scalar mapping key as a string.
///
/// The block notation allows unquoted keys that scan as integers or
/// booleans (HTTP status codes are the common case); logically the document
/// model treats every key as a string. Returns `None` for composite keys,
/// which the OpenAPI schema has no use for.
pub fn key_string(key: &Yaml) -> Option<String> {
    match key {
        Yaml::String(s) => Some(s.clone()),
        Yaml::Integer(i) => Some(i.to_string()),
        Yaml::Real(r) => Some(r.clone()),
        Yaml::Boolean(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Convert a plain value to a `serde_json::Value`.
///
/// Mapping key order is preserved. Keys that have no string rendering are
/// skipped rather than failing, and non-numeric reals degrade to null, so
/// the conversion is total.
pub fn yaml_to_json(value: &Yaml) -> serde_json::Value {
    match value {
        Yaml::Null | Yaml::BadValue | Yaml::Alias(_) => serde_json::Value::Null,
        Yaml::Boolean(b) => serde_json::Value::Bool(*b),
        Yaml::Integer(n) => serde_json::Value::Number((*n).into()),
        Yaml::Real(s) => s
            .parse::<f64>()
            .ok()
            .and_then(serde_json::Number::from_f64)
            .map_or(serde_json::Value::Null, serde_json::Value::Number),
        Yaml::String(s) => serde_json::Value::String(s.clone()),
        Yaml::Array(items) => {
            serde_json::Value::Array(items.iter().map(yaml_to_json).collect())
        }
        Yaml::Hash(entries) => {
            let mut map = serde_json::Map::new();
            for (key, value) in entries {
                if let Some(key) = key_string(key) {
                    map.insert(key, yaml_to_json(value));
                }
            }
            serde_json::Value::Object(map)
        }
    }
}
