//! The fixed OpenAPI 3.x structural ruleset.
//!
//! Structural checks only: required keys, value types, and a handful of
//! enumerations, covering the object shapes of the 3.x version family.
//! Semantic rules (reference targets existing, path template consistency)
//! are out of scope; the ruleset stays swappable data as far as the
//! validator is concerned.

use crate::schema::{Schema, SchemaRegistry};
use once_cell::sync::Lazy;

static REGISTRY: Lazy<SchemaRegistry> = Lazy::new(build_registry);

static ROOT: Lazy<Schema> = Lazy::new(|| Schema::reference("document"));

/// The registry backing [`openapi_schema`].
pub fn openapi_registry() -> &'static SchemaRegistry {
    &REGISTRY
}

/// The document-root schema for OpenAPI 3.x.
pub fn openapi_schema() -> &'static Schema {
    &ROOT
}

const HTTP_METHODS: [&str; 8] = [
    "get", "put", "post", "delete", "options", "head", "patch", "trace",
];

fn build_registry() -> SchemaRegistry {
    let mut registry = SchemaRegistry::new();

    registry.register(
        "document",
        Schema::object(
            [
                ("openapi", Schema::pattern(r"^3\.\d+(\.\d+)?$")),
                ("info", Schema::reference("info")),
                ("paths", Schema::reference("paths")),
                ("servers", Schema::array_of(Schema::Any)),
                ("components", Schema::Any),
                ("security", Schema::Any),
                ("tags", Schema::array_of(Schema::Any)),
                ("externalDocs", Schema::Any),
            ],
            ["openapi", "info", "paths"],
        ),
    );

    registry.register(
        "info",
        Schema::object(
            [
                ("title", Schema::string()),
                ("version", Schema::string()),
                ("description", Schema::string()),
                ("termsOfService", Schema::string()),
                ("contact", Schema::object([], [])),
                (
                    "license",
                    Schema::object(
                        [("name", Schema::string()), ("url", Schema::string())],
                        ["name"],
                    ),
                ),
            ],
            ["title", "version"],
        ),
    );

    registry.register("paths", Schema::map_of(Schema::reference("pathItem")));

    let mut path_item_props: Vec<(&str, Schema)> = vec![
        ("summary", Schema::string()),
        ("description", Schema::string()),
        ("parameters", Schema::array_of(Schema::reference("parameter"))),
        ("servers", Schema::array_of(Schema::Any)),
        ("$ref", Schema::string()),
    ];
    for method in HTTP_METHODS {
        path_item_props.push((method, Schema::reference("operation")));
    }
    registry.register(
        "pathItem",
        Schema::Object(crate::schema::ObjectSchema {
            properties: path_item_props
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
            required: Vec::new(),
            additional_properties: None,
            closed: false,
        }),
    );

    registry.register(
        "operation",
        Schema::object(
            [
                ("tags", Schema::array_of(Schema::string())),
                ("summary", Schema::string()),
                ("description", Schema::string()),
                ("operationId", Schema::string()),
                ("parameters", Schema::array_of(Schema::reference("parameter"))),
                ("requestBody", Schema::Any),
                ("responses", Schema::reference("responses")),
                ("deprecated", Schema::Any),
                ("security", Schema::Any),
                ("servers", Schema::array_of(Schema::Any)),
                ("callbacks", Schema::Any),
            ],
            ["responses"],
        ),
    );

    registry.register(
        "parameter",
        Schema::object(
            [
                ("name", Schema::string()),
                ("in", Schema::one_of(["query", "header", "path", "cookie"])),
                ("description", Schema::string()),
                ("required", Schema::Any),
                ("deprecated", Schema::Any),
                ("schema", Schema::Any),
                ("style", Schema::string()),
                ("example", Schema::Any),
                ("examples", Schema::Any),
                ("content", Schema::Any),
            ],
            ["name", "in"],
        ),
    );

    registry.register("responses", Schema::map_of(Schema::reference("response")));

    registry.register(
        "response",
        Schema::object(
            [
                ("description", Schema::string()),
                ("headers", Schema::Any),
                ("content", Schema::Any),
                ("links", Schema::Any),
            ],
            ["description"],
        ),
    );

    registry
}
