//! End-to-end checks of the OpenAPI ruleset with line resolution.

use oas_document::{detect, parse};
use oas_validation::{ValidationError, openapi_registry, openapi_schema, resolve_line, validate};

fn validate_text(text: &str) -> Vec<ValidationError> {
    let notation = detect(text);
    let doc = parse(text, notation).unwrap();
    validate(&doc.root.value, openapi_schema(), openapi_registry())
        .into_iter()
        .map(|err| {
            let line = resolve_line(&err.path, &doc.root, text);
            err.with_line(line)
        })
        .collect()
}

#[test]
fn valid_json_notation_document_has_no_errors() {
    let text = r#"{"openapi":"3.0.0","info":{"title":"X","version":"1.0.0"},"paths":{}}"#;
    assert!(validate_text(text).is_empty());
}

#[test]
fn missing_description_resolves_to_response_line() {
    let text = "openapi: 3.0.0\n\
                info:\n\
                \x20 title: Pets\n\
                \x20 version: 1.0.0\n\
                paths:\n\
                \x20 /pets:\n\
                \x20   get:\n\
                \x20     responses:\n\
                \x20       '200':\n\
                \x20         content: {}\n";
    let errors = validate_text(text);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message(), "Missing required property 'description'");
    assert_eq!(
        errors[0].path.to_string(),
        "paths./pets.get.responses.200"
    );
    // The offending response object starts at its first entry on line 10.
    assert_eq!(errors[0].line, Some(10));
}

#[test]
fn missing_responses_resolves_to_operation_line() {
    let text = "openapi: 3.0.0\n\
                info:\n\
                \x20 title: Pets\n\
                \x20 version: 1.0.0\n\
                paths:\n\
                \x20 /pets:\n\
                \x20   get:\n\
                \x20     summary: List pets\n";
    let errors = validate_text(text);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].path.to_string(), "paths./pets.get");
    // The operation mapping starts at its first key, `summary`, on line 8.
    assert_eq!(errors[0].line, Some(8));
}

#[test]
fn multiple_errors_keep_document_order() {
    let text = "openapi: 4.0.0\n\
                info:\n\
                \x20 title: 12\n\
                paths: {}\n";
    let errors = validate_text(text);
    let messages: Vec<String> = errors.iter().map(|e| e.message()).collect();
    assert_eq!(errors.len(), 3);
    // Pattern violation on `openapi`, then info's missing `version`
    // (required checks precede property descent), then the title type.
    assert!(messages[0].contains("does not match pattern"));
    assert_eq!(messages[1], "Missing required property 'version'");
    assert_eq!(messages[2], "Expected string, got integer");
    assert_eq!(errors[0].line, Some(1));
    // `info`'s mapping value starts at its first entry, so both the
    // missing-version and the title-type errors land on line 3.
    assert_eq!(errors[1].line, Some(3));
    assert_eq!(errors[2].line, Some(3));
}

#[test]
fn json_notation_errors_resolve_lines_too() {
    let text = "{\n  \"openapi\": \"3.0.0\",\n  \"info\": {\"title\": \"X\"},\n  \"paths\": {}\n}";
    let errors = validate_text(text);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message(), "Missing required property 'version'");
    assert_eq!(errors[0].line, Some(3));
}
