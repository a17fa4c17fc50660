//! Canned section templates.
//!
//! Two fixed canonical section bodies, part of the engine's static
//! configuration surface. They are defined once as block-notation text
//! (the rendering the textual fallback splices in verbatim) and parsed
//! lazily into plain values for structural edits.

use oas_document::{Notation, Yaml, parse};
use once_cell::sync::Lazy;

/// The starter document a fresh editor session is seeded with.
pub const DEFAULT_SPEC: &str = "\
# Please begin editing or drag and drop your file into this area to upload.
openapi: 3.0.0
info:
  title: Sample API
  version: 1.0.0
paths: {}";

const INFO_TEMPLATE: &str = "\
info:
  title: Sample API
  description:
    This is a sample API to demonstrate the info object in an OpenAPI definition.
  termsOfService: https://example.com/terms/
  contact:
    name: API Support
    url: https://example.com/support
    email: support@example.com
  license:
    name: Apache 2.0
    url: https://www.apache.org/licenses/LICENSE-2.0.html
  version: 1.0.0";

const PATHS_TEMPLATE: &str = "\
paths:
  /example/{exampleId}:
    get:
      tags:
        - example
      summary: Find example by ID.
      description: Returns a single example resource.
      operationId: getExampleById
      parameters:
        - name: exampleId
          in: path
          description: ID of example to return
          required: true
          schema:
            type: integer
            format: int64
      responses:
        '200':
          description: successful operation
          content:
            application/json:
              schema:
                $ref: '#/components/schemas/Example'
            application/xml:
              schema:
                $ref: '#/components/schemas/Example'";

static INFO_VALUE: Lazy<Yaml> = Lazy::new(|| template_value(INFO_TEMPLATE, "info"));
static PATHS_VALUE: Lazy<Yaml> = Lazy::new(|| template_value(PATHS_TEMPLATE, "paths"));

fn template_value(template: &str, key: &str) -> Yaml {
    let doc = parse(template, Notation::Block).expect("section template must parse");
    doc.root
        .get(key)
        .map(|node| node.value.clone())
        .expect("section template must contain its own key")
}

/// A named top-level section that can be templated and inserted as a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Info,
    Paths,
}

impl Section {
    /// The top-level key this section occupies.
    pub fn key(self) -> &'static str {
        match self {
            Section::Info => "info",
            Section::Paths => "paths",
        }
    }

    /// The canonical block-notation rendering of the whole section,
    /// header line included.
    pub fn template_text(self) -> &'static str {
        match self {
            Section::Info => INFO_TEMPLATE,
            Section::Paths => PATHS_TEMPLATE,
        }
    }

    /// The template's body as a plain value, for structural edits.
    pub fn template_value(self) -> &'static Yaml {
        match self {
            Section::Info => &INFO_VALUE,
            Section::Paths => &PATHS_VALUE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_parse() {
        assert!(Section::Info.template_value().as_hash().is_some());
        assert!(Section::Paths.template_value().as_hash().is_some());
    }

    #[test]
    fn test_template_text_starts_with_key() {
        for section in [Section::Info, Section::Paths] {
            let header = format!("{}:", section.key());
            assert!(section.template_text().starts_with(&header));
        }
    }

    #[test]
    fn test_default_spec_is_valid_block_notation() {
        let doc = parse(DEFAULT_SPEC, Notation::Block).unwrap();
        assert!(doc.root.get("openapi").is_some());
        assert!(doc.root.get("info").is_some());
        assert!(doc.root.get("paths").is_some());
    }

    #[test]
    fn test_info_template_fields() {
        let info = Section::Info.template_value();
        let hash = info.as_hash().unwrap();
        let title = hash.get(&Yaml::String("title".into())).unwrap();
        assert_eq!(title.as_str(), Some("Sample API"));
    }
}
