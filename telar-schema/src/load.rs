//! Schema file parsing into the entity catalog.

use std::{path::Path, str::FromStr};

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;
use telar_core::{ScalarType, to_snake_case};

use crate::{
    Catalog, EXCLUDED_SUFFIXES, Entity, Error, Property, Result, error::SourceContext,
};

impl FromStr for Catalog {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_catalog(s, "schema.json")
    }
}

impl Catalog {
    /// Load and parse the schema file at the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_catalog(&content, &path.display().to_string())
    }

    /// Parse a schema from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_catalog(content, filename)
    }
}

/// Declared shape of one schema property.
#[derive(Debug, Deserialize)]
struct PropertySpec {
    #[serde(rename = "type")]
    scalar: Option<String>,
    #[serde(rename = "maxLength")]
    max_length: Option<u64>,
    #[serde(rename = "x-foreign-key")]
    foreign_key: Option<String>,
}

fn parse_catalog(content: &str, filename: &str) -> Result<Catalog> {
    let ctx = SourceContext::new(content, filename);
    let root: Value = serde_json::from_str(content).map_err(|e| ctx.parse_error(e))?;
    let Some(root) = root.as_object() else {
        return Err(ctx.not_a_mapping());
    };

    // An OpenAPI document keeps its schema objects under components.schemas;
    // a bare mapping of schema objects is taken as-is.
    let entities = if let Some(components) = root.get("components") {
        match components.get("schemas").and_then(Value::as_object) {
            Some(schemas) => collect_entities(schemas, &ctx)?,
            None => IndexMap::new(),
        }
    } else {
        collect_entities(root, &ctx)?
    };

    Ok(Catalog::new(entities))
}

fn collect_entities(
    schemas: &serde_json::Map<String, Value>,
    ctx: &SourceContext,
) -> Result<IndexMap<String, Entity>> {
    let mut entities = IndexMap::new();
    for (name, definition) in schemas {
        if EXCLUDED_SUFFIXES.iter().any(|suffix| name.ends_with(suffix)) {
            continue;
        }
        entities.insert(name.clone(), parse_entity(name, definition, ctx)?);
    }
    Ok(entities)
}

fn parse_entity(name: &str, definition: &Value, ctx: &SourceContext) -> Result<Entity> {
    let Some(definition) = definition.as_object() else {
        return Err(ctx.invalid_object(name));
    };

    let mut properties = Vec::new();
    if let Some(declared) = definition.get("properties") {
        let Some(declared) = declared.as_object() else {
            return Err(ctx.invalid_properties(name));
        };
        for (property_name, declaration) in declared {
            properties.push(parse_property(name, property_name, declaration, ctx)?);
        }
    }

    Ok(Entity {
        name: name.to_string(),
        properties,
    })
}

fn parse_property(
    entity: &str,
    name: &str,
    declaration: &Value,
    ctx: &SourceContext,
) -> Result<Property> {
    if !declaration.is_object() {
        return Err(ctx.invalid_property(entity, name));
    }
    let declared: PropertySpec = serde_json::from_value(declaration.clone())
        .map_err(|_| ctx.invalid_property(entity, name))?;

    Ok(Property {
        name: name.to_string(),
        field_name: to_snake_case(name),
        scalar: ScalarType::parse(declared.scalar.as_deref()),
        max_length: declared.max_length,
        foreign_key: declared.foreign_key,
        relation: None,
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const LIBRARY: &str = r#"{
        "Book": {
            "properties": {
                "id": {"type": "integer"},
                "title": {"type": "string", "maxLength": 120},
                "authorId": {"type": "integer", "x-foreign-key": "Author.id"}
            }
        },
        "Author": {
            "properties": {
                "id": {"type": "integer"},
                "name": {"type": "string"}
            }
        },
        "BookInput": {
            "properties": {"title": {"type": "string"}}
        },
        "ValidationError": {
            "properties": {"message": {"type": "string"}}
        }
    }"#;

    #[test]
    fn test_excludes_reserved_suffixes() {
        let catalog: Catalog = LIBRARY.parse().unwrap();

        assert_eq!(catalog.len(), 2);
        assert!(catalog.contains("Book"));
        assert!(catalog.contains("Author"));
        assert!(!catalog.contains("BookInput"));
        assert!(!catalog.contains("ValidationError"));
    }

    #[test]
    fn test_preserves_declaration_order() {
        let catalog: Catalog = LIBRARY.parse().unwrap();

        let names: Vec<_> = catalog.names().collect();
        assert_eq!(names, vec!["Book", "Author"]);

        let book = catalog.get("Book").unwrap();
        let props: Vec<_> = book.properties.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(props, vec!["id", "title", "authorId"]);
    }

    #[test]
    fn test_derives_internal_names() {
        let catalog: Catalog = LIBRARY.parse().unwrap();

        let book = catalog.get("Book").unwrap();
        let author_id = &book.properties[2];
        assert_eq!(author_id.name, "authorId");
        assert_eq!(author_id.field_name, "author_id");
        assert_eq!(author_id.foreign_key.as_deref(), Some("Author.id"));
        assert!(author_id.relation.is_none());
    }

    #[test]
    fn test_accepts_openapi_document() {
        let wrapped = format!(
            r#"{{"openapi": "3.0.0", "components": {{"schemas": {}}}}}"#,
            LIBRARY
        );
        let catalog = Catalog::from_str_with_filename(&wrapped, "api.json").unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("Book").unwrap().table_name(), "books");
    }

    #[test]
    fn test_openapi_document_without_schemas_is_empty() {
        let catalog: Catalog = r#"{"openapi": "3.0.0", "components": {}}"#.parse().unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_missing_properties_is_empty_entity() {
        let catalog: Catalog = r#"{"Marker": {}}"#.parse().unwrap();
        assert_eq!(catalog.get("Marker").unwrap().properties.len(), 0);
    }

    #[test]
    fn test_unknown_scalar_degrades_to_unspecified() {
        let catalog: Catalog =
            r#"{"Doc": {"properties": {"tags": {"type": "array"}}}}"#.parse().unwrap();

        let doc = catalog.get("Doc").unwrap();
        assert_eq!(doc.properties[0].scalar, ScalarType::Unspecified);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Catalog::from_file("/nonexistent/api.json").unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }

    #[test]
    fn test_reads_schema_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(LIBRARY.as_bytes()).unwrap();

        let catalog = Catalog::from_file(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = Catalog::from_str_with_filename("{not json", "api.json").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_non_mapping_root_is_rejected() {
        let err = Catalog::from_str_with_filename("[1, 2]", "api.json").unwrap_err();
        assert!(matches!(*err, Error::NotAMapping { .. }));
    }

    #[test]
    fn test_non_mapping_properties_is_shape_error() {
        let err = Catalog::from_str_with_filename(r#"{"Book": {"properties": 3}}"#, "api.json")
            .unwrap_err();
        assert!(matches!(*err, Error::InvalidProperties { entity, .. } if entity == "Book"));
    }

    #[test]
    fn test_non_mapping_property_is_shape_error() {
        let err = Catalog::from_str_with_filename(
            r#"{"Book": {"properties": {"title": "string"}}}"#,
            "api.json",
        )
        .unwrap_err();
        assert!(
            matches!(*err, Error::InvalidProperty { entity, property, .. }
                if entity == "Book" && property == "title")
        );
    }
}
